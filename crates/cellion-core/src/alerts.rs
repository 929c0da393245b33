// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of CellION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Threshold classification of cell telemetry.
//!
//! Pure functions of the current cell state plus configured thresholds;
//! nothing here mutates a cell and no alert state is kept between passes.
//! Severity per parameter is the worst triggered level; lower levels are
//! superseded, not listed additionally.
//!
//! Boundary rules: temperature and voltage-deviation comparisons are
//! inclusive (a reading at the threshold already triggers the level),
//! health comparisons are exclusive (strictly below the threshold). A
//! voltage exactly at the chemistry minimum or maximum is Good.

use chrono::{DateTime, Utc};

use cellion_types::{AlertParameter, AlertRecord, AlertThresholds, CellState, Severity};

use crate::bank::Bank;

/// Classify one cell, producing exactly one record per monitored
/// parameter in fixed order: voltage, temperature, health
pub fn evaluate_cell(
    cell: &CellState,
    thresholds: &AlertThresholds,
    now: DateTime<Utc>,
) -> Vec<AlertRecord> {
    let (voltage_severity, voltage_message) = classify_voltage(cell, thresholds);
    let (temperature_severity, temperature_message) = classify_temperature(cell, thresholds);
    let (health_severity, health_message) = classify_health(cell, thresholds);

    vec![
        AlertRecord {
            cell_id: cell.id,
            parameter: AlertParameter::Voltage,
            severity: voltage_severity,
            message: voltage_message,
            timestamp: now,
        },
        AlertRecord {
            cell_id: cell.id,
            parameter: AlertParameter::Temperature,
            severity: temperature_severity,
            message: temperature_message,
            timestamp: now,
        },
        AlertRecord {
            cell_id: cell.id,
            parameter: AlertParameter::Health,
            severity: health_severity,
            message: health_message,
            timestamp: now,
        },
    ]
}

/// Classify every cell on the bench, concatenated in cell-id order
pub fn evaluate_bank(bank: &Bank, thresholds: &AlertThresholds) -> Vec<AlertRecord> {
    let now = Utc::now();
    bank.cells()
        .flat_map(|cell| evaluate_cell(cell, thresholds, now))
        .collect()
}

/// True when any parameter of the cell is currently Critical
pub fn has_critical_alert(cell: &CellState, thresholds: &AlertThresholds) -> bool {
    classify_voltage(cell, thresholds).0 == Severity::Critical
        || classify_temperature(cell, thresholds).0 == Severity::Critical
        || classify_health(cell, thresholds).0 == Severity::Critical
}

fn classify_voltage(cell: &CellState, thresholds: &AlertThresholds) -> (Severity, String) {
    let profile = cell.profile();
    let voltage = cell.voltage_v;

    if voltage < profile.min_voltage_v {
        let deviation_percent =
            (profile.min_voltage_v - voltage) / profile.min_voltage_v * 100.0;
        let severity = if deviation_percent >= thresholds.voltage.critical_low_percent {
            Severity::Critical
        } else {
            Severity::Warning
        };
        let message = format!(
            "voltage {:.2} V is {:.1}% below {} minimum {:.2} V",
            voltage,
            deviation_percent,
            profile.chemistry,
            profile.min_voltage_v
        );
        (severity, message)
    } else if voltage > profile.max_voltage_v {
        let deviation_percent =
            (voltage - profile.max_voltage_v) / profile.max_voltage_v * 100.0;
        let severity = if deviation_percent >= thresholds.voltage.critical_low_percent {
            Severity::Critical
        } else {
            Severity::Warning
        };
        let message = format!(
            "voltage {:.2} V is {:.1}% above {} maximum {:.2} V",
            voltage,
            deviation_percent,
            profile.chemistry,
            profile.max_voltage_v
        );
        (severity, message)
    } else {
        let message = format!(
            "voltage {:.2} V within {} band {:.2}-{:.2} V",
            voltage, profile.chemistry, profile.min_voltage_v, profile.max_voltage_v
        );
        (Severity::Good, message)
    }
}

fn classify_temperature(cell: &CellState, thresholds: &AlertThresholds) -> (Severity, String) {
    let temperature = cell.temperature_c;
    let limits = &thresholds.temperature;

    if temperature >= limits.critical_c {
        (
            Severity::Critical,
            format!(
                "temperature {:.1} °C at or above critical limit {:.1} °C",
                temperature, limits.critical_c
            ),
        )
    } else if temperature >= limits.warning_c {
        (
            Severity::Warning,
            format!(
                "temperature {:.1} °C at or above warning limit {:.1} °C",
                temperature, limits.warning_c
            ),
        )
    } else {
        (
            Severity::Good,
            format!(
                "temperature {:.1} °C below warning limit {:.1} °C",
                temperature, limits.warning_c
            ),
        )
    }
}

fn classify_health(cell: &CellState, thresholds: &AlertThresholds) -> (Severity, String) {
    let health = cell.health_percent;
    let limits = &thresholds.health;

    if health < limits.critical_percent {
        (
            Severity::Critical,
            format!(
                "health {:.1}% below critical limit {:.1}%",
                health, limits.critical_percent
            ),
        )
    } else if health < limits.warning_percent {
        (
            Severity::Warning,
            format!(
                "health {:.1}% below warning limit {:.1}%",
                health, limits.warning_percent
            ),
        )
    } else {
        (
            Severity::Good,
            format!(
                "health {:.1}% at or above warning limit {:.1}%",
                health, limits.warning_percent
            ),
        )
    }
}
