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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chemistry::{Chemistry, ChemistryProfile};

// ============= Absolute Physical Bounds =============
//
// Hard limits of what a reading can physically be. The simulation clamps
// to these after every perturbation; the chemistry's soft band is wider
// territory that alerts check against, so readings may exceed it.

pub const VOLTAGE_MIN_V: f32 = 0.0;
pub const VOLTAGE_MAX_V: f32 = 5.0;
pub const CURRENT_MIN_A: f32 = -10.0;
pub const CURRENT_MAX_A: f32 = 10.0;
pub const TEMPERATURE_MIN_C: f32 = -50.0;
pub const TEMPERATURE_MAX_C: f32 = 100.0;
pub const HEALTH_MIN_PERCENT: f32 = 0.0;
pub const HEALTH_MAX_PERCENT: f32 = 100.0;

// ============= Cell State =============

/// Live telemetry for one physical cell on the bench
///
/// Sign convention for current: positive = discharge, negative = charge.
/// `capacity_w` is derived (`voltage_v * current_a`) and re-computed after
/// every mutation; it is never authoritative on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    /// Position of the cell on the bench (1-based, unique per bank)
    pub id: u16,

    /// Cell technology, fixed for the lifetime of the bank
    pub chemistry: Chemistry,

    /// Terminal voltage (V)
    pub voltage_v: f32,

    /// Current (A), positive = discharge
    pub current_a: f32,

    /// Cell surface temperature (°C)
    pub temperature_c: f32,

    /// Completed charge/discharge half-cycles
    pub cycle_count: u32,

    /// Remaining state of health (0-100 %), non-increasing over a bank's life
    pub health_percent: f32,

    /// Instantaneous power (W), always `voltage_v * current_a`
    pub capacity_w: f32,

    /// Operator-set current override; when present the simulation uses it
    /// verbatim instead of the random walk
    pub manual_current_a: Option<f32>,

    /// Timestamp of the most recent simulation tick
    pub last_updated: DateTime<Utc>,
}

impl CellState {
    /// Create a fresh cell at nominal voltage, idle and fully healthy
    pub fn new(id: u16, chemistry: Chemistry, ambient_c: f32, now: DateTime<Utc>) -> Self {
        Self {
            id,
            chemistry,
            voltage_v: chemistry.profile().nominal_voltage_v,
            current_a: 0.0,
            temperature_c: ambient_c,
            cycle_count: 0,
            health_percent: HEALTH_MAX_PERCENT,
            capacity_w: 0.0,
            manual_current_a: None,
            last_updated: now,
        }
    }

    /// Voltage profile for this cell's chemistry
    pub fn profile(&self) -> &'static ChemistryProfile {
        self.chemistry.profile()
    }

    /// Re-derive instantaneous power from the current readings
    pub fn recompute_capacity(&mut self) {
        self.capacity_w = self.voltage_v * self.current_a;
    }

    /// Snapshot the fields that feed the time-series store
    pub fn time_series_point(&self, timestamp: DateTime<Utc>) -> TimeSeriesPoint {
        TimeSeriesPoint {
            timestamp,
            cell_id: self.id,
            voltage_v: self.voltage_v,
            current_a: self.current_a,
            temperature_c: self.temperature_c,
            health_percent: self.health_percent,
        }
    }
}

// ============= Time-Series Point =============

/// One append-only history sample for one cell
///
/// Field names are shared verbatim between the CSV header and the JSON
/// keys so exported histories round-trip losslessly between formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub cell_id: u16,
    pub voltage_v: f32,
    pub current_a: f32,
    pub temperature_c: f32,
    pub health_percent: f32,
}
