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

//! Bench configuration: alert thresholds, simulation tuning and ranking
//! weights. Every coefficient the engine uses lives here so behavior can
//! be overridden from a config file without a code change.

use serde::{Deserialize, Serialize};

// ============= Alert Thresholds =============

/// Externally overridable alert thresholds, one section per parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    #[serde(default)]
    pub temperature: TemperatureThresholds,
    #[serde(default)]
    pub voltage: VoltageThresholds,
    #[serde(default)]
    pub health: HealthThresholds,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            temperature: TemperatureThresholds::default(),
            voltage: VoltageThresholds::default(),
            health: HealthThresholds::default(),
        }
    }
}

/// Temperature alert levels (°C), inclusive: a reading at the threshold
/// already triggers that level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureThresholds {
    #[serde(default = "default_temperature_warning_c")]
    pub warning_c: f32,
    #[serde(default = "default_temperature_critical_c")]
    pub critical_c: f32,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            warning_c: default_temperature_warning_c(),
            critical_c: default_temperature_critical_c(),
        }
    }
}

fn default_temperature_warning_c() -> f32 {
    40.0
}

fn default_temperature_critical_c() -> f32 {
    45.0
}

/// Voltage alert levels as percent deviation outside the chemistry band
///
/// Any reading strictly outside the band is at least Warning; a deviation
/// at or beyond `critical_low_percent` is Critical. The same percentages
/// apply symmetrically above the band maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageThresholds {
    #[serde(default = "default_voltage_warning_low_percent")]
    pub warning_low_percent: f32,
    #[serde(default = "default_voltage_critical_low_percent")]
    pub critical_low_percent: f32,
}

impl Default for VoltageThresholds {
    fn default() -> Self {
        Self {
            warning_low_percent: default_voltage_warning_low_percent(),
            critical_low_percent: default_voltage_critical_low_percent(),
        }
    }
}

fn default_voltage_warning_low_percent() -> f32 {
    10.0
}

fn default_voltage_critical_low_percent() -> f32 {
    20.0
}

/// Health alert levels (%), exclusive: a reading strictly below the
/// threshold triggers that level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    #[serde(default = "default_health_warning_percent")]
    pub warning_percent: f32,
    #[serde(default = "default_health_critical_percent")]
    pub critical_percent: f32,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            warning_percent: default_health_warning_percent(),
            critical_percent: default_health_critical_percent(),
        }
    }
}

fn default_health_warning_percent() -> f32 {
    70.0
}

fn default_health_critical_percent() -> f32 {
    50.0
}

// ============= Simulation Tuning =============

/// Perturbation and decay coefficients for the simulation engine
///
/// Rates are per second of simulated elapsed time so tick length can vary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationTuning {
    /// Maximum random-walk step for the current (A per second)
    #[serde(default = "default_current_step_a")]
    pub current_step_a: f32,

    /// Current magnitude below which a sign flip is treated as random-walk
    /// jitter rather than a real charge/discharge transition (A)
    #[serde(default = "default_cycle_jitter_a")]
    pub cycle_jitter_a: f32,

    /// Voltage noise amplitude as a fraction of the chemistry band width
    /// (per second)
    #[serde(default = "default_voltage_noise_ratio")]
    pub voltage_noise_ratio: f32,

    /// Mean-reversion rate pulling voltage toward nominal (1/second)
    #[serde(default = "default_voltage_reversion_rate")]
    pub voltage_reversion_rate: f32,

    /// Heating rate under load (°C per amp-second)
    #[serde(default = "default_heating_c_per_amp_sec")]
    pub heating_c_per_amp_sec: f32,

    /// Temperature noise amplitude while under load (°C per second);
    /// must stay below the heating produced by a sustained load so a
    /// loaded cell warms monotonically
    #[serde(default = "default_temperature_noise_c")]
    pub temperature_noise_c: f32,

    /// Ambient baseline the cell cools toward when idle (°C)
    #[serde(default = "default_ambient_c")]
    pub ambient_c: f32,

    /// Passive cooling rate toward ambient when idle (1/second)
    #[serde(default = "default_cooling_rate")]
    pub cooling_rate: f32,

    /// Current magnitude below which the cell counts as idle (A)
    #[serde(default = "default_idle_current_a")]
    pub idle_current_a: f32,

    /// Health wear under load (% per amp-second)
    #[serde(default = "default_wear_percent_per_amp_sec")]
    pub wear_percent_per_amp_sec: f32,

    /// Additional health wear while voltage or temperature is outside the
    /// safe band (% per second)
    #[serde(default = "default_stress_wear_percent_per_sec")]
    pub stress_wear_percent_per_sec: f32,

    /// Temperature above which the cell counts as thermally stressed (°C)
    #[serde(default = "default_stress_temperature_c")]
    pub stress_temperature_c: f32,
}

impl Default for SimulationTuning {
    fn default() -> Self {
        Self {
            current_step_a: default_current_step_a(),
            cycle_jitter_a: default_cycle_jitter_a(),
            voltage_noise_ratio: default_voltage_noise_ratio(),
            voltage_reversion_rate: default_voltage_reversion_rate(),
            heating_c_per_amp_sec: default_heating_c_per_amp_sec(),
            temperature_noise_c: default_temperature_noise_c(),
            ambient_c: default_ambient_c(),
            cooling_rate: default_cooling_rate(),
            idle_current_a: default_idle_current_a(),
            wear_percent_per_amp_sec: default_wear_percent_per_amp_sec(),
            stress_wear_percent_per_sec: default_stress_wear_percent_per_sec(),
            stress_temperature_c: default_stress_temperature_c(),
        }
    }
}

fn default_current_step_a() -> f32 {
    0.2
}

fn default_cycle_jitter_a() -> f32 {
    0.05
}

fn default_voltage_noise_ratio() -> f32 {
    0.05
}

fn default_voltage_reversion_rate() -> f32 {
    0.10
}

fn default_heating_c_per_amp_sec() -> f32 {
    0.15
}

fn default_temperature_noise_c() -> f32 {
    0.1
}

fn default_ambient_c() -> f32 {
    25.0
}

fn default_cooling_rate() -> f32 {
    0.05
}

fn default_idle_current_a() -> f32 {
    0.5
}

fn default_wear_percent_per_amp_sec() -> f32 {
    0.004
}

fn default_stress_wear_percent_per_sec() -> f32 {
    0.05
}

fn default_stress_temperature_c() -> f32 {
    45.0
}

// ============= Ranking Weights =============

/// Weights and caps for the composite performance score
///
/// Invariant: `critical_score_cap` must stay below
/// `health * HealthThresholds::critical_percent`, the lowest composite
/// score a cell without a Critical alert can reach. The ranking engine
/// re-checks this at use and tightens the cap if a config override
/// violates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    /// Weight of the health sub-score (largest share)
    #[serde(default = "default_weight_health")]
    pub health: f32,

    /// Weight of the voltage-proximity sub-score
    #[serde(default = "default_weight_voltage")]
    pub voltage: f32,

    /// Weight of the temperature-proximity sub-score
    #[serde(default = "default_weight_temperature")]
    pub temperature: f32,

    /// Score ceiling for any cell carrying a Critical alert
    #[serde(default = "default_critical_score_cap")]
    pub critical_score_cap: f32,

    /// Temperature considered ideal for the temperature sub-score (°C)
    #[serde(default = "default_temperature_baseline_c")]
    pub temperature_baseline_c: f32,

    /// Sub-score points lost per °C above the baseline
    #[serde(default = "default_temperature_penalty_per_c")]
    pub temperature_penalty_per_c: f32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            health: default_weight_health(),
            voltage: default_weight_voltage(),
            temperature: default_weight_temperature(),
            critical_score_cap: default_critical_score_cap(),
            temperature_baseline_c: default_temperature_baseline_c(),
            temperature_penalty_per_c: default_temperature_penalty_per_c(),
        }
    }
}

fn default_weight_health() -> f32 {
    0.5
}

fn default_weight_voltage() -> f32 {
    0.3
}

fn default_weight_temperature() -> f32 {
    0.2
}

fn default_critical_score_cap() -> f32 {
    20.0
}

fn default_temperature_baseline_c() -> f32 {
    25.0
}

fn default_temperature_penalty_per_c() -> f32 {
    2.0
}

// ============= Bench Configuration =============

/// Top-level bench configuration consumed at bank initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Operator-facing name of the test bench
    #[serde(default)]
    pub bench_name: String,

    /// Lab group number running the bench
    #[serde(default = "default_group_number")]
    pub group_number: u32,

    /// Number of cells to populate (1-16)
    #[serde(default = "default_cell_count")]
    pub cell_count: usize,

    /// Chemistry tag for every cell on the bench
    #[serde(default = "default_chemistry_tag")]
    pub chemistry: String,

    #[serde(default)]
    pub alerts: AlertThresholds,

    #[serde(default)]
    pub simulation: SimulationTuning,

    #[serde(default)]
    pub ranking: RankingWeights,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            bench_name: String::new(),
            group_number: default_group_number(),
            cell_count: default_cell_count(),
            chemistry: default_chemistry_tag(),
            alerts: AlertThresholds::default(),
            simulation: SimulationTuning::default(),
            ranking: RankingWeights::default(),
        }
    }
}

fn default_group_number() -> u32 {
    1
}

fn default_cell_count() -> usize {
    8
}

fn default_chemistry_tag() -> String {
    "lfp".to_owned()
}
