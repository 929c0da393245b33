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

//! Per-tick simulation of cell telemetry.
//!
//! Each tick evolves one cell independently of the others:
//!
//! 1. Effective current: manual override verbatim, else a bounded random walk
//! 2. Half-cycle detection on a discharge/charge sign flip
//! 3. Voltage: noise plus mean reversion toward the chemistry nominal
//! 4. Temperature: heating proportional to |current|, passive cooling at idle
//! 5. Health: monotone wear proportional to |current|, accelerated under stress
//! 6. Derived power and history append
//!
//! The random source is injected so a seeded generator reproduces a run
//! exactly.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use cellion_types::cell::{
    CURRENT_MAX_A, CURRENT_MIN_A, HEALTH_MAX_PERCENT, HEALTH_MIN_PERCENT, TEMPERATURE_MAX_C,
    TEMPERATURE_MIN_C, VOLTAGE_MAX_V, VOLTAGE_MIN_V,
};
use cellion_types::{CellState, SimulationTuning};

use crate::bank::Bank;

/// Advance one cell by `elapsed_secs` of simulated time
pub fn advance_cell<R: Rng + ?Sized>(
    cell: &mut CellState,
    elapsed_secs: f32,
    tuning: &SimulationTuning,
    rng: &mut R,
    now: DateTime<Utc>,
) {
    let previous_current = cell.current_a;

    // Effective current: operator override wins over the random walk
    let current = match cell.manual_current_a {
        Some(amps) => amps,
        None => {
            let step =
                rng.gen_range(-tuning.current_step_a..=tuning.current_step_a) * elapsed_secs;
            (previous_current + step).clamp(CURRENT_MIN_A, CURRENT_MAX_A)
        }
    };
    cell.current_a = current;

    // One half-cycle per discharge/charge sign flip between consecutive
    // ticks; flips inside the jitter band are random-walk noise, not cycling
    if previous_current.abs() > tuning.cycle_jitter_a
        && current.abs() > tuning.cycle_jitter_a
        && previous_current.signum() != current.signum()
    {
        cell.cycle_count += 1;
    }

    // Voltage: noise scaled by the chemistry band width plus mean reversion
    // toward nominal. Clamped to the absolute physical bound only; the soft
    // chemistry band must stay exceedable so alerts can observe excursions.
    let profile = cell.profile();
    let voltage_noise = rng.gen_range(-1.0..=1.0_f32)
        * tuning.voltage_noise_ratio
        * profile.band_width_v()
        * elapsed_secs;
    let reversion =
        tuning.voltage_reversion_rate * (profile.nominal_voltage_v - cell.voltage_v) * elapsed_secs;
    cell.voltage_v = (cell.voltage_v + voltage_noise + reversion).clamp(VOLTAGE_MIN_V, VOLTAGE_MAX_V);

    // Temperature: joule heating under load, passive cooling toward ambient
    // when the cell is close to idle
    if current.abs() <= tuning.idle_current_a {
        cell.temperature_c +=
            tuning.cooling_rate * (tuning.ambient_c - cell.temperature_c) * elapsed_secs;
    } else {
        let heating = tuning.heating_c_per_amp_sec * current.abs() * elapsed_secs;
        let noise = rng.gen_range(-1.0..=1.0_f32) * tuning.temperature_noise_c * elapsed_secs;
        cell.temperature_c += heating + noise;
    }
    cell.temperature_c = cell.temperature_c.clamp(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C);

    // Health: wear proportional to |current|, extra wear while outside the
    // safe voltage/temperature band. Never increases.
    let mut wear = tuning.wear_percent_per_amp_sec * current.abs() * elapsed_secs;
    let stressed = !profile.contains(cell.voltage_v)
        || cell.temperature_c >= tuning.stress_temperature_c;
    if stressed {
        wear += tuning.stress_wear_percent_per_sec * elapsed_secs;
    }
    cell.health_percent =
        (cell.health_percent - wear).clamp(HEALTH_MIN_PERCENT, HEALTH_MAX_PERCENT);

    cell.recompute_capacity();
    cell.last_updated = now;
}

/// Advance every cell on the bench by one tick and append history samples
///
/// Cells evolve independently (no cross-cell coupling), so the per-cell
/// order has no effect on the result beyond random-source consumption.
/// All samples of one tick share a single timestamp.
pub fn advance_bank<R: Rng + ?Sized>(
    bank: &mut Bank,
    elapsed_secs: f32,
    tuning: &SimulationTuning,
    rng: &mut R,
) {
    let now = Utc::now();

    let mut samples = Vec::with_capacity(bank.len());
    for cell in bank.cells_mut() {
        advance_cell(cell, elapsed_secs, tuning, rng, now);
        samples.push(cell.time_series_point(now));
    }
    for sample in samples {
        bank.history_mut().append(sample);
    }

    debug!(
        "Advanced bench '{}' by {:.1}s ({} cells)",
        bank.bench_name(),
        elapsed_secs,
        bank.len()
    );
}
