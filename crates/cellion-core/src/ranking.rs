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

//! Composite performance scoring and bench ranking.
//!
//! Each sub-score is normalized to 0-100 before weighting. A cell with an
//! active Critical alert is capped below the lowest composite score a
//! non-critical cell can reach, so critical cells can never outrank
//! healthy ones regardless of their raw weighted sum.

use cellion_types::{AlertThresholds, CellState, RankingEntry, RankingWeights, ScoreFactors};

use crate::alerts::has_critical_alert;
use crate::bank::Bank;

/// Rank every cell on the bench: score descending, ties broken by cell id
/// ascending. Ranks are always a contiguous permutation of 1..=N and the
/// result is identical across repeated runs on an unchanged bank.
pub fn rank_bank(
    bank: &Bank,
    thresholds: &AlertThresholds,
    weights: &RankingWeights,
) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = bank
        .cells()
        .map(|cell| score_cell(cell, thresholds, weights))
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.cell_id.cmp(&b.cell_id))
    });
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    entries
}

fn score_cell(
    cell: &CellState,
    thresholds: &AlertThresholds,
    weights: &RankingWeights,
) -> RankingEntry {
    let factors = ScoreFactors {
        health_score: cell.health_percent,
        voltage_score: voltage_score(cell),
        temperature_score: temperature_score(cell, weights),
    };

    let weighted = weights.health * factors.health_score
        + weights.voltage * factors.voltage_score
        + weights.temperature * factors.temperature_score;

    let critical = has_critical_alert(cell, thresholds);
    let score = if critical {
        // Lowest composite score a cell without a Critical alert can reach:
        // health at the critical threshold, both other factors zero. The
        // configured cap is tightened when an override would break this.
        let non_critical_floor = weights.health * thresholds.health.critical_percent;
        weighted.min(weights.critical_score_cap.min(non_critical_floor - 0.01))
    } else {
        weighted
    };

    RankingEntry {
        cell_id: cell.id,
        score: score.clamp(0.0, 100.0),
        rank: 0, // assigned after sorting
        factors,
        recommendation: recommendation(critical, &factors),
    }
}

/// Proximity of the voltage to nominal, normalized against the distance
/// from nominal to the nearer band edge; zero at or beyond the band edge
fn voltage_score(cell: &CellState) -> f32 {
    let profile = cell.profile();
    let deviation = cell.voltage_v - profile.nominal_voltage_v;
    let span = if deviation >= 0.0 {
        profile.max_voltage_v - profile.nominal_voltage_v
    } else {
        profile.nominal_voltage_v - profile.min_voltage_v
    };
    (1.0 - deviation.abs() / span).clamp(0.0, 1.0) * 100.0
}

/// Proximity of the temperature to the safe baseline; full score at or
/// below the baseline, penalized per degree above it
fn temperature_score(cell: &CellState, weights: &RankingWeights) -> f32 {
    let over = (cell.temperature_c - weights.temperature_baseline_c).max(0.0);
    (100.0 - over * weights.temperature_penalty_per_c).clamp(0.0, 100.0)
}

fn recommendation(critical: bool, factors: &ScoreFactors) -> String {
    if critical {
        return "Critical alert active - take the cell offline and inspect before further cycling"
            .to_owned();
    }

    let lowest = factors
        .health_score
        .min(factors.voltage_score)
        .min(factors.temperature_score);
    if lowest >= 80.0 {
        return "Operating normally - no action needed".to_owned();
    }

    match factors.weakest() {
        "voltage" => {
            "Voltage drifting from nominal - check balancing and charger calibration".to_owned()
        }
        "temperature" => "Running warm - improve cooling or reduce sustained load".to_owned(),
        _ => "Health trending low - plan replacement and avoid deep cycling".to_owned(),
    }
}
