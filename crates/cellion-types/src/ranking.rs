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

use serde::{Deserialize, Serialize};

/// Normalized sub-scores (each 0-100) feeding the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactors {
    /// Long-term degradation, equals the cell's state of health
    pub health_score: f32,

    /// Proximity of the voltage reading to the chemistry nominal
    pub voltage_score: f32,

    /// Proximity of the temperature reading to the safe baseline
    pub temperature_score: f32,
}

impl ScoreFactors {
    /// Name of the weakest sub-score, used for recommendation text
    pub fn weakest(&self) -> &'static str {
        let mut name = "health";
        let mut lowest = self.health_score;
        if self.voltage_score < lowest {
            name = "voltage";
            lowest = self.voltage_score;
        }
        if self.temperature_score < lowest {
            name = "temperature";
        }
        name
    }
}

/// One row of the bench performance ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub cell_id: u16,

    /// Composite performance score (0-100)
    pub score: f32,

    /// Position in the ranking, 1 = best; always a contiguous 1..=N permutation
    pub rank: usize,

    pub factors: ScoreFactors,

    /// Deterministic operator recommendation derived from the weakest
    /// factor and any active Critical alert
    pub recommendation: String,
}
