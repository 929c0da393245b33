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

pub mod alert;
pub mod cell;
pub mod chemistry;
pub mod config;
pub mod ranking;

// Re-export common types for convenience
pub use alert::{AlertParameter, AlertRecord, Severity};
pub use cell::{CellState, TimeSeriesPoint};
pub use chemistry::{Chemistry, ChemistryProfile};
pub use config::{AlertThresholds, BenchConfig, RankingWeights, SimulationTuning};
pub use ranking::{RankingEntry, ScoreFactors};
