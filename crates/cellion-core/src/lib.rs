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

//! CellION Cell State & Alert Evaluation Engine
//!
//! This crate holds the engine driven by the dashboard/export layers:
//!
//! - **Bank**: lifecycle of the cell collection, manual overrides,
//!   emergency stop, read-only snapshots
//! - **Simulation**: per-tick electrical/thermal evolution with an
//!   injectable random source
//! - **Alerts**: chemistry-aware threshold classification per parameter
//! - **Ranking**: composite performance scoring and recommendations
//! - **History**: append-only per-cell time-series store

pub mod alerts;
pub mod bank;
pub mod config;
pub mod error;
pub mod history;
pub mod ranking;
pub mod shared;
pub mod simulation;

pub use alerts::{evaluate_bank, evaluate_cell};
pub use bank::{Bank, profile_for};
pub use config::load_bench_config;
pub use error::{BenchError, Result};
pub use history::TimeSeriesStore;
pub use ranking::rank_bank;
pub use shared::SharedBank;
pub use simulation::{advance_bank, advance_cell};
