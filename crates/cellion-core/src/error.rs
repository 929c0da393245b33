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

//! Error types for the engine crate
//!
//! None of these are fatal to the process: boundary violations are
//! rejected before any state mutation, and numeric excursions inside the
//! simulation are clamped rather than raised.

use thiserror::Error;

use cellion_types::cell::{CURRENT_MAX_A, CURRENT_MIN_A};

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unknown chemistry '{0}' (supported: lfp, nmc, lto)")]
    UnknownChemistry(String),

    #[error("cell count {0} outside supported bench size 1-16")]
    CellCountOutOfRange(usize),

    #[error("manual current {amps} A outside safe range {CURRENT_MIN_A}..{CURRENT_MAX_A} A")]
    CurrentOutOfRange { amps: f32 },

    #[error("no cell with id {0} on this bench")]
    UnknownCell(u16),
}

pub type Result<T> = std::result::Result<T, BenchError>;
