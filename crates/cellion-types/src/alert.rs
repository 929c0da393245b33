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
use std::fmt;

/// Alert level for one monitored parameter
///
/// Ordered so that `max()` over triggered conditions picks the worst level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Good,
    Warning,
    Critical,
}

impl Severity {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parameter a cell is monitored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertParameter {
    Voltage,
    Temperature,
    Health,
}

impl fmt::Display for AlertParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Voltage => "voltage",
            Self::Temperature => "temperature",
            Self::Health => "health",
        };
        write!(f, "{name}")
    }
}

/// One classification result for one cell and parameter
///
/// Derived fresh on every evaluation pass; the engine keeps no alert state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub cell_id: u16,
    pub parameter: AlertParameter,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
