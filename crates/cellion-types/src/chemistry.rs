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

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============= Chemistry Enum =============

/// Supported battery cell chemistries in CellION
/// This enum defines all cell technologies a bench can be populated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chemistry {
    /// Lithium iron phosphate (3.2 V nominal)
    Lfp,
    /// Lithium nickel manganese cobalt oxide (3.6 V nominal)
    Nmc,
    /// Lithium titanate (2.4 V nominal)
    Lto,
    // Future chemistries can be added here:
    // Lco,
    // NaIon,
}

impl Chemistry {
    /// Get human-readable name for the chemistry
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lfp => "LFP",
            Self::Nmc => "NMC",
            Self::Lto => "LTO",
        }
    }

    /// Get config string value (kebab-case)
    pub fn to_config_value(&self) -> &'static str {
        match self {
            Self::Lfp => "lfp",
            Self::Nmc => "nmc",
            Self::Lto => "lto",
        }
    }

    /// List all supported chemistries
    pub fn all() -> &'static [Chemistry] {
        &[Self::Lfp, Self::Nmc, Self::Lto]
    }

    /// Static voltage profile for this chemistry
    pub fn profile(&self) -> &'static ChemistryProfile {
        match self {
            Self::Lfp => &LFP_PROFILE,
            Self::Nmc => &NMC_PROFILE,
            Self::Lto => &LTO_PROFILE,
        }
    }
}

impl fmt::Display for Chemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Chemistry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lfp" => Ok(Self::Lfp),
            "nmc" => Ok(Self::Nmc),
            "lto" => Ok(Self::Lto),
            _ => Err(anyhow::anyhow!(
                "Unknown chemistry: '{}'. Supported chemistries: {}",
                s,
                Self::all()
                    .iter()
                    .map(|c| c.to_config_value())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

// ============= Voltage Profiles =============

/// Immutable voltage envelope for one cell chemistry
///
/// The min/max pair is the *soft* operating band that alert evaluation
/// checks against. Simulated readings may leave this band; only the
/// absolute physical bounds on `CellState` are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChemistryProfile {
    pub chemistry: Chemistry,
    pub nominal_voltage_v: f32,
    pub min_voltage_v: f32,
    pub max_voltage_v: f32,
}

impl ChemistryProfile {
    /// Width of the safe operating band (V)
    pub fn band_width_v(&self) -> f32 {
        self.max_voltage_v - self.min_voltage_v
    }

    /// True when a voltage reading sits inside the safe band (inclusive)
    pub fn contains(&self, voltage_v: f32) -> bool {
        voltage_v >= self.min_voltage_v && voltage_v <= self.max_voltage_v
    }
}

pub static LFP_PROFILE: ChemistryProfile = ChemistryProfile {
    chemistry: Chemistry::Lfp,
    nominal_voltage_v: 3.2,
    min_voltage_v: 2.8,
    max_voltage_v: 3.6,
};

pub static NMC_PROFILE: ChemistryProfile = ChemistryProfile {
    chemistry: Chemistry::Nmc,
    nominal_voltage_v: 3.6,
    min_voltage_v: 3.2,
    max_voltage_v: 4.0,
};

pub static LTO_PROFILE: ChemistryProfile = ChemistryProfile {
    chemistry: Chemistry::Lto,
    nominal_voltage_v: 2.4,
    min_voltage_v: 1.8,
    max_voltage_v: 2.7,
};
