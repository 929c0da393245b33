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

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use cellion_types::{BenchConfig, Chemistry};

use crate::bank::{MAX_CELL_COUNT, MIN_CELL_COUNT};

/// Load the bench configuration from `dir`
///
/// Tries `config.toml`, then `config.json`, then falls back to defaults.
/// A present-but-invalid file is an error rather than a silent fallback.
pub fn load_bench_config(dir: &Path) -> Result<BenchConfig> {
    let toml_path = dir.join("config.toml");
    if let Ok(config_str) = std::fs::read_to_string(&toml_path) {
        let config: BenchConfig =
            toml::from_str(&config_str).context("Failed to parse config.toml")?;
        validate(&config)?;
        info!("Loaded bench configuration from {}", toml_path.display());
        return Ok(config);
    }

    let json_path = dir.join("config.json");
    if let Ok(config_str) = std::fs::read_to_string(&json_path) {
        let config: BenchConfig =
            serde_json::from_str(&config_str).context("Failed to parse config.json")?;
        validate(&config)?;
        info!("Loaded bench configuration from {}", json_path.display());
        return Ok(config);
    }

    warn!("No configuration file found in {}, using defaults", dir.display());
    Ok(BenchConfig::default())
}

fn validate(config: &BenchConfig) -> Result<()> {
    if !(MIN_CELL_COUNT..=MAX_CELL_COUNT).contains(&config.cell_count) {
        anyhow::bail!(
            "cell_count {} outside supported bench size {}-{}",
            config.cell_count,
            MIN_CELL_COUNT,
            MAX_CELL_COUNT
        );
    }
    config
        .chemistry
        .parse::<Chemistry>()
        .context("Invalid chemistry in bench configuration")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            r#"
                bench_name = "Rig 3"
                group_number = 5
                cell_count = 6
                chemistry = "nmc"

                [alerts.temperature]
                critical_c = 50.0
            "#,
        )
        .unwrap();

        let config = load_bench_config(dir.path()).unwrap();
        assert_eq!(config.bench_name, "Rig 3");
        assert_eq!(config.cell_count, 6);
        assert_eq!(config.alerts.temperature.critical_c, 50.0);
        assert_eq!(config.alerts.temperature.warning_c, 40.0);
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_bench_config(dir.path()).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "cell_count = 99").unwrap();
        assert!(load_bench_config(dir.path()).is_err());

        std::fs::write(dir.path().join("config.toml"), "chemistry = \"unobtanium\"").unwrap();
        assert!(load_bench_config(dir.path()).is_err());
    }

    #[test]
    fn test_json_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{ "bench_name": "Rig J", "cell_count": 2 }"#,
        )
        .unwrap();

        let config = load_bench_config(dir.path()).unwrap();
        assert_eq!(config.bench_name, "Rig J");
        assert_eq!(config.cell_count, 2);
    }
}
