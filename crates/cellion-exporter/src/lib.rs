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

//! Flat-file export of bench data.
//!
//! Two formats over the same field vocabulary:
//!
//! - **CSV**: one row per time-series point, columns
//!   `timestamp,cell_id,voltage_v,current_a,temperature_c,health_percent`
//! - **JSON**: metadata object plus an array of per-cell objects, each
//!   carrying its snapshot and history array
//!
//! Timestamps serialize as RFC 3339 in both formats, so per-cell histories
//! round-trip losslessly between them. Export works on `&Bank`; a failed
//! write reports an error to the caller and can never corrupt engine state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use cellion_core::Bank;
use cellion_types::{CellState, TimeSeriesPoint};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

// ============= Metadata =============

/// Bench identification stamped onto every export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub bench_name: String,
    pub group_number: u32,
    pub exported_at: DateTime<Utc>,
}

impl ExportMetadata {
    pub fn for_bank(bank: &Bank, exported_at: DateTime<Utc>) -> Self {
        Self {
            bench_name: bank.bench_name().to_owned(),
            group_number: bank.group_number(),
            exported_at,
        }
    }
}

// ============= CSV =============

/// Write history points as flat CSV rows, header included
pub fn write_history_csv<'a, W, I>(writer: W, points: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TimeSeriesPoint>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export the bank's full history (all cells, cell-id order) to a CSV file
pub fn export_history_csv(path: &Path, bank: &Bank) -> Result<()> {
    let file = File::create(path)?;
    write_history_csv(file, bank.history_store().iter_all())?;
    info!(
        "Exported {} history points from bench '{}' to {}",
        bank.history_store().len(),
        bank.bench_name(),
        path.display()
    );
    Ok(())
}

/// Parse history points back from CSV
pub fn read_history_csv<R: Read>(reader: R) -> Result<Vec<TimeSeriesPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for record in csv_reader.deserialize() {
        points.push(record?);
    }
    Ok(points)
}

// ============= JSON =============

/// One cell's snapshot plus its full history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellExport {
    pub cell: CellState,
    pub history: Vec<TimeSeriesPoint>,
}

/// Complete bench export: metadata plus per-cell snapshot and history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankExport {
    pub metadata: ExportMetadata,
    pub cells: Vec<CellExport>,
}

impl BankExport {
    /// Assemble an export view of the bank, cells in id order
    pub fn from_bank(bank: &Bank, exported_at: DateTime<Utc>) -> Self {
        let cells = bank
            .snapshot()
            .into_iter()
            .map(|cell| {
                let history = bank.history_store().for_cell(cell.id).to_vec();
                CellExport { cell, history }
            })
            .collect();

        Self {
            metadata: ExportMetadata::for_bank(bank, exported_at),
            cells,
        }
    }

    /// All history points flattened back into cell-id order, matching the
    /// row order of the CSV export
    pub fn flat_history(&self) -> Vec<TimeSeriesPoint> {
        self.cells
            .iter()
            .flat_map(|c| c.history.iter().cloned())
            .collect()
    }
}

/// Write a bank export as pretty-printed JSON
pub fn write_bank_json<W: Write>(writer: W, export: &BankExport) -> Result<()> {
    serde_json::to_writer_pretty(writer, export)?;
    Ok(())
}

/// Export the bank (snapshot + history + metadata) to a JSON file
pub fn export_bank_json(path: &Path, bank: &Bank, exported_at: DateTime<Utc>) -> Result<()> {
    let file = File::create(path)?;
    write_bank_json(file, &BankExport::from_bank(bank, exported_at))?;
    info!(
        "Exported bench '{}' ({} cells) to {}",
        bank.bench_name(),
        bank.len(),
        path.display()
    );
    Ok(())
}

/// Parse a bank export back from JSON
pub fn read_bank_json<R: Read>(reader: R) -> Result<BankExport> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellion_core::advance_bank;
    use cellion_types::SimulationTuning;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ticked_bank() -> Bank {
        let tuning = SimulationTuning::default();
        let mut rng = StdRng::seed_from_u64(77);
        let mut bank = Bank::initialize(4, "lfp", "Bench X", 9).unwrap();
        bank.set_manual_current(3, 5.0).unwrap();
        for _ in 0..8 {
            advance_bank(&mut bank, 1.0, &tuning, &mut rng);
        }
        bank
    }

    #[test]
    fn test_csv_round_trip() {
        let bank = ticked_bank();
        let original: Vec<TimeSeriesPoint> =
            bank.history_store().iter_all().cloned().collect();

        let mut buffer = Vec::new();
        write_history_csv(&mut buffer, bank.history_store().iter_all()).unwrap();
        let parsed = read_history_csv(buffer.as_slice()).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_csv_header_names_match_json_keys() {
        let bank = ticked_bank();
        let mut buffer = Vec::new();
        write_history_csv(&mut buffer, bank.history_store().iter_all()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "timestamp,cell_id,voltage_v,current_a,temperature_c,health_percent"
        );

        let point = bank.history_store().iter_all().next().unwrap();
        let json = serde_json::to_value(point).unwrap();
        for column in header.split(',') {
            assert!(json.get(column).is_some(), "missing JSON key '{column}'");
        }
    }

    #[test]
    fn test_json_round_trip() {
        let bank = ticked_bank();
        let export = BankExport::from_bank(&bank, Utc::now());

        let mut buffer = Vec::new();
        write_bank_json(&mut buffer, &export).unwrap();
        let parsed = read_bank_json(buffer.as_slice()).unwrap();

        assert_eq!(parsed, export);
        assert_eq!(parsed.metadata.bench_name, "Bench X");
        assert_eq!(parsed.metadata.group_number, 9);
        assert_eq!(parsed.cells.len(), 4);
    }

    #[test]
    fn test_csv_and_json_carry_identical_histories() {
        let bank = ticked_bank();

        let mut csv_buffer = Vec::new();
        write_history_csv(&mut csv_buffer, bank.history_store().iter_all()).unwrap();
        let from_csv = read_history_csv(csv_buffer.as_slice()).unwrap();

        let mut json_buffer = Vec::new();
        let export = BankExport::from_bank(&bank, Utc::now());
        write_bank_json(&mut json_buffer, &export).unwrap();
        let from_json = read_bank_json(json_buffer.as_slice()).unwrap().flat_history();

        assert_eq!(from_csv, from_json);
    }

    #[test]
    fn test_file_exports() {
        let bank = ticked_bank();
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("history.csv");
        export_history_csv(&csv_path, &bank).unwrap();
        let parsed = read_history_csv(File::open(&csv_path).unwrap()).unwrap();
        assert_eq!(parsed.len(), bank.history_store().len());

        let json_path = dir.path().join("bank.json");
        export_bank_json(&json_path, &bank, Utc::now()).unwrap();
        let parsed = read_bank_json(File::open(&json_path).unwrap()).unwrap();
        assert_eq!(parsed.cells.len(), 4);
    }

    #[test]
    fn test_failed_export_reports_error_and_leaves_bank_intact() {
        let bank = ticked_bank();
        let before = bank.snapshot();

        let bogus = Path::new("/nonexistent-dir/history.csv");
        let result = export_history_csv(bogus, &bank);
        assert!(matches!(result, Err(ExportError::Io(_))));

        assert_eq!(bank.snapshot(), before);
        assert_eq!(bank.history_store().len(), 4 * 8);
    }
}
