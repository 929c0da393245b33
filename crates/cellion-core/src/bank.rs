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
use std::collections::BTreeMap;
use tracing::{info, warn};

use cellion_types::cell::{CURRENT_MAX_A, CURRENT_MIN_A};
use cellion_types::{CellState, Chemistry, ChemistryProfile, TimeSeriesPoint};

use crate::error::{BenchError, Result};
use crate::history::TimeSeriesStore;

/// Look up the voltage profile for a chemistry tag
///
/// Pure lookup over the closed registry, safe for concurrent reads.
pub fn profile_for(chemistry_tag: &str) -> Result<&'static ChemistryProfile> {
    let chemistry: Chemistry = chemistry_tag
        .parse()
        .map_err(|_| BenchError::UnknownChemistry(chemistry_tag.to_owned()))?;
    Ok(chemistry.profile())
}

/// Smallest bench the hardware rig supports
pub const MIN_CELL_COUNT: usize = 1;
/// Largest bench the hardware rig supports
pub const MAX_CELL_COUNT: usize = 16;

/// One configured test bench: the cell collection plus its history
///
/// The bank is owned by a single external driver. Re-initializing a bench
/// means constructing a new `Bank`, which replaces the whole collection;
/// individual cells are never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    bench_name: String,
    group_number: u32,
    chemistry: Chemistry,
    // Keyed by cell id so snapshots and alert passes come out in id order
    cells: BTreeMap<u16, CellState>,
    history: TimeSeriesStore,
    created_at: DateTime<Utc>,
}

impl Bank {
    /// Initialize a bench of `cell_count` identical fresh cells
    ///
    /// Fails fast on an out-of-range count or an unrecognized chemistry
    /// tag; no partial bank is ever created.
    pub fn initialize(
        cell_count: usize,
        chemistry_tag: &str,
        bench_name: &str,
        group_number: u32,
    ) -> Result<Self> {
        if !(MIN_CELL_COUNT..=MAX_CELL_COUNT).contains(&cell_count) {
            return Err(BenchError::CellCountOutOfRange(cell_count));
        }

        let chemistry: Chemistry = chemistry_tag
            .parse()
            .map_err(|_| BenchError::UnknownChemistry(chemistry_tag.to_owned()))?;

        let now = Utc::now();
        let ambient_c = cellion_types::SimulationTuning::default().ambient_c;
        let cells = (1..=cell_count as u16)
            .map(|id| (id, CellState::new(id, chemistry, ambient_c, now)))
            .collect();

        info!(
            "Initialized bench '{}' (group {}) with {} {} cells",
            bench_name, group_number, cell_count, chemistry
        );

        Ok(Self {
            bench_name: bench_name.to_owned(),
            group_number,
            chemistry,
            cells,
            history: TimeSeriesStore::new(),
            created_at: now,
        })
    }

    /// Pin a cell's current to an operator-chosen value
    ///
    /// The override takes effect immediately (live reading and derived
    /// power) and persists across ticks until cleared. Rejected at the
    /// boundary when the value leaves the safe range or the cell does not
    /// exist; the prior state is untouched on rejection.
    pub fn set_manual_current(&mut self, cell_id: u16, amps: f32) -> Result<()> {
        if !(CURRENT_MIN_A..=CURRENT_MAX_A).contains(&amps) || amps.is_nan() {
            return Err(BenchError::CurrentOutOfRange { amps });
        }

        let cell = self
            .cells
            .get_mut(&cell_id)
            .ok_or(BenchError::UnknownCell(cell_id))?;

        cell.manual_current_a = Some(amps);
        cell.current_a = amps;
        cell.recompute_capacity();
        info!("Cell {} current pinned to {:.2} A", cell_id, amps);
        Ok(())
    }

    /// Release a cell back to the simulated random walk
    pub fn clear_manual_current(&mut self, cell_id: u16) -> Result<()> {
        let cell = self
            .cells
            .get_mut(&cell_id)
            .ok_or(BenchError::UnknownCell(cell_id))?;
        cell.manual_current_a = None;
        Ok(())
    }

    /// Pin every cell's current to exactly 0 A
    ///
    /// Idempotent. Does not bypass the normal tick pipeline: the next
    /// `advance_bank` still runs, with the zero override in effect.
    pub fn emergency_stop(&mut self) {
        for cell in self.cells.values_mut() {
            cell.manual_current_a = Some(0.0);
            cell.current_a = 0.0;
            cell.recompute_capacity();
        }
        warn!(
            "Emergency stop on bench '{}': all {} cells pinned to 0 A",
            self.bench_name,
            self.cells.len()
        );
    }

    /// Read-only copies of every cell, id ascending
    pub fn snapshot(&self) -> Vec<CellState> {
        self.cells.values().cloned().collect()
    }

    /// Full telemetry history of one cell, oldest first
    pub fn history(&self, cell_id: u16) -> Result<&[TimeSeriesPoint]> {
        if !self.cells.contains_key(&cell_id) {
            return Err(BenchError::UnknownCell(cell_id));
        }
        Ok(self.history_store().for_cell(cell_id))
    }

    pub fn cell(&self, cell_id: u16) -> Option<&CellState> {
        self.cells.get(&cell_id)
    }

    /// Iterate cells in id order
    pub fn cells(&self) -> impl Iterator<Item = &CellState> {
        self.cells.values()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut CellState> {
        self.cells.values_mut()
    }

    pub fn history_store(&self) -> &TimeSeriesStore {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut TimeSeriesStore {
        &mut self.history
    }

    pub fn bench_name(&self) -> &str {
        &self.bench_name
    }

    pub fn group_number(&self) -> u32 {
        self.group_number
    }

    pub fn chemistry(&self) -> Chemistry {
        self.chemistry
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
