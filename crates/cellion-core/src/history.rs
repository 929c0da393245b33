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
use std::collections::BTreeMap;

use cellion_types::TimeSeriesPoint;

/// Append-only per-cell telemetry history
///
/// Points for one cell are stored in append order, which the simulation
/// guarantees is timestamp order; appends for different cells may
/// interleave freely. Points are never mutated after append.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeriesStore {
    // BTreeMap keeps iteration in cell-id order for deterministic exports
    points: BTreeMap<u16, Vec<TimeSeriesPoint>>,
}

impl TimeSeriesStore {
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Append one sample to its cell's history
    pub fn append(&mut self, point: TimeSeriesPoint) {
        self.points.entry(point.cell_id).or_default().push(point);
    }

    /// Full history for one cell, oldest first; empty when the cell has
    /// never been sampled
    pub fn for_cell(&self, cell_id: u16) -> &[TimeSeriesPoint] {
        self.points.get(&cell_id).map_or(&[], Vec::as_slice)
    }

    /// All points grouped by cell id ascending, each group oldest first
    pub fn iter_all(&self) -> impl Iterator<Item = &TimeSeriesPoint> {
        self.points.values().flatten()
    }

    /// Ids of cells with at least one sample, ascending
    pub fn cell_ids(&self) -> impl Iterator<Item = u16> + '_ {
        self.points.keys().copied()
    }

    /// Total number of stored points across all cells
    pub fn len(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.points.values().all(Vec::is_empty)
    }

    /// Drop all history (bank re-initialization)
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
