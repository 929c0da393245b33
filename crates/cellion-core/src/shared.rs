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

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::bank::Bank;

/// Cloneable whole-bank handle for drivers that read from other threads
///
/// Ticks and operator actions take the write lock; alert evaluation,
/// ranking and export take the read lock, so readers always observe a
/// consistent snapshot of every cell's fields rather than reading fields
/// individually while a tick is in flight.
#[derive(Debug, Clone)]
pub struct SharedBank {
    inner: Arc<RwLock<Bank>>,
}

impl SharedBank {
    pub fn new(bank: Bank) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bank)),
        }
    }

    /// Shared read access for evaluation/export passes
    pub fn read(&self) -> RwLockReadGuard<'_, Bank> {
        self.inner.read()
    }

    /// Exclusive access for ticks and operator actions
    pub fn write(&self) -> RwLockWriteGuard<'_, Bank> {
        self.inner.write()
    }

    /// Swap in a freshly initialized bank, destroying the prior collection
    pub fn replace(&self, bank: Bank) {
        *self.inner.write() = bank;
    }
}
