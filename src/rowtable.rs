//! The Row Table: the controller's shadow of DRAM row-buffer state.
//!
//! Grounded on the row-tracking half of
//! `willmccallion-riscv-system-emulator/hardware/src/soc/memory/controller.rs`'s
//! `DramController` (which keeps a single `last_row: Option<u64>` per
//! channel) generalized to one entry per rowgroup, keyed the way
//! `original_source/src/Scheduler.h`'s `RowTable::table` is (a map from
//! address-vector prefix to entry).

use std::collections::BTreeMap;

use log::debug;

use crate::common::{rowgroup_of, AddrVec, DramSpec, RowGroup};

/// State of one open row buffer: which row is open, how many accesses it
/// has served since opening, and when it was last touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTableEntry {
    pub row: i64,
    pub hits: u32,
    pub timestamp: u64,
}

/// Sentinel returned by [`RowTable::get_open_row`] when no row is open for
/// a rowgroup.
pub const NO_OPEN_ROW: i64 = -1;

/// Shadow of per-rowgroup DRAM row-buffer state.
///
/// Keyed by `BTreeMap` rather than a hash map so that [`RowTable::rowgroups`]
/// iterates rowgroup keys in a deterministic, lexicographic order — the
/// stable ordering spec.md §4.3 recommends for the Row Policy's scan.
pub struct RowTable<S: DramSpec> {
    table: BTreeMap<RowGroup, RowTableEntry>,
    _spec: std::marker::PhantomData<S>,
}

impl<S: DramSpec> Default for RowTable<S> {
    fn default() -> Self {
        Self {
            table: BTreeMap::new(),
            _spec: std::marker::PhantomData,
        }
    }
}

impl<S: DramSpec> RowTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutates the table according to whether `cmd` opens, accesses, or
    /// closes row buffers, per spec.md §4.1's update algorithm.
    pub fn update(&mut self, spec: &S, cmd: S::Command, addr_vec: &AddrVec, clk: u64) {
        let rowgroup = rowgroup_of(addr_vec, S::ROW);
        let row = addr_vec[S::ROW];

        if spec.is_opening(cmd) {
            let prev = self.table.insert(
                rowgroup.clone(),
                RowTableEntry {
                    row,
                    hits: 0,
                    timestamp: clk,
                },
            );
            debug_assert!(
                prev.is_none(),
                "opening command {cmd:?} targets an already-open rowgroup {rowgroup:?}"
            );
            debug!("rowtable: opened {rowgroup:?} row={row} at clk={clk}");
        }

        if spec.is_accessing(cmd) {
            let entry = self.table.get_mut(&rowgroup).unwrap_or_else(|| {
                panic!("accessing command {cmd:?} targets a closed rowgroup {rowgroup:?}")
            });
            debug_assert_eq!(
                entry.row, row,
                "accessing command {cmd:?} targets row {row} but rowgroup {rowgroup:?} has row {} open",
                entry.row
            );
            entry.hits += 1;
            entry.timestamp = clk;
        }

        if spec.is_closing(cmd) {
            // A combined access+close (RDA/WRA) closes the specific row
            // just accessed, regardless of the command's nominal scope.
            let scope = if spec.is_accessing(cmd) {
                S::ROW - 1
            } else {
                spec.scope(cmd)
            };
            let prefix = &addr_vec[..=scope];

            let before = self.table.len();
            self.table
                .retain(|key, _| key.len() < prefix.len() || key[..prefix.len()] != *prefix);
            let removed = before - self.table.len();
            assert!(
                removed > 0,
                "closing command {cmd:?} matched no rowtable entries at scope {scope}"
            );
            debug!("rowtable: closed {removed} entr(ies) at scope {scope} for {addr_vec:?}");
        }
    }

    /// Hit count of the entry matching `addr_vec`'s rowgroup.
    ///
    /// If `to_opened_row` is false, also requires the entry's open row to
    /// equal `addr_vec[Row]`; 0 if no entry exists or the row mismatches.
    pub fn get_hits(&self, addr_vec: &AddrVec, to_opened_row: bool) -> u32 {
        let rowgroup = rowgroup_of(addr_vec, S::ROW);
        let row = addr_vec[S::ROW];

        match self.table.get(&rowgroup) {
            Some(entry) if to_opened_row || entry.row == row => entry.hits,
            _ => 0,
        }
    }

    /// Open row index for `addr_vec`'s rowgroup, or [`NO_OPEN_ROW`].
    pub fn get_open_row(&self, addr_vec: &AddrVec) -> i64 {
        let rowgroup = rowgroup_of(addr_vec, S::ROW);
        self.table
            .get(&rowgroup)
            .map(|e| e.row)
            .unwrap_or(NO_OPEN_ROW)
    }

    /// The entry for a rowgroup, if one is open.
    pub fn entry(&self, rowgroup: &[i64]) -> Option<&RowTableEntry> {
        self.table.get(rowgroup)
    }

    /// All open rowgroups in deterministic (lexicographic) order, for the
    /// Row Policy's scan.
    pub fn rowgroups(&self) -> impl Iterator<Item = (&RowGroup, &RowTableEntry)> {
        self.table.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
}
