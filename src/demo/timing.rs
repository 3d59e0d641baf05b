//! A reference [`Controller`] implementation backing the demonstration
//! binary and integration tests.
//!
//! Grounded on
//! `willmccallion-riscv-system-emulator/hardware/src/soc/memory/controller.rs`'s
//! `DramController`, which tracks one open row and derives access latency
//! from `t_cas`/`t_ras`/`t_pre`; generalized here to one busy-until cycle
//! per rowgroup so it can answer the `Controller` trait's per-rowgroup
//! readiness queries rather than a single scalar latency.

use std::collections::HashMap;

use log::debug;

use crate::common::{DramSpec, Request, RowGroup};
use crate::controller::Controller;
use crate::demo::spec::{Command, GenericDdr};
use crate::rowtable::RowTable;

/// Timing parameters for [`TimingController`], in cycles.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub t_cas: u64,
    pub t_ras: u64,
    pub t_pre: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            t_cas: 14,
            t_ras: 14,
            t_pre: 14,
        }
    }
}

/// A minimal DRAM timing model: every rowgroup has a `busy_until` cycle
/// before which no command may issue against it. [`TimingController::issue`]
/// advances it by the cost of whatever command the access resolves to
/// (row hit, row miss with a row open, or row miss closed).
pub struct TimingController {
    timing: Timing,
    clk: u64,
    rowtable: RowTable<GenericDdr>,
    spec: GenericDdr,
    busy_until: HashMap<RowGroup, u64>,
}

impl TimingController {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            clk: 0,
            rowtable: RowTable::new(),
            spec: GenericDdr,
            busy_until: HashMap::new(),
        }
    }

    pub fn advance_clk(&mut self, by: u64) {
        self.clk += by;
    }

    fn busy_until(&self, rowgroup: &[i64]) -> u64 {
        self.busy_until.get(rowgroup).copied().unwrap_or(0)
    }

    /// Issues the next command for `req`, updating the row table and
    /// this rowgroup's busy-until cycle. Returns the latency charged.
    pub fn issue<P>(&mut self, req: &Request<P>) -> u64 {
        let rowgroup: RowGroup = req.rowgroup(GenericDdr::ROW);
        let target_row = req.row(GenericDdr::ROW);
        let open_row = self.rowtable.get_open_row(&req.addr_vec);

        let latency = if open_row == target_row {
            self.rowtable
                .update(&self.spec, Command::Rd, &req.addr_vec, self.clk);
            self.timing.t_cas
        } else if open_row != crate::rowtable::NO_OPEN_ROW {
            self.rowtable
                .update(&self.spec, Command::Pre, &req.addr_vec, self.clk);
            self.rowtable
                .update(&self.spec, Command::Act, &req.addr_vec, self.clk);
            self.rowtable
                .update(&self.spec, Command::Rd, &req.addr_vec, self.clk);
            self.timing.t_pre + self.timing.t_ras + self.timing.t_cas
        } else {
            self.rowtable
                .update(&self.spec, Command::Act, &req.addr_vec, self.clk);
            self.rowtable
                .update(&self.spec, Command::Rd, &req.addr_vec, self.clk);
            self.timing.t_ras + self.timing.t_cas
        };

        self.busy_until.insert(rowgroup.clone(), self.clk + latency);
        debug!(
            "issue: rowgroup={rowgroup:?} latency={latency} clk={}",
            self.clk
        );
        latency
    }

    /// Explicitly precharges `rowgroup`, matching what a `RowPolicy`
    /// victim selection would drive the surrounding controller to do.
    pub fn precharge(&mut self, rowgroup: &[i64]) {
        let mut addr_vec = rowgroup.to_vec();
        addr_vec.push(0); // row field, unused by a bank-scope PRE
        self.rowtable
            .update(&self.spec, Command::Pre, &addr_vec, self.clk);
        self.busy_until
            .insert(rowgroup.to_vec(), self.clk + self.timing.t_pre);
    }
}

impl Controller<GenericDdr> for TimingController {
    fn is_ready_to_issue<P>(&self, req: &Request<P>) -> bool {
        self.clk >= self.busy_until(&req.rowgroup(GenericDdr::ROW))
    }

    fn is_ready_for_command(&self, _cmd: Command, rowgroup: &[i64]) -> bool {
        self.clk >= self.busy_until(rowgroup)
    }

    fn is_row_hit<P>(&self, req: &Request<P>) -> bool {
        self.rowtable.get_open_row(&req.addr_vec) == req.row(GenericDdr::ROW)
    }

    fn is_row_open<P>(&self, req: &Request<P>) -> bool {
        self.rowtable.get_open_row(&req.addr_vec) != crate::rowtable::NO_OPEN_ROW
    }

    fn clk(&self) -> u64 {
        self.clk
    }

    fn spec(&self) -> &GenericDdr {
        &self.spec
    }

    fn rowtable(&self) -> &RowTable<GenericDdr> {
        &self.rowtable
    }
}
