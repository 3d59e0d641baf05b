//! Shared test fixtures: a minimal three-level DRAM spec (`[bank, row,
//! column]`) and a `Controller` whose readiness/row-hit/row-open answers
//! are set explicitly per test, so scheduler-policy tests can exercise
//! spec.md §8's concrete scenarios without a full timing model in the way.

use std::collections::HashMap;

use dram_sched::common::{AddrVec, DramSpec, Request};
use dram_sched::controller::Controller;
use dram_sched::rowtable::RowTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Act,
    Acc,
    Pre,
}

pub struct TestSpec;

impl DramSpec for TestSpec {
    type Command = Cmd;
    const ROW: usize = 1;

    fn pre(&self) -> Cmd {
        Cmd::Pre
    }

    fn scope(&self, _cmd: Cmd) -> usize {
        0 // bank-level precharge: prefix length scope+1 == 1, i.e. [bank]
    }

    fn is_opening(&self, cmd: Cmd) -> bool {
        cmd == Cmd::Act
    }

    fn is_accessing(&self, cmd: Cmd) -> bool {
        cmd == Cmd::Acc
    }

    fn is_closing(&self, cmd: Cmd) -> bool {
        cmd == Cmd::Pre
    }
}

pub fn req(bank: i64, row: i64, arrive: u64, coreid: usize) -> Request<()> {
    Request::new(vec![bank, row], arrive, coreid, ())
}

/// A `Controller` whose readiness is fully explicit: `ready` holds the
/// set of `(bank, row)` pairs currently considered ready to issue, and
/// `row_table` is a real [`RowTable`] the test populates directly via
/// [`MockController::open_row`].
pub struct MockController {
    pub ready: HashMap<(i64, i64), bool>,
    pub clk: u64,
    pub spec: TestSpec,
    pub row_table: RowTable<TestSpec>,
}

impl MockController {
    pub fn new() -> Self {
        Self {
            ready: HashMap::new(),
            clk: 0,
            spec: TestSpec,
            row_table: RowTable::new(),
        }
    }

    pub fn set_ready(&mut self, bank: i64, row: i64, ready: bool) {
        self.ready.insert((bank, row), ready);
    }

    /// Opens `row` in `bank` at the current clock, as if an activate had
    /// just been processed.
    pub fn open_row(&mut self, bank: i64, row: i64) {
        self.row_table
            .update(&self.spec, Cmd::Act, &vec![bank, row], self.clk);
    }

    /// Records one access (row hit) against `bank`/`row`.
    pub fn access(&mut self, bank: i64, row: i64) {
        self.row_table
            .update(&self.spec, Cmd::Acc, &vec![bank, row], self.clk);
    }

    pub fn close(&mut self, bank: i64) {
        self.row_table
            .update(&self.spec, Cmd::Pre, &vec![bank, 0], self.clk);
    }
}

impl Default for MockController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller<TestSpec> for MockController {
    fn is_ready_to_issue<P>(&self, req: &Request<P>) -> bool {
        let key = (req.addr_vec[0], req.addr_vec[1]);
        self.ready.get(&key).copied().unwrap_or(false)
    }

    fn is_ready_for_command(&self, _cmd: Cmd, rowgroup: &[i64]) -> bool {
        // In these tests readiness-to-precharge is modeled as "any request
        // against this bank is marked ready", which is sufficient to
        // exercise Row Policy victim selection deterministically.
        self.ready
            .iter()
            .any(|(&(bank, _), &ready)| ready && [bank] == rowgroup[..])
    }

    fn is_row_hit<P>(&self, req: &Request<P>) -> bool {
        self.row_table.get_open_row(&req.addr_vec) == req.addr_vec[TestSpec::ROW]
    }

    fn is_row_open<P>(&self, req: &Request<P>) -> bool {
        self.row_table.get_open_row(&req.addr_vec) != dram_sched::rowtable::NO_OPEN_ROW
    }

    fn clk(&self) -> u64 {
        self.clk
    }

    fn spec(&self) -> &TestSpec {
        &self.spec
    }

    fn rowtable(&self) -> &RowTable<TestSpec> {
        &self.row_table
    }
}

pub fn addr(bank: i64, row: i64) -> AddrVec {
    vec![bank, row]
}
