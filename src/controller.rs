//! The `Controller` collaborator trait.
//!
//! spec.md treats the surrounding memory controller purely as an external
//! collaborator (§6) and keeps it out of scope. A buildable crate still
//! needs that collaborator expressed as a trait so [`crate::scheduler`],
//! [`crate::rowtable`], and [`crate::rowpolicy`] can be compiled and tested
//! independently of any one DRAM standard or timing model. This is the
//! Rust realization of spec.md §6's bullet list — the seam the original
//! C++ expressed as a `Controller<T>*` back-pointer plus a CRTP template
//! parameter.
//!
//! [`crate::demo::TimingController`] is a reference implementation used by
//! the demonstration binary and the integration tests; it is not part of
//! the core's public contract.

use crate::common::{DramSpec, Request};
use crate::rowtable::RowTable;

/// Everything the scheduling core needs to ask of the surrounding
/// controller. Implementors own the DRAM timing model; the core only
/// ever queries it.
pub trait Controller<S: DramSpec> {
    /// May this request's next command issue in the current cycle?
    /// (spec.md: `is_ready(cursor)`)
    fn is_ready_to_issue<P>(&self, req: &Request<P>) -> bool;

    /// May `cmd` be issued against `rowgroup` in the current cycle?
    /// (spec.md: `is_ready(cmd, rowgroup)`)
    fn is_ready_for_command(&self, cmd: S::Command, rowgroup: &[i64]) -> bool;

    /// Does `req` address the currently open row of its rowgroup?
    fn is_row_hit<P>(&self, req: &Request<P>) -> bool;

    /// Is any row open for `req`'s rowgroup?
    fn is_row_open<P>(&self, req: &Request<P>) -> bool;

    /// Current simulated cycle.
    fn clk(&self) -> u64;

    /// The DRAM-standard descriptor (`channel.spec` in spec.md §6).
    fn spec(&self) -> &S;

    /// The row table shadowing this controller's DRAM row-buffer state.
    fn rowtable(&self) -> &RowTable<S>;
}
