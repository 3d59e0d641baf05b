//! Shared types for addressing DRAM state and the requests that flow
//! through the scheduling core.
//!
//! An [`AddrVec`] is an opaque ordered sequence of integers — channel,
//! rank, bank, (optional bank group / subarray), row, column — whose
//! per-level meaning is supplied entirely by a [`DramSpec`] implementation.
//! The core never interprets a level itself beyond the `Row` index the
//! spec names.

use std::fmt;

/// An address vector: channel, rank, bank, [subarray], row, column, in
/// whatever order the active [`DramSpec`] assigns to its levels.
pub type AddrVec = Vec<i64>;

/// The prefix of an [`AddrVec`] identifying a single row buffer (a bank or
/// subarray), i.e. every level up to but not including `Row`.
pub type RowGroup = Vec<i64>;

/// Returns the rowgroup prefix of `addr_vec` for a spec whose `Row` level
/// sits at index `row_level`.
pub fn rowgroup_of(addr_vec: &[i64], row_level: usize) -> RowGroup {
    addr_vec[..row_level].to_vec()
}

/// A pending memory request as seen by the scheduling core.
///
/// `payload` carries whatever request-kind/callback data the surrounding
/// controller needs; the Selector never inspects it (spec.md §3: "other
/// fields the Selector does not inspect").
#[derive(Debug, Clone)]
pub struct Request<P = ()> {
    pub addr_vec: AddrVec,
    pub arrive: u64,
    pub coreid: usize,
    pub payload: P,
}

impl<P> Request<P> {
    pub fn new(addr_vec: AddrVec, arrive: u64, coreid: usize, payload: P) -> Self {
        Self {
            addr_vec,
            arrive,
            coreid,
            payload,
        }
    }

    pub fn row(&self, row_level: usize) -> i64 {
        self.addr_vec[row_level]
    }

    pub fn rowgroup(&self, row_level: usize) -> RowGroup {
        rowgroup_of(&self.addr_vec, row_level)
    }
}

/// Describes a DRAM command standard to the scheduling core: which
/// address-vector level a command acts at, and how to classify it as
/// opening, accessing, or closing a row buffer.
///
/// This is the trait the original source expressed as a template
/// parameter (`Scheduler<T>`, `RowTable<T>`); in Rust it is the injected
/// seam named in spec.md §9 ("Generic over DRAM standard").
pub trait DramSpec {
    /// The command enumeration of this DRAM standard.
    type Command: Copy + Eq + fmt::Debug;

    /// Address-vector level index of the row field.
    const ROW: usize;

    /// The precharge command, used by FRFCFS_PriorHit to compute the scope
    /// at which closing a row would take effect.
    fn pre(&self) -> Self::Command;

    /// Address-vector level at which `cmd` takes effect.
    fn scope(&self, cmd: Self::Command) -> usize;

    /// Does `cmd` open a row buffer (e.g. activate)?
    fn is_opening(&self, cmd: Self::Command) -> bool;

    /// Does `cmd` access an already-open row buffer (e.g. read/write)?
    fn is_accessing(&self, cmd: Self::Command) -> bool;

    /// Does `cmd` close one or more row buffers (e.g. precharge, or a
    /// combined read/write with auto-precharge)?
    fn is_closing(&self, cmd: Self::Command) -> bool;
}
