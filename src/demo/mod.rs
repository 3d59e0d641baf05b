//! Demonstration harness: a reference `DramSpec` and `Controller` used by
//! the CLI binary (`src/main.rs`) and the integration tests. Not part of
//! the scheduling core's public contract — see spec.md §4.4/§4.5.

pub mod spec;
pub mod timing;

pub use spec::{Command, GenericDdr, BANK, CHANNEL, COLUMN, RANK, ROW};
pub use timing::{Timing, TimingController};
