//! Scheduling-core statistics.
//!
//! Grounded on `willmccallion-riscv-system-emulator/hardware/src/stats.rs`'s
//! `SimStats` — a plain struct of counters with a `Default` impl and a
//! pretty-printing `report()` — scoped down to what spec.md §6 names the
//! core itself must expose.

use std::collections::HashMap;

/// Per-core and aggregate blacklist-insertion counters maintained by a
/// BLISS [`crate::scheduler::Selector`].
///
/// spec.md §6 names fixed `core_i_blacklist_count` counters for
/// i ∈ {0,1,2,3}; §9 explicitly permits generalizing to a per-core map.
/// `by_core` is that generalization; [`SchedulerStats::core_blacklist_count`]
/// reconstructs the fixed four-counter view for fidelity to the original.
#[derive(Debug, Clone, Default)]
pub struct SchedulerStats {
    by_core: HashMap<usize, u64>,
}

impl SchedulerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one blacklist insertion attributable to `coreid`.
    pub(crate) fn record_blacklisting(&mut self, coreid: usize) {
        *self.by_core.entry(coreid).or_insert(0) += 1;
    }

    /// Blacklist-insertion count for an arbitrary core id.
    pub fn blacklist_count(&self, coreid: usize) -> u64 {
        self.by_core.get(&coreid).copied().unwrap_or(0)
    }

    /// The fixed `core_0_blacklist_count` .. `core_3_blacklist_count` view
    /// spec.md §6 names, for cores 0 through 3. Additional cores are
    /// tracked in [`Self::blacklist_count`] but, per spec.md §9's
    /// "ambiguities preserved", are silently absent from this view.
    pub fn core_blacklist_count(&self) -> [u64; 4] {
        [
            self.blacklist_count(0),
            self.blacklist_count(1),
            self.blacklist_count(2),
            self.blacklist_count(3),
        ]
    }

    /// Pretty-prints all tracked per-core blacklist counts.
    pub fn report(&self) {
        println!("Scheduler Statistics");
        println!("--------------------");
        let mut ids: Vec<_> = self.by_core.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            println!("  core {id} blacklist count: {}", self.by_core[&id]);
        }
    }
}
