//! The Row (Precharge) Policy.
//!
//! Grounded on the victim-selection shape of
//! `willmccallion-riscv-system-emulator/hardware/src/core/units/cache/policies/lru.rs`'s
//! `ReplacementPolicy` trait (a policy that, given the current state,
//! names a victim to evict) generalized from cache ways to DRAM rowgroups
//! per spec.md §4.3. Dispatch is by `match` over [`RowPolicyType`], per
//! spec.md §9.

use crate::common::{DramSpec, RowGroup};
use crate::config::{RowPolicyConfig, RowPolicyType};
use crate::controller::Controller;

/// Chooses rowgroups to proactively close ahead of an upcoming command.
pub struct RowPolicy<S: DramSpec> {
    config: RowPolicyConfig,
    _spec: std::marker::PhantomData<S>,
}

impl<S: DramSpec> RowPolicy<S> {
    pub fn new(config: RowPolicyConfig) -> Self {
        Self {
            config,
            _spec: std::marker::PhantomData,
        }
    }

    /// Returns a rowgroup whose open row should be closed to make room
    /// for `cmd`, or an empty vector meaning "do nothing".
    ///
    /// `Closed` and `ClosedAp` share victim-selection logic: the
    /// difference between them is entirely in how the surrounding
    /// controller emits the subsequent precharge (spec.md §4.3).
    pub fn get_victim<C: Controller<S>>(&self, ctrl: &C, cmd: S::Command) -> RowGroup {
        match self.config.row_policy_type {
            RowPolicyType::Closed | RowPolicyType::ClosedAp => {
                for (rowgroup, _) in ctrl.rowtable().rowgroups() {
                    if ctrl.is_ready_for_command(cmd, rowgroup) {
                        return rowgroup.clone();
                    }
                }
                RowGroup::new()
            }
            RowPolicyType::Opened => RowGroup::new(),
            RowPolicyType::Timeout => {
                let now = ctrl.clk();
                for (rowgroup, entry) in ctrl.rowtable().rowgroups() {
                    if now.saturating_sub(entry.timestamp) < self.config.timeout {
                        continue;
                    }
                    if !ctrl.is_ready_for_command(cmd, rowgroup) {
                        continue;
                    }
                    return rowgroup.clone();
                }
                RowGroup::new()
            }
        }
    }
}
