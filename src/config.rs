//! Configuration for the scheduling core.
//!
//! Grounded on `willmccallion-riscv-system-emulator/hardware/src/config.rs`'s
//! pattern of `serde::Deserialize` structs with `#[serde(default = "...")]`
//! per-field defaults, loadable from TOML. The core itself never reads a
//! file; only the demonstration harness (`src/demo`, `src/main.rs`) does.

use serde::Deserialize;

use crate::error::ConfigError;

/// Which request-scheduling discipline the [`crate::scheduler::Selector`]
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum SchedulerType {
    /// First-Come-First-Served: strictly by arrival order.
    Fcfs,
    /// First-Ready-First-Come-First-Served: ready requests win, ties by arrival.
    #[serde(rename = "FRFCFS")]
    #[default]
    Frfcfs,
    /// FRFCFS with a per-row hit-streak cap.
    #[serde(rename = "FRFCFS_Cap")]
    FrfcfsCap,
    /// FRFCFS that additionally requires a row hit to count as ready.
    #[serde(rename = "FRFCFS_PriorHit")]
    FrfcfsPriorHit,
    /// Blacklisting memory scheduler: fairness via per-core blacklisting.
    Bliss,
}

/// Which rows the [`crate::rowpolicy::RowPolicy`] proactively closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum RowPolicyType {
    /// Precharge as soon as no pending reference needs the open row.
    Closed,
    /// As Closed, but the precharge piggy-backs on the last access
    /// (auto-precharge); victim selection is identical to Closed.
    ClosedAp,
    /// Never proactively precharge.
    #[default]
    Opened,
    /// Precharge a row after it has been idle for `timeout` cycles.
    Timeout,
}

/// Tunables for the Request Selector (spec.md §4.2).
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub scheduler_type: SchedulerType,

    /// Row-hit streak cap used only by `FRFCFS_Cap`.
    #[serde(default = "default_cap")]
    pub cap: u32,

    /// Consecutive wins by one core before it is blacklisted, used only
    /// by `BLISS`.
    #[serde(default = "default_blacklist_thresh")]
    pub blacklist_thresh: u32,

    /// Cycles of BLISS inactivity before the blacklist is cleared.
    #[serde(default = "default_reset_time")]
    pub reset_time: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            scheduler_type: SchedulerType::default(),
            cap: default_cap(),
            blacklist_thresh: default_blacklist_thresh(),
            reset_time: default_reset_time(),
        }
    }
}

fn default_cap() -> u32 {
    16
}

fn default_blacklist_thresh() -> u32 {
    4
}

fn default_reset_time() -> u64 {
    10_000
}

/// Tunables for the Row (Precharge) Policy (spec.md §4.3).
#[derive(Debug, Clone, Deserialize)]
pub struct RowPolicyConfig {
    #[serde(default)]
    pub row_policy_type: RowPolicyType,

    /// Idle cycles before `Timeout` proactively precharges a row.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for RowPolicyConfig {
    fn default() -> Self {
        Self {
            row_policy_type: RowPolicyType::default(),
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    50
}

/// Top-level configuration for the demonstration harness: both policy
/// configs in one TOML document, the way
/// `riscv-emulator::config::Config` groups `MemoryConfig`/`CacheHierarchyConfig`
/// under one `[memory]`/`[cache]` section each.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub row_policy: RowPolicyConfig,
}

/// Loads a [`DemoConfig`] from a TOML file on disk.
pub fn load_config(path: &str) -> Result<DemoConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}
