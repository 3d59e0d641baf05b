//! Request-scheduling core of a cycle-accurate DRAM memory-controller
//! simulator.
//!
//! Given a per-bank queue of pending memory requests and a model of DRAM
//! timing/state, this crate decides, on every controller tick, which
//! request (if any) should be issued next and which rows should be
//! proactively closed. It is a pure decision function: it never drives
//! command issue itself and exposes no concurrency.
//!
//! # Modules
//!
//! * `common`: address vectors, requests, and the [`common::DramSpec`] seam.
//! * `config`: scheduler/row-policy tunables, loaded from TOML.
//! * `controller`: the `Controller` collaborator trait (spec.md §6).
//! * `rowtable`: the controller's shadow of DRAM row-buffer state.
//! * `scheduler`: the Request Selector (FCFS, FR-FCFS, FR-FCFS-Cap,
//!   FR-FCFS-PriorHit, BLISS).
//! * `rowpolicy`: the Row (Precharge) Policy (Closed, ClosedAP, Opened,
//!   Timeout).
//! * `stats`: per-core blacklist-insertion counters.
//! * `error`: ambient config-loading error type.
//! * `demo`: a reference `DramSpec`/`Controller` pair backing the CLI
//!   binary and integration tests — not part of the core's contract.

/// Address vectors, requests, and the `DramSpec` seam.
pub mod common;

/// Scheduler and row-policy configuration, loaded from TOML.
pub mod config;

/// The `Controller` collaborator trait.
pub mod controller;

/// Demonstration harness: reference `DramSpec`/`Controller` implementations.
pub mod demo;

/// Ambient config-loading error type.
pub mod error;

/// The Row (Precharge) Policy.
pub mod rowpolicy;

/// The controller's shadow of DRAM row-buffer state.
pub mod rowtable;

/// The Request Selector.
pub mod scheduler;

/// Scheduling-core statistics.
pub mod stats;
