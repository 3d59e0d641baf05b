//! The Request Selector.
//!
//! Grounded on `original_source/src/Scheduler.h`'s `Scheduler<T>` class:
//! every policy but `FRFCFS_PriorHit` folds a pairwise comparator over the
//! queue (spec.md §4.2); `FRFCFS_PriorHit` is its own two-pass routine
//! (spec.md §4.2, "FRFCFS_PriorHit selection algorithm"). Dispatch is by a
//! `match` over [`SchedulerType`] rather than the original's fixed-index
//! function-object table, per spec.md §9's explicit redesign note.

use std::collections::HashSet;

use log::debug;

use crate::common::{rowgroup_of, DramSpec, Request};
use crate::config::{SchedulerConfig, SchedulerType};
use crate::controller::Controller;
use crate::stats::SchedulerStats;

/// Chooses the head of a per-bank request queue under a configured
/// scheduling discipline.
///
/// Owns the BLISS blacklist bookkeeping (`last_req_id`, `num_consec_reqs`,
/// `blacklist_ids`, `last_cycle`) as fields rather than process globals,
/// per spec.md §9's "Global state" redesign note.
pub struct Selector<S: DramSpec> {
    config: SchedulerConfig,
    last_req_id: Option<usize>,
    num_consec_reqs: u32,
    blacklist_ids: HashSet<usize>,
    last_cycle: u64,
    stats: SchedulerStats,
    _spec: std::marker::PhantomData<S>,
}

impl<S: DramSpec> Selector<S> {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            last_req_id: None,
            num_consec_reqs: 0,
            blacklist_ids: HashSet::new(),
            last_cycle: 0,
            stats: SchedulerStats::new(),
            _spec: std::marker::PhantomData,
        }
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    pub fn blacklisted(&self, coreid: usize) -> bool {
        self.blacklist_ids.contains(&coreid)
    }

    /// Picks the highest-priority request in `queue`, or `None` if the
    /// queue is empty (or, for `FRFCFS_PriorHit`, no request is
    /// admissible).
    pub fn get_head<C, P>(&mut self, ctrl: &C, queue: &[Request<P>]) -> Option<usize>
    where
        C: Controller<S>,
    {
        if queue.is_empty() {
            return None;
        }

        if self.config.scheduler_type == SchedulerType::FrfcfsPriorHit {
            return self.get_head_prior_hit(ctrl, queue);
        }

        let mut head = 0;
        for next in 1..queue.len() {
            head = self.compare(ctrl, queue, head, next);
        }
        Some(head)
    }

    /// Pairwise comparator dispatch for every policy but `FRFCFS_PriorHit`.
    /// Returns the winning index; ties return `a` (earliest-arrival
    /// tie-break, since the fold always calls `compare(best, next)`).
    fn compare<C, P>(&mut self, ctrl: &C, queue: &[Request<P>], a: usize, b: usize) -> usize
    where
        C: Controller<S>,
    {
        match self.config.scheduler_type {
            SchedulerType::Fcfs => self.compare_fcfs(queue, a, b),
            SchedulerType::Frfcfs => self.compare_frfcfs(ctrl, queue, a, b),
            SchedulerType::FrfcfsCap => self.compare_frfcfs_cap(ctrl, queue, a, b),
            SchedulerType::FrfcfsPriorHit => self.compare_frfcfs_prior_hit(ctrl, queue, a, b),
            SchedulerType::Bliss => self.compare_bliss(ctrl, queue, a, b),
        }
    }

    fn compare_fcfs<P>(&self, queue: &[Request<P>], a: usize, b: usize) -> usize {
        if queue[a].arrive <= queue[b].arrive {
            a
        } else {
            b
        }
    }

    fn compare_frfcfs<C, P>(&self, ctrl: &C, queue: &[Request<P>], a: usize, b: usize) -> usize
    where
        C: Controller<S>,
    {
        let ready_a = ctrl.is_ready_to_issue(&queue[a]);
        let ready_b = ctrl.is_ready_to_issue(&queue[b]);
        if ready_a != ready_b {
            return if ready_a { a } else { b };
        }
        self.compare_fcfs(queue, a, b)
    }

    fn compare_frfcfs_cap<C, P>(&self, ctrl: &C, queue: &[Request<P>], a: usize, b: usize) -> usize
    where
        C: Controller<S>,
    {
        let rowtable = ctrl.rowtable();
        let ready_a = ctrl.is_ready_to_issue(&queue[a])
            && rowtable.get_hits(&queue[a].addr_vec, false) <= self.config.cap;
        let ready_b = ctrl.is_ready_to_issue(&queue[b])
            && rowtable.get_hits(&queue[b].addr_vec, false) <= self.config.cap;
        if ready_a != ready_b {
            return if ready_a { a } else { b };
        }
        self.compare_fcfs(queue, a, b)
    }

    fn compare_frfcfs_prior_hit<C, P>(
        &self,
        ctrl: &C,
        queue: &[Request<P>],
        a: usize,
        b: usize,
    ) -> usize
    where
        C: Controller<S>,
    {
        let ready_a = ctrl.is_ready_to_issue(&queue[a]) && ctrl.is_row_hit(&queue[a]);
        let ready_b = ctrl.is_ready_to_issue(&queue[b]) && ctrl.is_row_hit(&queue[b]);
        if ready_a != ready_b {
            return if ready_a { a } else { b };
        }
        self.compare_fcfs(queue, a, b)
    }

    fn compare_bliss<C, P>(&mut self, ctrl: &C, queue: &[Request<P>], a: usize, b: usize) -> usize
    where
        C: Controller<S>,
    {
        let now = ctrl.clk();
        if now.saturating_sub(self.last_cycle) > self.config.reset_time {
            self.blacklist_ids.clear();
            self.last_cycle = now;
            debug!("bliss: cleared blacklist at clk={now}");
        }

        let blacklisted_a = self.blacklist_ids.contains(&queue[a].coreid);
        let blacklisted_b = self.blacklist_ids.contains(&queue[b].coreid);
        if blacklisted_a != blacklisted_b {
            let winner = if blacklisted_a { b } else { a };
            self.update_blacklist_and_count(queue[winner].coreid, now);
            return winner;
        }

        let hit_a = ctrl.is_row_hit(&queue[a]);
        let hit_b = ctrl.is_row_hit(&queue[b]);
        if hit_a != hit_b {
            let winner = if hit_a { a } else { b };
            self.update_blacklist_and_count(queue[winner].coreid, now);
            return winner;
        }

        let winner = if queue[a].arrive <= queue[b].arrive {
            a
        } else {
            b
        };
        self.update_blacklist_and_count(queue[winner].coreid, now);
        winner
    }

    /// Updates `last_req_id`, `num_consec_reqs`, and `blacklist_ids` for a
    /// BLISS comparison that just named `coreid` the winner.
    ///
    /// Fidelity note (spec.md §4.2/§9): `num_consec_reqs` resets to 0
    /// rather than 1 on a streak change, so a run of length k yields
    /// `num_consec_reqs == k - 1` at the kth win, and blacklisting
    /// triggers on the `(blacklist_thresh + 2)`th consecutive win. The
    /// `g_num_cycles != 0` guard below preserves the warm-up suppression
    /// the original applies at cycle 0.
    fn update_blacklist_and_count(&mut self, coreid: usize, now: u64) {
        self.num_consec_reqs = if Some(coreid) == self.last_req_id {
            self.num_consec_reqs + 1
        } else {
            0
        };
        if self.num_consec_reqs == 0 {
            self.last_req_id = Some(coreid);
        }

        if self.num_consec_reqs > self.config.blacklist_thresh && now != 0 {
            self.blacklist_ids.insert(coreid);
            self.stats.record_blacklisting(coreid);
            debug!("bliss: blacklisted core {coreid} at clk={now}");
        }
    }

    /// The `FRFCFS_PriorHit` two-pass algorithm (spec.md §4.2).
    fn get_head_prior_hit<C, P>(&mut self, ctrl: &C, queue: &[Request<P>]) -> Option<usize>
    where
        C: Controller<S>,
    {
        let mut nominal = 0;
        for next in 1..queue.len() {
            nominal = self.compare_frfcfs_prior_hit(ctrl, queue, nominal, next);
        }
        if ctrl.is_ready_to_issue(&queue[nominal]) && ctrl.is_row_hit(&queue[nominal]) {
            return Some(nominal);
        }

        let pre = ctrl.spec().pre();
        let prefix_len = ctrl.spec().scope(pre) + 1;

        let hit_rowgroups: Vec<_> = queue
            .iter()
            .filter(|r| ctrl.is_row_hit(r))
            .map(|r| rowgroup_of(&r.addr_vec, prefix_len))
            .collect();

        let mut head: Option<usize> = None;
        for i in 0..queue.len() {
            let req = &queue[i];
            let violates_hit = !ctrl.is_row_hit(req)
                && ctrl.is_row_open(req)
                && hit_rowgroups.contains(&rowgroup_of(&req.addr_vec, prefix_len));
            if violates_hit {
                continue;
            }
            head = Some(match head {
                None => i,
                Some(best) => self.compare_frfcfs(ctrl, queue, best, i),
            });
        }
        head
    }
}
