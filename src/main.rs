//! DRAM scheduling-core demonstration CLI.
//!
//! Drives a synthetic multi-core workload through the scheduling core
//! (`Selector` + `RowTable` + `RowPolicy`) over a reference `Controller`
//! implementation, and reports the resulting statistics. This binary is
//! a thin driver over the library crate, in the style of
//! `riscv-emulator`'s own `main.rs`; it is not the simulator the core's
//! spec describes as out of scope, only a harness for exercising it.

use std::collections::VecDeque;

use clap::Parser;

use dram_sched::common::Request;
use dram_sched::config::{load_config, DemoConfig};
use dram_sched::controller::Controller;
use dram_sched::demo::{GenericDdr, Timing, TimingController};
use dram_sched::rowpolicy::RowPolicy;
use dram_sched::scheduler::Selector;

/// Command-line arguments for the scheduling-core demonstration.
#[derive(Parser, Debug)]
#[command(author, version, about = "DRAM request-scheduling core demo")]
struct Args {
    /// Path to a TOML config file with `[scheduler]`/`[row_policy]` sections.
    #[arg(short, long)]
    config: Option<String>,

    /// Number of cores generating requests.
    #[arg(long, default_value_t = 4)]
    cores: usize,

    /// Requests enqueued per core.
    #[arg(long, default_value_t = 64)]
    requests_per_core: usize,

    /// Number of banks the synthetic workload spreads requests across.
    #[arg(long, default_value_t = 2)]
    banks: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let demo_config = match &args.config {
        Some(path) => load_config(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None => DemoConfig::default(),
    };

    println!("DRAM Scheduling Core Demo");
    println!("-------------------------");
    println!("Scheduler:   {:?}", demo_config.scheduler.scheduler_type);
    println!("Row policy:  {:?}", demo_config.row_policy.row_policy_type);
    println!("Cores:       {}", args.cores);
    println!("Requests:    {} per core", args.requests_per_core);
    println!("-------------------------");

    let mut queue: VecDeque<Request<()>> = VecDeque::new();
    for coreid in 0..args.cores {
        for i in 0..args.requests_per_core {
            // Each core favors one bank/row, with an occasional excursion
            // to another bank, so row-buffer locality and cross-core
            // contention both show up in the trace.
            let bank = (coreid + if i % 5 == 0 { 1 } else { 0 }) % args.banks.max(1);
            let row = (i / 3) as i64;
            let addr_vec = vec![0, 0, bank as i64, row, (i % 8) as i64];
            queue.push_back(Request::new(addr_vec, i as u64, coreid, ()));
        }
    }

    let mut ctrl = TimingController::new(Timing::default());
    let mut selector: Selector<GenericDdr> = Selector::new(demo_config.scheduler);
    let row_policy: RowPolicy<GenericDdr> = RowPolicy::new(demo_config.row_policy);

    let mut issued = 0;
    while !queue.is_empty() {
        let slice: Vec<_> = queue.iter().cloned().collect();
        match selector.get_head(&ctrl, &slice) {
            Some(idx) => {
                let req = queue.remove(idx).expect("index came from this queue");
                let latency = ctrl.issue(&req);
                ctrl.advance_clk(latency.max(1));
                issued += 1;
            }
            None => {
                ctrl.advance_clk(1);
            }
        }

        if let Some(victim) = {
            let cmd = dram_sched::demo::Command::Pre;
            let v = row_policy.get_victim(&ctrl, cmd);
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        } {
            ctrl.precharge(&victim);
        }
    }

    println!("Issued {issued} requests over {} cycles", ctrl.clk());
    println!("-------------------------");
    selector.stats().report();
}
