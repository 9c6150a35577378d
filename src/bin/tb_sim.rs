//! 测试台 JSON 仿真
//!
//! 读取测试台描述，搭建并运行，打印每根 net 的最终取值。

use clap::Parser;
use hdlsim_rs::monitor::TraceLogger;
use hdlsim_rs::sim::SimTime;
use hdlsim_rs::tb::{TbError, TestbenchSpec, value_report};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "tb-sim", about = "Run a testbench.json on the hdlsim-rs event scheduler")]
struct Args {
    /// Path to testbench.json
    #[arg(long)]
    testbench: PathBuf,

    /// Run until this time; later time slots stay pending
    #[arg(long)]
    until: Option<u64>,

    /// Override the per-slot delta cycle bound
    #[arg(long)]
    max_delta_cycles: Option<u32>,

    /// Output trace JSON file
    #[arg(long)]
    trace_json: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), TbError> {
    let spec = TestbenchSpec::load(&args.testbench)?;
    let mut cfg = spec.config();
    if let Some(n) = args.max_delta_cycles {
        cfg.max_delta_cycles = n;
    }
    let mut tb = spec.instantiate(cfg)?;

    let mut trace = TraceLogger::default();
    let result = match args.until {
        Some(until) => tb.sim.run_until(SimTime(until), &mut trace),
        None => tb.sim.run_with(&mut trace),
    };

    if let Some(path) = &args.trace_json {
        trace.write_json(path)?;
        eprintln!("wrote trace to {}", path.display());
    }
    result?;

    println!(
        "done @ {}, events={}, delta_cycles={}, pending_slots={}",
        tb.sim.now(),
        tb.sim.stats().executed_events,
        tb.sim.stats().delta_cycles,
        tb.sim.pending_slots()
    );
    for line in value_report(tb.sim.nets()) {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
