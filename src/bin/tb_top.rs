//! 参考测试台
//!
//! 搭建参考拓扑并运行到时间轴耗尽，打印每根 net 的最终取值。

use clap::Parser;
use hdlsim_rs::demo::build_reference_tb;
use hdlsim_rs::monitor::TraceLogger;
use hdlsim_rs::sim::{SimConfig, SimTime, Simulator};
use hdlsim_rs::tb::value_report;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "tb-top", about = "参考测试台：组合复制线 + 两级寄存器")]
struct Args {
    /// 仿真时间上界（含）
    #[arg(long)]
    max_time: Option<u64>,
    /// 单个时间片内允许的 delta cycle 数
    #[arg(long, default_value_t = SimConfig::default().max_delta_cycles)]
    max_delta_cycles: u32,
    /// 输出事件追踪 JSON
    #[arg(long)]
    trace_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    // 初始化 tracing
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

    let cfg = SimConfig {
        max_time: args.max_time.map(SimTime),
        max_delta_cycles: args.max_delta_cycles,
        ..SimConfig::default()
    };
    let mut sim = Simulator::new(cfg);
    let tb = match build_reference_tb(&mut sim) {
        Ok(tb) => tb,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(nets = tb.named().len(), "参考测试台已搭建");

    let mut trace = TraceLogger::default();
    let result = sim.run_with(&mut trace);

    if let Some(path) = args.trace_json {
        trace.write_json(&path).expect("write trace json");
        eprintln!("wrote trace to {}", path.display());
    }

    if let Err(err) = result {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    println!(
        "done @ {}, events={}, delta_cycles={}",
        sim.now(),
        sim.stats().executed_events,
        sim.stats().delta_cycles
    );
    for line in value_report(sim.nets()) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
