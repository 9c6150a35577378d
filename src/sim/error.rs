//! 仿真错误
//!
//! 所有可失败的公开接口都返回 `Result<T, SimError>`。

use super::time::SimTime;
use crate::net::NetId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// 引用了 `[0, declared)` 之外的 net
    #[error("unknown {net}: only {declared} nets are declared")]
    UnknownNet { net: NetId, declared: usize },

    /// 时间片在上界内无法稳定（例如组合逻辑振荡）
    #[error(
        "time slot {time} did not settle: {delta_cycles} delta cycles, {events} events executed"
    )]
    NonTerminatingSlot {
        time: SimTime,
        delta_cycles: u32,
        events: u64,
    },

    /// 连续赋值构成了环
    #[error("combinational loop through continuous assignments: {}", fmt_nets(.nets))]
    CombinationalLoop { nets: Vec<NetId> },

    /// 调度到当前仿真时间之前
    #[error("cannot schedule at {requested}: simulation is already at {now}")]
    ScheduleInPast { requested: SimTime, now: SimTime },
}

fn fmt_nets(nets: &[NetId]) -> String {
    nets.iter()
        .map(NetId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
