//! 仿真观测
//!
//! 仿真器在三个时机回调观测者：初始化事件执行完毕、每执行一个事件、
//! 每个时间片稳定之后。`TraceLogger` 把这些记录收集为可写成 JSON 的结构。

mod trace;

pub use trace::{EventRecord, SlotSnapshot, TraceDump, TraceLogger};

use crate::net::NetRegistry;
use crate::sim::{DeltaCycle, SimTime};

/// 仿真观测者：由调用方实现（例如波形记录、断言检查）。
pub trait Monitor {
    /// 初始化事件全部执行完、时间片处理开始之前
    fn on_initialized(&mut self, _now: SimTime, _nets: &NetRegistry) {}
    /// 每执行一个事件调用一次
    fn on_event(&mut self, _record: &EventRecord) {}
    /// 时间片的所有区域都清空之后
    fn on_slot_settled(&mut self, _time: SimTime, _delta_cycles: DeltaCycle, _nets: &NetRegistry) {}
}

/// 空观测者
impl Monitor for () {}
