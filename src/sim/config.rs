//! 仿真配置
//!
//! 运行时的上界与保护阀。

use super::time::SimTime;

/// 仿真配置选项
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// `run` 处理的最大仿真时间（含）；`None` 表示直到时间轴耗尽
    pub max_time: Option<SimTime>,
    /// 单个时间片内允许的 delta cycle 数上限
    pub max_delta_cycles: u32,
    /// 单个时间片内允许执行的事件数上限
    pub max_events_per_slot: u64,
    /// 运行前检查经过连续赋值的组合环路，存在则直接报错
    pub reject_combinational_loops: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_time: None,
            max_delta_cycles: 1_000,
            max_events_per_slot: 1_000_000,
            reject_combinational_loops: true,
        }
    }
}
