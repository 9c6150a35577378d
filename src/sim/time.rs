//! 仿真时间类型
//!
//! 定义仿真时间与 delta cycle 计数。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 仿真时间（无量纲的整数时间步）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);
    pub const MAX: SimTime = SimTime(u64::MAX);
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

/// 同一时间片内的 delta cycle 序号，每个时间片从 0 开始。
pub type DeltaCycle = u32;
