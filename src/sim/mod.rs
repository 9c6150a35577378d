//! 仿真核心模块
//!
//! 此模块包含分层事件驱动仿真的核心组件：仿真时间、事件、区域与时间片、
//! 时间轴以及仿真器。

// 子模块声明
mod config;
mod error;
mod event;
mod region;
mod simulator;
mod time;
mod timeline;

// 重新导出公共接口
pub use config::SimConfig;
pub use error::SimError;
pub use event::{Event, EventKind};
pub use region::{Region, TimeSlot};
pub use simulator::{RunState, SimStats, Simulator};
pub use time::{DeltaCycle, SimTime};
pub use timeline::Timeline;
