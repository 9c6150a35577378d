//! 信号网络模块
//!
//! 此模块包含四态逻辑值、net 标识符、net 本身以及持有它们的注册表。

// 子模块声明
mod id;
mod logic;
mod registry;
mod signal;

// 重新导出公共接口
pub use id::NetId;
pub use logic::{LogicValue, ParseLogicError};
pub use registry::NetRegistry;
pub use signal::{Discipline, Net};
