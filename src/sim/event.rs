//! 仿真事件
//!
//! 定义针对 net 注册表的一次调度工作。

use crate::net::{LogicValue, NetId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一个调度事件。创建后不可变，由所在区域队列独占，执行后丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// 把常量直接写入 `target`
    ConstantAssign { target: NetId, value: LogicValue },
    /// 把 `source` 的当前值写入 `target`（组合逻辑重新求值）
    ContinuousAssign { target: NetId, source: NetId },
    /// 立即采样 `source`，产生一个 NBA 区域的 `DeferredUpdate`
    DeferredEval { target: NetId, source: NetId },
    /// 写入之前采样得到的值
    DeferredUpdate { target: NetId, value: LogicValue },
}

impl Event {
    pub fn target(&self) -> NetId {
        match *self {
            Event::ConstantAssign { target, .. }
            | Event::ContinuousAssign { target, .. }
            | Event::DeferredEval { target, .. }
            | Event::DeferredUpdate { target, .. } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::ConstantAssign { .. } => EventKind::ConstantAssign,
            Event::ContinuousAssign { .. } => EventKind::ContinuousAssign,
            Event::DeferredEval { .. } => EventKind::DeferredEval,
            Event::DeferredUpdate { .. } => EventKind::DeferredUpdate,
        }
    }
}

/// 事件类型标签（不带负载，用于追踪记录）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ConstantAssign,
    ContinuousAssign,
    DeferredEval,
    DeferredUpdate,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::ConstantAssign => "constant_assign",
            EventKind::ContinuousAssign => "continuous_assign",
            EventKind::DeferredEval => "deferred_eval",
            EventKind::DeferredUpdate => "deferred_update",
        };
        f.write_str(s)
    }
}
