//! 信号线
//!
//! 定义单根 net 及其赋值方式。

use super::id::NetId;
use super::logic::LogicValue;
use serde::{Deserialize, Serialize};

/// 赋值方式：当该 net 作为扇出目标被通知时采用的传播规则。
///
/// 这是 net 的属性而不是边的属性：同一根 net 同一时刻只能有一种方式，
/// 最后一次连接/赋值调用生效。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// 连续赋值（组合逻辑）：同一个 delta cycle 内重新求值
    Continuous,
    /// 非阻塞赋值（时序逻辑）：本 cycle 采样，NBA 区域更新
    #[default]
    Deferred,
}

/// 一根 net
#[derive(Debug, Clone)]
pub struct Net {
    pub(crate) id: NetId,
    pub(crate) name: Option<String>,
    pub(crate) value: LogicValue,
    pub(crate) discipline: Option<Discipline>,
    pub(crate) fanout: Vec<NetId>,
}

impl Net {
    pub(crate) fn new(id: NetId, name: Option<String>, value: LogicValue) -> Self {
        Self {
            id,
            name,
            value,
            discipline: None,
            fanout: Vec::new(),
        }
    }

    pub fn id(&self) -> NetId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> LogicValue {
        self.value
    }

    /// 尚未被任何连接/赋值指定时为 `None`
    pub fn discipline(&self) -> Option<Discipline> {
        self.discipline
    }

    /// 由本 net 驱动的目标，按连接顺序排列（允许重复）
    pub fn fanout(&self) -> &[NetId] {
        &self.fanout
    }

    /// 日志/输出用的名字，未命名时回退到 `netN`
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}
