use crate::net::{Discipline, LogicValue};
use serde::{Deserialize, Serialize};

/// 测试台 JSON 的顶层结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestbenchSpec {
    pub schema_version: u32,
    /// 仿真时间上界（含）；缺省时运行到时间轴耗尽
    #[serde(default)]
    pub max_time: Option<u64>,
    pub nets: Vec<NetSpec>,
    /// `assign target = source;`
    #[serde(default)]
    pub continuous: Vec<ConnectSpec>,
    /// `target <= source;`
    #[serde(default)]
    pub deferred: Vec<ConnectSpec>,
    #[serde(default)]
    pub stimulus: Vec<StimulusSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetSpec {
    pub name: String,
    /// 初始值，缺省为 `x`
    #[serde(default)]
    pub init: LogicValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectSpec {
    pub target: String,
    pub source: String,
}

/// 定时常量激励
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StimulusSpec {
    pub net: String,
    pub value: LogicValue,
    pub time: u64,
    /// 之后该 net 接收扇入的方式，缺省为非阻塞
    #[serde(default)]
    pub discipline: Option<Discipline>,
}
