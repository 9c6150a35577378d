use crate::net::{LogicValue, NetId, NetRegistry};
use crate::sim::{DeltaCycle, EventKind, SimTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use super::Monitor;

/// 一条事件执行记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub t: SimTime,
    pub delta: DeltaCycle,
    pub kind: EventKind,
    pub net: NetId,
    pub old: LogicValue,
    pub new: LogicValue,
    /// 仅 `DeferredEval`：采样到的源值（目标本身此时不变）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampled: Option<LogicValue>,
    /// 是否为声明时产生的初始化事件
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub initial: bool,
}

impl EventRecord {
    pub fn changed(&self) -> bool {
        self.old != self.new
    }
}

/// 某一时刻全部 net 的取值（下标即 `NetId.0`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub t: SimTime,
    /// 该时间片用掉的 delta cycle 数（初始化快照为 0）
    pub deltas: DeltaCycle,
    pub values: Vec<LogicValue>,
}

impl SlotSnapshot {
    fn capture(t: SimTime, deltas: DeltaCycle, nets: &NetRegistry) -> Self {
        Self {
            t,
            deltas,
            values: nets.iter().map(|n| n.value()).collect(),
        }
    }

    pub fn value(&self, net: NetId) -> Option<LogicValue> {
        self.values.get(net.0).copied()
    }
}

/// 写出到 JSON 的完整追踪
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceDump {
    pub nets: Vec<String>,
    pub events: Vec<EventRecord>,
    pub snapshots: Vec<SlotSnapshot>,
}

/// 一个简单的追踪收集器（存内存，仿真结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct TraceLogger {
    pub events: Vec<EventRecord>,
    pub snapshots: Vec<SlotSnapshot>,
    labels: Vec<String>,
}

impl TraceLogger {
    pub fn push(&mut self, rec: EventRecord) {
        self.events.push(rec);
    }

    /// 指定 net 的全部写入记录（不含 `DeferredEval` 采样）
    pub fn writes_to(&self, net: NetId) -> impl Iterator<Item = &EventRecord> {
        self.events
            .iter()
            .filter(move |r| r.net == net && r.kind != EventKind::DeferredEval)
    }

    /// 时间 `t` 稳定后的快照
    pub fn snapshot_at(&self, t: SimTime) -> Option<&SlotSnapshot> {
        self.snapshots.iter().rev().find(|s| s.t == t)
    }

    pub fn to_dump(&self) -> TraceDump {
        TraceDump {
            nets: self.labels.clone(),
            events: self.events.clone(),
            snapshots: self.snapshots.clone(),
        }
    }

    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.to_dump()).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    fn refresh_labels(&mut self, nets: &NetRegistry) {
        if self.labels.len() != nets.len() {
            self.labels = nets.iter().map(|n| n.label()).collect();
        }
    }
}

impl Monitor for TraceLogger {
    fn on_initialized(&mut self, now: SimTime, nets: &NetRegistry) {
        self.refresh_labels(nets);
        self.snapshots.push(SlotSnapshot::capture(now, 0, nets));
    }

    fn on_event(&mut self, record: &EventRecord) {
        self.push(record.clone());
    }

    fn on_slot_settled(&mut self, time: SimTime, delta_cycles: DeltaCycle, nets: &NetRegistry) {
        self.refresh_labels(nets);
        self.snapshots
            .push(SlotSnapshot::capture(time, delta_cycles, nets));
    }
}
