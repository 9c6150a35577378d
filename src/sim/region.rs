//! 区域与时间片
//!
//! 一个时间片在同一仿真时间下按固定优先级持有两个事件区域：Active 与 NBA。

use super::event::Event;
use super::time::SimTime;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// 事件区域，顺序即优先级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Active,
    Nba,
}

impl Region {
    /// 区域优先级顺序
    pub const ORDER: [Region; 2] = [Region::Active, Region::Nba];

    fn index(self) -> usize {
        match self {
            Region::Active => 0,
            Region::Nba => 1,
        }
    }
}

/// 时间片：某个仿真时间下全部待执行的工作。
#[derive(Debug, Clone)]
pub struct TimeSlot {
    pub(crate) time: SimTime,
    regions: [VecDeque<Event>; 2],
}

impl TimeSlot {
    pub fn new(time: SimTime) -> Self {
        Self {
            time,
            regions: [VecDeque::new(), VecDeque::new()],
        }
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn region(&self, region: Region) -> &VecDeque<Event> {
        &self.regions[region.index()]
    }

    pub(crate) fn push(&mut self, region: Region, ev: Event) {
        self.regions[region.index()].push_back(ev);
    }

    pub(crate) fn pop_front(&mut self, region: Region) -> Option<Event> {
        self.regions[region.index()].pop_front()
    }

    /// 按优先级找第一个非空区域；都为空说明该时间片已稳定
    pub fn first_non_empty(&self) -> Option<Region> {
        Region::ORDER
            .into_iter()
            .find(|r| !self.regions[r.index()].is_empty())
    }

    /// 把 `from` 的全部事件整体搬到 Active（Active 此时应为空）并清空 `from`
    pub(crate) fn promote_to_active(&mut self, from: Region) {
        let moved = std::mem::take(&mut self.regions[from.index()]);
        self.regions[Region::Active.index()] = moved;
    }

    pub fn is_empty(&self) -> bool {
        self.regions.iter().all(VecDeque::is_empty)
    }

    pub fn len(&self) -> usize {
        self.regions.iter().map(VecDeque::len).sum()
    }
}
