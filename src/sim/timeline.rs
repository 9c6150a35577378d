//! 时间轴
//!
//! 按时间严格升序排列的时间片序列，每个时间最多一个时间片。

use super::event::Event;
use super::region::{Region, TimeSlot};
use super::time::SimTime;
use std::collections::VecDeque;
use tracing::trace;

/// 时间轴
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    slots: VecDeque<TimeSlot>,
}

impl Timeline {
    /// 把事件放进 `time` 对应时间片的指定区域，需要时按升序插入新时间片。
    ///
    /// 从最早的时间片开始线性扫描；实际存在的时间片数量很少。
    pub fn schedule(&mut self, ev: Event, region: Region, time: SimTime) {
        let pos = self.slots.iter().position(|s| s.time >= time);
        let slot = match pos {
            Some(i) if self.slots[i].time == time => &mut self.slots[i],
            Some(i) => {
                trace!(%time, index = i, "插入新时间片");
                self.slots.insert(i, TimeSlot::new(time));
                &mut self.slots[i]
            }
            None => {
                trace!(%time, "在尾部追加新时间片");
                self.slots.push_back(TimeSlot::new(time));
                let last = self.slots.len() - 1;
                &mut self.slots[last]
            }
        };
        slot.push(region, ev);
    }

    /// 取出最早的时间片；时间轴为空时返回 `None`（正常终止信号）
    pub fn pop_earliest(&mut self) -> Option<TimeSlot> {
        self.slots.pop_front()
    }

    pub fn peek_time(&self) -> Option<SimTime> {
        self.slots.front().map(|s| s.time)
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut TimeSlot> {
        self.slots.front_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 所有时间片中尚未执行的事件总数
    pub fn pending_events(&self) -> usize {
        self.slots.iter().map(TimeSlot::len).sum()
    }
}
