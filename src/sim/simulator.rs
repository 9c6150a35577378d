//! 仿真器
//!
//! 分层（Active / NBA）的事件驱动调度器：持有 net 注册表与时间轴，
//! 按时间片推进，时间片内用 delta cycle 收敛后再推进仿真时间。

use super::config::SimConfig;
use super::error::SimError;
use super::event::Event;
use super::region::Region;
use super::time::{DeltaCycle, SimTime};
use super::timeline::Timeline;
use crate::monitor::{EventRecord, Monitor};
use crate::net::{Discipline, LogicValue, Net, NetId, NetRegistry};
use tracing::{debug, info, trace, warn};

/// 运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Finished,
}

/// 运行统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    pub executed_events: u64,
    pub delta_cycles: u64,
    pub settled_slots: u64,
}

/// 事件驱动仿真器
#[derive(Debug, Default)]
pub struct Simulator {
    cfg: SimConfig,
    now: SimTime,
    nets: NetRegistry,
    timeline: Timeline,
    initial_events: Vec<Event>,
    state: RunState,
    stats: SimStats,
}

impl Simulator {
    pub fn new(cfg: SimConfig) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn nets(&self) -> &NetRegistry {
        &self.nets
    }

    pub fn net(&self, id: NetId) -> Result<&Net, SimError> {
        self.nets.get(id)
    }

    pub fn value(&self, id: NetId) -> Result<LogicValue, SimError> {
        self.nets.read(id)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// 尚未处理的时间片数
    pub fn pending_slots(&self) -> usize {
        self.timeline.len()
    }

    /// 声明一根 net，并登记一个把它设为初始值的初始化事件
    pub fn declare_net(&mut self, initial: LogicValue) -> NetId {
        self.declare(None, initial)
    }

    pub fn declare_named_net(&mut self, name: impl Into<String>, initial: LogicValue) -> NetId {
        self.declare(Some(name.into()), initial)
    }

    fn declare(&mut self, name: Option<String>, initial: LogicValue) -> NetId {
        let id = self.nets.declare(name, initial);
        self.initial_events.push(Event::ConstantAssign {
            target: id,
            value: initial,
        });
        id
    }

    /// 在 `time` 把常量赋给 `net`；`net` 之后按非阻塞方式接收扇入。
    ///
    /// 测试台驱动 DUT 时通常就用这种方式。
    pub fn assign_const(
        &mut self,
        net: NetId,
        value: LogicValue,
        time: SimTime,
    ) -> Result<(), SimError> {
        self.assign_const_with(net, value, time, Discipline::Deferred)
    }

    /// 同 `assign_const`，但之后按连续赋值方式接收扇入
    pub fn blocking_assign_const(
        &mut self,
        net: NetId,
        value: LogicValue,
        time: SimTime,
    ) -> Result<(), SimError> {
        self.assign_const_with(net, value, time, Discipline::Continuous)
    }

    /// 调度 `ConstantAssign` 到 `time` 的 Active 区域，同时设置 `net` 的赋值方式
    pub fn assign_const_with(
        &mut self,
        net: NetId,
        value: LogicValue,
        time: SimTime,
        discipline: Discipline,
    ) -> Result<(), SimError> {
        self.schedule(
            Event::ConstantAssign { target: net, value },
            Region::Active,
            time,
        )?;
        self.nets.set_discipline(net, discipline)
    }

    /// `assign target = source;`
    pub fn connect_continuous(&mut self, target: NetId, source: NetId) -> Result<(), SimError> {
        self.nets.connect_continuous(target, source)
    }

    /// `always @(...) target <= source;`
    pub fn connect_deferred(&mut self, target: NetId, source: NetId) -> Result<(), SimError> {
        self.nets.connect_deferred(target, source)
    }

    /// 把一个事件放到 `time` 的指定区域。事件引用的 net 必须已声明，且
    /// `time` 不能早于当前仿真时间。
    pub fn schedule(&mut self, ev: Event, region: Region, time: SimTime) -> Result<(), SimError> {
        self.nets.get(ev.target())?;
        if let Event::ContinuousAssign { source, .. } | Event::DeferredEval { source, .. } = ev {
            self.nets.get(source)?;
        }
        if time < self.now {
            return Err(SimError::ScheduleInPast {
                requested: time,
                now: self.now,
            });
        }
        trace!(now = %self.now, %time, ?region, kind = %ev.kind(), "调度事件");
        self.timeline.schedule(ev, region, time);
        Ok(())
    }

    /// 运行直到时间轴耗尽（或到达 `SimConfig::max_time`）。
    pub fn run(&mut self) -> Result<(), SimError> {
        self.run_with(&mut ())
    }

    /// 同 `run`，并把执行过程交给观测者
    #[tracing::instrument(skip(self, monitor))]
    pub fn run_with(&mut self, monitor: &mut dyn Monitor) -> Result<(), SimError> {
        let bound = self.cfg.max_time;
        self.run_inner(bound, monitor)
    }

    /// 运行直到时间轴为空或下一个时间片晚于 `until`；晚于 `until` 的时间片保留。
    #[tracing::instrument(skip(self, monitor))]
    pub fn run_until(&mut self, until: SimTime, monitor: &mut dyn Monitor) -> Result<(), SimError> {
        self.run_inner(Some(until), monitor)?;
        self.now = self.now.max(until);
        Ok(())
    }

    fn run_inner(
        &mut self,
        until: Option<SimTime>,
        monitor: &mut dyn Monitor,
    ) -> Result<(), SimError> {
        if self.cfg.reject_combinational_loops {
            if let Some(nets) = self.nets.find_continuous_cycle() {
                warn!(?nets, "检测到组合环路，拒绝运行");
                self.state = RunState::Finished;
                return Err(SimError::CombinationalLoop { nets });
            }
        }

        info!("▶️  开始运行仿真");
        debug!(
            now = %self.now,
            nets = self.nets.len(),
            initial_events = self.initial_events.len(),
            slots = self.timeline.len(),
            "初始状态"
        );

        self.state = RunState::Running;
        let result = self
            .execute_initial(monitor)
            .and_then(|()| self.process_slots(until, monitor));

        self.state = match &result {
            Ok(()) if !self.timeline.is_empty() => RunState::Idle,
            _ => RunState::Finished,
        };

        match &result {
            Ok(()) => info!(
                total_events = self.stats.executed_events,
                delta_cycles = self.stats.delta_cycles,
                final_time = %self.now,
                pending_slots = self.timeline.len(),
                "✅ 仿真完成"
            ),
            Err(err) => warn!(%err, now = %self.now, "❌ 仿真中止"),
        }
        result
    }

    /// 初始化事件只执行一次，之后丢弃
    fn execute_initial(&mut self, monitor: &mut dyn Monitor) -> Result<(), SimError> {
        let initial = std::mem::take(&mut self.initial_events);
        for ev in initial {
            self.execute(ev, 0, true, monitor)?;
        }
        monitor.on_initialized(self.now, &self.nets);
        Ok(())
    }

    fn process_slots(
        &mut self,
        until: Option<SimTime>,
        monitor: &mut dyn Monitor,
    ) -> Result<(), SimError> {
        while let Some(time) = self.timeline.peek_time() {
            if until.is_some_and(|u| time > u) {
                debug!(next = %time, "下一个时间片超出运行上界，停止");
                break;
            }
            self.now = time;
            let deltas = self.settle_slot(monitor)?;
            let _settled = self.timeline.pop_earliest();
            self.stats.settled_slots += 1;
            debug!(%time, deltas, "时间片已稳定");
            monitor.on_slot_settled(time, deltas, &self.nets);
        }
        Ok(())
    }

    /// 反复把第一个非空区域提升为 Active 并排空，直到所有区域为空。
    fn settle_slot(&mut self, monitor: &mut dyn Monitor) -> Result<DeltaCycle, SimError> {
        let time = self.now;
        let mut delta: DeltaCycle = 0;
        let mut executed: u64 = 0;
        debug!(%time, "开始时间片");

        loop {
            let Some(slot) = self.timeline.front_mut() else {
                break;
            };
            match slot.first_non_empty() {
                None => break,
                Some(Region::Active) => {}
                Some(region) => {
                    slot.promote_to_active(region);
                    delta = delta.saturating_add(1);
                    self.stats.delta_cycles += 1;
                    if delta > self.cfg.max_delta_cycles {
                        return Err(SimError::NonTerminatingSlot {
                            time,
                            delta_cycles: delta,
                            events: executed,
                        });
                    }
                    debug!(%time, delta, from = ?region, "开始 delta cycle");
                }
            }

            // 排空过程中新加入 Active 的事件也在这一轮执行
            while let Some(ev) = self
                .timeline
                .front_mut()
                .and_then(|s| s.pop_front(Region::Active))
            {
                executed += 1;
                if executed > self.cfg.max_events_per_slot {
                    return Err(SimError::NonTerminatingSlot {
                        time,
                        delta_cycles: delta,
                        events: executed,
                    });
                }
                self.execute(ev, delta, false, monitor)?;
            }
        }
        Ok(delta)
    }

    fn execute(
        &mut self,
        ev: Event,
        delta: DeltaCycle,
        initial: bool,
        monitor: &mut dyn Monitor,
    ) -> Result<(), SimError> {
        let target = ev.target();
        let old = self.nets.read(target)?;
        let mut rec = EventRecord {
            t: self.now,
            delta,
            kind: ev.kind(),
            net: target,
            old,
            new: old,
            sampled: None,
            initial,
        };
        let new = match ev {
            Event::ConstantAssign { value, .. } | Event::DeferredUpdate { value, .. } => value,
            Event::ContinuousAssign { source, .. } => self.nets.read(source)?,
            Event::DeferredEval { source, .. } => {
                // 只采样，不写目标、不传播
                let sampled = self.nets.read(source)?;
                self.timeline.schedule(
                    Event::DeferredUpdate {
                        target,
                        value: sampled,
                    },
                    Region::Nba,
                    self.now,
                );
                rec.sampled = Some(sampled);
                self.record(rec, monitor);
                return Ok(());
            }
        };
        self.nets.write(target, new)?;
        rec.new = new;
        self.record(rec, monitor);
        self.propagate(target, old, new)
    }

    fn record(&mut self, rec: EventRecord, monitor: &mut dyn Monitor) {
        self.stats.executed_events += 1;
        debug!(
            t = rec.t.0,
            delta = rec.delta,
            kind = %rec.kind,
            net = rec.net.0,
            old = %rec.old,
            new = %rec.new,
            "执行事件"
        );
        monitor.on_event(&rec);
    }

    /// 写入 `net` 之后通知扇出目标。
    ///
    /// 写入没有改变值、且目标已经等于新值时跳过该目标，避免在稳定状态上
    /// 反复产生事件。
    fn propagate(&mut self, net: NetId, old: LogicValue, new: LogicValue) -> Result<(), SimError> {
        let changed = old != new;
        let Self {
            nets,
            timeline,
            now,
            ..
        } = self;
        for &dep in nets.fanout(net)? {
            let dep_net = nets.get(dep)?;
            if !changed && dep_net.value() == new {
                trace!(from = %net, to = %dep, "值未变化且目标已一致，跳过");
                continue;
            }
            let ev = match dep_net.discipline().unwrap_or_default() {
                Discipline::Continuous => Event::ContinuousAssign {
                    target: dep,
                    source: net,
                },
                Discipline::Deferred => Event::DeferredEval {
                    target: dep,
                    source: net,
                },
            };
            trace!(from = %net, to = %dep, kind = %ev.kind(), "通知扇出目标");
            timeline.schedule(ev, Region::Active, *now);
        }
        Ok(())
    }
}
