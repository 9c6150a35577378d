use crate::monitor::{EventRecord, Monitor, TraceLogger};
use crate::net::{LogicValue, NetId, NetRegistry};
use crate::sim::{DeltaCycle, EventKind, SimTime, Simulator};
use serde_json::Value;

use LogicValue::{High, HighZ, Low, Unknown};

#[derive(Default)]
struct CountingMonitor {
    initialized: Vec<Vec<LogicValue>>,
    events: usize,
    settled: Vec<(u64, DeltaCycle)>,
}

impl Monitor for CountingMonitor {
    fn on_initialized(&mut self, _now: SimTime, nets: &NetRegistry) {
        self.initialized
            .push(nets.iter().map(|n| n.value()).collect());
    }

    fn on_event(&mut self, _record: &EventRecord) {
        self.events = self.events.saturating_add(1);
    }

    fn on_slot_settled(&mut self, time: SimTime, delta_cycles: DeltaCycle, _nets: &NetRegistry) {
        self.settled.push((time.0, delta_cycles));
    }
}

#[test]
fn initial_values_are_observable_before_slot_processing() {
    let mut sim = Simulator::default();
    let a = sim.declare_net(High);
    let _b = sim.declare_net(HighZ);
    let _c = sim.declare_net(Low);
    // 同一时刻 t=0 的常量赋值在初始化之后才执行
    sim.assign_const(a, Low, SimTime::ZERO).expect("assign");

    let mut mon = CountingMonitor::default();
    sim.run_with(&mut mon).expect("run");

    assert_eq!(mon.initialized, vec![vec![High, HighZ, Low]]);
    assert_eq!(mon.settled, vec![(0, 0)]);
    assert_eq!(mon.events, 4);
    assert_eq!(sim.value(a), Ok(Low));
}

#[test]
fn trace_logger_records_one_entry_per_executed_event() {
    let mut sim = Simulator::default();
    let d = sim.declare_net(Unknown);
    let q = sim.declare_net(Unknown);
    sim.connect_deferred(q, d).expect("connect");
    sim.assign_const(d, High, SimTime(7)).expect("assign");

    let mut trace = TraceLogger::default();
    sim.run_with(&mut trace).expect("run");

    assert_eq!(trace.events.len() as u64, sim.stats().executed_events);
    let kinds: Vec<_> = trace.events.iter().map(|r| (r.kind, r.initial)).collect();
    assert_eq!(
        kinds,
        vec![
            (EventKind::ConstantAssign, true),
            (EventKind::ConstantAssign, true),
            (EventKind::ConstantAssign, false),
            (EventKind::DeferredEval, false),
            (EventKind::DeferredUpdate, false),
        ]
    );
    let last = trace.events.last().expect("update recorded");
    assert_eq!(last.t, SimTime(7));
    assert_eq!(last.delta, 1);
    assert_eq!(last.net, q);
    assert_eq!((last.old, last.new), (Unknown, High));
}

#[test]
fn trace_dump_serializes_compact_records() {
    let mut sim = Simulator::default();
    let d = sim.declare_named_net("d", Unknown);
    let q = sim.declare_named_net("q", Low);
    sim.connect_deferred(q, d).expect("connect");
    sim.assign_const(d, High, SimTime(2)).expect("assign");

    let mut trace = TraceLogger::default();
    sim.run_with(&mut trace).expect("run");

    let v: Value = serde_json::to_value(trace.to_dump()).expect("serialize trace");
    assert_eq!(v["nets"], serde_json::json!(["d", "q"]));

    let events = v["events"].as_array().expect("events array");
    assert_eq!(events[0]["initial"], Value::Bool(true));
    let eval = events
        .iter()
        .find(|e| e["kind"] == "deferred_eval" && e["t"] == 2)
        .expect("deferred_eval at t=2");
    assert_eq!(eval["net"], 1);
    assert_eq!(eval["sampled"], "1");
    assert!(eval.get("initial").is_none());

    let snaps = v["snapshots"].as_array().expect("snapshots array");
    assert_eq!(snaps[0]["values"], serde_json::json!(["x", "0"]));
    let last = snaps.last().expect("t=2 snapshot");
    assert_eq!(last["t"], 2);
    assert_eq!(last["deltas"], 1);
    assert_eq!(last["values"], serde_json::json!(["1", "1"]));
    assert_eq!(trace.snapshot_at(SimTime(2)).and_then(|s| s.value(NetId(1))), Some(High));
}
