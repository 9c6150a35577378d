use super::error::TbError;
use super::spec::TestbenchSpec;
use crate::net::{NetId, NetRegistry};
use crate::sim::{SimConfig, SimTime, Simulator};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 搭建好的测试台：仿真器 + 名字到 net 的映射
#[derive(Debug)]
pub struct Testbench {
    pub sim: Simulator,
    pub nets: HashMap<String, NetId>,
}

impl Testbench {
    pub fn net(&self, name: &str) -> Result<NetId, TbError> {
        self.nets
            .get(name)
            .copied()
            .ok_or_else(|| TbError::UnknownNetName(name.to_string()))
    }
}

impl TestbenchSpec {
    pub fn from_json(raw: &str) -> Result<Self, TbError> {
        let spec: TestbenchSpec = serde_json::from_str(raw)?;
        if spec.schema_version != 1 {
            return Err(TbError::UnsupportedSchema(spec.schema_version));
        }
        Ok(spec)
    }

    pub fn load(path: &Path) -> Result<Self, TbError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// 以默认配置为基础，套用测试台里的时间上界
    pub fn config(&self) -> SimConfig {
        SimConfig {
            max_time: self.max_time.map(SimTime),
            ..SimConfig::default()
        }
    }

    /// 按 net、激励、连续赋值、非阻塞赋值的顺序搭建测试台。
    pub fn instantiate(&self, cfg: SimConfig) -> Result<Testbench, TbError> {
        let mut sim = Simulator::new(cfg);
        let mut nets = HashMap::new();

        for n in &self.nets {
            if nets.contains_key(&n.name) {
                return Err(TbError::DuplicateNet(n.name.clone()));
            }
            let id = sim.declare_named_net(n.name.clone(), n.init);
            nets.insert(n.name.clone(), id);
        }

        let lookup = |name: &str| {
            nets.get(name)
                .copied()
                .ok_or_else(|| TbError::UnknownNetName(name.to_string()))
        };

        for st in &self.stimulus {
            let id = lookup(&st.net)?;
            sim.assign_const_with(
                id,
                st.value,
                SimTime(st.time),
                st.discipline.unwrap_or_default(),
            )?;
        }
        for c in &self.continuous {
            sim.connect_continuous(lookup(&c.target)?, lookup(&c.source)?)?;
        }
        for c in &self.deferred {
            sim.connect_deferred(lookup(&c.target)?, lookup(&c.source)?)?;
        }

        debug!(
            nets = nets.len(),
            stimulus = self.stimulus.len(),
            continuous = self.continuous.len(),
            deferred = self.deferred.len(),
            "测试台已搭建"
        );
        info!(slots = sim.pending_slots(), "测试台就绪");
        Ok(Testbench { sim, nets })
    }
}

/// 每根 net 一行 `name = value`，按声明顺序
pub fn value_report(nets: &NetRegistry) -> Vec<String> {
    nets.iter()
        .map(|n| format!("{} = {}", n.label(), n.value()))
        .collect()
}
