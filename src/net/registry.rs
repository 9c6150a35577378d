//! Net 注册表
//!
//! 以 arena + 下标的方式持有全部 net：当前值、赋值方式与扇出边。

use super::id::NetId;
use super::logic::LogicValue;
use super::signal::{Discipline, Net};
use crate::sim::SimError;
use tracing::trace;

/// 全部已声明的 net。声明后不会销毁，扇出边只增不减。
#[derive(Debug, Default, Clone)]
pub struct NetRegistry {
    nets: Vec<Net>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    New,
    OnPath,
    Done,
}

impl NetRegistry {
    /// 声明一根新 net（不会失败）
    pub fn declare(&mut self, name: Option<String>, initial: LogicValue) -> NetId {
        let id = NetId(self.nets.len());
        self.nets.push(Net::new(id, name, initial));
        trace!(net = %id, initial = %initial, "声明 net");
        id
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Net> {
        self.nets.iter()
    }

    /// 按名字查找（线性扫描，只给测试台/输出使用）
    pub fn find(&self, name: &str) -> Option<NetId> {
        self.nets
            .iter()
            .find(|n| n.name.as_deref() == Some(name))
            .map(|n| n.id)
    }

    pub fn get(&self, id: NetId) -> Result<&Net, SimError> {
        self.nets.get(id.0).ok_or(SimError::UnknownNet {
            net: id,
            declared: self.nets.len(),
        })
    }

    fn get_mut(&mut self, id: NetId) -> Result<&mut Net, SimError> {
        let declared = self.nets.len();
        self.nets
            .get_mut(id.0)
            .ok_or(SimError::UnknownNet { net: id, declared })
    }

    pub fn read(&self, id: NetId) -> Result<LogicValue, SimError> {
        self.get(id).map(|n| n.value)
    }

    pub fn write(&mut self, id: NetId, value: LogicValue) -> Result<(), SimError> {
        self.get_mut(id)?.value = value;
        Ok(())
    }

    pub fn fanout(&self, id: NetId) -> Result<&[NetId], SimError> {
        self.get(id).map(|n| n.fanout.as_slice())
    }

    pub fn set_discipline(&mut self, id: NetId, discipline: Discipline) -> Result<(), SimError> {
        self.get_mut(id)?.discipline = Some(discipline);
        Ok(())
    }

    /// `assign target = source;`
    pub fn connect_continuous(&mut self, target: NetId, source: NetId) -> Result<(), SimError> {
        self.connect(target, source, Discipline::Continuous)
    }

    /// `target <= source;`
    pub fn connect_deferred(&mut self, target: NetId, source: NetId) -> Result<(), SimError> {
        self.connect(target, source, Discipline::Deferred)
    }

    fn connect(
        &mut self,
        target: NetId,
        source: NetId,
        discipline: Discipline,
    ) -> Result<(), SimError> {
        // 两端都先校验，避免只改了一半
        self.get(target)?;
        self.get(source)?;
        self.get_mut(source)?.fanout.push(target);
        self.get_mut(target)?.discipline = Some(discipline);
        trace!(%target, %source, ?discipline, "连接 net");
        Ok(())
    }

    /// 在“只经过连续赋值目标”的边上找环。
    ///
    /// 边的方向是 `source -> target`，且只保留 `target` 的赋值方式为
    /// `Continuous` 的边。找到时按遍历顺序返回环上的 net。
    pub fn find_continuous_cycle(&self) -> Option<Vec<NetId>> {
        let mut marks = vec![Mark::New; self.nets.len()];
        let mut path: Vec<NetId> = Vec::new();

        for root in 0..self.nets.len() {
            if marks[root] != Mark::New {
                continue;
            }
            marks[root] = Mark::OnPath;
            path.push(NetId(root));
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some(top) = stack.last_mut() {
                let node = top.0;
                let edges = &self.nets[node].fanout;
                if top.1 == edges.len() {
                    marks[node] = Mark::Done;
                    path.pop();
                    stack.pop();
                    continue;
                }
                let child = edges[top.1];
                top.1 += 1;
                if self.nets[child.0].discipline != Some(Discipline::Continuous) {
                    continue;
                }
                match marks[child.0] {
                    Mark::New => {
                        marks[child.0] = Mark::OnPath;
                        path.push(child);
                        stack.push((child.0, 0));
                    }
                    Mark::OnPath => {
                        let start = path.iter().position(|&n| n == child).unwrap_or(0);
                        return Some(path[start..].to_vec());
                    }
                    Mark::Done => {}
                }
            }
        }
        None
    }
}
