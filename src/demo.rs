//! 演示和示例代码
//!
//! 参考测试台：三根激励线、一根组合复制线、两级寄存器和寄存器后的组合输出。

use crate::net::{LogicValue, NetId};
use crate::sim::{SimError, SimTime, Simulator};

/// 参考测试台中各根 net 的 id
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTb {
    pub a: NetId,
    pub b: NetId,
    pub c: NetId,
    pub aclone: NetId,
    pub creg: NetId,
    pub cregreg: NetId,
    pub cfinal: NetId,
}

impl ReferenceTb {
    pub fn named(&self) -> [(&'static str, NetId); 7] {
        [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("aclone", self.aclone),
            ("creg", self.creg),
            ("cregreg", self.cregreg),
            ("cfinal", self.cfinal),
        ]
    }
}

/// 构建参考测试台
///
/// ```text
/// assign aclone = a;
/// assign cfinal = cregreg;
/// creg    <= c;
/// cregreg <= creg;
/// ```
/// 激励：t=1 a=1 b=0；t=2 c=x；t=8 a=0；t=10 c=1。
pub fn build_reference_tb(sim: &mut Simulator) -> Result<ReferenceTb, SimError> {
    use LogicValue::{High, Low, Unknown};

    let a = sim.declare_named_net("a", Unknown);
    let b = sim.declare_named_net("b", Unknown);
    let c = sim.declare_named_net("c", Unknown);
    let aclone = sim.declare_named_net("aclone", Unknown);
    let creg = sim.declare_named_net("creg", Low);
    let cregreg = sim.declare_named_net("cregreg", High);
    let cfinal = sim.declare_named_net("cfinal", Unknown);

    // 初始激励
    sim.assign_const(a, High, SimTime(1))?;
    sim.assign_const(b, Low, SimTime(1))?;
    sim.assign_const(c, Unknown, SimTime(2))?;
    // 连续赋值
    sim.connect_continuous(aclone, a)?;
    sim.connect_continuous(cfinal, cregreg)?;
    // 非阻塞赋值
    sim.connect_deferred(creg, c)?;
    sim.connect_deferred(cregreg, creg)?;
    // 后续激励
    sim.assign_const(a, Low, SimTime(8))?;
    sim.assign_const(c, High, SimTime(10))?;

    Ok(ReferenceTb {
        a,
        b,
        c,
        aclone,
        creg,
        cregreg,
        cfinal,
    })
}
