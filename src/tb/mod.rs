//! 测试台描述
//!
//! 用 JSON 描述一个测试台（net 声明、连接、定时激励），再把它搭到仿真器上。
//! 这是引擎公开 API 的一个薄客户端。

mod build;
mod error;
mod spec;

pub use build::{Testbench, value_report};
pub use error::TbError;
pub use spec::{ConnectSpec, NetSpec, StimulusSpec, TestbenchSpec};
