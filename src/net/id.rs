//! 标识符类型
//!
//! 定义信号线（net）的唯一标识符。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Net 标识符：声明时按顺序分配，从 0 开始，永不复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetId(pub usize);

impl fmt::Display for NetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net{}", self.0)
    }
}
