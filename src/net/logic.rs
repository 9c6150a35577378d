//! 四态逻辑值
//!
//! 定义信号取值域：0 / 1 / x / z。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 四态逻辑值（不可变值类型，没有身份）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogicValue {
    #[serde(rename = "0", alias = "low")]
    Low,
    #[serde(rename = "1", alias = "high")]
    High,
    #[default]
    #[serde(rename = "x", alias = "X", alias = "unknown")]
    Unknown,
    #[serde(rename = "z", alias = "Z", alias = "highz")]
    HighZ,
}

impl LogicValue {
    pub const ALL: [LogicValue; 4] = [
        LogicValue::Low,
        LogicValue::High,
        LogicValue::Unknown,
        LogicValue::HighZ,
    ];

    /// 单字符表示（与波形工具一致）
    pub fn as_char(self) -> char {
        match self {
            LogicValue::Low => '0',
            LogicValue::High => '1',
            LogicValue::Unknown => 'x',
            LogicValue::HighZ => 'z',
        }
    }

    /// 是否为确定的 0/1
    pub fn is_known(self) -> bool {
        matches!(self, LogicValue::Low | LogicValue::High)
    }
}

impl From<bool> for LogicValue {
    fn from(b: bool) -> Self {
        if b { LogicValue::High } else { LogicValue::Low }
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 解析失败：不是合法的四态值
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid logic value: {0:?}")]
pub struct ParseLogicError(pub String);

impl FromStr for LogicValue {
    type Err = ParseLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "low" => Ok(LogicValue::Low),
            "1" | "high" => Ok(LogicValue::High),
            "x" | "unknown" => Ok(LogicValue::Unknown),
            "z" | "highz" => Ok(LogicValue::HighZ),
            _ => Err(ParseLogicError(s.to_string())),
        }
    }
}
