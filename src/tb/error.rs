use crate::sim::SimError;
use thiserror::Error;

/// 测试台装载/搭建错误
#[derive(Debug, Error)]
pub enum TbError {
    #[error("unsupported testbench schema_version {0} (expected 1)")]
    UnsupportedSchema(u32),

    #[error("net {0:?} is declared more than once")]
    DuplicateNet(String),

    #[error("unknown net name {0:?}")]
    UnknownNetName(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("failed to read testbench: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse testbench: {0}")]
    Json(#[from] serde_json::Error),
}
