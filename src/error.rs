//! 错误类型
//!
//! - CalcError: 计算相关错误（账单文本无法解析为数字）
//! - ConfigError: 配置文件读取/解析失败

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 计算错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 账单文本不是有效数字，需要数值的操作（拆分、滑块）因此被拒绝
    #[error("账单金额 '{input}' 无法解析: {reason}")]
    Parse { input: String, reason: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置文件格式错误 {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
