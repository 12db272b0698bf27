use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{DEFAULT_SPLIT, fraction_for_percent};

/// 用户配置 (~/.config/tipsplit/config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_split: u32,
    pub default_tip_percent: u32,
    pub tip_step_percent: u32,
    pub tip_large_step_percent: u32,
    pub currency_symbol: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_split: DEFAULT_SPLIT,
            default_tip_percent: 0,
            tip_step_percent: 1,
            tip_large_step_percent: 5,
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 解析 TOML 文本并修正越界的值
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.default_split = self.default_split.max(1);
        self.default_tip_percent = self.default_tip_percent.min(100);
        self.tip_step_percent = self.tip_step_percent.max(1);
        self.tip_large_step_percent = self.tip_large_step_percent.max(1);
        self
    }

    pub fn default_tip_fraction(&self) -> f64 {
        fraction_for_percent(self.default_tip_percent)
    }
}

/// 默认配置文件路径，无法确定配置目录时返回 None
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tipsplit").join("config.toml"))
}

/// 从文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Config::from_toml(&content, path)
}
