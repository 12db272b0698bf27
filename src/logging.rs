use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// 默认日志路径 (~/.local/share/tipsplit/tipsplit.log)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("tipsplit").join("tipsplit.log"))
}

/// 根据配置的级别构建过滤器，级别写错时退回 info
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("tipsplit={level}"))
        .unwrap_or_else(|_| EnvFilter::new("tipsplit=info"))
}

/// 初始化文件日志（终端由 TUI 占用，不能输出到 stdout）
pub fn init(path: &Path, level: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    let file_layer = fmt::layer().with_writer(file).with_ansi(false);
    let _ = tracing_subscriber::registry()
        .with(file_layer.with_filter(build_filter(level)))
        .try_init();

    Ok(())
}
