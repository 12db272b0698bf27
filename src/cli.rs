use std::path::PathBuf;

use clap::Parser;

/// 终端小费计算器
#[derive(Parser, Debug)]
#[command(name = "tipsplit", version, about)]
pub struct Cli {
    /// 配置文件路径（默认 ~/.config/tipsplit/config.toml）
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 日志文件路径（默认 ~/.local/share/tipsplit/tipsplit.log）
    #[arg(long, value_name = "PATH", conflicts_with = "no_log")]
    pub log_file: Option<PathBuf>,

    /// 不写日志
    #[arg(long)]
    pub no_log: bool,

    /// 预填账单金额
    #[arg(long, value_name = "TEXT")]
    pub bill: Option<String>,

    /// 初始拆分人数（覆盖配置）
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub split: Option<u32>,
}
