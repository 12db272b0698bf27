mod cli;
mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::cli::Cli;
use crate::config::{Config, default_config_path, load_config};
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // 加载配置 (~/.config/tipsplit/config.toml)
    let mut config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };
    if let Some(split) = cli.split {
        config.default_split = split;
    }

    // 日志写入文件 (~/.local/share/tipsplit/tipsplit.log)
    if !cli.no_log {
        if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path) {
            if let Err(err) = logging::init(&path, &config.log_level) {
                eprintln!("无法创建日志文件 {}: {err}", path.display());
            }
        }
    }
    info!(?config, "starting tipsplit");

    // 创建应用状态
    let mut app = App::new(config);
    if let Some(bill) = cli.bill.as_deref() {
        app = app.with_bill(bill);
    }

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let state = app.calc.display_state();
    info!(?state, "exiting");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key)? {
                break;
            }
        }
    }
    Ok(())
}
