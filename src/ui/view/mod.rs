//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::state::{App, Focus};
use crate::models::{DisplayState, format_money};
use components::{focus_style, render_input_widget, render_value_row};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let state = app.calc.display_state();

    if !state.valid {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // 每人应付
                Constraint::Length(3), // 账单
                Constraint::Min(0),
                Constraint::Length(3), // 帮助
            ])
            .split(frame.area());

        render_header(frame, app, &state, chunks[0]);
        render_bill(frame, app, chunks[1]);
        render_help(frame, app, chunks[3]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 每人应付
            Constraint::Length(3), // 账单
            Constraint::Length(3), // 人数
            Constraint::Length(3), // 小费金额
            Constraint::Length(3), // 滑块
            Constraint::Min(0),
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, &state, chunks[0]);
    render_bill(frame, app, chunks[1]);
    render_split(frame, app, &state, chunks[2]);
    render_tip(frame, app, &state, chunks[3]);
    render_slider(frame, app, &state, chunks[4]);
    render_help(frame, app, chunks[6]);
}

fn render_header(frame: &mut Frame, app: &App, state: &DisplayState, area: Rect) {
    let total = format_money(state.total_per_person, &app.config.currency_symbol);
    let header = Paragraph::new(vec![
        Line::from("每人应付"),
        Line::from(Span::styled(
            total,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Cyan))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_bill(frame: &mut Frame, app: &App, area: Rect) {
    render_input_widget(
        frame,
        area,
        "账单金额",
        &app.config.currency_symbol,
        app.calc.bill_text(),
        app.focus == Focus::Bill,
        Color::Yellow,
    );
}

fn render_split(frame: &mut Frame, app: &App, state: &DisplayState, area: Rect) {
    let value = Line::from(vec![
        Span::raw("[-] "),
        Span::styled(
            state.split_count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" [+]"),
    ]);
    render_value_row(
        frame,
        area,
        "人数",
        value,
        app.focus == Focus::Split,
        Color::Yellow,
    );
}

fn render_tip(frame: &mut Frame, app: &App, state: &DisplayState, area: Rect) {
    let value = Line::from(format_money(
        state.tip_amount,
        &app.config.currency_symbol,
    ));
    render_value_row(frame, area, "小费", value, false, Color::Yellow);
}

fn render_slider(frame: &mut Frame, app: &App, state: &DisplayState, area: Rect) {
    let is_focused = app.focus == Focus::Tip;
    let style = focus_style(is_focused, Color::Yellow);
    // Gauge 的比例必须在 [0, 1] 内
    let ratio = app.calc.tip_fraction().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("小费比例")
                .borders(Borders::ALL)
                .border_style(style),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{}%", state.tip_percentage));
    frame.render_widget(gauge, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Bill if app.controls_visible() => {
            "输入账单  [Enter/Tab] 下一项  [Ctrl-U] 清空  [Esc] 退出"
        }
        Focus::Bill => "输入账单金额  [Ctrl-U] 清空  [Esc] 退出",
        Focus::Split => "[+/-] 增减人数  [Tab] 下一项  [q] 退出",
        Focus::Tip => "[←/→] 调整小费  [PgUp/PgDn] 大步调整  [Tab] 下一项  [q] 退出",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let style = if message.is_empty() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Red)
    };

    let help = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
