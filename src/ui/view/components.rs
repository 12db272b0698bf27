//! 通用 UI 组件
//!
//! 输入框、数值行等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// 焦点控件的边框/文字样式
pub fn focus_style(is_focused: bool, active_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    prefix: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = focus_style(is_focused, active_color);
    let cursor = if is_focused { "▏" } else { "" };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(format!("{value}{cursor}"), style),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(style),
    );
    frame.render_widget(input, area);
}

/// [组件] 左侧标签、右侧数值的一行
pub fn render_value_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Line<'_>,
    is_focused: bool,
    active_color: Color,
) {
    let style = focus_style(is_focused, active_color);
    let block = Block::default().borders(Borders::ALL).border_style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(label.to_string()).style(style), chunks[0]);
    frame.render_widget(Paragraph::new(value).alignment(Alignment::Right), chunks[1]);
}
