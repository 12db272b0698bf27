//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') if focus == Focus::Bill => Some(Action::ClearBill),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::Bill => match key.code {
            KeyCode::Enter => Some(Action::FocusNext),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::Split => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('+') | KeyCode::Char('l') | KeyCode::Right => Some(Action::SplitUp),
            KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left => Some(Action::SplitDown),
            KeyCode::Enter => Some(Action::FocusNext),
            _ => None,
        },
        Focus::Tip => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::TipUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::TipDown),
            KeyCode::PageUp => Some(Action::TipUpLarge),
            KeyCode::PageDown => Some(Action::TipDownLarge),
            KeyCode::Enter => Some(Action::FocusNext),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(app.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
