//! 业务逻辑处理 (Update/Dispatch)
//!
//! 把 Action 翻译为对计算核心的调用

use tracing::{debug, warn};

use super::actions::Action;
use super::state::{App, Focus};
use crate::error::CalcResult;
use crate::models::{DisplayState, fraction_for_percent, tip_percentage};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.move_focus(self.focus.next()),
            Action::FocusPrev => self.move_focus(self.focus.prev()),

            Action::Input(c) => {
                if self.focus == Focus::Bill {
                    let mut text = self.calc.bill_text().to_string();
                    text.push(c);
                    self.update_bill(text);
                }
            }
            Action::DeleteChar => {
                if self.focus == Focus::Bill {
                    let mut text = self.calc.bill_text().to_string();
                    text.pop();
                    self.update_bill(text);
                }
            }
            Action::ClearBill => {
                if self.focus == Focus::Bill {
                    self.update_bill(String::new());
                }
            }

            Action::SplitUp => self.on_split(true),
            Action::SplitDown => self.on_split(false),

            Action::TipUp => self.nudge_tip(i64::from(self.config.tip_step_percent)),
            Action::TipDown => self.nudge_tip(-i64::from(self.config.tip_step_percent)),
            Action::TipUpLarge => self.nudge_tip(i64::from(self.config.tip_large_step_percent)),
            Action::TipDownLarge => {
                self.nudge_tip(-i64::from(self.config.tip_large_step_percent))
            }
        }
        false
    }

    // ============ 焦点 ============

    /// 账单无效时控件隐藏，焦点只能停在账单输入框
    fn move_focus(&mut self, target: Focus) {
        if self.controls_visible() {
            self.focus = target;
        } else {
            self.focus = Focus::Bill;
        }
    }

    // ============ 账单 ============

    fn update_bill(&mut self, text: String) {
        self.calc.set_bill_text(text);
        self.message = None;
        if !self.controls_visible() {
            self.focus = Focus::Bill;
        }
    }

    // ============ 拆分/小费 ============

    fn on_split(&mut self, up: bool) {
        if self.focus != Focus::Split || !self.controls_visible() {
            return;
        }
        let result = if up {
            self.calc.increment_split()
        } else {
            self.calc.decrement_split()
        };
        self.apply(result);
    }

    /// 模拟滑块：按整百分比步进并截断到 [0, 100]，再通知计算核心
    fn nudge_tip(&mut self, delta_percent: i64) {
        if self.focus != Focus::Tip || !self.controls_visible() {
            return;
        }
        let current = i64::from(tip_percentage(self.calc.tip_fraction()));
        let target = (current + delta_percent).clamp(0, 100) as u32;
        let fraction = fraction_for_percent(target);
        let result = self.calc.set_tip_fraction(fraction);
        self.apply(result);
    }

    fn apply(&mut self, result: CalcResult<DisplayState>) {
        match result {
            Ok(state) => {
                debug!(?state, "display state updated");
                self.message = None;
            }
            Err(err) => {
                warn!(%err, "rejected operation");
                self.message = Some(err.to_string());
            }
        }
    }
}
