//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及焦点枚举

use crate::config::Config;
use crate::models::{BillSplit, Phase};

/// 应用状态
pub struct App {
    pub calc: BillSplit,
    pub focus: Focus,
    pub message: Option<String>,
    pub config: Config,
}

/// 当前获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Bill,
    Split,
    Tip,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Bill => Focus::Split,
            Focus::Split => Focus::Tip,
            Focus::Tip => Focus::Bill,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Bill => Focus::Tip,
            Focus::Split => Focus::Bill,
            Focus::Tip => Focus::Split,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: Config) -> Self {
        let calc = BillSplit::with_defaults(config.default_split, config.default_tip_fraction());
        Self {
            calc,
            focus: Focus::Bill,
            message: None,
            config,
        }
    }

    /// 预填账单。若为数字则按滑块当前位置算一次，相当于滑块报告初始值
    pub fn with_bill(mut self, bill: &str) -> Self {
        self.calc.set_bill_text(bill);
        let fraction = self.calc.tip_fraction();
        if let Err(err) = self.calc.set_tip_fraction(fraction) {
            self.message = Some(err.to_string());
        }
        self
    }

    /// 拆分/小费控件是否可见
    pub fn controls_visible(&self) -> bool {
        self.calc.phase() == Phase::Ready
    }
}
