//! 计算核心
//!
//! 三个输入（账单文本、拆分人数、小费比例）经纯函数推导出
//! 小费百分比、小费金额、每人应付。所有数值运算集中在这里，UI 只负责转发事件。

use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// 启动时的默认拆分人数
pub const DEFAULT_SPLIT: u32 = 2;

/// 显示阶段（仅用于控制 UI 是否展示拆分/小费控件）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 账单为空，只能输入账单
    AwaitingValidBill,
    /// 账单非空，所有控件可用
    Ready,
}

/// 供视图层读取的只读快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    pub valid: bool,
    pub split_count: u32,
    pub tip_percentage: u32,
    pub tip_amount: f64,
    pub total_per_person: f64,
}

/// 账单拆分状态
#[derive(Debug, Clone, PartialEq)]
pub struct BillSplit {
    bill_text: String,
    split_count: u32,
    tip_fraction: f64,
    tip_amount: f64,
    total_per_person: f64,
}

impl BillSplit {
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_SPLIT, 0.0)
    }

    /// 用指定的初始人数和小费比例创建（人数至少为 1）
    pub fn with_defaults(split_count: u32, tip_fraction: f64) -> Self {
        Self {
            bill_text: String::new(),
            split_count: split_count.max(1),
            tip_fraction,
            tip_amount: 0.0,
            total_per_person: 0.0,
        }
    }

    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    #[allow(dead_code)]
    pub fn split_count(&self) -> u32 {
        self.split_count
    }

    pub fn tip_fraction(&self) -> f64 {
        self.tip_fraction
    }

    /// 去掉首尾空白后非空即视为有效（不检查是否为数字）
    pub fn is_valid(&self) -> bool {
        !self.bill_text.trim().is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.is_valid() {
            Phase::Ready
        } else {
            Phase::AwaitingValidBill
        }
    }

    /// 原样保存账单文本。不会重新计算小费和每人应付。
    pub fn set_bill_text(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
    }

    /// 人数加一（无上限）
    pub fn increment_split(&mut self) -> CalcResult<DisplayState> {
        let bill = parse_bill(&self.bill_text)?;
        self.split_count = self.split_count.saturating_add(1);
        self.recompute_total(bill);
        Ok(self.display_state())
    }

    /// 人数减一，最少为 1
    pub fn decrement_split(&mut self) -> CalcResult<DisplayState> {
        let bill = parse_bill(&self.bill_text)?;
        self.split_count = self.split_count.saturating_sub(1).max(1);
        self.recompute_total(bill);
        Ok(self.display_state())
    }

    /// 滑块位置变化。比例不做截断，调用方负责保证在 [0, 1] 内。
    pub fn set_tip_fraction(&mut self, fraction: f64) -> CalcResult<DisplayState> {
        let bill = parse_bill(&self.bill_text)?;
        self.tip_fraction = fraction;
        self.tip_amount = tip_amount(bill, fraction);
        self.recompute_total(bill);
        Ok(self.display_state())
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            valid: self.is_valid(),
            split_count: self.split_count,
            tip_percentage: tip_percentage(self.tip_fraction),
            tip_amount: self.tip_amount,
            total_per_person: self.total_per_person,
        }
    }

    // 小费按当前账单和比例现算，存储的 tip_amount 只由滑块更新
    fn recompute_total(&mut self, bill: f64) {
        let tip = tip_amount(bill, self.tip_fraction);
        self.total_per_person = total_per_person(bill, tip, self.split_count);
        debug!(
            bill,
            split = self.split_count,
            tip_fraction = self.tip_fraction,
            total_per_person = self.total_per_person,
            "recomputed total"
        );
    }
}

impl Default for BillSplit {
    fn default() -> Self {
        Self::new()
    }
}

// ============ 纯函数 ============

/// 解析账单文本（允许首尾空白，拒绝 NaN 和无穷大）
pub fn parse_bill(text: &str) -> CalcResult<f64> {
    let value: f64 = text.trim().parse().map_err(|e: std::num::ParseFloatError| {
        CalcError::Parse {
            input: text.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !value.is_finite() {
        return Err(CalcError::Parse {
            input: text.to_string(),
            reason: "不是有限数值".to_string(),
        });
    }

    Ok(value)
}

/// 显示用的整数百分比，向下取整
pub fn tip_percentage(fraction: f64) -> u32 {
    (fraction * 100.0).floor() as u32
}

/// 滑块刻度对应的比例：取满足 floor(f * 100) == percent 的最小值，
/// 否则像 0.29 这样的刻度会显示成 28
pub fn fraction_for_percent(percent: u32) -> f64 {
    let percent = percent.min(100);
    let mut fraction = f64::from(percent) / 100.0;
    while tip_percentage(fraction) < percent {
        fraction = f64::from_bits(fraction.to_bits() + 1);
    }
    fraction
}

pub fn tip_amount(bill: f64, fraction: f64) -> f64 {
    bill * fraction
}

pub fn total_per_person(bill: f64, tip: f64, split_count: u32) -> f64 {
    (bill + tip) / f64::from(split_count)
}

/// 两位小数的金额文本
pub fn format_money(value: f64, symbol: &str) -> String {
    format!("{symbol}{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ready(bill: &str) -> BillSplit {
        let mut calc = BillSplit::new();
        calc.set_bill_text(bill);
        calc
    }

    #[test]
    fn test_initial_state() {
        let calc = BillSplit::new();
        let state = calc.display_state();
        assert!(!state.valid);
        assert_eq!(state.split_count, 2);
        assert_eq!(state.tip_percentage, 0);
        assert_eq!(state.tip_amount, 0.0);
        assert_eq!(state.total_per_person, 0.0);
        assert_eq!(calc.phase(), Phase::AwaitingValidBill);
    }

    #[test]
    fn test_with_defaults_raises_zero_split() {
        let calc = BillSplit::with_defaults(0, 0.1);
        assert_eq!(calc.split_count(), 1);
        assert_eq!(calc.display_state().tip_percentage, 10);
    }

    #[test]
    fn test_valid_state_toggles() {
        let mut calc = BillSplit::new();
        calc.set_bill_text("10");
        assert!(calc.is_valid());
        assert_eq!(calc.phase(), Phase::Ready);

        calc.set_bill_text("");
        assert!(!calc.is_valid());
        assert_eq!(calc.phase(), Phase::AwaitingValidBill);

        calc.set_bill_text("   ");
        assert!(!calc.is_valid());
    }

    #[test]
    fn test_non_numeric_text_is_valid_but_fails_arithmetic() {
        let mut calc = ready("abc");
        assert!(calc.is_valid());

        let err = calc.increment_split().unwrap_err();
        assert!(matches!(err, CalcError::Parse { ref input, .. } if input == "abc"));
        assert_eq!(calc.split_count(), 2);
    }

    #[test]
    fn test_fifty_dollars_eighteen_percent() {
        let mut calc = ready("50.00");
        let state = calc.set_tip_fraction(0.18).unwrap();

        assert_eq!(state.tip_percentage, 18);
        assert_eq!(format_money(state.tip_amount, "$"), "$9.00");
        assert_eq!(format_money(state.total_per_person, "$"), "$29.50");
    }

    #[test]
    fn test_hundred_split_four_no_tip() {
        let mut calc = ready("100");
        calc.increment_split().unwrap();
        calc.increment_split().unwrap();
        let state = calc.set_tip_fraction(0.0).unwrap();

        assert_eq!(state.split_count, 4);
        assert_eq!(format_money(state.tip_amount, "$"), "$0.00");
        assert_eq!(format_money(state.total_per_person, "$"), "$25.00");
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut calc = ready("20");
        calc.decrement_split().unwrap();
        let before = calc.display_state();
        assert_eq!(before.split_count, 1);
        assert_eq!(before.total_per_person, 20.0);

        let after = calc.decrement_split().unwrap();
        assert_eq!(after.split_count, 1);
        assert_eq!(after.total_per_person, before.total_per_person);
    }

    #[test]
    fn test_empty_bill_increment_is_rejected_without_mutation() {
        let mut calc = BillSplit::new();
        let before = calc.clone();

        assert!(matches!(
            calc.increment_split(),
            Err(CalcError::Parse { .. })
        ));
        assert!(calc.decrement_split().is_err());
        assert!(calc.set_tip_fraction(0.5).is_err());
        assert_eq!(calc, before);
    }

    #[test]
    fn test_bill_edit_leaves_totals_stale() {
        // 修改账单不会触发重算，直到再次操作滑块或人数
        let mut calc = ready("100");
        calc.set_tip_fraction(0.1).unwrap();
        let stale = calc.display_state();

        calc.set_bill_text("200");
        assert_eq!(calc.display_state(), stale);

        let refreshed = calc.set_tip_fraction(0.1).unwrap();
        assert_eq!(format_money(refreshed.tip_amount, ""), "20.00");
        assert_eq!(format_money(refreshed.total_per_person, ""), "110.00");
    }

    #[test]
    fn test_split_change_uses_current_bill_but_keeps_tip_amount() {
        let mut calc = ready("100");
        calc.set_tip_fraction(0.1).unwrap();
        calc.set_bill_text("200");

        let state = calc.increment_split().unwrap();
        assert_eq!(state.split_count, 3);
        assert_eq!(format_money(state.total_per_person, ""), "73.33");
        // 小费金额只由滑块刷新
        assert_eq!(format_money(state.tip_amount, ""), "10.00");
    }

    #[test]
    fn test_tip_percentage_truncates() {
        assert_eq!(tip_percentage(0.0), 0);
        assert_eq!(tip_percentage(0.255), 25);
        assert_eq!(tip_percentage(0.999), 99);
        assert_eq!(tip_percentage(1.0), 100);
    }

    #[test]
    fn test_fraction_for_percent_round_trips() {
        for percent in 0..=100 {
            let fraction = fraction_for_percent(percent);
            assert_eq!(tip_percentage(fraction), percent);
            assert!((fraction - f64::from(percent) / 100.0).abs() < 1e-12);
        }
        assert_eq!(fraction_for_percent(18), 0.18);
        assert_eq!(fraction_for_percent(250), 1.0);
    }

    #[test]
    fn test_parse_bill() {
        assert_eq!(parse_bill(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_bill("1e2").unwrap(), 100.0);
        assert!(parse_bill("").is_err());
        assert!(parse_bill("12,50").is_err());
        assert!(parse_bill("inf").is_err());
        assert!(parse_bill("NaN").is_err());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(29.5, "$"), "$29.50");
        assert_eq!(format_money(0.0, "€"), "€0.00");
        assert_eq!(format_money(1.005, ""), "1.00");
    }

    proptest! {
        #[test]
        fn prop_totals_follow_formula(
            cents in 1u32..10_000_000,
            extra_people in 0u32..50,
            fraction in 0.0f64..=1.0,
        ) {
            let bill = f64::from(cents) / 100.0;
            let mut calc = BillSplit::with_defaults(1, 0.0);
            calc.set_bill_text(bill.to_string());
            for _ in 0..extra_people {
                calc.increment_split().unwrap();
            }
            let state = calc.set_tip_fraction(fraction).unwrap();
            let split = f64::from(1 + extra_people);

            prop_assert_eq!(state.tip_amount, bill * fraction);
            prop_assert_eq!(state.total_per_person, (bill + bill * fraction) / split);
            prop_assert_eq!(state.tip_percentage, (fraction * 100.0).floor() as u32);
        }

        #[test]
        fn prop_increment_adds_exactly_one(start in 1u32..10_000) {
            let mut calc = BillSplit::with_defaults(start, 0.0);
            calc.set_bill_text("42");
            let state = calc.increment_split().unwrap();
            prop_assert_eq!(state.split_count, start + 1);
        }

        #[test]
        fn prop_decrement_never_below_one(start in 1u32..20, presses in 0usize..40) {
            let mut calc = BillSplit::with_defaults(start, 0.0);
            calc.set_bill_text("42");
            for _ in 0..presses {
                let state = calc.decrement_split().unwrap();
                prop_assert!(state.split_count >= 1);
            }
            let expected = start.saturating_sub(presses as u32).max(1);
            prop_assert_eq!(calc.split_count(), expected);
        }
    }
}
