use crate::error::{TipError, TipResult};
use crate::models::{DerivedTotals, RatePolicy};
use crate::service::format::round_half_away;
use bigdecimal::{BigDecimal, Zero};

/// 小费比例保留的小数位
pub const RATIO_SCALE: i64 = 4;

/// 预期小费 = 预期比例 * 总销售额
pub fn expected_tip_amount(policy: &RatePolicy, totals: &DerivedTotals) -> BigDecimal {
    &policy.expected_tip_percent * &totals.overall_sales
}

/// 实收小费 / 预期小费, 四位小数
///
/// 总销售额为 0 时预期小费为 0, 返回 `DivisionByZero`。
pub fn compute_ratio(policy: &RatePolicy, totals: &DerivedTotals) -> TipResult<BigDecimal> {
    let expected = expected_tip_amount(policy, totals);
    if expected.is_zero() {
        return Err(TipError::DivisionByZero);
    }

    let ratio = &totals.total_tips / &expected;
    Ok(round_half_away(&ratio, RATIO_SCALE))
}
