use crate::models::{DerivedTotals, RatePolicy, TipOutBreakdown};
use bigdecimal::BigDecimal;

/// 加权分成 = 费率 * 销售基数 * 小费比例
pub fn weighted_tip_out(rate: &BigDecimal, sales: &BigDecimal, ratio: &BigDecimal) -> BigDecimal {
    rate * sales * ratio
}

/// 按四个分成池分配
///
/// | 分成池 | 基数 |
/// |---|---|
/// | food | 餐食销售额 |
/// | bar | 酒吧销售额 (不含瓶装葡萄酒) |
/// | overall | 总销售额 |
/// | host | 总销售额 |
pub fn distribute(
    policy: &RatePolicy,
    ratio: &BigDecimal,
    totals: &DerivedTotals,
) -> TipOutBreakdown {
    let food = weighted_tip_out(&policy.food_tip_rate, &totals.food, ratio);
    let bar = weighted_tip_out(&policy.bar_tip_rate, &totals.adj_bar, ratio);
    let overall = weighted_tip_out(&policy.overall_tip_rate, &totals.overall_sales, ratio);
    let host = weighted_tip_out(&policy.host_tip_rate, &totals.overall_sales, ratio);
    let total = &food + &bar + &overall + &host;

    TipOutBreakdown {
        food,
        bar,
        overall,
        host,
        total,
    }
}

/// 实收小费扣除分成后的剩余, 可能为负, 不截断
pub fn walking_with(totals: &DerivedTotals, tip_out: &TipOutBreakdown) -> BigDecimal {
    &totals.total_tips - &tip_out.total
}
