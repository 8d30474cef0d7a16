use bigdecimal::BigDecimal;
use serde::Serialize;

/// 分成费率表, 进程启动时构建, 运行期只读
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePolicy {
    /// 预期小费比例 (附加费)
    pub expected_tip_percent: BigDecimal,
    pub food_tip_rate: BigDecimal,
    pub bar_tip_rate: BigDecimal,
    pub overall_tip_rate: BigDecimal,
    pub host_tip_rate: BigDecimal,
}

impl RatePolicy {
    /// 标准费率: 预期小费 20%, 分成合计约为销售额的 3%
    pub fn standard() -> Self {
        Self {
            expected_tip_percent: hundredths(20),
            food_tip_rate: hundredths(3),
            bar_tip_rate: hundredths(4),
            overall_tip_rate: hundredths(2),
            host_tip_rate: hundredths(1),
        }
    }
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn hundredths(n: i32) -> BigDecimal {
    BigDecimal::new(n.into(), 2)
}
