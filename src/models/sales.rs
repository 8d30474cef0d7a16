use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// 表单输入: 七类销售额 + 两类小费
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInput {
    pub bottle_beer: BigDecimal,
    pub draft_beer: BigDecimal,
    pub food: BigDecimal,
    pub liquor: BigDecimal,
    pub na_bev: BigDecimal,
    pub wine: BigDecimal,
    pub wine_bottle: BigDecimal,
    pub card_tips: BigDecimal,
    pub cash_tips: BigDecimal,
}

impl Default for SalesInput {
    fn default() -> Self {
        Self {
            bottle_beer: BigDecimal::zero(),
            draft_beer: BigDecimal::zero(),
            food: BigDecimal::zero(),
            liquor: BigDecimal::zero(),
            na_bev: BigDecimal::zero(),
            wine: BigDecimal::zero(),
            wine_bottle: BigDecimal::zero(),
            card_tips: BigDecimal::zero(),
            cash_tips: BigDecimal::zero(),
        }
    }
}

impl SalesInput {
    /// 计算汇总值
    pub fn totals(&self) -> DerivedTotals {
        // 瓶装葡萄酒不计入分成基数
        let adj_bar =
            &self.bottle_beer + &self.draft_beer + &self.liquor + &self.na_bev + &self.wine;
        let bar = &adj_bar + &self.wine_bottle;
        let overall_sales = &self.food + &adj_bar;
        let total_tips = &self.card_tips + &self.cash_tips;

        DerivedTotals {
            food: self.food.clone(),
            bar,
            adj_bar,
            overall_sales,
            total_tips,
        }
    }
}

/// 派生汇总 (不持久化)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTotals {
    pub food: BigDecimal,
    pub bar: BigDecimal,        // 含瓶装葡萄酒
    pub adj_bar: BigDecimal,    // 不含瓶装葡萄酒, 酒吧分成基数
    pub overall_sales: BigDecimal,
    pub total_tips: BigDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn wine_bottle_only_counts_toward_bar() {
        let input = SalesInput {
            bottle_beer: dec("10"),
            draft_beer: dec("5.5"),
            food: dec("200"),
            liquor: dec("20"),
            na_bev: dec("4.25"),
            wine: dec("30"),
            wine_bottle: dec("80"),
            card_tips: dec("40"),
            cash_tips: dec("12.75"),
        };
        let totals = input.totals();

        assert_eq!(totals.adj_bar, dec("69.75"));
        assert_eq!(totals.bar, dec("149.75"));
        assert_eq!(totals.overall_sales, dec("269.75"));
        assert_eq!(totals.total_tips, dec("52.75"));
        assert_eq!(totals.food, dec("200"));
    }

    #[test]
    fn default_input_is_all_zero() {
        let totals = SalesInput::default().totals();
        assert!(totals.overall_sales.is_zero());
        assert!(totals.total_tips.is_zero());
    }
}
