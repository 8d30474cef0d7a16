use crate::error::TipResult;
use crate::models::{
    Calculation, CalculationFailure, CalculationReport, CalculationResult, RatePolicy, RateTable,
    SalesInput,
};
use crate::service::distribution::{distribute, walking_with};
use crate::service::format::{format_currency, format_percent};
use crate::service::parser;
use crate::service::ratio::{compute_ratio, expected_tip_amount};
use std::collections::HashMap;

/// 小费分成计算服务 (无内部状态, 可并发调用)
#[derive(Debug, Clone, Default)]
pub struct TipCalculator {
    policy: RatePolicy,
}

impl TipCalculator {
    pub fn new(policy: RatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RatePolicy {
        &self.policy
    }

    /// 完整流程: 解析 -> 比例 -> 分配 -> 格式化
    ///
    /// 所有失败统一转换为 `CalculationResult::Failure`。
    pub fn run(&self, raw: &HashMap<String, String>) -> CalculationResult {
        let outcome = parser::parse(raw)
            .and_then(|input| self.calculate(&input))
            .and_then(|calc| self.report(&calc));

        match outcome {
            Ok(report) => CalculationResult::Success(Box::new(report)),
            Err(e) => {
                tracing::warn!(reason = e.reason(), "Calculation rejected: {}", e);
                CalculationResult::Failure(CalculationFailure::from(e))
            }
        }
    }

    /// 数值计算
    pub fn calculate(&self, input: &SalesInput) -> TipResult<Calculation> {
        let totals = input.totals();
        let expected = expected_tip_amount(&self.policy, &totals);
        let ratio = compute_ratio(&self.policy, &totals)?;
        let tip_out = distribute(&self.policy, &ratio, &totals);
        let walking = walking_with(&totals, &tip_out);

        tracing::debug!(
            "overall_sales={} total_tips={} ratio={} total_tip_out={} walking_with={}",
            totals.overall_sales, totals.total_tips, ratio, tip_out.total, walking
        );

        Ok(Calculation {
            input: input.clone(),
            totals,
            expected_tip_amount: expected,
            tips_taken_ratio: ratio,
            tip_out,
            walking_with: walking,
        })
    }

    /// 生成展示结果
    pub fn report(&self, calc: &Calculation) -> TipResult<CalculationReport> {
        let input = &calc.input;
        let totals = &calc.totals;
        let rates = self.rate_table()?;

        Ok(CalculationReport {
            bottle_beer: format_currency(&input.bottle_beer)?,
            draft_beer: format_currency(&input.draft_beer)?,
            food: format_currency(&input.food)?,
            liquor: format_currency(&input.liquor)?,
            na_bev: format_currency(&input.na_bev)?,
            wine: format_currency(&input.wine)?,
            wine_bottle: format_currency(&input.wine_bottle)?,
            card_tips: format_currency(&input.card_tips)?,
            cash_tips: format_currency(&input.cash_tips)?,
            food_tip_rate: rates.food_tip_rate,
            bar_tip_rate: rates.bar_tip_rate,
            overall_tip_rate: rates.overall_tip_rate,
            host_tip_rate: rates.host_tip_rate,
            total_food_sales: format_currency(&totals.food)?,
            total_bar_sales: format_currency(&totals.adj_bar)?,
            total_wine_bottle_sales: format_currency(&input.wine_bottle)?,
            overall_sales: format_currency(&totals.overall_sales)?,
            total_tips: format_currency(&totals.total_tips)?,
            expected_tip_amount: format_currency(&calc.expected_tip_amount)?,
            tips_taken_ratio: format_percent(&calc.tips_taken_ratio)?,
            final_tip_out_food: format_currency(&calc.tip_out.food)?,
            final_tip_out_bar: format_currency(&calc.tip_out.bar)?,
            final_tip_out_overall: format_currency(&calc.tip_out.overall)?,
            final_tip_out_host: format_currency(&calc.tip_out.host)?,
            total_tip_out: format_currency(&calc.tip_out.total)?,
            walking_with: format_currency(&calc.walking_with)?,
            calculation_success: true,
        })
    }

    /// 费率表 (百分比字符串)
    pub fn rate_table(&self) -> TipResult<RateTable> {
        Ok(RateTable {
            expected_tip_percent: format_percent(&self.policy.expected_tip_percent)?,
            food_tip_rate: format_percent(&self.policy.food_tip_rate)?,
            bar_tip_rate: format_percent(&self.policy.bar_tip_rate)?,
            overall_tip_rate: format_percent(&self.policy.overall_tip_rate)?,
            host_tip_rate: format_percent(&self.policy.host_tip_rate)?,
        })
    }
}
