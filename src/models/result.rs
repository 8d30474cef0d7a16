use crate::error::TipError;
use crate::models::{DerivedTotals, SalesInput};
use bigdecimal::BigDecimal;
use serde::Serialize;

/// 失败时统一返回的提示
pub const BAD_INPUT_MESSAGE: &str = "Cannot perform calculation with provided input.";
pub const BAD_INPUT_RESULT: &str = "Bad Input";

/// 各分成池金额
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipOutBreakdown {
    pub food: BigDecimal,
    pub bar: BigDecimal,
    pub overall: BigDecimal,
    pub host: BigDecimal,
    pub total: BigDecimal,
}

/// 一次计算的全部数值结果 (未格式化)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub input: SalesInput,
    pub totals: DerivedTotals,
    pub expected_tip_amount: BigDecimal,
    pub tips_taken_ratio: BigDecimal,
    pub tip_out: TipOutBreakdown,
    pub walking_with: BigDecimal,
}

/// 成功响应: 全部为展示字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationReport {
    pub bottle_beer: String,
    pub draft_beer: String,
    pub food: String,
    pub liquor: String,
    pub na_bev: String,
    pub wine: String,
    pub wine_bottle: String,
    pub card_tips: String,
    pub cash_tips: String,
    pub food_tip_rate: String,
    pub bar_tip_rate: String,
    pub overall_tip_rate: String,
    pub host_tip_rate: String,
    pub total_food_sales: String,
    pub total_bar_sales: String,
    pub total_wine_bottle_sales: String,
    pub overall_sales: String,
    pub total_tips: String,
    pub expected_tip_amount: String,
    pub tips_taken_ratio: String,
    pub final_tip_out_food: String,
    pub final_tip_out_bar: String,
    pub final_tip_out_overall: String,
    pub final_tip_out_host: String,
    pub total_tip_out: String,
    pub walking_with: String,
    pub calculation_success: bool,
}

/// 失败响应, 不区分具体原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationFailure {
    pub error: String,
    pub calculation_success: bool,
    pub result: String,
    #[serde(skip)]
    pub reason: TipError,
}

impl From<TipError> for CalculationFailure {
    fn from(reason: TipError) -> Self {
        Self {
            error: BAD_INPUT_MESSAGE.to_string(),
            calculation_success: false,
            result: BAD_INPUT_RESULT.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CalculationResult {
    Success(Box<CalculationReport>),
    Failure(CalculationFailure),
}

impl CalculationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResult::Success(_))
    }
}

/// 费率展示表 (百分比字符串)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTable {
    pub expected_tip_percent: String,
    pub food_tip_rate: String,
    pub bar_tip_rate: String,
    pub overall_tip_rate: String,
    pub host_tip_rate: String,
}
