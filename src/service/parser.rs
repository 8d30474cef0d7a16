use crate::error::{TipError, TipResult};
use crate::models::SalesInput;
use bigdecimal::{BigDecimal, Zero};
use std::collections::HashMap;
use std::str::FromStr;

/// 表单字段: (标准字段名, 旧版表单字段名)
pub const FIELDS: [(&str, &str); 9] = [
    ("bottle_beer", "Input0"),
    ("draft_beer", "Input1"),
    ("food", "Input2"),
    ("liquor", "Input3"),
    ("na_bev", "Input4"),
    ("wine", "Input5"),
    ("wine_bottle", "Input6"),
    ("card_tips", "Input7"),
    ("cash_tips", "Input8"),
];

/// 单个字段文本的最大长度
pub const MAX_FIELD_LEN: usize = 64;

/// 允许的小数位范围 (负数表示 1e17 这类指数形式)
pub const MAX_SCALE: i64 = 18;

/// 有效数字位数上限
pub const MAX_DIGITS: usize = 36;

/// 解析原始表单值
///
/// 缺失或空字段按 0 处理; 非数字文本返回 `InvalidInput`。
/// 负数原样通过; 只限制数值的表示规模 (长度、指数、有效位数),
/// 超出范围同样返回 `InvalidInput`。
pub fn parse(raw: &HashMap<String, String>) -> TipResult<SalesInput> {
    let [bottle_beer, draft_beer, food, liquor, na_bev, wine, wine_bottle, card_tips, cash_tips] =
        FIELDS.map(|(name, legacy)| parse_field(raw, name, legacy));

    Ok(SalesInput {
        bottle_beer: bottle_beer?,
        draft_beer: draft_beer?,
        food: food?,
        liquor: liquor?,
        na_bev: na_bev?,
        wine: wine?,
        wine_bottle: wine_bottle?,
        card_tips: card_tips?,
        cash_tips: cash_tips?,
    })
}

fn parse_field(
    raw: &HashMap<String, String>,
    name: &'static str,
    legacy: &str,
) -> TipResult<BigDecimal> {
    let Some(value) = raw.get(name).or_else(|| raw.get(legacy)) else {
        return Ok(BigDecimal::zero());
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(BigDecimal::zero());
    }

    let invalid = || TipError::InvalidInput {
        field: name,
        value: value.clone(),
    };

    if trimmed.len() > MAX_FIELD_LEN {
        return Err(invalid());
    }
    let parsed = BigDecimal::from_str(trimmed).map_err(|_| invalid())?;

    // 指数过大时后续运算的对齐代价随指数线性增长
    let (digits, scale) = parsed.as_bigint_and_exponent();
    let digit_count = digits.to_string().trim_start_matches('-').len();
    if !(-MAX_SCALE..=MAX_SCALE).contains(&scale) || digit_count > MAX_DIGITS {
        return Err(invalid());
    }

    Ok(parsed)
}
