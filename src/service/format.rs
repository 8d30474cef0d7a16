use crate::error::{TipError, TipResult};
use bigdecimal::{BigDecimal, Zero};

/// 四舍五入 (远离零方向) 到 `scale` 位小数
pub fn round_half_away(value: &BigDecimal, scale: i64) -> BigDecimal {
    let half = BigDecimal::new(5i32.into(), scale + 1);
    // with_scale 按零方向截断, 先对绝对值加半个单位
    let rounded = (value.abs() + half).with_scale(scale);
    if *value < BigDecimal::zero() {
        -rounded
    } else {
        rounded
    }
}

/// 金额格式: `$` + 千分位 + 两位小数, 例如 1234.5 -> "$1,234.50"
pub fn format_currency(amount: &BigDecimal) -> TipResult<String> {
    let (whole, frac) = fixed_digits(amount, 2)?;
    Ok(format!("${}{}.{}", sign_of(amount), whole, frac))
}

/// 百分比格式: 一位小数, 例如 0.027 -> "2.7%"
pub fn format_percent(decimal: &BigDecimal) -> TipResult<String> {
    let (whole, frac) = fixed_digits(&(decimal.clone() * BigDecimal::from(100)), 1)?;
    Ok(format!("{}{}.{}%", sign_of(decimal), whole, frac))
}

/// 符号取自舍入前的值, 舍入为零的负数仍显示 "-"
fn sign_of(value: &BigDecimal) -> &'static str {
    if *value < BigDecimal::zero() {
        "-"
    } else {
        ""
    }
}

/// 绝对值按 `scale` 位舍入后拆成 (千分位整数部分, 小数部分)
fn fixed_digits(value: &BigDecimal, scale: i64) -> TipResult<(String, String)> {
    let rounded = round_half_away(&value.abs(), scale);
    let (digits, exponent) = rounded.as_bigint_and_exponent();
    if exponent != scale || scale < 0 {
        return Err(TipError::FormatError(value.to_string()));
    }

    let width = scale as usize;
    let digits = format!("{:0>w$}", digits.to_string(), w = width + 1);
    let (whole, frac) = digits.split_at(digits.len() - width);
    Ok((group_thousands(whole), frac.to_string()))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(&dec("1234.5")).unwrap(), "$1,234.50");
        assert_eq!(format_currency(&dec("0")).unwrap(), "$0.00");
        assert_eq!(format_currency(&dec("999.999")).unwrap(), "$1,000.00");
        assert_eq!(format_currency(&dec("1234567.891")).unwrap(), "$1,234,567.89");
        assert_eq!(format_currency(&dec("0.05")).unwrap(), "$0.05");
    }

    #[test]
    fn currency_keeps_sign_after_dollar() {
        assert_eq!(format_currency(&dec("-5")).unwrap(), "$-5.00");
        assert_eq!(format_currency(&dec("-1234.565")).unwrap(), "$-1,234.57");
    }

    #[test]
    fn currency_renders_amounts_beyond_64_bits() {
        assert_eq!(
            format_currency(&dec("1e17")).unwrap(),
            "$100,000,000,000,000,000.00"
        );
        assert_eq!(
            format_currency(&dec("-123456789012345678901.005")).unwrap(),
            "$-123,456,789,012,345,678,901.01"
        );
        assert_eq!(format_percent(&dec("1e17")).unwrap(), "10000000000000000000.0%");
    }

    #[test]
    fn negative_values_rounding_to_zero_keep_sign() {
        assert_eq!(format_currency(&dec("-0.001")).unwrap(), "$-0.00");
        assert_eq!(format_percent(&dec("-0.0004")).unwrap(), "-0.0%");
        assert_eq!(format_currency(&dec("0.001")).unwrap(), "$0.00");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(&dec("0.2")).unwrap(), "20.0%");
        assert_eq!(format_percent(&dec("0.027")).unwrap(), "2.7%");
        assert_eq!(format_percent(&dec("0.03")).unwrap(), "3.0%");
        assert_eq!(format_percent(&dec("1.2345")).unwrap(), "123.5%");
        assert_eq!(format_percent(&dec("-0.5")).unwrap(), "-50.0%");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_half_away(&dec("0.12345"), 4), dec("0.1235"));
        assert_eq!(round_half_away(&dec("-0.12345"), 4), dec("-0.1235"));
        assert_eq!(round_half_away(&dec("0.12344"), 4), dec("0.1234"));
        assert_eq!(round_half_away(&dec("2"), 4), dec("2"));
    }
}
