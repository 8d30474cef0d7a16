use thiserror::Error;

/// 计算失败原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TipError {
    #[error("invalid input for field `{field}`: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("overall sales are zero, tips taken ratio is undefined")]
    DivisionByZero,

    #[error("cannot format value: {0}")]
    FormatError(String),
}

impl TipError {
    /// 失败原因的简短标识, 用于日志
    pub fn reason(&self) -> &'static str {
        match self {
            TipError::InvalidInput { .. } => "invalid_input",
            TipError::DivisionByZero => "division_by_zero",
            TipError::FormatError(_) => "format_error",
        }
    }
}

pub type TipResult<T> = Result<T, TipError>;
