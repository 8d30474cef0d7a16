use crate::models::CalculationResult;
use crate::service::TipCalculator;
use axum::{
    extract::{Form, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 费率说明
pub async fn rate_info(State(calculator): State<Arc<TipCalculator>>) -> Response {
    match calculator.rate_table() {
        Ok(table) => (StatusCode::OK, Json(table)).into_response(),
        Err(e) => {
            tracing::error!("Rate table unavailable: {}", e);
            let response = ErrorResponse {
                success: false,
                message: format!("Error: {}", e),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}

/// 表单提交计算 (application/x-www-form-urlencoded)
pub async fn operation_result(
    State(calculator): State<Arc<TipCalculator>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    calculation_response(calculator.run(&fields))
}

/// JSON 提交计算, 值可以是字符串、数字或 null
pub async fn calculate_json(
    State(calculator): State<Arc<TipCalculator>>,
    Json(body): Json<HashMap<String, Value>>,
) -> Response {
    let fields: HashMap<String, String> = body
        .into_iter()
        .map(|(k, v)| (k, json_to_text(v)))
        .collect();
    calculation_response(calculator.run(&fields))
}

fn json_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        // 数字直接转文本; 其他类型交给解析器报错
        other => other.to_string(),
    }
}

fn calculation_response(result: CalculationResult) -> Response {
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result)).into_response()
}
