pub mod handlers;

pub use handlers::*;

use crate::service::TipCalculator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建路由
pub fn router(calculator: Arc<TipCalculator>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/more_info/", get(rate_info))
        .route("/api/rates", get(rate_info))
        .route("/operation_result/", post(operation_result))
        .route("/api/calculate", post(calculate_json))
        .with_state(calculator)
}
