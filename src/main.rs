use std::sync::Arc;
use tipout_calculator::{api, AppConfig, RatePolicy, TipCalculator};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    let policy = RatePolicy::standard();
    info!("Rate policy: {:?}", policy);
    let calculator = Arc::new(TipCalculator::new(policy));

    let app = api::router(calculator);

    // 启动服务器
    let addr = config.bind_addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /health");
    info!("  GET  /more_info/         - rate table");
    info!("  GET  /api/rates          - rate table");
    info!("  POST /operation_result/  - form calculation");
    info!("  POST /api/calculate      - JSON calculation");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
