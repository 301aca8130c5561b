use anyhow::Context;
use clap::Parser;
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{app_router, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_server_logger(config.verbose);

    tracing::info!("Starting number-classifier API");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("🚀 Server is running on port {}", config.port);

    axum::serve(listener, app_router())
        .await
        .context("Server error")?;

    Ok(())
}
