use clap::Parser;
use ui_codegen_service::{
    build_app, config::AppConfig, run_server, shutdown_signal, telemetry, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    telemetry::init_tracing()?;

    tracing::info!(
        model = %config.model,
        api_base_url = %config.api_base_url,
        max_body_bytes = config.max_body_bytes,
        "starting ui-codegen-service"
    );

    let app = build_app(AppState::from_config(&config));
    run_server(app, &config.bind_addr(), shutdown_signal()).await?;

    Ok(())
}
