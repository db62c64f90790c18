pub mod api;
pub mod completion;
pub mod config;
pub mod error;
pub mod prompt;
pub mod telemetry;

use std::{future::Future, sync::Arc};

use axum::Router;

use completion::{CompletionClient, CompletionSettings, OpenAiClient};
use config::AppConfig;

/// Request bodies up to this size are accepted on `/convert`. Base64 screenshots run to several MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub settings: Arc<CompletionSettings>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, settings: CompletionSettings) -> Self {
        Self {
            completion,
            settings: Arc::new(settings),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let client = OpenAiClient::new(&config.api_base_url, config.api_key.clone());
        Self::new(Arc::new(client), config.completion_settings())
            .with_max_body_bytes(config.max_body_bytes)
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(
    app: Router,
    addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C, or on SIGTERM where the platform has it.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!("SIGTERM handler unavailable, waiting for Ctrl+C only: {err}");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    let _ = tokio::signal::ctrl_c().await;

    tracing::info!("shutdown requested, draining open connections");
}
