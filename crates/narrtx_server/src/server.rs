//! Binding and serving the HTTP API.

use crate::{NarrativeProcessor, ServerConfig, create_router};
use narrtx_error::{HttpError, HttpErrorKind, NarrtxResult};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Serves the API on the configured address until Ctrl+C.
#[instrument(skip_all, fields(address = %config.bind_address()))]
pub async fn serve(config: &ServerConfig, processor: NarrativeProcessor) -> NarrtxResult<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        HttpError::new(HttpErrorKind::Bind {
            address: address.clone(),
            message: e.to_string(),
        })
    })?;

    info!(
        address = %address,
        ollama = %config.ollama_base_url(),
        model = %config.model(),
        "Server running"
    );
    info!("Make sure Ollama is running: ollama serve");

    let router = create_router(Arc::new(processor));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::new(HttpErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}
