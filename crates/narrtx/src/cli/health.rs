//! Health command handler.

use narrtx_error::{HttpError, HttpErrorKind, NarrtxResult};
use narrtx_server::HealthStatus;
use tracing::debug;

/// Queries `GET /api/health` on the server at `url`.
pub async fn fetch_health(url: &str) -> NarrtxResult<HealthStatus> {
    let endpoint = format!("{}/api/health", url.trim_end_matches('/'));
    debug!(endpoint = %endpoint, "Checking server health");

    let response = reqwest::get(&endpoint)
        .await
        .map_err(|e| HttpError::new(HttpErrorKind::Request(e.to_string())))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::new(HttpErrorKind::Status(status.as_u16())).into());
    }

    let health = response
        .json()
        .await
        .map_err(|e| HttpError::new(HttpErrorKind::InvalidResponse(e.to_string())))?;
    Ok(health)
}

/// Handle the `health` command
pub async fn handle_health_command(url: &str) -> NarrtxResult<()> {
    let health = fetch_health(url).await?;
    println!("{}: {}", health.status, health.message);
    Ok(())
}
