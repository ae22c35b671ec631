//! Backend health-check command

use crate::api::ApiClient;
use crate::error::{RepasseError, RepasseResult};

/// Query the backend's complete health endpoint and print the result
///
/// Exits with an error when the backend reports itself degraded, so the
/// process exit code reflects the check.
pub fn handle_status_command(api: &ApiClient) -> RepasseResult<()> {
    let health = api.health()?;

    println!("Backend: {}", api.base_url());
    println!("  API:      {} ({})", health.api.status, health.api.message);
    println!(
        "  Database: {} ({})",
        health.database.status, health.database.message
    );
    println!("  Overall:  {}", health.overall);

    if health.is_healthy() {
        Ok(())
    } else {
        Err(RepasseError::Unhealthy(health.overall))
    }
}
