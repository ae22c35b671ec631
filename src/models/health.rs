//! Backend health-check payload

use serde::Deserialize;

/// Status of one backend component
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentStatus {
    pub status: String,
    pub message: String,
}

/// Response of the complete health-check endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub api: ComponentStatus,
    pub database: ComponentStatus,
    pub overall: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.overall == "ok" || self.overall == "healthy"
    }
}
