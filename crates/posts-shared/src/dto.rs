//! Data Transfer Objects - payloads that are not wrapped in an envelope.

use serde::{Deserialize, Serialize};

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub version: String,
}
