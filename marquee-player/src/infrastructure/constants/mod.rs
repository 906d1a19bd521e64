//! Constants module for centralized configuration values

pub mod routes;

use std::time::Duration;

/// Request timeout used when no override is configured
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
