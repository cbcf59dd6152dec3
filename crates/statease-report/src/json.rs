//! JSON output for machine consumers

use serde::Serialize;
use statease_core::{Error, Result};

/// Pretty-printed JSON for any result record
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::Computation(format!("Failed to serialize result: {}", e)))
}
