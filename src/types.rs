//! Wire envelopes shared by every endpoint group.

use serde::{Deserialize, Serialize};


/// Minimal response contract: a bare status string.
///
/// Every mutating endpoint's result carries at least this field. The library
/// never branches on it; callers inspect it themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server-reported status, e.g. `"Ok"`.
    #[serde(rename = "Status")]
    pub status: String,
}

/// Generic result envelope pairing a status string with a typed payload.
///
/// Used by every read/listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult<T> {
    /// Server-reported status, e.g. `"Ok"`.
    #[serde(rename = "Status")]
    pub status: String,
    /// Typed payload.
    #[serde(rename = "Data")]
    pub data: T,
}
