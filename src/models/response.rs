//! Generic response envelope
//!
//! Every remote call answers with the same wrapper:
//! `{"status": ..., "msg": ..., "data": ..., "data2": ...}`. The two
//! payload types are named by the caller at the deserialization site, so
//! one envelope type covers a single record, a record list, or an opaque
//! status string without reflection.

use serde::{Deserialize, Serialize};

/// `status` value for a successful call
pub const STATUS_OK: &str = "ok";
/// `status` value for an application-level failure
pub const STATUS_ERROR: &str = "error";

/// Response envelope with a primary and a secondary payload.
///
/// Transport success and application-level status are separate concerns:
/// an envelope with `status == "error"` still arrives as a normal value,
/// and callers inspect `status`/`msg` to react. `data2` defaults to raw
/// JSON for call sites that do not care about the secondary payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<Data, Data2 = serde_json::Value> {
    #[serde(default)]
    pub status: String,
    /// Human-readable detail, populated on error
    #[serde(default)]
    pub msg: String,
    /// Primary payload; `None` when the resource is absent
    #[serde(default)]
    pub data: Option<Data>,
    /// Secondary payload, e.g. a total count next to a paginated list
    #[serde(default)]
    pub data2: Option<Data2>,
}

impl<Data, Data2> ApiResponse<Data, Data2> {
    /// Whether the service reported success.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Consume the envelope, keeping only the primary payload.
    pub fn into_data(self) -> Option<Data> {
        self.data
    }
}
