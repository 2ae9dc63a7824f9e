//! Audit record model

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One audit-log entry describing an API call, its actor, and outcome.
///
/// Wire names are camelCase. `owner/name` form the record's composite
/// identifier; on writes the service treats the configured organization as
/// authoritative for `owner` (see `RecordClient`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub id: i64,
    pub owner: String,
    pub name: String,
    /// ISO-8601-like creation timestamp, assigned by the caller
    pub created_time: String,
    pub organization: String,
    pub client_ip: String,
    pub user: String,
    /// HTTP method of the audited call
    pub method: String,
    pub request_uri: String,
    pub action: String,
    pub language: String,
    /// Target object of the audited call
    pub object: String,
    /// Serialized response body of the audited call
    pub response: String,
    pub provider: String,
    /// Blockchain block number, empty when no commit happened
    pub block: String,
    pub block_hash: String,
    pub transaction: String,
    pub user_agent: String,
    /// Whether a blockchain commit was triggered for this record
    pub is_triggered: bool,
    /// Whether a blockchain commit is still pending
    pub need_commit: bool,
}

impl Record {
    /// Create a record with the given identifier and a current UTC
    /// creation timestamp; every other field starts empty.
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            created_time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            ..Self::default()
        }
    }
}
