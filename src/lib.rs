//! Chronicle client SDK
//!
//! Client library for the Chronicle audit-log service. Provides CRUD
//! operations on audit records over the service's REST API, plus the
//! request-construction primitives (URL building, multipart encoding)
//! shared with the wider toolchain.
//!
//! ```no_run
//! use chronicle_client::{ClientConfig, Record, RecordClient};
//!
//! # async fn run() -> chronicle_client::ClientResult<()> {
//! let config = ClientConfig::new(
//!     "https://audit.example.com",
//!     "client-id",
//!     "client-secret",
//!     "my-org",
//! );
//! let client = RecordClient::new(config)?;
//!
//! client.add_record(&Record::new("my-org", "record_1")).await?;
//! let records = client.get_records().await?;
//! # let _ = records;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{AuthType, ClientConfig};
pub use models::{ApiResponse, Record};
pub use services::records::{PaginatedRecords, RecordAction, RecordClient};
pub use utils::error::{ClientError, ClientResult};
pub use utils::multipart::{encode_file_form, encode_form, MultipartFormData};
pub use utils::url::{build_url, merge_query};
