//! Shared utilities

pub mod error;
pub mod multipart;
pub mod url;

pub use error::{ClientError, ClientResult};
pub use multipart::{encode_file_form, encode_form, MultipartFormData};
pub use url::{build_url, merge_query};
