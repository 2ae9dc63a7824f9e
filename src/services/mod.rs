//! Service clients

pub mod records;

pub use records::{PaginatedRecords, RecordAction, RecordClient};
