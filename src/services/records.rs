//! Record service client
//!
//! CRUD operations against the service's record resource. Each call is one
//! HTTP round-trip: transport failures come back as `ClientError`, while
//! application-level failures arrive inside the response envelope with
//! `status == "error"` for the caller to inspect.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::{AuthType, ClientConfig};
use crate::models::{ApiResponse, Record};
use crate::utils::error::{ClientError, ClientResult};
use crate::utils::url::{build_url, merge_query};

/// Action paths of the record API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    AddRecord,
    DeleteRecord,
    UpdateRecord,
    GetRecords,
    GetRecord,
}

impl RecordAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordAction::AddRecord => "add-record",
            RecordAction::DeleteRecord => "delete-record",
            RecordAction::UpdateRecord => "update-record",
            RecordAction::GetRecords => "get-records",
            RecordAction::GetRecord => "get-record",
        }
    }
}

/// One page of records; `total` is the envelope's secondary payload
#[derive(Debug, Clone)]
pub struct PaginatedRecords {
    pub records: Vec<Record>,
    /// Total matching records on the server, when reported
    pub total: Option<u64>,
}

/// Client for the record resource.
///
/// Holds a shared `reqwest::Client` and the read-only configuration; safe
/// to clone and share across tasks. No retries, no caching, no local state
/// between calls.
#[derive(Debug, Clone)]
pub struct RecordClient {
    client: Client,
    config: ClientConfig,
}

impl RecordClient {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        info!("Initializing record client for {}", config.endpoint);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Fetch a single record by name within the configured organization.
    ///
    /// An absent record is `Ok(None)`: the service reports it as a
    /// successful call with a null payload, not as an error.
    pub async fn get_record(&self, name: &str) -> ClientResult<Option<Record>> {
        let id = format!("{}/{}", self.config.organization_name, name);
        let response: ApiResponse<Record> = self
            .do_get(RecordAction::GetRecord, vec![("id".to_string(), id)])
            .await?;
        Ok(response.into_data())
    }

    /// List all records owned by the configured organization, in service
    /// order.
    pub async fn get_records(&self) -> ClientResult<Vec<Record>> {
        let response: ApiResponse<Vec<Record>> = self
            .do_get(
                RecordAction::GetRecords,
                vec![(
                    "owner".to_string(),
                    self.config.organization_name.clone(),
                )],
            )
            .await?;
        Ok(response.into_data().unwrap_or_default())
    }

    /// Fetch one page of records.
    ///
    /// `p` is 1-based. `query` carries extra equality filters layered on
    /// top of the base parameters.
    pub async fn get_pagination_records(
        &self,
        p: u32,
        page_size: u32,
        query: &[(String, String)],
    ) -> ClientResult<PaginatedRecords> {
        let base = vec![
            (
                "owner".to_string(),
                self.config.organization_name.clone(),
            ),
            ("p".to_string(), p.to_string()),
            ("pageSize".to_string(), page_size.to_string()),
        ];
        let response: ApiResponse<Vec<Record>, u64> = self
            .do_get(RecordAction::GetRecords, merge_query(base, query))
            .await?;

        Ok(PaginatedRecords {
            total: response.data2,
            records: response.data.unwrap_or_default(),
        })
    }

    /// Create a record.
    pub async fn add_record(&self, record: &Record) -> ClientResult<ApiResponse<String>> {
        self.modify_record(RecordAction::AddRecord, record).await
    }

    /// Update the record addressed by the caller-supplied `owner/name`.
    pub async fn update_record(&self, record: &Record) -> ClientResult<ApiResponse<String>> {
        self.modify_record(RecordAction::UpdateRecord, record).await
    }

    /// Delete the record addressed by the caller-supplied `owner/name`.
    pub async fn delete_record(&self, record: &Record) -> ClientResult<ApiResponse<String>> {
        self.modify_record(RecordAction::DeleteRecord, record).await
    }

    async fn modify_record(
        &self,
        action: RecordAction,
        record: &Record,
    ) -> ClientResult<ApiResponse<String>> {
        // The target id keeps the caller-supplied owner; only the
        // serialized body carries the configured organization.
        let id = format!("{}/{}", record.owner, record.name);

        let mut outgoing = record.clone();
        outgoing.owner = self.config.organization_name.clone();
        let payload = serde_json::to_string(&outgoing)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;

        self.do_post(action, vec![("id".to_string(), id)], payload)
            .await
    }

    async fn do_get<Data, Data2>(
        &self,
        action: RecordAction,
        query: Vec<(String, String)>,
    ) -> ClientResult<ApiResponse<Data, Data2>>
    where
        Data: DeserializeOwned + Default,
        Data2: DeserializeOwned + Default,
    {
        let url = build_url(&self.config.endpoint, action.as_str(), &query);
        debug!("Sending GET request to {}", url);

        let response = self.apply_auth(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    async fn do_post<Data, Data2>(
        &self,
        action: RecordAction,
        query: Vec<(String, String)>,
        payload: String,
    ) -> ClientResult<ApiResponse<Data, Data2>>
    where
        Data: DeserializeOwned + Default,
        Data2: DeserializeOwned + Default,
    {
        let url = build_url(&self.config.endpoint, action.as_str(), &query);
        debug!("Sending POST request to {}", url);

        let response = self
            .apply_auth(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        self.handle_response(response).await
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.auth_type {
            AuthType::Basic => {
                request.basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            }
            AuthType::Bearer => request.bearer_auth(&self.config.client_secret),
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                ClientError::Deserialization(format!("failed to parse response JSON: {}", e))
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}
