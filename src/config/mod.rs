//! Client configuration
//!
//! Endpoint, credentials, organization and transport settings, with
//! support for:
//! - Direct construction plus builder-style modifiers
//! - YAML configuration files
//! - Environment variable overrides
//!
//! Credentials are attached to requests according to `AuthType`; the
//! record client itself never computes them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{ClientError, ClientResult};

/// How credentials are attached to outgoing requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// HTTP Basic with client id and secret
    #[default]
    Basic,
    /// `Authorization: Bearer` with the pre-issued token from `client_secret`
    Bearer,
}

impl AuthType {
    /// Parse the configuration-file spelling of an auth type.
    pub fn parse(value: &str) -> ClientResult<Self> {
        match value {
            "basic" => Ok(AuthType::Basic),
            "bearer" => Ok(AuthType::Bearer),
            other => Err(ClientError::Config(format!(
                "unknown auth type '{}', expected 'basic' or 'bearer'",
                other
            ))),
        }
    }
}

/// Client configuration, read-only after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service endpoint, without a trailing slash
    pub endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    /// Tenant namespace; authoritative over any caller-supplied owner on writes
    pub organization_name: String,
    #[serde(default)]
    pub auth_type: AuthType,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Create a configuration with default auth type and timeout.
    pub fn new(
        endpoint: &str,
        client_id: &str,
        client_secret: &str,
        organization_name: &str,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            organization_name: organization_name.to_string(),
            auth_type: AuthType::default(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Select how credentials are attached.
    pub fn with_auth_type(mut self, auth_type: AuthType) -> Self {
        self.auth_type = auth_type;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config: ClientConfig = serde_norway::from_str(&contents).map_err(|e| {
            ClientError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.endpoint = config.endpoint.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `CHRONICLE_*` environment variables.
    ///
    /// `CHRONICLE_ENDPOINT`, `CHRONICLE_CLIENT_ID`, `CHRONICLE_CLIENT_SECRET`
    /// and `CHRONICLE_ORGANIZATION` are required; `CHRONICLE_AUTH_TYPE` and
    /// `CHRONICLE_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> ClientResult<Self> {
        let mut config = Self::new(
            &require_env("CHRONICLE_ENDPOINT")?,
            &require_env("CHRONICLE_CLIENT_ID")?,
            &require_env("CHRONICLE_CLIENT_SECRET")?,
            &require_env("CHRONICLE_ORGANIZATION")?,
        );

        if let Ok(auth_type) = std::env::var("CHRONICLE_AUTH_TYPE") {
            config.auth_type = AuthType::parse(&auth_type)?;
        }
        if let Ok(timeout) = std::env::var("CHRONICLE_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                ClientError::Config(format!(
                    "CHRONICLE_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ClientResult<()> {
        if self.endpoint.is_empty() {
            return Err(ClientError::Config("endpoint is required".to_string()));
        }
        if self.organization_name.is_empty() {
            return Err(ClientError::Config(
                "organization_name is required".to_string(),
            ));
        }
        Ok(())
    }
}

fn require_env(name: &str) -> ClientResult<String> {
    std::env::var(name)
        .map_err(|_| ClientError::Config(format!("environment variable {} is not set", name)))
}
