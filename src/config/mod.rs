//! Configuration types for the auditable graph client.
//!
//! This module provides the core configuration types used to construct
//! a [`GraphClient`](crate::GraphClient) against a remote graph service.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphConfig`]: The main configuration struct holding all client settings
//! - [`GraphConfigBuilder`]: A builder for constructing [`GraphConfig`] instances
//! - [`Endpoint`]: A validated endpoint URL newtype
//! - [`AuthToken`]: A validated bearer token newtype with masked debug output
//! - [`ProtocolVersion`]: The wire protocol version to speak
//!
//! # Example
//!
//! ```rust
//! use auditable_graph::{Endpoint, GraphConfig, ProtocolVersion};
//!
//! let config = GraphConfig::builder()
//!     .endpoint(Endpoint::new("https://graph.example.com").unwrap())
//!     .base_path("auditable-item-graph")
//!     .protocol_version(ProtocolVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AuthToken, Endpoint};
pub use version::ProtocolVersion;

use crate::error::ConfigError;

/// Configuration for the auditable graph client.
///
/// This struct holds everything needed to construct a client: the service
/// endpoint, the resource base path the vertex collection is mounted under,
/// the wire protocol version, and optional authentication and diagnostics
/// settings. Each client instance is independently constructed from its own
/// configuration; there is no shared global state.
///
/// # Thread Safety
///
/// `GraphConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use auditable_graph::{Endpoint, GraphConfig};
///
/// let config = GraphConfig::builder()
///     .endpoint(Endpoint::new("http://localhost:8080").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "http://localhost:8080");
/// assert_eq!(config.base_path(), "");
/// ```
#[derive(Clone, Debug)]
pub struct GraphConfig {
    endpoint: Endpoint,
    base_path: String,
    protocol_version: ProtocolVersion,
    auth_token: Option<AuthToken>,
    label: Option<String>,
    user_agent_prefix: Option<String>,
}

impl GraphConfig {
    /// Creates a new builder for constructing a `GraphConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use auditable_graph::{Endpoint, GraphConfig};
    ///
    /// let config = GraphConfig::builder()
    ///     .endpoint(Endpoint::new("https://graph.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::new()
    }

    /// Returns the service endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the resource base path.
    ///
    /// Empty when the vertex collection is mounted at the endpoint root;
    /// otherwise a path with a leading slash (e.g., `/auditable-item-graph`).
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the wire protocol version.
    #[must_use]
    pub const fn protocol_version(&self) -> ProtocolVersion {
        self.protocol_version
    }

    /// Returns the auth token, if configured.
    #[must_use]
    pub const fn auth_token(&self) -> Option<&AuthToken> {
        self.auth_token.as_ref()
    }

    /// Returns the diagnostic label, if configured.
    ///
    /// The label identifies this client instance in log events; it has no
    /// wire-level effect.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify GraphConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphConfig>();
};

/// Builder for constructing [`GraphConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. The only
/// required field is `endpoint`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `base_path`: empty (collection mounted at the endpoint root)
/// - `protocol_version`: [`ProtocolVersion::latest()`]
/// - `auth_token`: `None`
/// - `label`: `None`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use auditable_graph::{AuthToken, Endpoint, GraphConfig, ProtocolVersion};
///
/// let config = GraphConfig::builder()
///     .endpoint(Endpoint::new("https://graph.example.com").unwrap())
///     .base_path("/auditable-item-graph")
///     .protocol_version(ProtocolVersion::V2)
///     .auth_token(AuthToken::new("token").unwrap())
///     .label("inventory-service")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct GraphConfigBuilder {
    endpoint: Option<Endpoint>,
    base_path: Option<String>,
    protocol_version: Option<ProtocolVersion>,
    auth_token: Option<AuthToken>,
    label: Option<String>,
    user_agent_prefix: Option<String>,
}

impl GraphConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the resource base path.
    ///
    /// A leading slash is added when missing; trailing slashes are trimmed.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Sets the wire protocol version.
    #[must_use]
    pub const fn protocol_version(mut self, version: ProtocolVersion) -> Self {
        self.protocol_version = Some(version);
        self
    }

    /// Sets the bearer token used to authenticate requests.
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the diagnostic label for this client instance.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GraphConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set.
    pub fn build(self) -> Result<GraphConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        let base_path = self.base_path.map_or_else(String::new, normalize_base_path);

        Ok(GraphConfig {
            endpoint,
            base_path,
            protocol_version: self.protocol_version.unwrap_or_else(ProtocolVersion::latest),
            auth_token: self.auth_token,
            label: self.label,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Normalizes a base path to have a single leading slash and no trailing slash.
///
/// An empty or all-slash path normalizes to the empty string.
fn normalize_base_path(path: String) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
