//! HTTP client infrastructure for communicating with the graph service.
//!
//! This module provides the generic transport layer the domain client is
//! built on. It handles URL assembly from the configured endpoint, path
//! template resolution, header merging, and response parsing; each request
//! is sent exactly once.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async call executor
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: Request descriptions with
//!   `:name` path templates
//! - [`HttpResponse`]: A parsed response with header accessors
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Unified transport-level error type
//!
//! # Example
//!
//! ```rust,ignore
//! use auditable_graph::{Endpoint, GraphConfig};
//! use auditable_graph::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = GraphConfig::builder()
//!     .endpoint(Endpoint::new("https://graph.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/:id")
//!     .path_param("id", "vertex-123")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
