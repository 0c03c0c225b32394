//! The transport seam
//!
//! Resource clients never talk to the network themselves. They build an
//! [`ApiRequest`] and hand it to a [`Transport`], which resolves it to the
//! backend's `data` payload. [`HttpTransport`](crate::http::HttpTransport) is
//! the production implementation.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use motion_core::{ApiRequest, Method};
use serde_json::Value;

/// Bytes of the file part sent so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.loaded.min(self.total) * 100) / self.total) as u8
    }
}

pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// A request together with the per-call options a transport honours
#[derive(Clone)]
pub struct RequestConfig {
    pub request: ApiRequest,
    pub on_upload_progress: Option<ProgressCallback>,
}

impl RequestConfig {
    pub fn new(request: ApiRequest) -> Self {
        Self {
            request,
            on_upload_progress: None,
        }
    }

    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_upload_progress = Some(callback);
        self
    }
}

impl fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfig")
            .field("request", &self.request)
            .field("on_upload_progress", &self.on_upload_progress.is_some())
            .finish()
    }
}

impl From<ApiRequest> for RequestConfig {
    fn from(request: ApiRequest) -> Self {
        Self::new(request)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Executes requests against the backend.
///
/// `request` is the raw path: it honours the request's own method and the
/// progress callback. The helpers force their method and never report
/// progress.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, config: RequestConfig) -> Result<Value, TransportError>;

    async fn get(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.request(with_method(request, Method::Get)).await
    }

    async fn post(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.request(with_method(request, Method::Post)).await
    }

    async fn put(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.request(with_method(request, Method::Put)).await
    }

    async fn del(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.request(with_method(request, Method::Delete)).await
    }
}

fn with_method(request: ApiRequest, method: Method) -> RequestConfig {
    RequestConfig::new(ApiRequest { method, ..request })
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn request(&self, config: RequestConfig) -> Result<Value, TransportError> {
        (**self).request(config).await
    }

    async fn get(&self, request: ApiRequest) -> Result<Value, TransportError> {
        (**self).get(request).await
    }

    async fn post(&self, request: ApiRequest) -> Result<Value, TransportError> {
        (**self).post(request).await
    }

    async fn put(&self, request: ApiRequest) -> Result<Value, TransportError> {
        (**self).put(request).await
    }

    async fn del(&self, request: ApiRequest) -> Result<Value, TransportError> {
        (**self).del(request).await
    }
}
