//! reqwest-backed [`Transport`]
//!
//! Resolves relative paths against the configured base URL, sends the access
//! token, and unwraps the backend's `{code, msg, data}` envelope so callers
//! only ever see `data`.

use async_trait::async_trait;
use futures::stream;
use motion_core::{ApiRequest, Body, FormPart, FormValue, Method, UploadFile};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::config::MotionConfig;
use crate::transport::{ProgressCallback, RequestConfig, Transport, TransportError, UploadProgress};

/// Envelope code of a successful backend response
pub const SUCCESS_CODE: i64 = 200;

const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &MotionConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| {
                TransportError::InvalidRequest(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    /// Absolute URLs are used as-is, paths are joined onto the base URL
    pub fn url(&self, request: &ApiRequest) -> String {
        if request.is_absolute() {
            request.url.clone()
        } else {
            format!("{}/{}", self.base_url, request.url.trim_start_matches('/'))
        }
    }

    async fn send(&self, config: RequestConfig) -> Result<Value, TransportError> {
        let RequestConfig {
            request,
            on_upload_progress,
        } = config;
        let url = self.url(&request);

        let mut builder = self.client.request(to_reqwest(request.method), &url);

        // Object storage authenticates through the signed form, not the header.
        if !request.is_absolute() {
            if let Some(token) = &self.access_token {
                builder = builder.header(AUTHORIZATION, token);
            }
        }

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.multipart(build_form(parts, on_upload_progress)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        unwrap_envelope(&text)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, config: RequestConfig) -> Result<Value, TransportError> {
        let method = config.request.method;
        let url = self.url(&config.request);
        let notify = config.request.show_error_message;
        log::debug!("{method} {url}");

        let result = self.send(config).await;
        if let Err(err) = &result {
            if notify {
                log::error!("{method} {url} failed: {err}");
            } else {
                log::debug!("{method} {url} failed: {err}");
            }
        }
        result
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn build_form(
    parts: Vec<FormPart>,
    on_upload_progress: Option<ProgressCallback>,
) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for FormPart { name, value } in parts {
        form = match value {
            FormValue::Text(text) => form.text(name, text),
            FormValue::File(file) => form.part(name, file_part(file, on_upload_progress.clone())?),
        };
    }
    Ok(form)
}

fn file_part(
    file: UploadFile,
    on_upload_progress: Option<ProgressCallback>,
) -> Result<Part, TransportError> {
    let UploadFile {
        file_name,
        mime_type,
        bytes,
    } = file;

    let part = match on_upload_progress {
        None => Part::bytes(bytes),
        Some(callback) => {
            let total = bytes.len() as u64;
            Part::stream_with_length(progress_body(bytes, callback), total)
        }
    };

    part.file_name(file_name)
        .mime_str(&mime_type)
        .map_err(|e| {
            TransportError::InvalidRequest(format!("Invalid MIME type '{mime_type}': {e}"))
        })
}

/// Stream the file in chunks, reporting after each one is handed to the client
fn progress_body(bytes: Vec<u8>, callback: ProgressCallback) -> reqwest::Body {
    let total = bytes.len() as u64;
    let chunks: Vec<Vec<u8>> = bytes
        .chunks(UPLOAD_CHUNK_SIZE)
        .map(<[u8]>::to_vec)
        .collect();

    if chunks.is_empty() {
        callback(UploadProgress { loaded: 0, total });
    }

    let mut loaded = 0u64;
    let chunks = stream::iter(chunks.into_iter().map(move |chunk| {
        loaded += chunk.len() as u64;
        callback(UploadProgress { loaded, total });
        Ok::<_, std::io::Error>(chunk)
    }));

    reqwest::Body::wrap_stream(chunks)
}

/// Extract `data` from a backend envelope.
///
/// An empty body is `null`. A body that is not an envelope (object storage
/// replies) is returned as-is, non-JSON text as a string.
pub fn unwrap_envelope(text: &str) -> Result<Value, TransportError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return Ok(Value::String(text.to_string())),
    };

    let mut envelope = match value {
        Value::Object(envelope) => envelope,
        other => return Ok(other),
    };

    let code = match envelope.get("code") {
        Some(code) => code.clone(),
        None => return Ok(Value::Object(envelope)),
    };

    let code = code
        .as_i64()
        .or_else(|| code.as_str().and_then(|s| s.parse().ok()))
        .ok_or_else(|| {
            TransportError::InvalidResponse(format!("Unexpected envelope code: {code}"))
        })?;

    if code != SUCCESS_CODE {
        let message = envelope
            .get("msg")
            .or_else(|| envelope.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("request failed")
            .to_string();
        return Err(TransportError::Api { code, message });
    }

    Ok(envelope.remove("data").unwrap_or(Value::Null))
}
