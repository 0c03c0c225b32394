//! Plain-data description of a single backend request
//!
//! Every endpoint builder in [`crate::endpoints`] returns an [`ApiRequest`].
//! The shell crate hands it to a transport, which owns the actual network
//! round-trip. Nothing in here touches the network.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file held in memory, ready to be sent as a multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Value of a single multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(UploadFile),
}

/// A named multipart field. Field order is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, file: UploadFile) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File(file),
        }
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

impl Body {
    /// The file carried by a multipart body, if any
    pub fn file(&self) -> Option<&UploadFile> {
        match self {
            Body::Multipart(parts) => parts.iter().find_map(|part| match &part.value {
                FormValue::File(file) => Some(file),
                FormValue::Text(_) => None,
            }),
            _ => None,
        }
    }
}

/// A backend request described as plain data.
///
/// `url` is either a path relative to the API base (`/api/v1/...`) or an
/// absolute URL (object-storage uploads).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Map<String, Value>,
    pub body: Body,
    pub headers: Vec<(String, String)>,
    /// Whether the transport should notify about a failure of this request.
    pub show_error_message: bool,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Map::new(),
            body: Body::Empty,
            headers: Vec::new(),
            show_error_message: true,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = query;
        self
    }

    /// Serialize `body` verbatim as the JSON body
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, CoreError> {
        self.body = Body::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn with_multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Suppress the transport's error notification for this request
    pub fn without_error_message(mut self) -> Self {
        self.show_error_message = false;
        self
    }

    pub fn is_absolute(&self) -> bool {
        self.url.starts_with("https://") || self.url.starts_with("http://")
    }

    /// Flatten the query object into `key=value` pairs.
    ///
    /// Arrays expand to repeated `key[]` pairs, nulls are skipped, nested
    /// objects are sent as JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.query.len());
        for (key, value) in &self.query {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let name = format!("{key}[]");
                    for item in items.iter().filter(|item| !item.is_null()) {
                        pairs.push((name.clone(), render_scalar(item)));
                    }
                }
                other => pairs.push((key.clone(), render_scalar(other))),
            }
        }
        pairs
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("fixture must be an object"),
        }
    }

    #[test]
    fn test_query_pairs_scalars() {
        let request = ApiRequest::get("/api/v1/tags").with_query(query(json!({
            "page": 1,
            "keyword": "core",
            "aiSupport": true
        })));

        let mut pairs = request.query_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("aiSupport".to_string(), "true".to_string()),
                ("keyword".to_string(), "core".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_arrays_repeat_with_brackets() {
        let request = ApiRequest::get("/api/v1/actions")
            .with_query(query(json!({ "tagIds": [3, 5], "coachId": null })));

        assert_eq!(
            request.query_pairs(),
            vec![
                ("tagIds[]".to_string(), "3".to_string()),
                ("tagIds[]".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_json_keeps_body_verbatim() {
        let request = ApiRequest::post("/api/v1/role")
            .with_json(&json!({ "name": "editor", "description": " spaced " }))
            .unwrap();

        assert_eq!(
            request.body,
            Body::Json(json!({ "name": "editor", "description": " spaced " }))
        );
        assert!(request.query.is_empty());
        assert!(request.show_error_message);
    }

    #[test]
    fn test_absolute_urls() {
        assert!(ApiRequest::post("https://media.s3.amazonaws.com/").is_absolute());
        assert!(!ApiRequest::post("/api/v1/common/upload").is_absolute());
    }

    #[test]
    fn test_body_file_lookup() {
        let file = UploadFile::new("a.png", "image/png", vec![1, 2, 3]);
        let body = Body::Multipart(vec![
            FormPart::text("key", "uploads/a.png"),
            FormPart::file("file", file.clone()),
        ]);

        assert_eq!(body.file(), Some(&file));
        assert_eq!(Body::Empty.file(), None);
    }
}
