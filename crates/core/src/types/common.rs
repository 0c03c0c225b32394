//! Shared pagination, status and upload types

use serde::{Deserialize, Serialize};

/// Pagination cursor accepted by every list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }
}

/// Envelope of every paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    /// Number of pages implied by `total` and `size`
    pub fn page_count(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.size))
    }

    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }
}

/// Enabled/disabled flag sent as `"1"` / `"2"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnableStatus {
    #[serde(rename = "1")]
    Enabled,
    #[serde(rename = "2")]
    Disabled,
}

/// Answer of the `check-in-use` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InUse {
    pub in_use: bool,
}

/// Stored file returned by the upload endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFileResponse {
    pub filename: String,
    pub path: String,
    pub url: String,
}

/// Short-lived object-storage credentials.
///
/// Fetched once per upload session and never stored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: String,
    pub url: String,
}

impl std::fmt::Debug for UploadCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::account::AccountListItem;
    use crate::types::coach::CoachListItem;
    use serde_json::json;

    #[test]
    fn test_paginated_response_from_wire() {
        let response: PaginatedResponse<serde_json::Value> = serde_json::from_value(json!({
            "list": [{ "id": 1 }, { "id": 2 }],
            "page": 1,
            "size": 2,
            "total": 5
        }))
        .unwrap();

        assert_eq!(response.list.len(), 2);
        assert_eq!(response.page_count(), 3);
        assert!(response.has_next_page());
    }

    #[test]
    fn test_paginated_response_missing_list_is_empty() {
        let response: PaginatedResponse<serde_json::Value> =
            serde_json::from_value(json!({ "page": 1, "size": 20, "total": 0 })).unwrap();

        assert!(response.list.is_empty());
        assert_eq!(response.page_count(), 0);
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_typed_page_decodes_list_items() {
        let response: PaginatedResponse<CoachListItem> = serde_json::from_value(json!({
            "list": [{ "id": 1, "name": "Ada", "status": 1 }],
            "page": 1,
            "size": 20,
            "total": 1
        }))
        .unwrap();

        assert_eq!(response.list.len(), 1);
        assert_eq!(response.list[0].name, "Ada");
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_typed_page_without_list() {
        let response: PaginatedResponse<AccountListItem> =
            serde_json::from_value(json!({ "page": 2, "size": 10, "total": 10 })).unwrap();

        assert!(response.list.is_empty());
        assert_eq!(response.page_count(), 1);
    }

    #[test]
    fn test_page_params_skip_absent_fields() {
        let value = serde_json::to_value(PageParams {
            page: Some(2),
            size: None,
        })
        .unwrap();
        assert_eq!(value, json!({ "page": 2 }));
    }

    #[test]
    fn test_enable_status_wire_values() {
        assert_eq!(serde_json::to_value(EnableStatus::Enabled).unwrap(), json!("1"));
        assert_eq!(
            serde_json::from_value::<EnableStatus>(json!("2")).unwrap(),
            EnableStatus::Disabled
        );
    }

    #[test]
    fn test_credentials_debug_hides_secrets() {
        let credentials: UploadCredentials = serde_json::from_value(json!({
            "accessKey": "AKIA123",
            "secretKey": "very-secret",
            "sessionToken": "token-value",
            "url": "https://media.s3.amazonaws.com/"
        }))
        .unwrap();

        let debug = format!("{credentials:?}");
        assert!(debug.contains("AKIA123"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("token-value"));
    }
}
