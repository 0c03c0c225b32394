use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::types::character::{
    CharacterCreateBody, CharacterPermissionBody, CharacterSearchParams, CharacterStatus,
    CharacterUpdateBody,
};

const BASE: &str = "/api/v1/admin/roles";

pub fn list(params: &CharacterSearchParams) -> Result<ApiRequest, CoreError> {
    super::list(BASE, params, Resource::Character)
}

pub fn create(body: &CharacterCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(BASE).with_json(body)
}

pub fn update(body: &CharacterUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(BASE).with_json(body)
}

pub fn delete(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{BASE}/{id}"))
}

pub fn update_permission(body: &CharacterPermissionBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(format!("{BASE}/permission")).with_json(body)
}

/// Enable (1) or disable (2) a character
pub fn toggle_status(id: u64, status: u8) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(format!("{BASE}/{id}/status")).with_json(&CharacterStatus { status })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::fixtures::{body_json, query_json};
    use crate::request::Method;
    use crate::types::PageParams;
    use serde_json::json;

    #[test]
    fn test_list_passthrough() {
        let request = list(&CharacterSearchParams {
            page: PageParams::new(1, 10),
            name: Some(" ops".to_string()),
        })
        .unwrap();
        assert_eq!(request.url, "/api/v1/admin/roles");
        assert_eq!(
            query_json(&request),
            json!({ "page": 1, "size": 10, "name": " ops" })
        );
    }

    #[test]
    fn test_toggle_status() {
        let request = toggle_status(6, 2).unwrap();
        assert_eq!(
            (request.method, request.url.as_str()),
            (Method::Put, "/api/v1/admin/roles/6/status")
        );
        assert_eq!(body_json(&request), json!({ "status": 2 }));
    }

    #[test]
    fn test_update_permission_path() {
        let request = update_permission(&CharacterPermissionBody {
            id: 6,
            role_menus: vec![],
        })
        .unwrap();
        assert_eq!(request.url, "/api/v1/admin/roles/permission");
        assert_eq!(body_json(&request), json!({ "id": 6, "roleMenus": [] }));
    }
}
