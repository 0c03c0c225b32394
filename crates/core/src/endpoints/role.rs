use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::types::system::{
    RoleCreateBody, RolePermissionUpdateBody, RoleSearchParams, RoleUpdateBody,
};

const BASE: &str = "/api/v1/role";

pub fn list(params: &RoleSearchParams) -> Result<ApiRequest, CoreError> {
    super::list(BASE, params, Resource::Role)
}

pub fn create(body: &RoleCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(BASE).with_json(body)
}

pub fn update(body: &RoleUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(BASE).with_json(body)
}

/// Replace the menu actions granted to a role
pub fn update_permission(body: &RolePermissionUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(format!("{BASE}/permission")).with_json(body)
}

pub fn delete(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{BASE}/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::fixtures::body_json;
    use crate::request::Method;
    use crate::types::system::RoleMenu;
    use serde_json::json;

    #[test]
    fn test_update_permission() {
        let request = update_permission(&RolePermissionUpdateBody {
            id: 2,
            role_menus: vec![RoleMenu {
                menu_id: 5,
                action_id: 9,
            }],
        })
        .unwrap();

        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "/api/v1/role/permission");
        assert_eq!(
            body_json(&request),
            json!({ "id": 2, "roleMenus": [{ "menuId": 5, "actionId": 9 }] })
        );
    }

    #[test]
    fn test_crud_paths() {
        let body = RoleCreateBody {
            name: "ops".to_string(),
            description: "Operations".to_string(),
        };
        assert_eq!(create(&body).unwrap().url, "/api/v1/role");
        assert_eq!(
            update(&RoleUpdateBody { id: 1, body }).unwrap().method,
            Method::Put
        );
        assert_eq!(delete(7).url, "/api/v1/role/7");
    }
}
