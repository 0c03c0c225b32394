use crate::error::CoreError;
use crate::request::ApiRequest;
use crate::types::system::{
    MenuActionCreateBody, MenuActionUpdateBody, MenuCreateBody, MenuUpdateBody,
};

const BASE: &str = "/api/v1/menus";

/// Every menu, for the management page
pub fn all_tree() -> ApiRequest {
    ApiRequest::get(format!("{BASE}/tree"))
}

/// Menus the signed-in user may see, for the sidebar
pub fn current_user_tree() -> ApiRequest {
    ApiRequest::get(format!("{BASE}/tree/current-user"))
}

pub fn create(body: &MenuCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(BASE).with_json(body)
}

pub fn update(body: &MenuUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(BASE).with_json(body)
}

pub fn delete(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{BASE}/{id}"))
}

pub fn create_action(body: &MenuActionCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(format!("{BASE}/action")).with_json(body)
}

pub fn update_action(body: &MenuActionUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(format!("{BASE}/action")).with_json(body)
}

pub fn delete_action(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{BASE}/action/{id}"))
}

pub fn permission_codes() -> ApiRequest {
    ApiRequest::get(format!("{BASE}/permission-codes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::fixtures::body_json;
    use crate::request::Method;
    use serde_json::json;

    #[test]
    fn test_tree_paths() {
        assert_eq!(all_tree().url, "/api/v1/menus/tree");
        assert_eq!(current_user_tree().url, "/api/v1/menus/tree/current-user");
        assert_eq!(permission_codes().url, "/api/v1/menus/permission-codes");
    }

    #[test]
    fn test_menu_action_endpoints() {
        let body = MenuActionCreateBody {
            menu_id: 3,
            title: "Add".to_string(),
            auth_mark: "add".to_string(),
            permission_codes: vec!["coach:create".to_string()],
        };

        let request = create_action(&body).unwrap();
        assert_eq!((request.method, request.url.as_str()), (Method::Post, "/api/v1/menus/action"));
        assert_eq!(
            body_json(&request),
            json!({
                "menuId": 3,
                "title": "Add",
                "authMark": "add",
                "permissionCodes": ["coach:create"]
            })
        );

        let request = update_action(&MenuActionUpdateBody { id: 12, body }).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(body_json(&request)["id"], 12);

        let request = delete_action(12);
        assert_eq!(
            (request.method, request.url.as_str()),
            (Method::Delete, "/api/v1/menus/action/12")
        );
    }

    #[test]
    fn test_menu_delete() {
        assert_eq!(delete(4).url, "/api/v1/menus/4");
    }
}
