use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::routes::ActionRoutes;
use crate::types::action::{ActionCreateBody, ActionSearchParams, ActionStatus, ActionUpdateBody};

pub fn list(routes: ActionRoutes, params: &ActionSearchParams) -> Result<ApiRequest, CoreError> {
    super::list(routes.base(), params, Resource::Action(routes))
}

pub fn create(routes: ActionRoutes, body: &ActionCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(routes.base()).with_json(body)
}

/// Plural routes update through `POST /actions/{id}`, singular ones through
/// `PUT /action`. The body always carries the id.
pub fn update(routes: ActionRoutes, body: &ActionUpdateBody) -> Result<ApiRequest, CoreError> {
    match routes {
        ActionRoutes::Plural => {
            ApiRequest::post(format!("{}/{}", routes.base(), body.id)).with_json(body)
        }
        ActionRoutes::Singular => ApiRequest::put(routes.base()).with_json(body),
    }
}

/// Deletion lives under the singular path on every deployment.
pub fn delete(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{}/{id}", ActionRoutes::Singular.base()))
}

/// Change the listing status; the status is both in the path and the body
pub fn update_status(routes: ActionRoutes, status: &ActionStatus) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(format!(
        "{}/{}/status/{}",
        routes.base(),
        status.id,
        status.status
    ))
    .with_json(status)
}
