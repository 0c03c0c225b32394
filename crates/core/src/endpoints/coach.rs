use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::routes::CoachRoutes;
use crate::types::coach::{CoachCreateBody, CoachSearchParams, CoachUpdateBody};

pub fn list(routes: CoachRoutes, params: &CoachSearchParams) -> Result<ApiRequest, CoreError> {
    super::list(routes.base(), params, Resource::Coach(routes))
}

pub fn create(routes: CoachRoutes, body: &CoachCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(routes.base()).with_json(body)
}

pub fn update(routes: CoachRoutes, body: &CoachUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(routes.base()).with_json(body)
}

pub fn delete(routes: CoachRoutes, id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{}/{id}", routes.base()))
}

/// Whether the coach is bound to a listed action
pub fn check_in_use(routes: CoachRoutes, id: u64) -> ApiRequest {
    ApiRequest::get(format!("{}/{id}/check-in-use", routes.base()))
}

/// Start machine translation of the coach profile
pub fn translate(routes: CoachRoutes, id: u64) -> ApiRequest {
    ApiRequest::post(format!("{}/{id}/translate", routes.base()))
}
