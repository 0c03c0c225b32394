use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::types::system::{UserCreateBody, UserSearchParams, UserUpdateBody};

const BASE: &str = "/api/v1/user";

pub fn list(params: &UserSearchParams) -> Result<ApiRequest, CoreError> {
    super::list(BASE, params, Resource::User)
}

pub fn create(body: &UserCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(BASE).with_json(body)
}

pub fn update(body: &UserUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(BASE).with_json(body)
}

pub fn delete(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{BASE}/{id}"))
}
