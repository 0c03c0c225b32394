use crate::error::CoreError;
use crate::normalize::NormalizeRules;
use crate::request::ApiRequest;
use crate::routes::ProfileRoutes;
use crate::types::auth::{ChangePasswordParams, LoginParams, RegisterParams, UpdateUserInfoParams};

/// `POST /api/v1/auth/login`. The backend reads the credentials from the
/// query string, not the body.
pub fn login(params: &LoginParams) -> Result<ApiRequest, CoreError> {
    super::query(
        ApiRequest::post("/api/v1/auth/login"),
        params,
        NormalizeRules::PASSTHROUGH,
    )
}

/// `POST /api/v1/auth/register`; the response logs the new user in.
pub fn register(params: &RegisterParams) -> Result<ApiRequest, CoreError> {
    ApiRequest::post("/api/v1/auth/register").with_json(params)
}

pub fn user_info() -> ApiRequest {
    ApiRequest::get("/api/v1/user/info")
}

pub fn update_user_info(
    routes: ProfileRoutes,
    params: &UpdateUserInfoParams,
) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(routes.update_path()).with_json(params)
}

pub fn change_password(params: &ChangePasswordParams) -> Result<ApiRequest, CoreError> {
    ApiRequest::put("/api/v1/user/reset-password").with_json(params)
}
