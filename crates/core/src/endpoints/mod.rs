//! Endpoint builders
//!
//! One module per backend resource. Every function maps its input to exactly
//! one [`ApiRequest`]: list builders run the search object through the
//! [normalizer](crate::normalize), write builders attach the body verbatim.

use serde::Serialize;

use crate::error::CoreError;
use crate::normalize::{normalize, NormalizeRules, Resource};
use crate::request::ApiRequest;

pub mod action;
pub mod ai;
pub mod auth;
pub mod character;
pub mod coach;
pub mod equipment;
pub mod menu;
pub mod muscle;
pub mod role;
pub mod tag;
pub mod upload;
pub mod user;

/// `GET path` with the normalized search object as query
fn list<P: Serialize + ?Sized>(
    path: &str,
    params: &P,
    resource: Resource,
) -> Result<ApiRequest, CoreError> {
    query(ApiRequest::get(path), params, resource.rules())
}

fn query<P: Serialize + ?Sized>(
    request: ApiRequest,
    params: &P,
    rules: NormalizeRules,
) -> Result<ApiRequest, CoreError> {
    Ok(request.with_query(normalize(params, rules)?))
}
