use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::types::tag::TagSearchParams;

pub fn list(params: &TagSearchParams) -> Result<ApiRequest, CoreError> {
    super::list("/api/v1/tags", params, Resource::Tag)
}
