use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::types::equipment::{
    EquipmentCreateBody, EquipmentSearchParams, EquipmentSort, EquipmentUpdateBody,
};

const BASE: &str = "/api/v1/equipment";

/// Listing is served from the instruments collection.
pub fn list(params: &EquipmentSearchParams) -> Result<ApiRequest, CoreError> {
    super::list("/api/v1/instruments", params, Resource::Equipment)
}

pub fn create(body: &EquipmentCreateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::post(BASE).with_json(body)
}

pub fn update(body: &EquipmentUpdateBody) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(BASE).with_json(body)
}

pub fn delete(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("{BASE}/{id}"))
}

pub fn check_in_use(id: u64) -> ApiRequest {
    ApiRequest::get(format!("{BASE}/{id}/check-in-use"))
}

pub fn translate(id: u64) -> ApiRequest {
    ApiRequest::post(format!("{BASE}/{id}/translate"))
}

pub fn update_sort(id: u64, sort: i32) -> Result<ApiRequest, CoreError> {
    ApiRequest::put(format!("{BASE}/{id}/sort")).with_json(&EquipmentSort { sort })
}
