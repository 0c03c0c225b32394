use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::types::muscle::{MuscleByRegionParams, MuscleSearchParams};

/// Muscles of one training area
pub fn list_by_region(params: &MuscleByRegionParams) -> Result<ApiRequest, CoreError> {
    super::list("/api/v1/muscle/list", params, Resource::Muscle)
}

pub fn training_areas(params: Option<&MuscleSearchParams>) -> Result<ApiRequest, CoreError> {
    super::list("/api/v1/muscle/region", &params, Resource::Muscle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::fixtures::query_json;
    use serde_json::json;

    #[test]
    fn test_list_by_region() {
        let request = list_by_region(&MuscleByRegionParams { region_id: 3 }).unwrap();
        assert_eq!(request.url, "/api/v1/muscle/list");
        assert_eq!(query_json(&request), json!({ "regionId": 3 }));
    }

    #[test]
    fn test_training_areas_without_params() {
        let request = training_areas(None).unwrap();
        assert_eq!(request.url, "/api/v1/muscle/region");
        assert!(request.query.is_empty());
    }
}
