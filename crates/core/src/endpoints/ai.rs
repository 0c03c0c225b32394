use crate::error::CoreError;
use crate::normalize::Resource;
use crate::request::ApiRequest;
use crate::types::ai::AiActionSearchParams;

pub fn list(params: &AiActionSearchParams) -> Result<ApiRequest, CoreError> {
    super::list("/api/v1/so-libs/actions", params, Resource::AiAction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::fixtures::query_json;
    use crate::types::PageParams;
    use serde_json::json;

    #[test]
    fn test_list_renames_size() {
        let request = list(&AiActionSearchParams {
            page: PageParams::new(1, 20),
            name: Some(" push ".to_string()),
            id: None,
        })
        .unwrap();

        assert_eq!(request.url, "/api/v1/so-libs/actions");
        assert_eq!(
            query_json(&request),
            json!({ "page": 1, "pageSize": 20, "name": " push " })
        );
    }
}
