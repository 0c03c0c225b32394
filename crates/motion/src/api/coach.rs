use motion_core::endpoints::coach as endpoint;
use motion_core::types::coach::{
    CoachCreateBody, CoachListItem, CoachSearchParams, CoachUpdateBody,
};
use motion_core::types::{InUse, PaginatedResponse};
use motion_core::CoachRoutes;

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

pub struct CoachApi<'a, T> {
    transport: &'a T,
    routes: CoachRoutes,
}

impl<'a, T: Transport> CoachApi<'a, T> {
    pub fn new(transport: &'a T, routes: CoachRoutes) -> Self {
        Self { transport, routes }
    }

    pub async fn list(
        &self,
        params: &CoachSearchParams,
    ) -> Result<PaginatedResponse<CoachListItem>, Error> {
        decode(self.transport.get(endpoint::list(self.routes, params)?).await?)
    }

    pub async fn create(&self, body: &CoachCreateBody) -> Result<(), Error> {
        self.transport
            .post(endpoint::create(self.routes, body)?)
            .await?;
        Ok(())
    }

    pub async fn update(&self, body: &CoachUpdateBody) -> Result<(), Error> {
        self.transport
            .put(endpoint::update(self.routes, body)?)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete(self.routes, id)).await?;
        Ok(())
    }

    pub async fn check_in_use(&self, id: u64) -> Result<InUse, Error> {
        decode(
            self.transport
                .get(endpoint::check_in_use(self.routes, id))
                .await?,
        )
    }

    pub async fn translate(&self, id: u64) -> Result<(), Error> {
        self.transport
            .post(endpoint::translate(self.routes, id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Recording, Via};
    use motion_core::types::PageParams;
    use serde_json::json;

    #[tokio::test]
    async fn test_plural_list_sends_normalized_query() {
        let transport = Recording::new().reply(Ok(json!({
            "list": [],
            "page": 1,
            "size": 20,
            "total": 0
        })));

        let page = CoachApi::new(&transport, CoachRoutes::Plural)
            .list(&CoachSearchParams {
                page: PageParams::new(1, 20),
                name: Some("  John  ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(page.list.is_empty());

        let call = transport.single_call();
        assert_eq!(call.request.url, "/api/v1/coaches");
        assert_eq!(
            serde_json::Value::Object(call.request.query),
            json!({ "page": 1, "pageSize": 20, "keyword": "John" })
        );
    }

    #[tokio::test]
    async fn test_singular_list_decodes_coaches() {
        let transport = Recording::new().reply(Ok(json!({
            "list": [
                { "id": 1, "name": "Ada", "email": "ada@example.com", "status": 1 },
                { "id": 2, "name": "Lin", "status": 2, "hasChildren": false }
            ],
            "page": 1,
            "size": 2,
            "total": 3
        })));

        let page = CoachApi::new(&transport, CoachRoutes::Singular)
            .list(&CoachSearchParams::default())
            .await
            .unwrap();

        let names: Vec<&str> = page.list.iter().map(|coach| coach.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Lin"]);
        assert!(page.has_next_page());
        assert_eq!(transport.single_call().request.url, "/api/v1/coach");
    }

    #[tokio::test]
    async fn test_check_in_use() {
        let transport = Recording::new().reply(Ok(json!({ "inUse": true })));

        let in_use = CoachApi::new(&transport, CoachRoutes::Singular)
            .check_in_use(7)
            .await
            .unwrap();
        assert!(in_use.in_use);

        let call = transport.single_call();
        assert_eq!(call.via, Via::Get);
        assert_eq!(call.request.url, "/api/v1/coach/7/check-in-use");
    }
}
