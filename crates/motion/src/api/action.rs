use motion_core::endpoints::action as endpoint;
use motion_core::types::action::{
    ActionCreateBody, ActionListItem, ActionSearchParams, ActionStatus, ActionUpdateBody,
};
use motion_core::types::PaginatedResponse;
use motion_core::{ActionRoutes, ApiRequest};

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

pub struct ActionApi<'a, T> {
    transport: &'a T,
    routes: ActionRoutes,
}

impl<'a, T: Transport> ActionApi<'a, T> {
    pub fn new(transport: &'a T, routes: ActionRoutes) -> Self {
        Self { transport, routes }
    }

    pub async fn list(
        &self,
        params: &ActionSearchParams,
    ) -> Result<PaginatedResponse<ActionListItem>, Error> {
        decode(self.transport.get(endpoint::list(self.routes, params)?).await?)
    }

    pub async fn create(&self, body: &ActionCreateBody) -> Result<(), Error> {
        self.transport
            .post(endpoint::create(self.routes, body)?)
            .await?;
        Ok(())
    }

    /// Method and path depend on the route variant
    pub async fn update(&self, body: &ActionUpdateBody) -> Result<(), Error> {
        self.send(endpoint::update(self.routes, body)?).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete(id)).await?;
        Ok(())
    }

    pub async fn update_status(&self, status: &ActionStatus) -> Result<(), Error> {
        self.transport
            .post(endpoint::update_status(self.routes, status)?)
            .await?;
        Ok(())
    }

    async fn send(&self, request: ApiRequest) -> Result<(), Error> {
        self.transport.request(request.into()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Recording, Via};
    use motion_core::Method;

    fn body() -> ActionUpdateBody {
        ActionUpdateBody {
            id: 9,
            difficulty: Some(3),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_update_uses_variant_method() {
        let transport = Recording::new();
        ActionApi::new(&transport, ActionRoutes::Plural)
            .update(&body())
            .await
            .unwrap();
        let call = transport.single_call();
        assert_eq!(
            (call.request.method, call.request.url.as_str()),
            (Method::Post, "/api/v1/actions/9")
        );

        let transport = Recording::new();
        ActionApi::new(&transport, ActionRoutes::Singular)
            .update(&body())
            .await
            .unwrap();
        let call = transport.single_call();
        assert_eq!(
            (call.request.method, call.request.url.as_str()),
            (Method::Put, "/api/v1/action")
        );
    }

    #[tokio::test]
    async fn test_delete_always_uses_singular_path() {
        let transport = Recording::new();
        ActionApi::new(&transport, ActionRoutes::Plural)
            .delete(42)
            .await
            .unwrap();

        let call = transport.single_call();
        assert_eq!(call.via, Via::Del);
        assert_eq!(call.request.url, "/api/v1/action/42");
    }
}
