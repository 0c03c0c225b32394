use motion_core::endpoints::user as endpoint;
use motion_core::types::system::{UserCreateBody, UserListItem, UserSearchParams, UserUpdateBody};
use motion_core::types::PaginatedResponse;

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

pub struct UserApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> UserApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &UserSearchParams,
    ) -> Result<PaginatedResponse<UserListItem>, Error> {
        decode(self.transport.get(endpoint::list(params)?).await?)
    }

    pub async fn create(&self, body: &UserCreateBody) -> Result<(), Error> {
        self.transport.post(endpoint::create(body)?).await?;
        Ok(())
    }

    pub async fn update(&self, body: &UserUpdateBody) -> Result<(), Error> {
        self.transport.put(endpoint::update(body)?).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Recording, Via};
    use motion_core::{Body, Method};
    use serde_json::json;

    #[tokio::test]
    async fn test_delete_makes_one_delete_call() {
        let transport = Recording::new();
        UserApi::new(&transport).delete(42).await.unwrap();

        let call = transport.single_call();
        assert_eq!(call.via, Via::Del);
        assert_eq!(call.request.method, Method::Delete);
        assert!(call.request.url.contains("42"));
        assert_eq!(call.request.body, Body::Empty);
    }

    #[tokio::test]
    async fn test_list_decodes_page() {
        let transport = Recording::new().reply(Ok(json!({
            "list": [{
                "id": 1,
                "username": "ann",
                "mobile": "555",
                "gender": 2,
                "status": "1"
            }],
            "page": 1,
            "size": 20,
            "total": 1
        })));

        let page = UserApi::new(&transport)
            .list(&UserSearchParams::default())
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.list[0].username, "ann");
        assert_eq!(transport.single_call().via, Via::Get);
    }
}
