use motion_core::endpoints::role as endpoint;
use motion_core::types::system::{
    RoleCreateBody, RoleListItem, RolePermissionUpdateBody, RoleSearchParams, RoleUpdateBody,
};
use motion_core::types::PaginatedResponse;

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

pub struct RoleApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> RoleApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &RoleSearchParams,
    ) -> Result<PaginatedResponse<RoleListItem>, Error> {
        decode(self.transport.get(endpoint::list(params)?).await?)
    }

    pub async fn create(&self, body: &RoleCreateBody) -> Result<(), Error> {
        self.transport.post(endpoint::create(body)?).await?;
        Ok(())
    }

    pub async fn update(&self, body: &RoleUpdateBody) -> Result<(), Error> {
        self.transport.put(endpoint::update(body)?).await?;
        Ok(())
    }

    /// Replace the role's menu grants
    pub async fn update_permission(&self, body: &RolePermissionUpdateBody) -> Result<(), Error> {
        self.transport
            .put(endpoint::update_permission(body)?)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete(id)).await?;
        Ok(())
    }
}
