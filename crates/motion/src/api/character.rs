use motion_core::endpoints::character as endpoint;
use motion_core::types::character::{
    CharacterCreateBody, CharacterListItem, CharacterPermissionBody, CharacterSearchParams,
    CharacterUpdateBody,
};
use motion_core::types::PaginatedResponse;

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

/// Admin characters (back-office roles with their own menu grants)
pub struct CharacterApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> CharacterApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &CharacterSearchParams,
    ) -> Result<PaginatedResponse<CharacterListItem>, Error> {
        decode(self.transport.get(endpoint::list(params)?).await?)
    }

    pub async fn create(&self, body: &CharacterCreateBody) -> Result<(), Error> {
        self.transport.post(endpoint::create(body)?).await?;
        Ok(())
    }

    pub async fn update(&self, body: &CharacterUpdateBody) -> Result<(), Error> {
        self.transport.put(endpoint::update(body)?).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete(id)).await?;
        Ok(())
    }

    pub async fn update_permission(&self, body: &CharacterPermissionBody) -> Result<(), Error> {
        self.transport
            .put(endpoint::update_permission(body)?)
            .await?;
        Ok(())
    }

    pub async fn toggle_status(&self, id: u64, status: u8) -> Result<(), Error> {
        self.transport
            .put(endpoint::toggle_status(id, status)?)
            .await?;
        Ok(())
    }
}
