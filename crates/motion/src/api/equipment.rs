use motion_core::endpoints::equipment as endpoint;
use motion_core::types::equipment::{
    EquipmentCreateBody, EquipmentListItem, EquipmentSearchParams, EquipmentUpdateBody,
};
use motion_core::types::{InUse, PaginatedResponse};

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

pub struct EquipmentApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> EquipmentApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &EquipmentSearchParams,
    ) -> Result<PaginatedResponse<EquipmentListItem>, Error> {
        decode(self.transport.get(endpoint::list(params)?).await?)
    }

    pub async fn create(&self, body: &EquipmentCreateBody) -> Result<(), Error> {
        self.transport.post(endpoint::create(body)?).await?;
        Ok(())
    }

    pub async fn update(&self, body: &EquipmentUpdateBody) -> Result<(), Error> {
        self.transport.put(endpoint::update(body)?).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete(id)).await?;
        Ok(())
    }

    pub async fn check_in_use(&self, id: u64) -> Result<InUse, Error> {
        decode(self.transport.get(endpoint::check_in_use(id)).await?)
    }

    pub async fn translate(&self, id: u64) -> Result<(), Error> {
        self.transport.post(endpoint::translate(id)).await?;
        Ok(())
    }

    pub async fn update_sort(&self, id: u64, sort: i32) -> Result<(), Error> {
        self.transport.put(endpoint::update_sort(id, sort)?).await?;
        Ok(())
    }
}
