use motion_core::endpoints::menu as endpoint;
use motion_core::types::system::{
    MenuActionCreateBody, MenuActionUpdateBody, MenuCreateBody, MenuRoute, MenuUpdateBody,
};

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

/// Menu tree and its permission buttons
pub struct MenuApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> MenuApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn all_tree(&self) -> Result<Vec<MenuRoute>, Error> {
        decode(self.transport.get(endpoint::all_tree()).await?)
    }

    /// Only the entries the signed-in user may see
    pub async fn current_user_tree(&self) -> Result<Vec<MenuRoute>, Error> {
        decode(self.transport.get(endpoint::current_user_tree()).await?)
    }

    pub async fn create(&self, body: &MenuCreateBody) -> Result<(), Error> {
        self.transport.post(endpoint::create(body)?).await?;
        Ok(())
    }

    pub async fn update(&self, body: &MenuUpdateBody) -> Result<(), Error> {
        self.transport.put(endpoint::update(body)?).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete(id)).await?;
        Ok(())
    }

    pub async fn create_action(&self, body: &MenuActionCreateBody) -> Result<(), Error> {
        self.transport.post(endpoint::create_action(body)?).await?;
        Ok(())
    }

    pub async fn update_action(&self, body: &MenuActionUpdateBody) -> Result<(), Error> {
        self.transport.put(endpoint::update_action(body)?).await?;
        Ok(())
    }

    pub async fn delete_action(&self, id: u64) -> Result<(), Error> {
        self.transport.del(endpoint::delete_action(id)).await?;
        Ok(())
    }

    pub async fn permission_codes(&self) -> Result<Vec<String>, Error> {
        decode(self.transport.get(endpoint::permission_codes()).await?)
    }
}
