use motion_core::endpoints::ai as endpoint;
use motion_core::types::ai::{AiActionItem, AiActionSearchParams};
use motion_core::types::PaginatedResponse;

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

/// AI action library
pub struct AiActionApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> AiActionApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &AiActionSearchParams,
    ) -> Result<PaginatedResponse<AiActionItem>, Error> {
        decode(self.transport.get(endpoint::list(params)?).await?)
    }
}
