use motion_core::endpoints::tag as endpoint;
use motion_core::types::tag::{TagListItem, TagSearchParams};
use motion_core::types::PaginatedResponse;

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

pub struct TagApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> TagApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        params: &TagSearchParams,
    ) -> Result<PaginatedResponse<TagListItem>, Error> {
        decode(self.transport.get(endpoint::list(params)?).await?)
    }
}
