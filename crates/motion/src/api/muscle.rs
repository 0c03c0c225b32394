use motion_core::endpoints::muscle as endpoint;
use motion_core::types::muscle::{
    MuscleByRegionParams, MuscleListItem, MuscleSearchParams, TrainingArea,
};

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

pub struct MuscleApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> MuscleApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub async fn list_by_region(
        &self,
        params: &MuscleByRegionParams,
    ) -> Result<Vec<MuscleListItem>, Error> {
        decode(self.transport.get(endpoint::list_by_region(params)?).await?)
    }

    pub async fn training_areas(
        &self,
        params: Option<&MuscleSearchParams>,
    ) -> Result<Vec<TrainingArea>, Error> {
        decode(self.transport.get(endpoint::training_areas(params)?).await?)
    }
}
