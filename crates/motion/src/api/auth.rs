use motion_core::endpoints::auth as endpoint;
use motion_core::types::auth::{
    ChangePasswordParams, LoginParams, LoginResponse, RegisterParams, UpdateUserInfoParams,
    UserInfo,
};
use motion_core::ProfileRoutes;

use super::decode;
use crate::error::Error;
use crate::transport::Transport;

/// Sign-in and the current user's profile
pub struct AuthApi<'a, T> {
    transport: &'a T,
    profile: ProfileRoutes,
}

impl<'a, T: Transport> AuthApi<'a, T> {
    pub fn new(transport: &'a T, profile: ProfileRoutes) -> Self {
        Self { transport, profile }
    }

    pub async fn login(&self, params: &LoginParams) -> Result<LoginResponse, Error> {
        decode(self.transport.post(endpoint::login(params)?).await?)
    }

    pub async fn register(&self, params: &RegisterParams) -> Result<LoginResponse, Error> {
        decode(self.transport.post(endpoint::register(params)?).await?)
    }

    pub async fn user_info(&self) -> Result<UserInfo, Error> {
        decode(self.transport.get(endpoint::user_info()).await?)
    }

    pub async fn update_user_info(&self, params: &UpdateUserInfoParams) -> Result<(), Error> {
        self.transport
            .put(endpoint::update_user_info(self.profile, params)?)
            .await?;
        Ok(())
    }

    pub async fn change_password(&self, params: &ChangePasswordParams) -> Result<(), Error> {
        self.transport
            .put(endpoint::change_password(params)?)
            .await?;
        Ok(())
    }
}
