//! Typed resource clients
//!
//! Each operation builds its request with `motion_core::endpoints` and makes
//! exactly one transport call. Nothing here retries, caches or validates.

use motion_core::RouteConfig;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::transport::Transport;

pub mod action;
pub mod ai;
pub mod auth;
pub mod character;
pub mod coach;
pub mod equipment;
pub mod menu;
pub mod muscle;
pub mod role;
pub mod tag;
pub mod upload;
pub mod user;

pub use action::ActionApi;
pub use ai::AiActionApi;
pub use auth::AuthApi;
pub use character::CharacterApi;
pub use coach::CoachApi;
pub use equipment::EquipmentApi;
pub use menu::MenuApi;
pub use muscle::MuscleApi;
pub use role::RoleApi;
pub use tag::TagApi;
pub use upload::UploadApi;
pub use user::UserApi;

/// Entry point to every resource client of one backend deployment
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
    routes: RouteConfig,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, routes: RouteConfig) -> Self {
        Self { transport, routes }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn routes(&self) -> RouteConfig {
        self.routes
    }

    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi::new(&self.transport, self.routes.profile)
    }

    pub fn users(&self) -> UserApi<'_, T> {
        UserApi::new(&self.transport)
    }

    pub fn roles(&self) -> RoleApi<'_, T> {
        RoleApi::new(&self.transport)
    }

    pub fn menus(&self) -> MenuApi<'_, T> {
        MenuApi::new(&self.transport)
    }

    pub fn tags(&self) -> TagApi<'_, T> {
        TagApi::new(&self.transport)
    }

    pub fn coaches(&self) -> CoachApi<'_, T> {
        CoachApi::new(&self.transport, self.routes.coach)
    }

    pub fn actions(&self) -> ActionApi<'_, T> {
        ActionApi::new(&self.transport, self.routes.action)
    }

    pub fn equipment(&self) -> EquipmentApi<'_, T> {
        EquipmentApi::new(&self.transport)
    }

    pub fn characters(&self) -> CharacterApi<'_, T> {
        CharacterApi::new(&self.transport)
    }

    pub fn ai_actions(&self) -> AiActionApi<'_, T> {
        AiActionApi::new(&self.transport)
    }

    pub fn muscles(&self) -> MuscleApi<'_, T> {
        MuscleApi::new(&self.transport)
    }

    pub fn uploads(&self) -> UploadApi<'_, T> {
        UploadApi::new(&self.transport)
    }
}

pub(crate) fn decode<R: DeserializeOwned>(value: Value) -> Result<R, Error> {
    serde_json::from_value(value).map_err(Error::Decode)
}
