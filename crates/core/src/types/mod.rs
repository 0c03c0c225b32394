//! Wire types for every backend namespace
//!
//! One module per namespace. Field names are snake_case in Rust and camelCase
//! on the wire. Optional fields are skipped when `None` so that an absent
//! value never reaches the backend as `null`.

pub mod account;
pub mod action;
pub mod ai;
pub mod auth;
pub mod character;
pub mod coach;
pub mod common;
pub mod equipment;
pub mod muscle;
pub mod system;
pub mod tag;

pub use common::{
    EnableStatus, InUse, PageParams, PaginatedResponse, UploadCredentials, UploadFileResponse,
};
