//! Imperative shell of the motion admin client
//!
//! Owns everything that touches the network. Requests are shaped by
//! [`motion_core`]; this crate sends them through a [`Transport`] and decodes
//! the answers into typed responses.
//!
//! ```rust,no_run
//! use motion::{Client, HttpTransport, MotionConfig};
//! use motion_core::{ActionRoutes, CoachRoutes, ProfileRoutes, RouteConfig};
//!
//! # async fn run() -> Result<(), motion::Error> {
//! let config = MotionConfig::from_env()?;
//! let routes = RouteConfig::new(CoachRoutes::Plural, ActionRoutes::Plural, ProfileRoutes::User);
//! let client = Client::new(HttpTransport::new(&config)?, routes);
//!
//! let in_use = client.coaches().check_in_use(42).await?;
//! println!("coach 42 in use: {}", in_use.in_use);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use api::Client;
pub use config::MotionConfig;
pub use error::Error;
pub use http::HttpTransport;
pub use transport::{ProgressCallback, RequestConfig, Transport, TransportError, UploadProgress};
