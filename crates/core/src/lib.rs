//! Core library for the motion admin client
//!
//! This crate is the **Functional Core** of the motion admin client. It
//! describes every backend call as plain data and leaves the network to the
//! `motion` crate (the Imperative Shell).
//!
//! # Architecture Overview
//!
//! - **`motion_core`** (this crate): pure request shaping, wire types and
//!   parameter normalization. No I/O.
//! - **`motion`**: the transport, typed resource clients and the CLI.
//!
//! A resource operation is always the same pipeline:
//!
//! ```text
//! input ──▶ endpoints::<resource>::<op> ──▶ ApiRequest ──▶ Transport ──▶ typed output
//!                 │
//!                 └── list endpoints run the search object through normalize
//! ```
//!
//! # Module Organization
//!
//! - [`endpoints`]: one builder per backend operation, grouped by resource
//! - [`normalize`]: the per-resource `size`/`name` renaming table
//! - [`request`]: [`ApiRequest`] and its body/multipart representation
//! - [`routes`]: route variants that differ between backend deployments
//! - [`types`]: request and response wire types
//!
//! # Example Usage
//!
//! ```rust
//! use motion_core::endpoints::coach;
//! use motion_core::routes::CoachRoutes;
//! use motion_core::types::coach::CoachSearchParams;
//! use motion_core::types::PageParams;
//!
//! let request = coach::list(
//!     CoachRoutes::Plural,
//!     &CoachSearchParams {
//!         page: PageParams::new(1, 20),
//!         name: Some("  John  ".to_string()),
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(request.url, "/api/v1/coaches");
//! assert_eq!(request.query["pageSize"], 20);
//! assert_eq!(request.query["keyword"], "John");
//! ```

pub mod endpoints;
pub mod error;
pub mod normalize;
pub mod request;
pub mod routes;
pub mod types;

pub use error::CoreError;
pub use normalize::{normalize, normalize_map, NormalizeRules, Resource};
pub use request::{ApiRequest, Body, FormPart, FormValue, Method, UploadFile};
pub use routes::{ActionRoutes, CoachRoutes, ProfileRoutes, RouteConfig};
