//! Dynamic Section View
//!
//! Binds route parameters (entity kind, entity id, section id) to a view
//! model for the dynamic section test page.
//!
//! - `entity` / `params`: entity references and raw route parameters
//! - `section` / `registry`: section descriptors and the immutable lookup table
//! - `binder`: activation, producing a `ViewModel`
//! - `api_server` / `web`: Axum router and Askama page (feature `api`)

pub mod binder;
pub mod config;
pub mod entity;
pub mod error;
pub mod params;
pub mod registry;
pub mod section;
pub mod view_model;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use binder::{BinderPhase, ViewBinder};
pub use config::ServerConfig;
pub use entity::{EntityId, EntityRef};
pub use error::{ConfigError, RegistryError};
pub use params::RouteParams;
pub use registry::SectionRegistry;
pub use section::{SectionDescriptor, SectionId};
pub use view_model::ViewModel;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppError, AppState};
