//! HTTP facade over the registers of a SUN2000 inverter, its battery and its meter.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod startup;
pub mod validate;

pub use api::{router, AppState};
pub use auth::ApiKeys;
pub use config::ServiceConfig;
pub use error::ApiError;
pub use pipeline::AccessPipeline;
pub use startup::{connect_device, CONNECT_FAILED};
