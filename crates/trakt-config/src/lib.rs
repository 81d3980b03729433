//! Typed sensor configuration for the Trakt integration
//!
//! Exposes the membership tests and per-sensor settings the platform setup
//! consults when deciding which entities to create. The configuration is
//! owned and persisted by the host; this crate only reads it.

mod configuration;
mod error;

pub use configuration::{
    Configuration, RecommendationConfig, SensorsConfig, UpcomingConfig, DEFAULT_MAX_MEDIAS,
};
pub use error::{ConfigError, ConfigResult};
