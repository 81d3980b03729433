//! Core types for the Trakt integration
//!
//! This crate provides the types shared by the coordinator and the sensor
//! platform: the media kind registry, media item models with their
//! upcoming-media-card representation, and the coordinator snapshot.

mod data;
mod kind;
mod media;

pub use data::{DataSource, TraktData};
pub use kind::{MediaInformation, TraktKind, BASIC_KINDS};
pub use media::{Episode, Media, Medias, Movie};
