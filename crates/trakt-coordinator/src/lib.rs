//! Data update coordinator for the Trakt sensors
//!
//! Sensors are views over the coordinator's latest snapshot: they read the
//! current reference synchronously and delegate refreshes back to the
//! coordinator. Retry, backoff and scheduling policy belong to the
//! coordinator's owner, not to this crate.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::{debug, warn};

use trakt_core::TraktData;

/// Read side of the coordinator as consumed by sensor entities
#[async_trait]
pub trait Coordinator: Send + Sync {
    /// The current snapshot, if at least one refresh has completed
    fn data(&self) -> Option<Arc<TraktData>>;

    /// Ask the coordinator to fetch fresh data
    ///
    /// Callers do not consume a result; failures are the coordinator's to
    /// handle and log.
    async fn request_refresh(&self);
}

/// Update function supplied by the integration's API client
pub type UpdateFn = Box<dyn Fn() -> BoxFuture<'static, anyhow::Result<TraktData>> + Send + Sync>;

/// Coordinator holding the latest fetched snapshot
///
/// The snapshot is replaced wholesale on each successful refresh; a failed
/// refresh keeps the previous snapshot in place.
pub struct DataUpdateCoordinator {
    name: String,
    update_fn: UpdateFn,
    data: RwLock<Option<Arc<TraktData>>>,
}

impl DataUpdateCoordinator {
    /// Create a coordinator that fetches through `update_fn`
    pub fn new(name: impl Into<String>, update_fn: UpdateFn) -> Self {
        Self {
            name: name.into(),
            update_fn,
            data: RwLock::new(None),
        }
    }

    /// Replace the snapshot directly, bypassing the update function
    pub fn set_data(&self, data: TraktData) {
        *self
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(data));
    }
}

#[async_trait]
impl Coordinator for DataUpdateCoordinator {
    fn data(&self) -> Option<Arc<TraktData>> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn request_refresh(&self) {
        debug!(coordinator = %self.name, "Refresh requested");
        match (self.update_fn)().await {
            Ok(data) => {
                *self
                    .data
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(data));
                debug!(coordinator = %self.name, "Snapshot replaced");
            }
            Err(error) => {
                warn!(
                    coordinator = %self.name,
                    %error,
                    "Update failed, keeping previous snapshot"
                );
            }
        }
    }
}
