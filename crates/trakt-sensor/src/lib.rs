//! Sensor platform exposing Trakt data as host entities
//!
//! The platform maps the coordinator's cached snapshot onto a fixed set of
//! display entities. Entities are views: identity (kind, variant) is fixed
//! at construction, while state and attributes are recomputed from the
//! current snapshot on every read.

mod entity;
mod recommendation;
#[cfg(test)]
mod test_support;
mod upcoming;

pub use entity::Entity;
pub use recommendation::TraktRecommendationSensor;
pub use upcoming::TraktUpcomingSensor;

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use trakt_config::Configuration;
use trakt_coordinator::Coordinator;
use trakt_core::TraktKind;

/// How often the host polls these sensors
pub const SCAN_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Build the sensor entities enabled by the configuration
///
/// For every media kind, each upcoming variant gets an entity iff its
/// (source, kind) combination is configured. A recommendation entity is
/// added iff configured and the kind is in the basic subset. Absent
/// configuration simply yields no entity for that combination.
pub fn setup_entry(
    coordinator: Arc<dyn Coordinator>,
    configuration: Arc<Configuration>,
) -> Vec<Box<dyn Entity>> {
    let mut sensors: Vec<Box<dyn Entity>> = Vec::new();

    for kind in TraktKind::all() {
        let identifier = kind.identifier();
        for all_medias in [false, true] {
            if configuration.upcoming_identifier_exists(identifier, all_medias) {
                sensors.push(Box::new(TraktUpcomingSensor::new(
                    coordinator.clone(),
                    configuration.clone(),
                    kind,
                    all_medias,
                )));
            }
        }
        if configuration.recommendation_identifier_exists(identifier) && kind.is_basic() {
            sensors.push(Box::new(TraktRecommendationSensor::new(
                coordinator.clone(),
                kind,
            )));
        }
    }

    debug!(count = sensors.len(), "Created Trakt sensors");
    sensors
}
