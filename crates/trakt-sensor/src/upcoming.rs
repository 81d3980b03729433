//! Upcoming sensor
//!
//! One entity per enabled (kind, variant) combination. The plain variant
//! reads the `upcoming` dataset (the user's own calendar); the all-media
//! variant reads `all_upcoming`. Both are views recomputed on each read
//! from the coordinator's current snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use trakt_config::{Configuration, DEFAULT_MAX_MEDIAS};
use trakt_coordinator::Coordinator;
use trakt_core::{DataSource, Medias, TraktKind};

use crate::entity::Entity;

/// Sensor showing upcoming items for one media kind
pub struct TraktUpcomingSensor {
    coordinator: Arc<dyn Coordinator>,
    configuration: Arc<Configuration>,
    kind: TraktKind,
    all_medias: bool,
}

impl TraktUpcomingSensor {
    pub fn new(
        coordinator: Arc<dyn Coordinator>,
        configuration: Arc<Configuration>,
        kind: TraktKind,
        all_medias: bool,
    ) -> Self {
        Self {
            coordinator,
            configuration,
            kind,
            all_medias,
        }
    }

    /// Which dataset this variant reads
    pub fn source(&self) -> DataSource {
        if self.all_medias {
            DataSource::AllUpcoming
        } else {
            DataSource::Upcoming
        }
    }

    fn medias(&self) -> Option<Medias> {
        let data = self.coordinator.data()?;
        data.medias(self.source(), self.kind).cloned()
    }

    /// Display items, truncated to the configured maximum plus one
    ///
    /// The `max_medias + 1` bound and the matching `len - 1` state below
    /// are long-standing observed behavior and are kept as-is; existing
    /// dashboards depend on the displayed counts.
    pub fn data(&self) -> Vec<Value> {
        match self.medias() {
            Some(medias) => {
                let max_medias = self
                    .configuration
                    .upcoming_max_medias(self.kind.identifier(), self.all_medias)
                    .unwrap_or(DEFAULT_MAX_MEDIAS);
                let mut items = medias.to_homeassistant();
                items.truncate(max_medias + 1);
                items
            }
            None => Vec::new(),
        }
    }
}

#[async_trait]
impl Entity for TraktUpcomingSensor {
    fn name(&self) -> String {
        let prefix = if self.all_medias { "All " } else { "" };
        format!("Trakt {}Upcoming {}", prefix, self.kind.name())
    }

    fn state(&self) -> u64 {
        self.data().len().saturating_sub(1) as u64
    }

    fn icon(&self) -> &'static str {
        "mdi:calendar"
    }

    fn unit_of_measurement(&self) -> &'static str {
        "items"
    }

    fn extra_state_attributes(&self) -> HashMap<String, Value> {
        HashMap::from([("data".to_string(), Value::Array(self.data()))])
    }

    async fn update(&self) {
        self.coordinator.request_refresh().await;
    }
}
