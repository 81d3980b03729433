//! Recommendation sensor
//!
//! Only kinds in the basic subset get one of these; the full recommendation
//! list is shown without truncation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use trakt_coordinator::Coordinator;
use trakt_core::{DataSource, Medias, TraktKind};

use crate::entity::Entity;

/// Sensor showing recommended items for one media kind
pub struct TraktRecommendationSensor {
    coordinator: Arc<dyn Coordinator>,
    kind: TraktKind,
}

impl TraktRecommendationSensor {
    pub fn new(coordinator: Arc<dyn Coordinator>, kind: TraktKind) -> Self {
        Self { coordinator, kind }
    }

    fn medias(&self) -> Option<Medias> {
        let data = self.coordinator.data()?;
        data.medias(DataSource::Recommendation, self.kind).cloned()
    }

    /// Display items, untruncated
    pub fn data(&self) -> Vec<Value> {
        match self.medias() {
            Some(medias) => medias.to_homeassistant(),
            None => Vec::new(),
        }
    }
}

#[async_trait]
impl Entity for TraktRecommendationSensor {
    fn name(&self) -> String {
        format!("Trakt Recommendation {}", self.kind.name())
    }

    fn state(&self) -> u64 {
        self.data().len() as u64
    }

    fn icon(&self) -> &'static str {
        "mdi:movie"
    }

    fn unit_of_measurement(&self) -> &'static str {
        self.kind.path()
    }

    fn extra_state_attributes(&self) -> HashMap<String, Value> {
        HashMap::from([("data".to_string(), Value::Array(self.data()))])
    }

    async fn update(&self) {
        self.coordinator.request_refresh().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movies, StubCoordinator};
    use trakt_core::TraktData;

    fn sensor(coordinator: Arc<StubCoordinator>, kind: TraktKind) -> TraktRecommendationSensor {
        TraktRecommendationSensor::new(coordinator, kind)
    }

    #[test]
    fn test_name_and_unit() {
        let sensor = sensor(Arc::new(StubCoordinator::empty()), TraktKind::Movie);
        assert_eq!(sensor.name(), "Trakt Recommendation Movies");
        assert_eq!(sensor.unit_of_measurement(), "movies");
        assert_eq!(sensor.icon(), "mdi:movie");
    }

    #[test]
    fn test_no_data_yields_zero_state() {
        let sensor = sensor(Arc::new(StubCoordinator::empty()), TraktKind::Movie);
        assert_eq!(sensor.state(), 0);
        assert!(sensor.data().is_empty());
    }

    #[test]
    fn test_full_list_without_truncation() {
        let mut data = TraktData::new();
        data.insert(DataSource::Recommendation, TraktKind::Movie, movies(2));
        let sensor = sensor(Arc::new(StubCoordinator::with_data(data)), TraktKind::Movie);

        assert_eq!(sensor.data().len(), 2);
        assert_eq!(sensor.state(), 2);
    }

    #[test]
    fn test_large_list_stays_untruncated() {
        let mut data = TraktData::new();
        data.insert(DataSource::Recommendation, TraktKind::Movie, movies(12));
        let sensor = sensor(Arc::new(StubCoordinator::with_data(data)), TraktKind::Movie);

        assert_eq!(sensor.data().len(), 12);
        assert_eq!(sensor.state(), 12);
    }

    #[tokio::test]
    async fn test_update_delegates_to_coordinator() {
        let coordinator = Arc::new(StubCoordinator::empty());
        let sensor = sensor(coordinator.clone(), TraktKind::Movie);

        sensor.update().await;
        assert_eq!(coordinator.refresh_count(), 1);
    }
}
