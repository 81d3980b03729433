//! Host entity protocol as consumed by this platform

use std::collections::HashMap;

use async_trait::async_trait;

/// The subset of the host platform's entity protocol these sensors implement
///
/// Property reads are synchronous and side-effect-free; the host polls them
/// on its own schedule and invokes [`Entity::update`] between polls.
#[async_trait]
pub trait Entity: Send + Sync {
    /// Display name of the entity
    fn name(&self) -> String;

    /// Numeric state shown by the sensor
    fn state(&self) -> u64;

    /// Material Design icon name
    fn icon(&self) -> &'static str;

    /// Unit label shown next to the state
    fn unit_of_measurement(&self) -> &'static str;

    /// Free-form attribute payload attached to the state
    fn extra_state_attributes(&self) -> HashMap<String, serde_json::Value>;

    /// Update hook invoked by the host's polling loop
    async fn update(&self);
}
