//! Coordinator snapshot type
//!
//! The coordinator replaces the snapshot wholesale on each refresh cycle;
//! readers only look up the latest reference and never mutate it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Medias, TraktKind};

/// Key selecting which fetched dataset a sensor reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Upcoming,
    AllUpcoming,
    Recommendation,
}

impl DataSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataSource::Upcoming => "upcoming",
            DataSource::AllUpcoming => "all_upcoming",
            DataSource::Recommendation => "recommendation",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The coordinator's current view of fetched upstream data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraktData {
    sources: HashMap<DataSource, HashMap<TraktKind, Medias>>,
}

impl TraktData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the items for one (source, kind) cell
    pub fn insert(&mut self, source: DataSource, kind: TraktKind, medias: Medias) {
        self.sources.entry(source).or_default().insert(kind, medias);
    }

    /// Items for one (source, kind) cell, if fetched
    pub fn medias(&self, source: DataSource, kind: TraktKind) -> Option<&Medias> {
        self.sources.get(&source)?.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
