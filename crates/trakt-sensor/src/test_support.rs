//! Shared helpers for sensor tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use trakt_config::Configuration;
use trakt_coordinator::Coordinator;
use trakt_core::{Media, Medias, Movie, TraktData};

/// Coordinator stub serving a fixed snapshot and counting refresh requests
pub(crate) struct StubCoordinator {
    data: Option<Arc<TraktData>>,
    refreshes: AtomicUsize,
}

impl StubCoordinator {
    pub(crate) fn empty() -> Self {
        Self {
            data: None,
            refreshes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_data(data: TraktData) -> Self {
        Self {
            data: Some(Arc::new(data)),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Coordinator for StubCoordinator {
    fn data(&self) -> Option<Arc<TraktData>> {
        self.data.clone()
    }

    async fn request_refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Configuration used across the sensor tests
///
/// Upcoming movie sensors cap at 3 items; premiere appears under
/// recommendation even though it is outside the basic subset.
pub(crate) fn configuration() -> Configuration {
    Configuration::from_yaml_str(
        r#"
sensors:
  upcoming:
    movie:
      max_medias: 3
    show:
      max_medias: 5
  all_upcoming:
    show:
      max_medias: 2
  recommendation:
    movie: {}
    premiere: {}
"#,
    )
    .unwrap()
}

/// `count` distinct movies
pub(crate) fn movies(count: usize) -> Medias {
    Medias::new(
        (0..count)
            .map(|i| {
                Media::Movie(Movie {
                    title: format!("Movie {i}"),
                    year: Some(2026),
                    released: None,
                    poster: None,
                    fanart: None,
                    rating: None,
                    runtime: None,
                })
            })
            .collect(),
    )
}
