//! Media item models and their host display representation
//!
//! Items arrive from the Trakt API cache and are converted on read to the
//! JSON objects the host's upcoming-media cards consume, one object per item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A movie from the Trakt API cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Theatrical or digital release time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fanart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Runtime in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
}

/// An episode of a tracked show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub show_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_title: Option<String>,
    pub season: u32,
    pub number: u32,
    /// When the episode airs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airs_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fanart: Option<String>,
}

impl Episode {
    /// Episode code in the "S01E05" form shown on cards
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.number)
    }
}

/// A single media item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Media {
    Movie(Movie),
    Episode(Episode),
}

impl Media {
    /// Convert to the host's display representation
    pub fn to_homeassistant(&self) -> Value {
        match self {
            Media::Movie(movie) => json!({
                "title": movie.title,
                "year": movie.year,
                "airdate": movie.released.map(|d| d.to_rfc3339()),
                "poster": movie.poster,
                "fanart": movie.fanart,
                "rating": movie.rating,
                "runtime": movie.runtime,
            }),
            Media::Episode(episode) => json!({
                "title": episode.show_title,
                "episode": episode.episode_title,
                "number": episode.code(),
                "airdate": episode.airs_at.map(|d| d.to_rfc3339()),
                "poster": episode.poster,
                "fanart": episode.fanart,
            }),
        }
    }
}

/// Ordered collection of media items for one (source, kind) cell
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Medias(pub Vec<Media>);

impl Medias {
    pub fn new(items: Vec<Media>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert every item to its display representation, in order
    pub fn to_homeassistant(&self) -> Vec<Value> {
        self.0.iter().map(Media::to_homeassistant).collect()
    }
}

impl From<Vec<Media>> for Medias {
    fn from(items: Vec<Media>) -> Self {
        Self(items)
    }
}
