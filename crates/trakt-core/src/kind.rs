//! Media kind registry
//!
//! Each kind of trackable media carries a fixed record of display name,
//! configuration identifier and Trakt API path segment, defined once at
//! load time.

use serde::{Deserialize, Serialize};

/// Static metadata for one media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaInformation {
    /// Display name used in sensor names (e.g., "Movies")
    pub name: &'static str,
    /// Identifier used as the configuration key (e.g., "movie")
    pub identifier: &'static str,
    /// Trakt API path segment (e.g., "movies")
    pub path: &'static str,
}

/// A category of trackable media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraktKind {
    Movie,
    NewShow,
    Premiere,
    Show,
}

/// Kinds eligible for recommendation sensors
pub const BASIC_KINDS: &[TraktKind] = &[TraktKind::Movie, TraktKind::Show];

impl TraktKind {
    /// All known kinds, in setup order
    pub const fn all() -> [TraktKind; 4] {
        [
            TraktKind::Movie,
            TraktKind::NewShow,
            TraktKind::Premiere,
            TraktKind::Show,
        ]
    }

    /// The fixed metadata record for this kind
    pub const fn information(&self) -> MediaInformation {
        match self {
            TraktKind::Movie => MediaInformation {
                name: "Movies",
                identifier: "movie",
                path: "movies",
            },
            TraktKind::NewShow => MediaInformation {
                name: "New Shows",
                identifier: "new_show",
                path: "shows",
            },
            TraktKind::Premiere => MediaInformation {
                name: "Premieres",
                identifier: "premiere",
                path: "shows",
            },
            TraktKind::Show => MediaInformation {
                name: "Shows",
                identifier: "show",
                path: "shows",
            },
        }
    }

    /// Display name used in sensor names
    pub const fn name(&self) -> &'static str {
        self.information().name
    }

    /// Identifier used as the configuration key
    pub const fn identifier(&self) -> &'static str {
        self.information().identifier
    }

    /// Trakt API path segment
    pub const fn path(&self) -> &'static str {
        self.information().path
    }

    /// Whether this kind is eligible for a recommendation sensor
    pub fn is_basic(&self) -> bool {
        BASIC_KINDS.contains(self)
    }

    /// Look up a kind by its configuration identifier
    pub fn from_identifier(identifier: &str) -> Option<TraktKind> {
        TraktKind::all()
            .into_iter()
            .find(|kind| kind.identifier() == identifier)
    }
}
