use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single song. Two songs are the same song when name, album and
/// duration all match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    name: String,
    album: Option<String>,
    duration: f64,
}

impl Song {
    pub fn new(name: impl Into<String>, album: Option<String>, duration: f64) -> Self {
        Song {
            name: name.into(),
            album,
            duration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The album this song belongs to, if any.
    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub(crate) fn in_album(&self, album: &str) -> bool {
        self.album.as_deref() == Some(album)
    }
}

// Durations are compared by bit pattern so Eq and Hash agree.
impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.album == other.album
            && self.duration.to_bits() == other.duration.to_bits()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration.to_bits().hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.album {
            Some(album) => write!(f, "{} [{}] ({})", self.name, album, self.duration),
            None => write!(f, "{} [no album] ({})", self.name, self.duration),
        }
    }
}
