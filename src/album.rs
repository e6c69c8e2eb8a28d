use serde::{Deserialize, Serialize};

/// A registered album. The title is also its key in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub title: String,
    pub year: i32,
}

impl Album {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Album {
            title: title.into(),
            year,
        }
    }
}
