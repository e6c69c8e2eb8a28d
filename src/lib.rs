//! A music group's catalog: registered albums, the songs recorded for them,
//! and the queries you can run over both.

mod album;
mod catalog;
mod error;
mod group;
mod song;

pub use album::Album;
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use group::MusicGroup;
pub use song::Song;
