use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A song referenced an album that is not in the registry.
    #[error("invalid album name: {album}")]
    InvalidReference { album: String },

    /// An average was requested over an album with no songs.
    #[error("no songs in album {album} to average")]
    EmptyAggregate { album: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
