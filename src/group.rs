use crate::error::Result;

/// Everything a music group's catalog can be asked.
///
/// Sequence outputs borrow from the group and are recomputed on every call.
pub trait MusicGroup {
    /// Registers an album, replacing the year if the name is already known.
    fn add_album(&mut self, name: impl Into<String>, year: i32);

    /// Adds a song. A song naming an album must name a registered one.
    fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<&str>,
        duration: f64,
    ) -> Result<()>;

    /// Song names in ascending order, one per stored song.
    fn ordered_song_names(&self) -> impl Iterator<Item = &str>;

    /// The album of every song that has one, not deduplicated.
    fn album_names(&self) -> impl Iterator<Item = &str>;

    /// Registered albums released in `year`.
    fn album_in_year(&self, year: i32) -> impl Iterator<Item = &str>;

    fn count_songs(&self, album: &str) -> usize;

    fn count_songs_in_no_album(&self) -> usize;

    /// Mean duration of the songs in `album`.
    ///
    /// Fails with [`CatalogError::EmptyAggregate`](crate::CatalogError::EmptyAggregate)
    /// when the album has no songs.
    fn average_duration_of_songs(&self, album: &str) -> Result<f64>;

    fn longest_song(&self) -> Option<&str>;

    /// The album whose songs add up to the longest running time. `None` when
    /// the catalog is empty or songs outside any album add up to the most.
    fn longest_album(&self) -> Option<&str>;
}
