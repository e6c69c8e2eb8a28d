use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::album::Album;
use crate::error::{CatalogError, Result};
use crate::group::MusicGroup;
use crate::song::Song;

/// In-memory catalog of a group's albums and songs.
///
/// Albums are keyed by title. Songs are kept as a set, so adding the same
/// song twice stores it once.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    albums: HashMap<String, Album>,
    songs: HashSet<Song>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn album_year(&self, name: &str) -> Option<i32> {
        self.albums.get(name).map(|album| album.year)
    }

    pub fn albums(&self) -> impl Iterator<Item = &Album> {
        self.albums.values()
    }

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Number of distinct songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    fn songs_in<'a>(&'a self, album: &'a str) -> impl Iterator<Item = &'a Song> {
        self.songs.iter().filter(move |song| song.in_album(album))
    }
}

/// Longer first; ties go to the smaller name, then the smaller album.
fn by_duration(a: &Song, b: &Song) -> Ordering {
    a.duration()
        .total_cmp(&b.duration())
        .then_with(|| b.name().cmp(a.name()))
        .then_with(|| b.album().cmp(&a.album()))
}

/// Compensated (Neumaier) sum over the durations in `total_cmp` order, so the
/// result does not depend on set iteration order.
fn total_duration(mut durations: Vec<f64>) -> f64 {
    durations.sort_unstable_by(f64::total_cmp);

    let (sum, compensation) = durations
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(sum, compensation), x| {
            let t = sum + x;
            let lost = if sum.abs() >= x.abs() {
                (sum - t) + x
            } else {
                (x - t) + sum
            };
            (t, compensation + lost)
        });

    // Infinite inputs poison the compensation term with NaN.
    let total = sum + compensation;
    if total.is_nan() && sum.is_infinite() {
        sum
    } else {
        total
    }
}

impl MusicGroup for Catalog {
    fn add_album(&mut self, name: impl Into<String>, year: i32) {
        let name = name.into();
        debug!("Registering album '{}' ({})", name, year);
        if let Some(previous) = self.albums.insert(name.clone(), Album::new(name, year)) {
            debug!(
                "Album '{}' year changed from {} to {}",
                previous.title, previous.year, year
            );
        }
    }

    fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<&str>,
        duration: f64,
    ) -> Result<()> {
        if let Some(album) = album
            && !self.albums.contains_key(album)
        {
            warn!("Rejecting song: album '{}' is not registered", album);
            return Err(CatalogError::InvalidReference {
                album: album.to_string(),
            });
        }

        let song = Song::new(name, album.map(str::to_string), duration);
        debug!("Adding song: {}", song);
        if !self.songs.insert(song) {
            debug!("Song already in catalog, nothing added");
        }
        Ok(())
    }

    fn ordered_song_names(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.songs.iter().map(Song::name).collect();
        names.sort_unstable();
        names.into_iter()
    }

    fn album_names(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().filter_map(Song::album)
    }

    fn album_in_year(&self, year: i32) -> impl Iterator<Item = &str> {
        self.albums
            .values()
            .filter(move |album| album.year == year)
            .map(|album| album.title.as_str())
    }

    fn count_songs(&self, album: &str) -> usize {
        self.songs_in(album).count()
    }

    fn count_songs_in_no_album(&self) -> usize {
        self.songs.iter().filter(|song| song.album().is_none()).count()
    }

    fn average_duration_of_songs(&self, album: &str) -> Result<f64> {
        let durations: Vec<f64> = self.songs_in(album).map(Song::duration).collect();
        if durations.is_empty() {
            return Err(CatalogError::EmptyAggregate {
                album: album.to_string(),
            });
        }

        let count = durations.len();
        Ok(total_duration(durations) / count as f64)
    }

    fn longest_song(&self) -> Option<&str> {
        self.songs.iter().max_by(|a, b| by_duration(a, b)).map(Song::name)
    }

    fn longest_album(&self) -> Option<&str> {
        let mut groups: HashMap<Option<&str>, Vec<f64>> = HashMap::new();
        for song in &self.songs {
            groups.entry(song.album()).or_default().push(song.duration());
        }

        // Songs outside any album form their own group and sort before every
        // named album on ties.
        groups
            .into_iter()
            .map(|(album, durations)| (album, total_duration(durations)))
            .max_by(|(album_a, total_a), (album_b, total_b)| {
                total_a.total_cmp(total_b).then_with(|| album_b.cmp(album_a))
            })
            .and_then(|(album, _)| album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_album("Dark Side", 1973);
        catalog.add_album("Animals", 1977);
        catalog.add_album("Meddle", 1971);
        catalog
            .add_song("Time", Some("Dark Side"), 413.0)
            .unwrap();
        catalog
            .add_song("Money", Some("Dark Side"), 382.0)
            .unwrap();
        catalog.add_song("Dogs", Some("Animals"), 1024.0).unwrap();
        catalog.add_song("Arnold Layne", None, 176.0).unwrap();
        catalog
    }

    #[test]
    fn re_adding_an_album_overwrites_its_year() {
        let mut catalog = catalog();
        catalog.add_album("Animals", 1978);
        assert_eq!(catalog.album_year("Animals"), Some(1978));
        assert_eq!(catalog.albums().count(), 3);
    }

    #[test]
    fn unknown_album_is_rejected_without_mutation() {
        let mut catalog = catalog();
        let err = catalog
            .add_song("Echoes", Some("Meddle II"), 1410.0)
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidReference {
                album: "Meddle II".to_string()
            }
        );
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn counts() {
        let catalog = catalog();
        assert_eq!(catalog.count_songs("Dark Side"), 2);
        assert_eq!(catalog.count_songs("Meddle"), 0);
        assert_eq!(catalog.count_songs("Nowhere"), 0);
        assert_eq!(catalog.count_songs_in_no_album(), 1);
    }

    #[test]
    fn average_over_an_album() {
        let catalog = catalog();
        assert_eq!(catalog.average_duration_of_songs("Dark Side"), Ok(397.5));
    }

    #[test]
    fn average_over_an_album_without_songs_fails() {
        let catalog = catalog();
        assert_eq!(
            catalog.average_duration_of_songs("Meddle"),
            Err(CatalogError::EmptyAggregate {
                album: "Meddle".to_string()
            })
        );
    }

    #[test]
    fn total_duration_is_compensated() {
        assert_eq!(total_duration(vec![0.3, 0.1, 0.2]), 0.6);
        assert_eq!(total_duration(vec![0.2, 0.3, 0.1]), 0.6);
        assert_eq!(total_duration(vec![1e100, 1.0, -1e100]), 1.0);
        assert_eq!(total_duration(Vec::new()), 0.0);
    }

    #[test]
    fn total_duration_keeps_infinity() {
        assert_eq!(
            total_duration(vec![f64::INFINITY, 1.0, f64::INFINITY]),
            f64::INFINITY
        );
    }

    #[test]
    fn longest_song_tie_goes_to_smaller_name() {
        let mut catalog = Catalog::new();
        catalog.add_song("b", None, 10.0).unwrap();
        catalog.add_song("a", None, 10.0).unwrap();
        catalog.add_song("c", None, 9.0).unwrap();
        assert_eq!(catalog.longest_song(), Some("a"));
    }

    #[test]
    fn longest_album_is_none_when_loose_songs_win() {
        let mut catalog = catalog();
        catalog.add_song("See Emily Play", None, 2000.0).unwrap();
        assert_eq!(catalog.longest_album(), None);
    }

    #[test]
    fn longest_album_sums_durations() {
        let catalog = catalog();
        assert_eq!(catalog.longest_album(), Some("Animals"));
    }

    #[test]
    fn longest_album_tie_prefers_loose_songs_then_smaller_name() {
        let mut catalog = Catalog::new();
        catalog.add_album("B", 2000);
        catalog.add_album("A", 2000);
        catalog.add_song("x", Some("B"), 5.0).unwrap();
        catalog.add_song("y", Some("A"), 5.0).unwrap();
        assert_eq!(catalog.longest_album(), Some("A"));

        catalog.add_song("z", None, 5.0).unwrap();
        assert_eq!(catalog.longest_album(), None);
    }
}
