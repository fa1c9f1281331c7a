use std::{cmp::Ordering, fmt::Display};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SongError {
    #[error("{field} is empty, can't create song")]
    EmptyField { field: &'static str },
}

/// A single song entry loaded from the data file.
///
/// Immutable once built. Two songs are equal only when every field matches,
/// but they are ordered by danceability alone, see [`Song::cmp_danceability`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    artist: String,
    title: String,
    year: i32,
    genre: String,
    danceability: f64,
}

impl Song {
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        danceability: f64,
    ) -> Result<Self, SongError> {
        let artist = non_empty("artist", artist.into())?;
        let title = non_empty("title", title.into())?;
        let genre = non_empty("genre", genre.into())?;

        Ok(Self {
            artist,
            title,
            year,
            genre,
            danceability,
        })
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn danceability(&self) -> f64 {
        self.danceability
    }

    /// Orders songs by danceability, ascending. Other fields are ignored.
    ///
    /// Kept as a method rather than `Ord`/`PartialOrd` because those must agree
    /// with `PartialEq`, which compares all fields.
    pub fn cmp_danceability(&self, other: &Song) -> Ordering {
        self.danceability.total_cmp(&other.danceability)
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, SongError> {
    if value.is_empty() {
        Err(SongError::EmptyField { field })
    } else {
        Ok(value)
    }
}

impl Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}
