use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use crate::{
    domain::song::Song,
    storage::{
        csv::{DEFAULT_DELIMITER, parse_line},
        error::StorageError,
    },
};

/// Column positions of the data file
pub mod columns {
    pub const TITLE: usize = 0;
    pub const ARTIST: usize = 1;
    pub const GENRE: usize = 2;
    pub const YEAR: usize = 3;
    pub const DANCEABILITY: usize = 6;
}

use columns::*;

/// Ordered sequence of songs that can be appended to and iterated.
pub trait SongCollection {
    fn append(&mut self, song: Song);

    fn iter_songs(&self) -> impl Iterator<Item = &Song>;

    fn len(&self) -> usize {
        self.iter_songs().count()
    }
}

impl SongCollection for Vec<Song> {
    fn append(&mut self, song: Song) {
        self.push(song);
    }

    fn iter_songs(&self) -> impl Iterator<Item = &Song> {
        self.iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl SongCollection for VecDeque<Song> {
    fn append(&mut self, song: Song) {
        self.push_back(song);
    }

    fn iter_songs(&self) -> impl Iterator<Item = &Song> {
        self.iter()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// In-memory song store with the two danceability queries
#[derive(Debug)]
pub struct SongLibrary<C = Vec<Song>> {
    songs: C,
    delimiter: char,
}

impl SongLibrary<Vec<Song>> {
    pub fn new() -> Self {
        Self::with_songs(Vec::new())
    }
}

impl Default for SongLibrary<Vec<Song>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SongCollection> SongLibrary<C> {
    pub fn with_songs(songs: C) -> Self {
        Self {
            songs,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn songs(&self) -> &C {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends every song of the data file at `path`, see [`Self::load_from_reader`].
    pub fn load_from(&mut self, path: &Path) -> Result<&C, StorageError> {
        let file = File::open(path).map_err(|source| StorageError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading songs from {}", path.to_string_lossy());
        self.load_from_reader(BufReader::new(file))
    }

    /// Appends a song for every data row of `reader`.
    ///
    /// The first line is a header and is skipped, as are empty lines. Loading
    /// stops at the first bad row; songs appended before it stay in the
    /// library, the bad row itself is never added.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<&C, StorageError> {
        let mut added = 0;

        for (idx, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let line_no = idx + 1;

            if line.is_empty() {
                log::debug!("Skipping empty line {line_no}");
                continue;
            }

            let song = self.parse_song(&line, line_no).inspect_err(|e| {
                log::warn!("Stopped loading after {added} songs: {e}");
            })?;
            self.songs.append(song);
            added += 1;
        }

        log::info!("Loaded {added} songs, library now holds {}", self.len());
        Ok(&self.songs)
    }

    fn parse_song(&self, line: &str, line_no: usize) -> Result<Song, StorageError> {
        let fields = parse_line(line, self.delimiter);

        let column = |column: usize| {
            fields
                .get(column)
                .copied()
                .ok_or(StorageError::MissingColumn {
                    line: line_no,
                    column,
                })
        };

        let title = column(TITLE)?;
        let artist = column(ARTIST)?;
        let genre = column(GENRE)?;
        let year = parse_number::<i32>(column(YEAR)?, line_no, YEAR)?;
        let danceability = parse_danceability(column(DANCEABILITY)?, line_no)?;

        Song::new(artist, title, year, genre, danceability).map_err(|source| {
            StorageError::InvalidRecord {
                line: line_no,
                source,
            }
        })
    }

    /// Arithmetic mean of danceability over all songs, 0 for an empty library.
    pub fn average_danceability(&self) -> f64 {
        let (sum, count) = self
            .songs
            .iter_songs()
            .fold((0.0, 0usize), |(sum, count), song| {
                (sum + song.danceability(), count + 1)
            });

        if count == 0 { 0.0 } else { sum / count as f64 }
    }

    /// Copies of every song with danceability >= `min`, in insertion order.
    pub fn songs_at_or_above(&self, min: f64) -> Result<Vec<Song>, StorageError> {
        if min.is_nan() || min.is_sign_negative() {
            return Err(StorageError::InvalidArgument(format!(
                "danceability threshold must be non-negative, got {min}"
            )));
        }

        Ok(self
            .songs
            .iter_songs()
            .filter(|song| song.danceability() >= min)
            .cloned()
            .collect())
    }
}

fn parse_number<T: FromStr>(value: &str, line: usize, column: usize) -> Result<T, StorageError> {
    value
        .parse()
        .map_err(|_| malformed(value, line, column))
}

/// Surrounding whitespace is allowed, infinities and NaN are not
fn parse_danceability(value: &str, line: usize) -> Result<f64, StorageError> {
    let danceability: f64 = parse_number(value.trim(), line, DANCEABILITY)
        .map_err(|_| malformed(value, line, DANCEABILITY))?;

    if danceability.is_finite() {
        Ok(danceability)
    } else {
        Err(malformed(value, line, DANCEABILITY))
    }
}

fn malformed(value: &str, line: usize, column: usize) -> StorageError {
    StorageError::MalformedNumericField {
        line,
        column,
        value: value.to_string(),
    }
}
