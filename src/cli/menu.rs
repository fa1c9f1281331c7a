//! Interactive text menu on top of the song library

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::storage::library::SongLibrary;

const BANNER: &str = "\
Welcome to Song Searcher!
*************************
1. Load data file
2. List songs by danceability
3. Show average danceability
4. Exit
*************************";

pub struct Menu<'a, R, W> {
    library: &'a mut SongLibrary,
    data_path: Option<PathBuf>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// `data_path` is loaded by option 1. Without it the user is asked for a path.
    pub fn new(
        library: &'a mut SongLibrary,
        data_path: Option<PathBuf>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            library,
            data_path,
            input,
            output,
        }
    }

    /// Runs until the user exits or the input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;

        while let Some(choice) = self.read_token()? {
            match choice.as_str() {
                "1" => self.handle_load()?,
                "2" => self.handle_list()?,
                "3" => self.handle_average()?,
                "4" => {
                    writeln!(self.output, "Thanks for using Song Searcher, bye!")?;
                    return Ok(());
                }
                other => writeln!(
                    self.output,
                    "'{other}' is not a valid choice, pick 1, 2, 3 or 4"
                )?,
            }
            writeln!(self.output, "What else would you like to do?")?;
        }

        Ok(())
    }

    /// Next non-blank input line, trimmed. `None` at end of input.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let token = line.trim();
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }
    }

    fn handle_load(&mut self) -> io::Result<()> {
        let path = match self.data_path.clone() {
            Some(path) => path,
            None => {
                writeln!(self.output, "Enter the path to the data file:")?;
                match self.read_token()? {
                    Some(path) => PathBuf::from(path),
                    None => return Ok(()),
                }
            }
        };

        match self.library.load_from(&path) {
            Ok(songs) => writeln!(
                self.output,
                "Library loaded, {} songs ready to explore.",
                songs.len()
            ),
            Err(e) => {
                log::warn!("Loading {} failed: {e}", path.to_string_lossy());
                writeln!(self.output, "Could not load the data file: {e}")
            }
        }
    }

    fn handle_list(&mut self) -> io::Result<()> {
        writeln!(self.output, "Enter the danceability threshold:")?;

        let Some(token) = self.read_token()? else {
            return Ok(());
        };
        let Ok(threshold) = token.parse::<f64>() else {
            return writeln!(self.output, "Invalid input, the threshold must be a number.");
        };

        match self.library.songs_at_or_above(threshold) {
            Ok(songs) if songs.is_empty() => writeln!(
                self.output,
                "No songs found with at least {threshold} danceability."
            ),
            Ok(songs) => {
                writeln!(self.output, "Songs with at least {threshold} danceability:")?;
                for song in &songs {
                    writeln!(self.output, " - {song}")?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn handle_average(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "The average danceability is {}.",
            self.library.average_danceability()
        )
    }
}
