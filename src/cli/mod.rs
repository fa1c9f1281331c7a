use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf};

use crate::config::Config;
use crate::storage::library::SongLibrary;

pub mod menu;

#[derive(Parser)]
#[command(name = "song-searcher")]
#[command(version = "0.1")]
#[command(about = "Find songs that match your vibe")]
pub struct Cli {
    /// Path to the config TOML file [default: song_searcher.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV file with the songs, overrides the config
    #[arg(short, long, env = "SONG_SEARCHER_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Print the average danceability of the data file
    Average,
    /// List songs with at least the given danceability
    List {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        /// Print the songs as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = Config::load_or_default(cli.config.as_deref())?;
    let mut library = SongLibrary::new().with_delimiter(cfg.data.delimiter);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let data_path = cli.data.or_else(|| cfg.data.path.clone());
            let stdin = io::stdin().lock();
            menu::Menu::new(&mut library, data_path, stdin, io::stdout()).run()?;
        }

        Commands::Average => {
            load(&mut library, cfg.data_path(cli.data)?)?;
            println!(
                "Average danceability of {} songs: {}",
                library.len(),
                library.average_danceability()
            );
        }

        Commands::List { min, json } => {
            load(&mut library, cfg.data_path(cli.data)?)?;
            let songs = library.songs_at_or_above(min)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&songs)?);
            } else if songs.is_empty() {
                println!("No songs with at least {min} danceability");
            } else {
                for song in &songs {
                    println!("{:.3}  {song}", song.danceability());
                }
            }
        }
    }

    Ok(())
}

fn load(library: &mut SongLibrary, path: PathBuf) -> anyhow::Result<()> {
    library
        .load_from(&path)
        .with_context(|| format!("Failed to load songs from {}", path.to_string_lossy()))?;
    Ok(())
}
