use anyhow::Result;
use clap::{Parser, Subcommand};
use playlist_engine::session::config::{expand_path, DEFAULT_PLAYLIST_PATH};
use playlist_engine::session::Command;
use playlist_engine::{Session, SessionConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist")]
#[command(about = "Manage a looping playlist with play counts and favorites", long_about = None)]
struct Args {
    /// Playlist file (name,play_count,is_favorite per line)
    #[arg(short = 'f', long, default_value = DEFAULT_PLAYLIST_PATH)]
    file: String,

    /// Music directory for import and locate (can be specified multiple times)
    #[arg(short = 'm', long = "music-dir")]
    music_dirs: Vec<String>,

    /// Scan music directories recursively
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Don't write changes back to the playlist file
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Add audio files to the end of the playlist
    Add {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Remove a track by name
    Remove { name: String },
    /// Play a track by name
    Play { name: String },
    /// Play the next track (wraps around)
    Next,
    /// Play the previous track (wraps around)
    Prev,
    /// Show play count and favorite status of a track
    Search { name: String },
    /// List all tracks in play order
    List,
    /// List favorite tracks
    Favorites,
    /// Add every audio file from a directory (defaults to --music-dir)
    Import { dir: Option<String> },
    /// Print the audio file backing a track
    Locate { name: String },
    /// Remove every track
    Clear,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action {
            Action::Add { paths } => Command::Add { paths },
            Action::Remove { name } => Command::Remove { name },
            Action::Play { name } => Command::Play { name },
            Action::Next => Command::Next,
            Action::Prev => Command::Previous,
            Action::Search { name } => Command::Search { name },
            Action::List => Command::List,
            Action::Favorites => Command::Favorites,
            Action::Import { dir } => Command::Import {
                dir: dir.as_deref().map(expand_path),
            },
            Action::Locate { name } => Command::Locate { name },
            Action::Clear => Command::Clear,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let library_dirs: Vec<PathBuf> = args.music_dirs.iter().map(|d| expand_path(d)).collect();
    let config = SessionConfig::from_user_path(&args.file)
        .with_library_dirs(library_dirs)
        .with_recursive(args.recursive)
        .with_autosave(!args.dry_run);

    if args.dry_run {
        log::info!("Dry run - {:?} will not be modified", config.playlist_path);
    }

    let mut session = Session::open(config)?;
    let outcome = session.run(args.action.into())?;
    print!("{}", outcome);

    if let Some(current) = session.playlist().current() {
        log::debug!("Current track: {}", current);
    }

    Ok(())
}
