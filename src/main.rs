//! Moodlog CLI
//!
//! Command-line front-end for the mood journal:
//! - Log a mood with an optional note
//! - Show history and statistics
//! - Export the log as CSV
//! - Run an interactive journaling session

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moodlog::config::{generate_default_config, Config, JournalConfig, LoggingConfig};
use moodlog::journal::{
    Clock, JournalSession, LogOutcome, MoodCarousel, MoodCatalog, MusicLibrary, MusicPlayer,
    PlaybackState, SilentBackend, SystemClock, View,
};
use moodlog::storage::{is_valid_mood_name, parse, MoodLog};
use moodlog::{export_csv, statistics_json};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moodlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mood journal: log how you feel and see how it adds up")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/moodlog/config.toml or ./moodlog.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Mood log file, overrides the configured path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a mood
    Log {
        /// Mood name (e.g. joy, anger)
        mood: String,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show all entries, newest first
    History,

    /// Show mood statistics
    Stats {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List available moods in display order
    Moods,

    /// Export the log as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive journaling session
    Session,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(log_file) = cli.log_file {
        config.journal.log_path = log_file;
    }

    init_tracing(&config.logging);

    match cli.command {
        Commands::Log { mood, note } => {
            let mut catalog = load_catalog(&config.journal)?;
            if catalog.is_empty() {
                // No mood images: accept any loggable name as-is.
                if !is_valid_mood_name(&mood) {
                    anyhow::bail!("Invalid mood name: {} (use letters, digits or _)", mood);
                }
                catalog = MoodCatalog::from_names([mood.as_str()], &config.journal.mood_order);
            } else if !catalog.contains(&mood) {
                anyhow::bail!(
                    "Unknown mood: {} (available: {})",
                    mood,
                    catalog.moods().join(", ")
                );
            }

            let mut session = new_session(&config.journal, catalog);
            session.select_mood(&mood)?;
            session.set_note(note.unwrap_or_default());
            match session.submit()? {
                LogOutcome::Logged(entry) => {
                    println!("Logged {} at {} {}", entry.mood, entry.date, entry.time);
                }
                LogOutcome::Ignored(reason) => {
                    anyhow::bail!("Nothing logged: {:?}", reason);
                }
            }
        }

        Commands::History => {
            let mut session = open_session(&config.journal)?;
            session.switch_to(View::History)?;
            println!("{}", session.content().unwrap_or_default());
        }

        Commands::Stats { format } => match format.as_str() {
            "json" => {
                let log = MoodLog::open(&config.journal.log_path);
                println!("{}", statistics_json(&log.read_all()?, SystemClock.now())?);
            }
            _ => {
                let mut session = open_session(&config.journal)?;
                session.switch_to(View::Statistics)?;
                println!("{}", session.content().unwrap_or_default().trim_end());
            }
        },

        Commands::Moods => {
            let catalog = load_catalog(&config.journal)?;
            if catalog.is_empty() {
                println!("No mood images found in {}", config.journal.assets_dir.display());
                println!();
                println!("Add one image per mood, e.g. images/joy.png, images/anger.png");
            } else {
                for (i, mood) in catalog.moods().iter().enumerate() {
                    println!("{}. {}", i + 1, mood);
                }
            }
        }

        Commands::Export { output } => {
            let log = MoodLog::open(&config.journal.log_path);
            let entries = parse(&log.read_all()?);

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let rows = export_csv(&entries, file)?;
                    println!("Exported {} entries to {:?}", rows, path);
                }
                None => {
                    export_csv(&entries, std::io::stdout().lock())?;
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }

        Commands::Session => {
            let session = open_session(&config.journal)?;
            let library = MusicLibrary::scan(&config.journal.music_dir)?;
            let player = MusicPlayer::new(library, SilentBackend::default());
            run_session(session, player)?;
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("moodlog={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_catalog(config: &JournalConfig) -> Result<MoodCatalog> {
    MoodCatalog::from_asset_dir(&config.assets_dir, &config.mood_order)
        .with_context(|| format!("reading mood images from {}", config.assets_dir.display()))
}

fn new_session(config: &JournalConfig, catalog: MoodCatalog) -> JournalSession {
    JournalSession::new(
        MoodLog::open(&config.log_path),
        MoodCarousel::new(catalog),
        SystemClock,
    )
}

fn open_session(config: &JournalConfig) -> Result<JournalSession> {
    Ok(new_session(config, load_catalog(config)?))
}

const SESSION_HELP: &str = "\
Commands:
  notes | history | stats   switch view
  next | prev               cycle through moods
  note <text>               set the note (empty clears it)
  log                       log the selected mood with the note
  music                     play / pause background music
  help                      show this help
  quit                      leave the session";

fn run_session(mut session: JournalSession, mut player: MusicPlayer<SilentBackend>) -> Result<()> {
    if !player.library().is_empty() {
        if let Err(e) = player.play() {
            eprintln!("Error playing music: {}", e);
        }
    }

    println!("{}", SESSION_HELP);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", prompt(&mut session));
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let (command, rest) = match line.trim_start().split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "notes" | "journal" | "history" | "stats" => {
                let view: View = command.parse().map_err(anyhow::Error::msg)?;
                match session.switch_to(view) {
                    Ok(()) => {
                        if let Some(content) = session.content() {
                            println!("{}", content);
                        }
                    }
                    Err(e) => eprintln!("{}", session.content().unwrap_or(&e.to_string())),
                }
            }
            "next" => println!("{}", session.next_mood().unwrap_or("(no moods)")),
            "prev" => println!("{}", session.previous_mood().unwrap_or("(no moods)")),
            "note" => session.set_note(rest),
            "log" => match session.submit() {
                Ok(LogOutcome::Logged(entry)) => println!("Mood logged: {}", entry.mood),
                Ok(LogOutcome::Ignored(reason)) => println!("Nothing logged ({:?})", reason),
                Err(e) => eprintln!("Error saving mood log: {}", e),
            },
            "music" => match player.toggle() {
                Ok(PlaybackState::Playing) => println!("Music playing"),
                Ok(PlaybackState::Paused) => println!("Music paused"),
                Ok(PlaybackState::Stopped) => println!("No music files found"),
                Err(e) => eprintln!("Error toggling music: {}", e),
            },
            "help" => println!("{}", SESSION_HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    if player.state() != PlaybackState::Stopped {
        player.stop()?;
    }
    Ok(())
}

fn prompt(session: &mut JournalSession) -> String {
    let confirmed = session
        .confirmation()
        .map(|c| format!(" [{} logged]", c.mood));
    let mood = session.current_mood().unwrap_or("-");
    let note = if session.note().is_empty() { "" } else { " +note" };
    format!(
        "{} {}{}{}> ",
        session.view(),
        mood,
        note,
        confirmed.unwrap_or_default()
    )
}
