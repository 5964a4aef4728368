mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gwen_catalog::{playlist::parse_playlist_with, Catalog, CategoryToken};
use gwen_core::{
    AppConfig, ClickOutcome, GridView, GwenError, KvStore, MemoryStore, SqliteStore,
    StoreBackend, SubscriptionState, UnavailableStore, VideoGrid,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gwen", version)]
#[command(about = "Browse Jessie Gwen's free home workouts")]
struct Cli {
    /// Keep the subscription flag in memory for this run only
    #[arg(long, global = true)]
    memory: bool,

    /// Print destinations instead of opening the browser
    #[arg(long, global = true)]
    no_open: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List workouts, optionally filtered by category
    List {
        /// all, beginner, quick or intense
        #[arg(short, long, default_value = "all")]
        category: String,

        #[arg(long)]
        json: bool,
    },
    /// Watch a workout by video id or YouTube link
    Watch {
        video: String,

        /// Subscribe to the channel, then watch
        #[arg(long)]
        subscribe: bool,
    },
    /// Show whether videos are locked or unlocked
    Status,
    /// Forget the stored subscription
    Reset,
    /// Print the video id of a YouTube link
    Extract { url: String },
    /// Parse a pasted playlist export into workout entries
    Import {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logging(&config.logging.filter);
    if let Some(e) = config_err {
        tracing::warn!(path = %AppConfig::config_path().display(), error = %e, "Ignoring invalid config");
    }

    match run(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, config: &AppConfig) -> Result<ExitCode, GwenError> {
    let browser = Browser {
        open_links: config.browser.open_links && !cli.no_open,
    };

    match cli.command {
        Command::List { category, json } => {
            let grid = VideoGrid::mount(Catalog::embedded(), open_store(config, cli.memory));
            let category = CategoryToken::parse_lenient(&category);
            match grid.cards(category) {
                GridView::Cards(cards) if json => println!("{}", to_json(&cards)),
                GridView::Cards(cards) => {
                    for card in &cards {
                        println!("{}", render::card_line(card));
                    }
                }
                GridView::Empty(_) if json => println!("[]"),
                GridView::Empty(message) => println!("{message}"),
            }
        }
        Command::Watch { video, subscribe } => {
            let mut grid = VideoGrid::mount(Catalog::embedded(), open_store(config, cli.memory));
            match grid.click(&video) {
                ClickOutcome::NotFound => {
                    eprintln!("no such workout: {video}");
                    return Ok(ExitCode::FAILURE);
                }
                ClickOutcome::Open(url) => browser.navigate(&url),
                ClickOutcome::Gate(_) if subscribe => {
                    for url in grid.complete_gate() {
                        browser.navigate(&url);
                    }
                }
                ClickOutcome::Gate(prompt) => {
                    grid.close_gate();
                    println!("{}", render::gate_prompt(&prompt));
                }
            }
        }
        Command::Status => {
            let state = SubscriptionState::new(open_store(config, cli.memory));
            println!("{}", state.status());
        }
        Command::Reset => {
            let state = SubscriptionState::new(open_store(config, cli.memory));
            state.clear();
            println!("{}", state.status());
        }
        Command::Extract { url } => match gwen_catalog::extract_video_id(&url) {
            Some(id) => println!("{id}"),
            None => {
                eprintln!("no video id");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Import { file, json } => {
            let text = std::fs::read_to_string(&file)?;
            let records = parse_playlist_with(&text, config.catalog.thumbnail_quality);
            tracing::info!(path = %file.display(), count = records.len(), "Imported playlist");
            let catalog = Catalog::from_records(records);
            if json {
                println!("{}", to_json(catalog.videos()));
            } else {
                for video in catalog.videos() {
                    println!("{}", render::video_line(video));
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Pick the subscription store. A SQLite store that cannot be opened leaves
/// the gate locked for this run instead of failing the command.
fn open_store(config: &AppConfig, memory: bool) -> Box<dyn KvStore> {
    if memory || config.gate.backend == StoreBackend::Memory {
        return Box::new(MemoryStore::new());
    }
    match AppConfig::ensure_db_path().and_then(|path| SqliteStore::open(&path)) {
        Ok(db) => Box::new(db),
        Err(e) => {
            tracing::warn!(error = %e, "Subscription store unavailable, videos stay locked");
            Box::new(UnavailableStore::new(e.to_string()))
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

/// Hands destinations to the system browser, or just prints them.
struct Browser {
    open_links: bool,
}

impl Browser {
    fn navigate(&self, url: &str) {
        println!("{url}");
        if !self.open_links {
            return;
        }
        if let Err(e) = open::that(url) {
            tracing::warn!(url, error = %e, "Failed to open browser");
        }
    }
}
