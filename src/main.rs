//! EventRent showcase TUI
//!
//! A terminal showcase and quote-request form for the EventRent rental
//! catalog. Run with: eventrent [-l es|en] [--catalog FILE]

mod app;
mod carousel;
mod catalog;
mod constants;
mod event;
mod form;
mod icons;
mod lang;
mod layout;
mod page;
mod session;
mod ui;
mod validation;

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::catalog::Catalog;
use crate::event::EventHandler;
use crate::lang::Language;

/// Parsed command line options.
struct Args {
    lang: Language,
    catalog: Option<PathBuf>,
    log_file: PathBuf,
}

/// Parses command line arguments.
///
/// Supports:
/// - `-l <LANG>` or `--lang <LANG>` to pick the site variant (es/en)
/// - `--catalog <FILE>` to load a product catalog file
/// - `--log-file <FILE>` to choose where diagnostics go
/// - `-h` or `--help` to show usage
fn parse_args() -> Args {
    let mut args = Args {
        lang: Language::default(),
        catalog: None,
        log_file: PathBuf::from("eventrent.log"),
    };

    let argv: Vec<String> = env::args().collect();
    let mut iter = argv.iter().skip(1); // Skip program name

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-l" | "--lang" => match iter.next().and_then(|code| Language::parse(code)) {
                Some(lang) => args.lang = lang,
                None => {
                    eprintln!("Error: --lang requires 'es' or 'en'");
                    std::process::exit(1);
                }
            },
            "--catalog" => match iter.next() {
                Some(path) => args.catalog = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --catalog requires a FILE argument");
                    std::process::exit(1);
                }
            },
            "--log-file" => match iter.next() {
                Some(path) => args.log_file = PathBuf::from(path),
                None => {
                    eprintln!("Error: --log-file requires a FILE argument");
                    std::process::exit(1);
                }
            },
            "-h" | "--help" => {
                println!("eventrent - EventRent showcase TUI");
                println!();
                println!("Usage: eventrent [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -l, --lang <es|en>   Site language variant (default: es)");
                println!("      --catalog <FILE> Product catalog JSON (default: embedded)");
                println!("      --log-file <FILE> Diagnostics file (default: eventrent.log)");
                println!("  -h, --help           Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    args
}

/// Routes diagnostics to a file so the alternate screen stays clean.
fn init_tracing(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Entry point for the application.
///
/// Binds the catalog before touching the terminal so a configuration
/// error prints as a plain message instead of corrupting the screen.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = parse_args();

    init_tracing(&args.log_file)?;

    // Explicit binding step: a missing or malformed catalog fails fast.
    let mut catalog =
        Catalog::load(args.catalog.as_deref()).context("failed to bind the product catalog")?;
    // Preload pass over the product art.
    catalog.verify_images(Path::new("."));

    let (cols, rows) = crossterm::terminal::size().context("failed to read terminal size")?;

    // Initialize the terminal
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;

    // Create the application
    let app = App::new(args.lang, catalog, cols, rows, Instant::now());

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Handle user input events
/// 3. Run the timer pass (auto-advance, animations, deadlines)
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let event_handler = EventHandler::new();

    // Main loop
    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Use different event handling for form input vs browse mode
        let event = if app.in_form_input() {
            event_handler.next_input()?
        } else {
            event_handler.next()?
        };

        let now = Instant::now();

        // Handle events (keyboard input, mouse, resize)
        if let Some(action) = event {
            // Process the event and check if we should quit
            if app.handle_event(action, now)? {
                break;
            }
        }

        // Timer-driven work runs every iteration
        app.on_tick(now);
    }

    Ok(())
}
