//! Creature catalog browser TUI.
//!
//! Browse the catalog one entry at a time: previous, next (both wrapping) or a
//! random pick.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripting:
//!
//! ```bash
//! printf 'next\nrandom\nquit\n' | cargo run -p dex -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;
mod worker;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dex_core::{BrowserConfig, ResponseOrdering};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

const ENV_LOG: &str = "DEX_LOG";
const ENV_LOG_FILE: &str = "DEX_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "dex.log";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = match BrowserConfig::from_env()
        .map_err(|e| e.to_string())
        .and_then(|config| apply_args(config, &args))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    // Check for --headless mode
    if args.iter().any(|a| a == "--headless") {
        init_tracing(true)?;
        return headless::run_headless(config).await.map_err(|e| e.into());
    }

    init_tracing(false)?;
    let catalog = Arc::new(config.build_client()?);
    let app = App::new(&config, catalog)?;
    tracing::info!(
        max_id = config.max_id,
        ordering = config.ordering.as_str(),
        "starting dex"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Install the fmt subscriber. The TUI owns the terminal, so it logs to a file.
fn init_tracing(headless: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));

    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        let path = std::env::var(ENV_LOG_FILE).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

/// Apply `--max-id N` and `--ordering NAME` on top of the environment.
fn apply_args(mut config: BrowserConfig, args: &[String]) -> Result<BrowserConfig, String> {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-id" => {
                let value = args.get(i + 1).ok_or("--max-id needs a value")?;
                let max_id = value
                    .parse::<u32>()
                    .map_err(|_| format!("--max-id: not a number: {value}"))?;
                config = config.with_max_id(max_id);
                i += 1;
            }
            "--ordering" => {
                let value = args.get(i + 1).ok_or("--ordering needs a value")?;
                let ordering = ResponseOrdering::parse(value)
                    .ok_or_else(|| format!("--ordering: unknown ordering: {value}"))?;
                config = config.with_ordering(ordering);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    app.start();

    loop {
        // Render
        terminal.draw(|f| {
            app.viewport = f.area();
            render(f, &app);
        })?;

        // Apply finished fetches
        app.drain_responses();

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;

            match handle_event(&mut app, ev) {
                EventResult::Quit => {
                    return Ok(());
                }
                EventResult::Navigate(action) => {
                    app.dispatch(action);
                }
                EventResult::NeedsRedraw | EventResult::Continue => {
                    // Just continue the loop
                }
            }
        } else {
            // Tick animations
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Dex - creature catalog browser");
    println!();
    println!("USAGE:");
    println!("  dex [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help           Show this help message");
    println!("  --headless           Run in headless mode (text-only, no TUI)");
    println!("  --max-id <N>         Highest catalog id (default: 1025)");
    println!("  --ordering <NAME>    latest-issued (default) or last-arrival");
    println!();
    println!("ENVIRONMENT:");
    println!("  DEX_ENTITY_URL, DEX_SPECIES_URL, DEX_MAX_ID, DEX_BAR_REFERENCE,");
    println!("  DEX_CLAMP_BARS, DEX_ORDERING, DEX_TIMEOUT_SECS, DEX_LOG, DEX_LOG_FILE");
    println!();
    println!("EXAMPLES:");
    println!("  dex                                  # Interactive TUI mode");
    println!("  dex --headless                       # Commands from stdin");
    println!("  dex --ordering last-arrival");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("dex")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_apply_args_overrides() {
        let config = apply_args(
            BrowserConfig::new(),
            &args(&["--headless", "--max-id", "151", "--ordering", "last-arrival"]),
        )
        .unwrap();
        assert_eq!(config.max_id, 151);
        assert_eq!(config.ordering, ResponseOrdering::LastArrival);
    }

    #[test]
    fn test_apply_args_rejects_bad_values() {
        assert!(apply_args(BrowserConfig::new(), &args(&["--max-id", "lots"])).is_err());
        assert!(apply_args(BrowserConfig::new(), &args(&["--max-id", "0"])).is_err());
        assert!(apply_args(BrowserConfig::new(), &args(&["--max-id"])).is_err());
        assert!(apply_args(BrowserConfig::new(), &args(&["--ordering", "fifo"])).is_err());
    }

    #[test]
    fn test_apply_args_defaults() {
        let config = apply_args(BrowserConfig::new(), &args(&[])).unwrap();
        assert_eq!(config.max_id, 1025);
    }
}
