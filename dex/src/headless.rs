//! Headless mode for the catalog browser.
//!
//! This module provides a simple text-based interface for browsing without a
//! TUI. It's designed for scripting and smoke tests.

use std::io::{self, BufRead, Write};

use dex_core::render::format_id;
use dex_core::{Action, BrowserConfig, HeadlessBrowser, HeadlessError, Outcome};

/// One line of headless input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Action),
    Status,
    Help,
    Quit,
}

/// Parse a command line. Blank lines and unknown words give `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "prev" | "previous" | "p" | "h" => Some(Command::Navigate(Action::Previous)),
        "next" | "n" | "l" => Some(Command::Navigate(Action::Next)),
        "random" | "r" => Some(Command::Navigate(Action::Random)),
        "status" => Some(Command::Status),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

/// One-line report for a finished cycle
pub fn outcome_line(outcome: Outcome) -> String {
    match outcome {
        Outcome::Rendered { id } => format!("[RENDERED] {}", format_id(id)),
        Outcome::Failed { id, kind } => format!("[ERROR] {} ({kind:?})", format_id(id)),
        Outcome::Discarded { id } => format!("[DISCARDED] {}", format_id(id)),
    }
}

fn print_commands() {
    println!("Commands:");
    println!("  next     - Next entry (wraps at the end)");
    println!("  prev     - Previous entry (wraps at the start)");
    println!("  random   - Random entry");
    println!("  status   - Show the current position");
    println!("  help     - Show this help");
    println!("  quit     - Exit");
}

/// Run the browser in headless mode.
///
/// Reads one command per line from stdin and prints the display after every
/// cycle, so the output can be diffed or grepped.
pub async fn run_headless(config: BrowserConfig) -> Result<(), HeadlessError> {
    let mut dex = HeadlessBrowser::new(config)?;

    println!("=== Dex Headless Mode ===");
    print_commands();
    println!();

    let outcome = dex.start().await;
    println!("{}", outcome_line(outcome));
    println!("{}", dex.display().to_text());
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Navigate(action)) => {
                let outcome = dex.send(action).await;
                println!("{}", outcome_line(outcome));
                println!("{}", dex.display().to_text());
            }
            Some(Command::Status) => println!("[STATUS] {}", dex.status()),
            Some(Command::Help) => print_commands(),
            Some(Command::Quit) => {
                println!("Goodbye!");
                break;
            }
            None => println!("[ERROR] Unknown command: {}", line.trim()),
        }
        println!();

        let _ = stdout.flush();
    }

    Ok(())
}
