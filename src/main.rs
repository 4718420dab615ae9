mod api;
mod app;
mod clipboard;
mod command;
mod config;
mod controller;
mod error;
mod tone;

use anyhow::Result;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,redraft=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .map(|dir| dir.join("redraft.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        // Log to file; stdout belongs to the interactive session
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"redraft - AI email reply drafts

Usage: redraft [command]

Commands:
    (none)      Start an interactive drafting session
    setup       Configure the backend endpoint and sender identity
    help        Show this help message

Configuration file: ~/.config/redraft/config.toml
Environment: REDRAFT_BASE_URL overrides the configured backend address
"#
    );
}

async fn run_setup() -> Result<()> {
    use std::io::{self, Write};

    println!("Redraft Setup");
    println!("=============\n");

    // Check if config exists
    let config_path = Config::config_path()?;
    if config_path.exists() {
        print!("Configuration already exists. Overwrite? [y/N]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Setup cancelled.");
            return Ok(());
        }
    }

    // Get backend base URL
    print!("Generation service base URL [http://localhost:8000]: ");
    io::stdout().flush()?;
    let mut base_url = String::new();
    io::stdin().read_line(&mut base_url)?;
    let base_url = base_url.trim();
    let base_url = if base_url.is_empty() {
        "http://localhost:8000".to_string()
    } else {
        base_url.to_string()
    };

    // Get sender name
    print!("Sender name (optional): ");
    io::stdout().flush()?;
    let mut name = String::new();
    io::stdin().read_line(&mut name)?;
    let name = name.trim();
    let name = if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    };

    // Get sender email with validation (empty skips it)
    let email = loop {
        print!("Sender email (optional): ");
        io::stdout().flush()?;
        let mut email = String::new();
        io::stdin().read_line(&mut email)?;
        let email = email.trim().to_string();

        if email.is_empty() {
            break None;
        }

        // Basic email validation: must contain @ and have parts before/after
        if email.contains('@') {
            let parts: Vec<&str> = email.split('@').collect();
            if parts.len() == 2
                && !parts[0].is_empty()
                && parts[1].contains('.')
                && !parts[1].starts_with('.')
                && !parts[1].ends_with('.')
            {
                break Some(email);
            }
        }
        println!(
            "Invalid email format. Please enter a valid email address (e.g., user@example.com)"
        );
    };

    let config = Config {
        backend: config::BackendConfig { base_url },
        sender: config::SenderConfig { name, email },
    };

    config.ensure_dirs()?;
    config.save()?;
    println!("Configuration saved to {}", config_path.display());

    println!("\nSetup complete! Run 'redraft' to start.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("setup") => run_setup().await,
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;

            let mut app = App::new(config);
            app.run().await
        }
    }
}
