use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use quill::app::{App, AppEvent};
use quill::config::Config;
use quill::session::Session;
use quill::ui;

/// Get the config directory path (~/.config/quill/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("quill");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "quill", about = "Terminal blog-post composer")]
struct Args {
    /// Store an API access token and exit
    #[arg(long, value_name = "TOKEN")]
    login: Option<String>,

    /// Remove the stored API access token and exit
    #[arg(long)]
    logout: bool,

    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // Directory holds the session credential; user-only access on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    let mut session = Session::load(&config_dir).context("Failed to load session state")?;

    // Handle --logout flag
    if args.logout {
        session.clear().context("Failed to clear session")?;
        println!("Logged out.");
        return Ok(());
    }

    // Handle --login flag
    if let Some(token) = &args.login {
        if token.trim().is_empty() {
            anyhow::bail!("Token must not be empty");
        }
        session.store(token).context("Failed to store session")?;
        println!("Token stored. You are logged in.");
        return Ok(());
    }

    let mut config =
        Config::load(&config_dir.join("config.toml")).context("Failed to load config")?;

    if let Some(api_base) = args.api_base {
        config.api_base_url = api_base;
    }

    if !session.is_authenticated() {
        eprintln!("Note: no stored session token; publishing will be disabled.");
        eprintln!("Log in first with:  quill --login <token>");
    }

    // Create app state
    let mut app = App::new(&config, session).context("Failed to create application")?;

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
