//! add-address - Terminal storefront view for adding a shipping address
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use addr_app::config::{init_config_file, load_settings, resolve_config_path};
use addr_app::{Engine, NotificationLevel, Route, Settings};
use addr_core::prelude::*;
use clap::Parser;

/// Add a new shipping address to the signed-in customer's profile
#[derive(Parser, Debug)]
#[command(name = "add-address")]
#[command(about = "Add a shipping address from the terminal", long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/add-address/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Bearer token, overrides `api.access_token`
    #[arg(long, env = "ADDADDR_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    addr_core::logging::init()?;

    let config_path = resolve_config_path(args.config.as_deref());

    if args.init_config {
        let Some(path) = config_path else {
            return Err(Error::config("No config directory on this platform"));
        };
        if init_config_file(&path).context("writing default config")? {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let mut settings = config_path
        .as_deref()
        .map(load_settings)
        .unwrap_or_else(Settings::default);
    if let Some(token) = args.token {
        settings.api.access_token = token;
    }
    if settings.api.access_token.is_empty() {
        warn!("No access token configured, address creation will be unauthenticated");
    }

    let profile_route = settings.api.profile_route.clone();
    let engine = Engine::from_settings(settings);

    let outcome = match addr_tui::run(engine).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Application error: {:?}", e);
            if let Ok(log_file) = addr_core::logging::get_current_log_file() {
                eprintln!("See logs under {}", log_file.display());
            }
            return Err(e);
        }
    };

    if let Some(notification) = outcome
        .notification
        .filter(|n| n.level == NotificationLevel::Success)
    {
        println!("{}", notification.message);
    }
    if outcome.route == Route::Profile {
        println!("→ {}", profile_route);
    }

    info!("add-address exiting");
    Ok(())
}
