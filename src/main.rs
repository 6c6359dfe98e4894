//! AUTOPLAYER: card-counting blackjack agent
//!
//! Entry point. Loads configuration, initialises structured logging,
//! connects to the game server and plays the configured number of hands,
//! then prints the run summary.

use anyhow::Result;
use tracing::info;

use autoplayer::client::http::HttpGameClient;
use autoplayer::config;
use autoplayer::engine::session::Session;

const BANNER: &str = r#"
     _   _   _ _____ ___  ____  _        _ __   _______ ____
    / \ | | | |_   _/ _ \|  _ \| |      / \\ \ / / ____|  _ \
   / _ \| | | | | || | | | |_) | |     / _ \\ V /|  _| | |_) |
  / ___ \ |_| | | || |_| |  __/| |___ / ___ \| | | |___|  _ <
 /_/   \_\___/  |_| \___/|_|   |_____/_/   \_\_| |_____|_| \_\

  Hi-Lo counting blackjack agent v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load("config.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(
        base_url = %cfg.server.base_url,
        hands = cfg.session.hands,
        timeout_secs = cfg.server.timeout_secs,
        "AUTOPLAYER starting up"
    );

    let client = HttpGameClient::new(
        &cfg.server.base_url,
        cfg.server.username()?,
        cfg.server.password()?,
        cfg.server.timeout(),
    )?;

    let report = Session::new(&client).run(cfg.session.hands).await?;

    println!("{report}");
    info!(
        run_id = %report.run_id,
        elapsed_secs = (report.finished_at - report.started_at).num_seconds(),
        "AUTOPLAYER shut down cleanly."
    );

    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("autoplayer=info"));

    let json_logging = std::env::var("AUTOPLAYER_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
