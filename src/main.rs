//! oed-proxy
//!
//! ```text
//!     Client                      oed-proxy                        Provider
//!     ──────                      ─────────                        ────────
//!     GET  /*  ───────────────▶  "oed-proxy"
//!
//!     POST /*  ───────────────▶  decode LookupRequest
//!     {word, lang,                   │
//!      app_id, app_key}              ▼
//!                                 GET /entries/{lang}/{word}  ───▶  entries API
//!                                   app_id / app_key headers   ◀───  JSON
//!                                    │
//!              ◀───────────────  200 entries JSON
//!                                or 400 {"status":"error"}
//! ```

use std::path::PathBuf;

use clap::Parser;

use oed_proxy::config::{load_config, ProxyConfig};
use oed_proxy::lifecycle::{self, Shutdown};

#[derive(Parser)]
#[command(name = "oed-proxy", version)]
#[command(about = "Credential-injecting proxy for the Oxford Dictionaries entries API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    lifecycle::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
