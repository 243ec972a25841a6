//! Pokedex CLI - An interactive shell over the PokeAPI catalog

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::api::{ApiClient, HttpTransport};
use pokedex_cli::cache::Cache;
use pokedex_cli::repl::Repl;
use pokedex_cli::{spawn_sweep_task, Config, Dispatcher, Registry, Session};

/// Main entry point for the Pokedex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its sweep task
/// 4. Build the session and dispatcher
/// 5. Run the REPL until `exit` or end of input
/// 6. Stop the sweep task and wait for it
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of command output,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn,pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s",
        config.base_url, config.cache_interval
    );

    let cache = Cache::new(config.cache_interval());
    let shutdown = CancellationToken::new();
    let sweeper = spawn_sweep_task(cache.clone(), shutdown.clone());

    let client = ApiClient::new(Arc::new(HttpTransport::new()), cache, config.base_url.clone());
    let session = Session::new(client);
    let dispatcher = Dispatcher::new(Registry::standard());

    let result = match Repl::new(dispatcher, session, config.prompt.clone()) {
        Ok(mut repl) => repl.run().await,
        Err(e) => Err(e),
    };

    shutdown.cancel();
    sweeper.await?;
    info!("Pokedex shutdown complete");

    result
}
