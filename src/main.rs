//! URL shortener / redirect service.
//!
//! # Architecture Overview
//!
//! ```text
//!   startup (once)                                 per request
//!   ─────────────                                  ───────────
//!   flags + settings                               Client Request
//!        │                                              │
//!        ▼                                              ▼
//!   RouteSource ──┬─ LiteralMap ─┐             ┌─────────────────┐
//!                 ├─ YamlFile ───┤  RouteLookup│ RedirectService │──hit──▶ 302 Found
//!                 ├─ JsonFile ───┼────────────▶│  (exact path)   │
//!                 └─ StorePath ──┘             └────────┬────────┘
//!                    (seeded)                           │ miss
//!                                                       ▼
//!                                               default mux: "/" → greeting
//!                                                        else → 404
//! ```

use clap::Parser;

use urlshort::config::Cli;
use urlshort::lifecycle::{bootstrap, signals, Shutdown};
use urlshort::observability::logging;

#[tokio::main]
async fn main() {
    logging::init();

    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (server, listener) = bootstrap(&cli).await?;

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    signals::spawn_ctrl_c_handler(shutdown);

    server.run(listener, stop).await?;
    Ok(())
}
