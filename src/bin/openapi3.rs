// src/bin/openapi3.rs
use anyhow::{Context, Result};
use restdocs_dsl::config::DocsConfig;
use restdocs_dsl::presentation::openapi;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DocsConfig::from_env()?;
    let snippets_dir = config.snippets_dir();
    tracing::info!(
        snippets = %snippets_dir.display(),
        format = %config.openapi().format,
        security = %config.openapi().security,
        "generating openapi document"
    );

    let path = openapi::generate(snippets_dir, config.openapi())
        .with_context(|| format!("generating from {}", snippets_dir.display()))?;
    println!("OpenAPI document written to {}", path.display());
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
