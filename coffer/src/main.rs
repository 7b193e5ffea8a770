//! Replays a banking session file.
//!
//! Usage: `coffer [config] [session]`

use std::{env, sync::Arc};

use anyhow::Context;
use coffer::{
    logger,
    session::{Session, load_requests},
};
use coffer_core::config::CofferConfig;
use coffer_registry::ItemRegistry;

const DEFAULT_CONFIG_PATH: &str = "config/coffer_config.json5";

fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    let config_path = args
        .next()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let session_path = args.next();

    let created = CofferConfig::create_default(&config_path)
        .with_context(|| format!("Failed to create config {config_path}"))?;
    let config = CofferConfig::load(&config_path)
        .with_context(|| format!("Failed to load config {config_path}"))?;
    logger::init(&config.log_filter)?;
    if created {
        tracing::info!("Wrote default config to {config_path}");
    }

    let registry = ItemRegistry::load(&config.item_definitions)
        .with_context(|| format!("Failed to load item definitions {}", config.item_definitions))?;
    tracing::info!("Loaded {} item definitions", registry.len());

    let session = Session::new("player", Arc::new(registry), config.inventory_size);

    let Some(session_path) = session_path else {
        tracing::warn!("No session file given, nothing to replay");
        return Ok(());
    };
    let requests = load_requests(&session_path)
        .with_context(|| format!("Failed to load session {session_path}"))?;

    let summary = session.replay(&requests);
    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        messages = summary.messages,
        weight = session.player().weight(),
        "Session finished"
    );
    Ok(())
}
