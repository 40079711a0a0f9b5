use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Roster;
use crate::store::open_store;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the roster store, seeded with the default roster when empty
pub fn handle(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let mut cfg = cfg.clone();

    if let Commands::Init { profile, backend } = &cli.command {
        if let Some(p) = profile {
            cfg.profile = *p;
        }
        if let Some(b) = backend
            && cfg.backend != *b
        {
            cfg.backend = *b;
            if cli.store.is_none() {
                cfg.store = None;
            }
        }
    }

    println!("⚙️  Initializing rollcall…");

    if !cli.test {
        cfg.save(config_path)?;
        println!("📄 Config file : {}", config_path.display());
    }

    let mut store = open_store(&cfg)?;
    let mut roster = store.load()?;

    if roster.is_empty() && !cfg.seed.is_empty() {
        roster = Roster::seeded(&cfg.seed);
        store.save(&roster)?;
        info(format!("Seeded roster with {} attendees", roster.len()));
    }

    println!("🗂️  Store       : {}", store.describe());
    println!("👥 Profile     : {}", cfg.profile.as_str());

    success(format!(
        "rollcall initialized ({} attendees in roster)",
        roster.len()
    ));
    Ok(())
}
