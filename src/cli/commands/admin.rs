use crate::cli::parser::{AdminAction, Commands};
use crate::config::Config;
use crate::core::{AccessGate, RosterLogic, RowEdit, ScoreLogic};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{RecordStore, open_store};
use crate::ui::messages::{header, info, success, warning};
use crate::ui::render::{roster_table, summary_line};
use crate::utils::path::absolutize;
use chrono::Local;

/// Handle the `admin` command family. Every action sits behind the
/// password gate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin { password, action } = cmd {
        AccessGate::new(cfg.admin_password.as_str()).require(password)?;

        let mut store = open_store(cfg)?;
        run_action(action, cfg, store.as_mut())?;
    }
    Ok(())
}

fn run_action(action: &AdminAction, cfg: &Config, store: &mut dyn RecordStore) -> AppResult<()> {
    let schema = cfg.schema();

    match action {
        AdminAction::List => {
            let roster = store.load()?;
            header(format!("Roster: {}", store.describe()));
            print!("{}", roster_table(&roster, &schema).render());
            println!();
            info(summary_line(&roster, &schema));
        }

        AdminAction::Score { key, points } => {
            let delta = points.unwrap_or(cfg.scores.default_points);
            let score = ScoreLogic::run(store, &schema, key, delta)?;
            if delta >= 0 {
                success(format!("🎈 Added {delta} points to {key} (score: {score})"));
            } else {
                success(format!("Removed {} points from {key} (score: {score})", delta.unsigned_abs()));
            }
        }

        AdminAction::Add { key } => {
            RosterLogic::add(store, &schema, key)?;
            success(format!("Added {} to the roster", key.trim()));
        }

        AdminAction::Remove { key } => {
            let removed = RosterLogic::remove(store, &schema, key)?;
            success(format!("Removed {} from the roster", removed.key));
        }

        AdminAction::Set {
            key,
            check_in,
            check_out,
            score,
            mode,
        } => {
            let edit = RowEdit {
                check_in: check_in.clone(),
                check_out: check_out.clone(),
                score: *score,
                mode: mode.clone(),
            };
            if edit.is_empty() {
                warning("Nothing to change: use --in, --out, --score or --mode.");
                return Ok(());
            }
            let updated = RosterLogic::edit(store, &schema, key, &edit, cfg.scores.floor_at_zero)?;
            success(format!(
                "Updated {}: in={} out={} score={}",
                updated.key,
                updated.check_in.as_deref().unwrap_or("-"),
                updated.check_out.as_deref().unwrap_or("-"),
                updated.score
            ));
        }

        AdminAction::Import { file } => {
            let path = absolutize(file);
            let roster = RosterLogic::import(store, &schema, &path)?;
            success(format!(
                "Roster replaced from {} ({} attendees)",
                path.display(),
                roster.len()
            ));
        }

        AdminAction::Export {
            format,
            file,
            force,
        } => {
            let roster = store.load()?;
            ExportLogic::export(
                &roster,
                &schema,
                *format,
                file.as_deref(),
                &cfg.report_prefix,
                Local::now().date_naive(),
                *force,
            )?;
        }

        AdminAction::Url => {
            if cfg.app_url.trim().is_empty() {
                warning("No app_url configured. Set it with `rollcall config --edit`.");
            } else {
                info("Share this address with attendees to check in:");
                println!("{}", cfg.app_url);
            }
        }
    }

    Ok(())
}
