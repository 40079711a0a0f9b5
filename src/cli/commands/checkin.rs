use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{CheckinLogic, CheckinOutcome};
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{error, info, success};
use crate::utils::time;

/// Handle the `checkin` command: one form submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { key } = cmd {
        let schema = cfg.schema();
        let mut store = open_store(cfg)?;

        match CheckinLogic::run(store.as_mut(), &schema, key, time::now())? {
            CheckinOutcome::CheckedIn { key, time } => {
                success(format!("{key} checked in at {time}"));
            }
            CheckinOutcome::CheckedOut { key, time } => {
                success(format!("{key} checked out at {time}"));
            }
            CheckinOutcome::AlreadyDone { key } => {
                if schema.supports_checkout() {
                    info(format!("{key} has already checked in and out"));
                } else {
                    info(format!("{key} is already checked in, no need to check in again"));
                }
            }
            CheckinOutcome::NotFound => {
                error(format!("'{}' is not on the roster", key.trim()));
            }
        }
    }
    Ok(())
}
