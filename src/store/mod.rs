//! Record store: where the roster is read from and written back to.

pub mod codec;
pub mod csv_file;
pub mod sheet;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::Roster;

pub use csv_file::CsvFileStore;
pub use sheet::{SheetConnection, SheetStore};

/// A backing table holding the whole roster.
///
/// `save` always overwrites the full table; there is no row-level write and
/// no conflict detection, the last writer wins.
pub trait RecordStore {
    fn load(&mut self) -> AppResult<Roster>;
    fn save(&mut self, roster: &Roster) -> AppResult<()>;
    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}

/// Build the store selected by the configuration. Called once per run.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn RecordStore>> {
    let path = cfg.store_path();
    let schema = cfg.schema();

    tracing::debug!(
        backend = cfg.backend.as_str(),
        path = %path.display(),
        profile = cfg.profile.as_str(),
        "opening record store"
    );

    Ok(match cfg.backend {
        Backend::Csv => Box::new(CsvFileStore::new(path, schema, cfg.seed.clone())),
        Backend::Sheet => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let conn = SheetConnection::open(&path, &cfg.sheet_name)?;
            Box::new(SheetStore::new(conn, schema))
        }
    })
}
