//! Local flat-file backend: one CSV file, rewritten in full on every save.

use crate::errors::AppResult;
use crate::models::{Roster, RosterSchema};
use crate::store::RecordStore;
use crate::store::codec::{self, Grid};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvFileStore {
    path: PathBuf,
    schema: RosterSchema,
    seed: Vec<String>,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>, schema: RosterSchema, seed: Vec<String>) -> Self {
        Self {
            path: path.into(),
            schema,
            seed,
        }
    }
}

impl RecordStore for CsvFileStore {
    fn load(&mut self) -> AppResult<Roster> {
        if !self.path.exists() {
            let roster = Roster::seeded(&self.seed);
            tracing::info!(
                path = %self.path.display(),
                rows = roster.len(),
                "roster file missing, seeding default roster"
            );
            self.save(&roster)?;
            return Ok(roster);
        }

        let grid = read_grid(&self.path)?;
        let roster = codec::decode(&grid, &self.schema)?;
        tracing::debug!(path = %self.path.display(), rows = roster.len(), "roster loaded");
        Ok(roster)
    }

    fn save(&mut self, roster: &Roster) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        write_grid(&self.path, &codec::encode(roster, &self.schema))?;
        tracing::debug!(path = %self.path.display(), rows = roster.len(), "roster saved");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("csv file {}", self.path.display())
    }
}

/// Read every row of a CSV file as text cells, header included.
pub fn read_grid(path: &Path) -> AppResult<Grid> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        grid.push(rec.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

fn write_grid(path: &Path, grid: &Grid) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;
    for row in grid {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
