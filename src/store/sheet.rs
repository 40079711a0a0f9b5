//! Remote-sheet backend.
//!
//! `SheetConnection` is a read/overwrite connection to a worksheet kept in a
//! SQLite file: every cell is one row of `sheet_cells`. `SheetStore` wraps it
//! with the session cache: the roster fetched on first load is served until a
//! save replaces it.

use crate::errors::AppResult;
use crate::models::{Roster, RosterSchema};
use crate::store::RecordStore;
use crate::store::codec::{self, Grid};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS sheet_cells (
    sheet TEXT NOT NULL,
    row   INTEGER NOT NULL,
    col   INTEGER NOT NULL,
    value TEXT NOT NULL,
    PRIMARY KEY (sheet, row, col)
)";

pub struct SheetConnection {
    conn: Connection,
    path: PathBuf,
    sheet: String,
    fetched: Option<(Instant, Grid)>,
}

impl SheetConnection {
    pub fn open(path: &Path, sheet: &str) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            fetched: None,
        })
    }

    /// Fetch the worksheet. A grid fetched less than `ttl` ago is reused;
    /// a zero `ttl` always goes to the source.
    pub fn read(&mut self, ttl: Duration) -> AppResult<Grid> {
        if let Some((at, grid)) = &self.fetched
            && !ttl.is_zero()
            && at.elapsed() < ttl
        {
            return Ok(grid.clone());
        }

        let mut stmt = self.conn.prepare_cached(
            "SELECT row, col, value FROM sheet_cells
             WHERE sheet = ?1
             ORDER BY row ASC, col ASC",
        )?;

        let cells = stmt.query_map(params![self.sheet], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut grid: Grid = Vec::new();
        for cell in cells {
            let (r, c, value) = cell?;
            let (r, c) = (usize::try_from(r).unwrap_or(0), usize::try_from(c).unwrap_or(0));
            if grid.len() <= r {
                grid.resize_with(r + 1, Vec::new);
            }
            let line = &mut grid[r];
            if line.len() <= c {
                line.resize(c + 1, String::new());
            }
            line[c] = value;
        }

        tracing::debug!(sheet = %self.sheet, rows = grid.len(), "worksheet fetched");
        self.fetched = Some((Instant::now(), grid.clone()));
        Ok(grid)
    }

    /// Replace the whole worksheet with `grid`.
    pub fn update(&mut self, grid: &Grid) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM sheet_cells WHERE sheet = ?1", params![self.sheet])?;
        {
            let mut insert = tx.prepare_cached(
                "INSERT INTO sheet_cells (sheet, row, col, value) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (r, line) in grid.iter().enumerate() {
                for (c, value) in line.iter().enumerate() {
                    insert.execute(params![self.sheet, r as i64, c as i64, value])?;
                }
            }
        }
        tx.commit()?;

        tracing::debug!(sheet = %self.sheet, rows = grid.len(), "worksheet overwritten");
        self.fetched = Some((Instant::now(), grid.clone()));
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub struct SheetStore {
    conn: SheetConnection,
    schema: RosterSchema,
    session: Option<Roster>,
}

impl SheetStore {
    pub fn new(conn: SheetConnection, schema: RosterSchema) -> Self {
        Self {
            conn,
            schema,
            session: None,
        }
    }

    /// Drop the session copy so the next load refetches the worksheet.
    pub fn invalidate(&mut self) {
        self.session = None;
    }
}

impl RecordStore for SheetStore {
    fn load(&mut self) -> AppResult<Roster> {
        if let Some(roster) = &self.session {
            return Ok(roster.clone());
        }

        let grid = self.conn.read(Duration::ZERO)?;
        let roster = codec::decode(&grid, &self.schema)?;
        self.session = Some(roster.clone());
        Ok(roster)
    }

    fn save(&mut self, roster: &Roster) -> AppResult<()> {
        self.conn.update(&codec::encode(roster, &self.schema))?;
        self.session = Some(roster.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "sheet '{}' in {}",
            self.conn.sheet,
            self.conn.path().display()
        )
    }
}
