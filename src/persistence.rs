use crate::error::PersistenceError;
use crate::model::{Catalog, Roster};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Separator between a name and its count on each line
const SEPARATOR: &str = ": ";

/// Plain text progress file, one `Name: count` line per character
#[derive(Debug, Clone)]
pub struct ProgressFile {
    path: PathBuf,
}

impl ProgressFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved counts. A missing file means no progress yet.
    pub fn load(&self, catalog: &Catalog) -> Result<Roster, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no saved progress, starting fresh");
                return Ok(Roster::zeroed(catalog));
            }
            Err(e) => {
                return Err(PersistenceError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let roster = parse_progress(&contents, catalog)?;
        tracing::info!(path = %self.path.display(), entries = roster.len(), "loaded progress");
        Ok(roster)
    }

    /// Overwrite the file with every roster entry
    pub fn save(&self, roster: &Roster) -> Result<(), PersistenceError> {
        fs::write(&self.path, format_progress(roster)).map_err(|e| PersistenceError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::info!(path = %self.path.display(), entries = roster.len(), "saved progress");
        Ok(())
    }
}

fn parse_progress(contents: &str, catalog: &Catalog) -> Result<Roster, PersistenceError> {
    let mut roster = Roster::zeroed(catalog);

    for (idx, line) in contents.lines().enumerate() {
        let (name, count) = parse_line(line).map_err(|reason| PersistenceError::Parse {
            line: idx + 1,
            text: line.to_string(),
            reason,
        })?;

        // Keep the key set equal to the catalog
        if !roster.set(name, count) {
            tracing::warn!(line = idx + 1, name, "skipping name not in catalog");
        }
    }

    Ok(roster)
}

fn parse_line(line: &str) -> Result<(&str, u32), String> {
    let (name, count) = line
        .split_once(SEPARATOR)
        .ok_or_else(|| format!("missing {:?} separator", SEPARATOR))?;
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid count: {}", e))?;
    Ok((name, count))
}

fn format_progress(roster: &Roster) -> String {
    roster
        .entries()
        .iter()
        .map(|e| format!("{}{}{}\n", e.name, SEPARATOR, e.count))
        .collect()
}
