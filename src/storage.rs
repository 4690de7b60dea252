use crate::model::EngineError;
use crate::record;
use crate::schedule::ScheduleIndex;
use crate::tasks::TaskList;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SCHEDULE_FILE: &str = "schedule.txt";
pub const TASKS_FILE: &str = "tasks.txt";
pub const DATA_DIR_ENV: &str = "HOURGLASS_DATA_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataScope {
    /// Chosen explicitly, by flag or environment.
    Override,
    /// Set in the config file.
    Configured,
    /// The platform data directory.
    Default,
}

/// Where the two store files live.
#[derive(Debug, Clone)]
pub struct DataLocation {
    pub dir: PathBuf,
    pub scope: DataScope,
}

impl DataLocation {
    pub fn new(dir: impl Into<PathBuf>, scope: DataScope) -> Self {
        DataLocation {
            dir: dir.into(),
            scope,
        }
    }

    pub fn schedule_path(&self) -> PathBuf {
        self.dir.join(SCHEDULE_FILE)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }
}

/// Resolves the data directory: explicit override, then `HOURGLASS_DATA_DIR`,
/// then the configured directory, then the platform default.
pub fn locate_data(explicit: Option<&Path>, configured: Option<&Path>) -> Result<DataLocation> {
    if let Some(dir) = explicit {
        return Ok(DataLocation::new(dir, DataScope::Override));
    }
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(DataLocation::new(dir, DataScope::Override));
    }
    if let Some(dir) = configured {
        return Ok(DataLocation::new(dir, DataScope::Configured));
    }
    let dirs = ProjectDirs::from("", "", "hourglass").context("locating data directory")?;
    Ok(DataLocation::new(dirs.data_dir(), DataScope::Default))
}

pub fn load_schedule(path: &Path) -> Result<ScheduleIndex, EngineError> {
    let text = read_or_create(path)?;
    let index = record::decode_schedule(&text)?;
    log::info!("loaded {} events from {}", index.len(), path.display());
    Ok(index)
}

pub fn save_schedule(path: &Path, index: &ScheduleIndex) -> Result<(), EngineError> {
    let text = record::encode_schedule(index)?;
    write_all(path, &text)?;
    log::info!("saved {} events to {}", index.len(), path.display());
    Ok(())
}

pub fn load_tasks(path: &Path) -> Result<TaskList, EngineError> {
    let text = read_or_create(path)?;
    let list = record::decode_tasks(&text)?;
    log::info!("loaded {} tasks from {}", list.len(), path.display());
    Ok(list)
}

pub fn save_tasks(path: &Path, list: &TaskList) -> Result<(), EngineError> {
    let text = record::encode_tasks(list)?;
    write_all(path, &text)?;
    log::info!("saved {} tasks to {}", list.len(), path.display());
    Ok(())
}

/// Reads the whole file, creating it empty first if it does not exist.
fn read_or_create(path: &Path) -> Result<String, EngineError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("creating empty {}", path.display());
            ensure_parent(path)?;
            fs::write(path, "").map_err(|e| EngineError::io(path, e))?;
            Ok(String::new())
        }
        Err(err) => Err(EngineError::io(path, err)),
    }
}

/// Truncates and rewrites the file. Encoding happens before this is called,
/// so a malformed record never leaves a half-written file behind.
fn write_all(path: &Path, text: &str) -> Result<(), EngineError> {
    ensure_parent(path)?;
    fs::write(path, text).map_err(|e| EngineError::io(path, e))
}

fn ensure_parent(path: &Path) -> Result<(), EngineError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| EngineError::io(parent, e))
        }
        _ => Ok(()),
    }
}
