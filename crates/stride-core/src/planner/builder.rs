//! Builder for creating and configuring Planner instances.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::debug;
use tokio::task;

use super::{open_store, Planner};
use crate::error::{PlannerError, Result};

/// Which record shape plans are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    /// Many plans per owner, addressed by id, in a SQLite key-value table
    #[default]
    List,
    /// One plan per owner in a JSON file
    Single,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::List => "list",
            StorageKind::Single => "single",
        }
    }

    fn default_file_name(&self) -> &'static str {
        match self {
            StorageKind::List => "stride.db",
            StorageKind::Single => "action_plans.json",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(StorageKind::List),
            "single" => Ok(StorageKind::Single),
            _ => Err(format!("Invalid storage kind: {s}. Must be 'list' or 'single'")),
        }
    }
}

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    storage_path: Option<PathBuf>,
    kind: StorageKind,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom storage file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` for list storage and
    /// `$XDG_DATA_HOME/stride/action_plans.json` for single-plan storage.
    pub fn with_storage_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_storage_kind(mut self, kind: StorageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the storage directory cannot be created
    /// Returns `PlannerError::Database` if the SQLite store cannot be initialized
    pub async fn build(self) -> Result<Planner> {
        let storage_path = match self.storage_path {
            Some(path) => path,
            None => Self::default_storage_path(self.kind)?,
        };

        if let Some(parent) = storage_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlannerError::file_system(parent, e))?;
        }

        let kind = self.kind;
        let path = storage_path.clone();
        task::spawn_blocking(move || open_store(kind, &path).map(drop))
            .await
            .map_err(PlannerError::join)??;

        debug!("Using {kind} storage at {}", storage_path.display());
        Ok(Planner::new(storage_path, kind))
    }

    /// Returns the default storage path following XDG Base Directory
    /// specification.
    fn default_storage_path(kind: StorageKind) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file(kind.default_file_name())
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_kind_parsing() {
        assert_eq!("list".parse::<StorageKind>().unwrap(), StorageKind::List);
        assert_eq!("SINGLE".parse::<StorageKind>().unwrap(), StorageKind::Single);
        assert!("many".parse::<StorageKind>().is_err());
        assert_eq!(StorageKind::default(), StorageKind::List);
    }
}
