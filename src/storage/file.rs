use super::{StateStore, StoreError};
use crate::desk::HotelState;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store holding the whole record set as one JSON document.
///
/// Saves are written to a sibling temp file, synced, and renamed over the
/// data file, so a crash mid-save leaves the previous record set intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.as_os_str().to_owned();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<HotelState, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(HotelState::default());
            }
            Err(err) => return Err(err.into()),
        };

        let state: HotelState = serde_json::from_str(&raw)?;
        Ok(state)
    }

    fn save(&self, state: &HotelState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        let encoded = serde_json::to_vec_pretty(state)?;
        {
            let mut file = fs::File::create(&staging)?;
            file.write_all(&encoded)?;
            file.sync_all()?;
        }
        fs::rename(&staging, &self.path)?;
        debug!(path = %self.path.display(), bytes = encoded.len(), "record set saved");
        Ok(())
    }
}
