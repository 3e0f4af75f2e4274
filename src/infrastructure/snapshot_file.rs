// JSON file snapshot sink
use crate::application::errors::CollectorError;
use crate::application::snapshot_sink::SnapshotSink;
use crate::domain::track::Snapshot;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

/// Overwrites the whole file on every write. No temp file or rename, so a
/// crash mid-write can leave it truncated.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Pretty-print with 4-space indentation
fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    snapshot.serialize(&mut serializer)?;
    Ok(buf)
}

impl SnapshotSink for JsonFileSnapshot {
    fn write(&mut self, snapshot: &Snapshot) -> Result<(), CollectorError> {
        let bytes = encode(snapshot)?;
        std::fs::write(&self.path, bytes).map_err(|source| CollectorError::Persist {
            path: self.path.clone(),
            source,
        })
    }
}
