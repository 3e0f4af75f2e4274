// Snapshot sink trait - where the projected tracks end up
use crate::application::errors::CollectorError;
use crate::domain::track::Snapshot;

pub trait SnapshotSink: Send + Sync {
    /// Replace the persisted snapshot in full
    fn write(&mut self, snapshot: &Snapshot) -> Result<(), CollectorError>;
}
