// Track store - accumulated positions per aircraft
use crate::domain::track::{Position, Snapshot};
use indexmap::IndexMap;

/// Storage policy for accumulated tracks.
///
/// The collector only ever appends; implementations decide how much history
/// they retain.
pub trait TrackStore: Send + Sync {
    fn append(&mut self, icao24: &str, position: Position);

    #[cfg(test)]
    fn track(&self, icao24: &str) -> Option<&[Position]>;

    /// Project all tracks into the persisted document, first-seen order
    fn snapshot(&self) -> Snapshot;

    fn aircraft_count(&self) -> usize;

    fn position_count(&self) -> usize;
}

/// Keeps every position ever observed. Grows without bound.
#[derive(Debug, Default)]
pub struct InMemoryTrackStore {
    tracks: IndexMap<String, Vec<Position>>,
}

impl InMemoryTrackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrackStore for InMemoryTrackStore {
    fn append(&mut self, icao24: &str, position: Position) {
        match self.tracks.get_mut(icao24) {
            Some(track) => track.push(position),
            None => {
                self.tracks.insert(icao24.to_string(), vec![position]);
            }
        }
    }

    #[cfg(test)]
    fn track(&self, icao24: &str) -> Option<&[Position]> {
        self.tracks.get(icao24).map(Vec::as_slice)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.tracks.values().cloned().collect())
    }

    fn aircraft_count(&self) -> usize {
        self.tracks.len()
    }

    fn position_count(&self) -> usize {
        self.tracks.values().map(Vec::len).sum()
    }
}
