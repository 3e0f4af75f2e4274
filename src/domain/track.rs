// Track domain model
use serde::{Deserialize, Serialize};

/// One observed coordinate pair, written as `[longitude, latitude]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.longitude, p.latitude]
    }
}

impl From<[f64; 2]> for Position {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self { longitude, latitude }
    }
}

/// Persisted document: every track, identifiers dropped, in first-seen order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub flights: Vec<Vec<Position>>,
}

impl Snapshot {
    pub fn new(flights: Vec<Vec<Position>>) -> Self {
        Self { flights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_wire_shape() {
        let snapshot = Snapshot::new(vec![
            vec![Position::new(13.4, 52.5), Position::new(13.5, 52.6)],
            vec![Position::new(-0.45, 51.47)],
        ]);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"flights": [[[13.4, 52.5], [13.5, 52.6]], [[-0.45, 51.47]]]})
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let value = serde_json::to_value(Snapshot::default()).unwrap();
        assert_eq!(value, serde_json::json!({"flights": []}));
    }
}
