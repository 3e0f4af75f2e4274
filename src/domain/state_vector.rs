// State vector domain model - named view over the upstream positional arrays
use super::track::Position;
use serde_json::Value;

// Field positions inside one upstream state vector. Only this module knows them.
const ICAO24: usize = 0;
const CALLSIGN: usize = 1;
const ORIGIN_COUNTRY: usize = 2;
const LONGITUDE: usize = 5;
const LATITUDE: usize = 6;
const BARO_ALTITUDE: usize = 7;
const VELOCITY: usize = 9;
const VERTICAL_RATE: usize = 11;

#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    pub icao24: String,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub baro_altitude: Option<f64>,
    pub velocity: Option<f64>,
    pub vertical_rate: Option<f64>,
}

impl StateVector {
    /// Parse one raw state vector.
    ///
    /// Returns `None` when the entry is not an array or has no string identifier
    /// at index 0. Missing trailing fields read as null.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let fields = raw.as_array()?;
        let icao24 = fields.get(ICAO24)?.as_str()?.to_string();

        Some(Self {
            icao24,
            callsign: string_at(fields, CALLSIGN),
            origin_country: string_at(fields, ORIGIN_COUNTRY),
            longitude: number_at(fields, LONGITUDE),
            latitude: number_at(fields, LATITUDE),
            baro_altitude: number_at(fields, BARO_ALTITUDE),
            velocity: number_at(fields, VELOCITY),
            vertical_rate: number_at(fields, VERTICAL_RATE),
        })
    }

    /// The observed position, if both coordinates were reported
    pub fn position(&self) -> Option<Position> {
        match (self.longitude, self.latitude) {
            (Some(longitude), Some(latitude)) => Some(Position::new(longitude, latitude)),
            _ => None,
        }
    }
}

fn string_at(fields: &[Value], idx: usize) -> Option<String> {
    fields.get(idx).and_then(Value::as_str).map(str::to_string)
}

fn number_at(fields: &[Value], idx: usize) -> Option<f64> {
    fields.get(idx).and_then(Value::as_f64)
}
