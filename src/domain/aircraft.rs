// Aircraft record domain model - the shape handed to web clients
use super::state_vector::StateVector;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftRecord {
    pub icao24: String,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub velocity: Option<f64>,
    pub vertical_rate: Option<f64>,
}

impl From<StateVector> for AircraftRecord {
    fn from(sv: StateVector) -> Self {
        Self {
            icao24: sv.icao24,
            callsign: sv.callsign,
            origin_country: sv.origin_country,
            latitude: sv.latitude,
            longitude: sv.longitude,
            altitude: sv.baro_altitude,
            velocity: sv.velocity,
            vertical_rate: sv.vertical_rate,
        }
    }
}
