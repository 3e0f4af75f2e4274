// Application state for HTTP handlers
use crate::application::aircraft_service::AircraftService;

#[derive(Clone)]
pub struct AppState {
    pub aircraft_service: AircraftService,
}
