// Aircraft service - Use case for listing currently tracked aircraft
use crate::application::record_shaper::shape_aircraft;
use crate::application::states_source::StatesSource;
use crate::domain::aircraft::AircraftRecord;
use std::sync::Arc;

#[derive(Clone)]
pub struct AircraftService {
    source: Arc<dyn StatesSource>,
}

impl AircraftService {
    pub fn new(source: Arc<dyn StatesSource>) -> Self {
        Self { source }
    }

    pub async fn list_aircraft(&self) -> Vec<AircraftRecord> {
        match self.source.fetch_states_authorized().await {
            Ok(response) => shape_aircraft(&response),
            Err(e) => {
                tracing::error!("Error fetching aircraft: {:#}", e);
                Vec::new()
            }
        }
    }
}
