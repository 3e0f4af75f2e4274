// Application layer - use cases and the seams they depend on
pub mod aircraft_service;
pub mod collector_service;
pub mod errors;
pub mod record_shaper;
pub mod scheduler;
pub mod snapshot_sink;
pub mod states_source;
pub mod track_store;
