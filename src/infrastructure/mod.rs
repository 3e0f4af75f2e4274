// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod logging;
pub mod opensky_client;
pub mod snapshot_file;
