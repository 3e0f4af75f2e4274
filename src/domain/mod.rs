// Domain layer - upstream data and the shapes derived from it
pub mod aircraft;
pub mod state_vector;
pub mod track;
pub mod upstream;
