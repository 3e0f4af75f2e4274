// Record shaper - upstream response to named aircraft records
use crate::domain::aircraft::AircraftRecord;
use crate::domain::upstream::UpstreamResponse;

/// Shape every state vector of a successful response, in upstream order.
///
/// Incomplete records are kept as-is. A non-success status or an unreadable
/// body yields an empty list.
pub fn shape_aircraft(response: &UpstreamResponse) -> Vec<AircraftRecord> {
    if !response.is_success() {
        return Vec::new();
    }

    match response.states() {
        Ok(batch) => batch.vectors.into_iter().map(AircraftRecord::from).collect(),
        Err(_) => Vec::new(),
    }
}
