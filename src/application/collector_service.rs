// Collector service - one fetch, merge and persist cycle
use crate::application::errors::CollectorError;
use crate::application::snapshot_sink::SnapshotSink;
use crate::application::states_source::StatesSource;
use crate::application::track_store::TrackStore;
use crate::domain::upstream::StateBatch;
use crate::infrastructure::config::WritePolicy;
use std::sync::Arc;

/// What a cycle observed upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// State vectors received and positions appended to the store
    Observed { states: usize, appended: usize },
    NoData,
    FetchFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    pub snapshot_written: bool,
}

pub struct CollectorService {
    source: Arc<dyn StatesSource>,
    store: Box<dyn TrackStore>,
    sink: Box<dyn SnapshotSink>,
    write_policy: WritePolicy,
}

impl CollectorService {
    pub fn new(
        source: Arc<dyn StatesSource>,
        store: Box<dyn TrackStore>,
        sink: Box<dyn SnapshotSink>,
        write_policy: WritePolicy,
    ) -> Self {
        Self {
            source,
            store,
            sink,
            write_policy,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn TrackStore {
        self.store.as_ref()
    }

    /// Run one cycle.
    ///
    /// Fetch failures are logged and treated as an empty observation set. Only a
    /// failure to persist the snapshot is returned as an error.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, CollectorError> {
        let outcome = match self.fetch().await {
            Ok(batch) if batch.vectors.is_empty() => CycleOutcome::NoData,
            Ok(batch) => CycleOutcome::Observed {
                states: batch.vectors.len(),
                appended: self.merge(&batch),
            },
            Err(e) => {
                tracing::error!("Failed to fetch data from OpenSky API: {}", e);
                CycleOutcome::FetchFailed
            }
        };

        let snapshot_written = match (self.write_policy, outcome) {
            (WritePolicy::Always, _) | (WritePolicy::OnData, CycleOutcome::Observed { .. }) => {
                self.sink.write(&self.store.snapshot())?;
                true
            }
            _ => false,
        };

        match outcome {
            CycleOutcome::Observed { states, appended } => tracing::info!(
                "ADS-B data converted to JSON ({} states, {} new positions, {} aircraft / {} positions tracked)",
                states,
                appended,
                self.store.aircraft_count(),
                self.store.position_count()
            ),
            CycleOutcome::NoData => tracing::info!("No ADS-B data received"),
            CycleOutcome::FetchFailed => {}
        }

        Ok(CycleReport {
            outcome,
            snapshot_written,
        })
    }

    async fn fetch(&self) -> Result<StateBatch, CollectorError> {
        let response = self
            .source
            .fetch_states()
            .await
            .map_err(|e| CollectorError::Transport(format!("{:#}", e)))?;

        if !response.is_success() {
            return Err(CollectorError::Status(response.status));
        }

        let batch = response.states()?;
        if batch.skipped > 0 {
            tracing::debug!("Skipped {} unreadable state vectors", batch.skipped);
        }
        Ok(batch)
    }

    /// Append every complete position; vectors missing a coordinate are dropped
    fn merge(&mut self, batch: &StateBatch) -> usize {
        let mut appended = 0;
        for sv in &batch.vectors {
            if let Some(position) = sv.position() {
                self.store.append(&sv.icao24, position);
                appended += 1;
            }
        }
        appended
    }
}
