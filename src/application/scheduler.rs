// Periodic runner - drives the collector on a fixed interval
use crate::application::collector_service::{CollectorService, CycleReport};
use crate::application::errors::CollectorError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct PeriodicRunner {
    collector: CollectorService,
    interval: Duration,
    sleeper: Arc<dyn Sleeper>,
    cycles: u64,
}

impl PeriodicRunner {
    pub fn new(collector: CollectorService, interval: Duration, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            collector,
            interval,
            sleeper,
            cycles: 0,
        }
    }

    #[cfg(test)]
    pub fn collector(&self) -> &CollectorService {
        &self.collector
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// One cycle followed by the fixed pause. Cycles never overlap.
    pub async fn tick(&mut self) -> Result<CycleReport, CollectorError> {
        let report = self.collector.run_cycle().await?;
        self.cycles += 1;
        self.sleeper.sleep(self.interval).await;
        Ok(report)
    }

    /// Loop until the process is killed. Returns only when a snapshot could not
    /// be persisted.
    pub async fn run(&mut self) -> Result<(), CollectorError> {
        tracing::info!("Collecting ADS-B data every {}s", self.interval.as_secs());
        loop {
            if let Err(e) = self.tick().await {
                tracing::error!("Collector stopped after {} cycles: {}", self.cycles(), e);
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::collector_service::tests::{status, states, RecordingSink, ScriptedSource};
    use crate::application::collector_service::CycleOutcome;
    use crate::application::snapshot_sink::SnapshotSink;
    use crate::application::track_store::InMemoryTrackStore;
    use crate::domain::track::Snapshot;
    use crate::infrastructure::config::WritePolicy;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSleeper {
        slept: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    #[tokio::test]
    async fn test_tick_runs_cycle_then_sleeps() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let collector = CollectorService::new(
            ScriptedSource::new(vec![
                states(r#"{"states": [["aaa111", null, "France", 0, 0, 1.0, 2.0]]}"#),
                status(StatusCode::SERVICE_UNAVAILABLE),
            ]),
            Box::new(InMemoryTrackStore::new()),
            Box::new(RecordingSink::default()),
            WritePolicy::OnData,
        );
        let mut runner = PeriodicRunner::new(collector, Duration::from_secs(20), sleeper.clone());

        let first = runner.tick().await.unwrap();
        let second = runner.tick().await.unwrap();

        assert_eq!(first.outcome, CycleOutcome::Observed { states: 1, appended: 1 });
        assert_eq!(second.outcome, CycleOutcome::FetchFailed);
        assert_eq!(runner.cycles(), 2);
        assert_eq!(runner.collector().store().position_count(), 1);
        assert_eq!(
            *sleeper.slept.lock().unwrap(),
            vec![Duration::from_secs(20), Duration::from_secs(20)]
        );
    }

    #[tokio::test]
    async fn test_run_stops_on_persist_failure() {
        struct FullDisk;

        impl SnapshotSink for FullDisk {
            fn write(&mut self, _snapshot: &Snapshot) -> Result<(), CollectorError> {
                Err(CollectorError::Persist {
                    path: "data_adsb.json".into(),
                    source: std::io::Error::other("no space left on device"),
                })
            }
        }

        let sleeper = Arc::new(RecordingSleeper::default());
        let collector = CollectorService::new(
            ScriptedSource::new(vec![
                status(StatusCode::INTERNAL_SERVER_ERROR),
                states(r#"{"states": [["aaa111", null, "France", 0, 0, 1.0, 2.0]]}"#),
            ]),
            Box::new(InMemoryTrackStore::new()),
            Box::new(FullDisk),
            WritePolicy::OnData,
        );
        let mut runner = PeriodicRunner::new(collector, Duration::from_secs(1), sleeper.clone());

        let err = runner.run().await.unwrap_err();

        assert!(matches!(err, CollectorError::Persist { .. }));
        assert_eq!(runner.cycles(), 1);
        assert_eq!(sleeper.slept.lock().unwrap().len(), 1);
    }
}
