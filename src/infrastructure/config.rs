use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STATES_URL: &str = "https://opensky-network.org/api/states/all";
pub const SNAPSHOT_FILE_NAME: &str = "data_adsb.json";
pub const LOG_FILE_NAME: &str = "log_data.log";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub collector: CollectorSettings,
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollectorSettings {
    pub output_dir: PathBuf,
    pub interval_secs: u64,
    pub write_policy: WritePolicy,
}

/// When the snapshot file gets rewritten
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Only after a cycle that received state vectors; no file until then
    OnData,
    /// After every cycle, including an empty `{"flights": []}`
    Always,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub url: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Unset means requests may hang indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerSettings {
    /// Address for the `/aircraft` endpoint; the web surface is off when unset
    #[serde(default)]
    pub bind: Option<String>,
}

impl CollectorSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.output_dir.join(SNAPSHOT_FILE_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(LOG_FILE_NAME)
    }
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load `config/collector.*` (optional) overlaid by `ADSB_*` environment variables,
/// e.g. `ADSB_COLLECTOR__INTERVAL_SECS=5`
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/collector").required(false))
        .add_source(
            config::Environment::with_prefix("ADSB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    build_app_config(builder)
}

fn build_app_config(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<AppConfig> {
    let settings = builder
        .set_default("collector.output_dir", "public/data/openflights")?
        .set_default("collector.interval_secs", 20)?
        .set_default("collector.write_policy", "on_data")?
        .set_default("upstream.url", DEFAULT_STATES_URL)?
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    if config.collector.interval_secs == 0 {
        anyhow::bail!("collector.interval_secs must be greater than zero");
    }

    Ok(config)
}
