use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/app";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub fitness: FitnessSettings,
    pub firestore: FirestoreSettings,
    #[serde(default)]
    pub fallback: FallbackSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Per-user sessions kept in memory
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_sessions: default_max_sessions(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FitnessSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FirestoreSettings {
    #[serde(default = "default_firestore_url")]
    pub base_url: String,
    pub project_id: String,
    pub api_key: Option<String>,
    pub bearer_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    #[default]
    Random,
    None,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FallbackSettings {
    #[serde(default)]
    pub samples: SampleMode,
    /// Calendar month (1-12) whose missing meal records get placeholder
    /// totals; 0 turns this off
    #[serde(default = "default_fallback_month")]
    pub month: u32,
}

impl FallbackSettings {
    pub fn fallback_month(&self) -> Option<u32> {
        (self.month != 0).then_some(self.month)
    }
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            samples: SampleMode::default(),
            month: default_fallback_month(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_max_sessions() -> usize {
    1024
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_firestore_url() -> String {
    "https://firestore.googleapis.com".to_string()
}

fn default_fallback_month() -> u32 {
    2
}

/// Load `config/app.{toml,yaml,json}` (or `$NUTRISTATS_CONFIG`), then apply
/// `NUTRISTATS__SECTION__KEY` environment overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("NUTRISTATS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let settings = config::Config::builder()
        .add_source(config::File::with_name(&path))
        .add_source(config::Environment::with_prefix("NUTRISTATS").separator("__"))
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    validate(&app_config)?;
    Ok(app_config)
}

fn validate(app_config: &AppConfig) -> anyhow::Result<()> {
    anyhow::ensure!(
        app_config.server.max_sessions > 0,
        "server.max_sessions must be at least 1"
    );

    let month = app_config.fallback.month;
    anyhow::ensure!(
        month <= 12,
        "fallback.month must be between 1 and 12 (or 0 to disable), got {}",
        month
    );
    Ok(())
}
