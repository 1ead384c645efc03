use std::time::Duration;

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};
use url::Url;

use crate::services::CompletionPolicy;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BackendSettings {
    pub base_url: String,
    /// Address browsers use to reach the backend, when it differs from
    /// `base_url`.
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub completion_policy: CompletionPolicy,
}

impl BackendSettings {
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    pub fn public_url(&self) -> Result<Option<Url>, url::ParseError> {
        self.public_url.as_deref().map(Url::parse).transpose()
    }

    /// `None` means requests are never timed out on the client side.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let builder = config::Config::builder()
        .add_source(File::from(configuration_directory.join("base.yaml")));

    build_settings(builder)
}

/// Layers `APP_` environment overrides (e.g. `APP_BACKEND__BASE_URL`) on top of
/// whatever file sources the builder already carries.
pub fn build_settings(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    builder
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()
}
