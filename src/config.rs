use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::Path;

/// Set by the Azure Functions host when it launches us as a custom handler.
pub const CUSTOM_HANDLER_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub app: AppSettings,
    pub greeting: GreetingSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AppSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    //env vars always arrive as strings
    pub port: u16,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct GreetingSettings {
    pub default_name: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    /// Shows up as `name` on every log line.
    pub name: String,
    /// Used when `RUST_LOG` isn't set, same directive syntax.
    pub log_level: String,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("{0} is not a supported environment, use either `local` or `production`")]
    UnknownEnvironment(String),
    #[error("failed to determine the current directory")]
    CurrentDir(#[source] std::io::Error),
    #[error(transparent)]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = SettingsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(SettingsError::UnknownEnvironment(s)),
        }
    }
}

pub fn get_config() -> Result<Settings, SettingsError> {
    let base_path = std::env::current_dir().map_err(SettingsError::CurrentDir)?;
    let config_dir = base_path.join("config");

    let custom_handler_port = std::env::var(CUSTOM_HANDLER_PORT_VAR).ok();
    let environment = resolve_environment(
        std::env::var("APP_ENVIRONMENT").ok(),
        custom_handler_port.as_deref(),
    )?;

    build_settings(&config_dir, environment, custom_handler_port)
}

/// `APP_ENVIRONMENT` if set. Otherwise production when the functions host
/// launched us, local when we were started by hand.
pub fn resolve_environment(
    app_environment: Option<String>,
    custom_handler_port: Option<&str>,
) -> Result<Environment, SettingsError> {
    match (app_environment, custom_handler_port) {
        (Some(environment), _) => environment.try_into(),
        (None, Some(_)) => Ok(Environment::Production),
        (None, None) => Ok(Environment::Local),
    }
}

/// Layers, lowest priority first: `base.yaml`, `<environment>.yaml`,
/// `APP_*` env vars (e.g. `APP_APP__PORT=5001` sets `Settings.app.port`),
/// then the port the functions host handed us, if any.
pub fn build_settings(
    config_dir: &Path,
    environment: Environment,
    custom_handler_port: Option<String>,
) -> Result<Settings, SettingsError> {
    let environment_file = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")).required(true))
        .add_source(config::File::from(config_dir.join(environment_file)).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("app.port", custom_handler_port)?
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
