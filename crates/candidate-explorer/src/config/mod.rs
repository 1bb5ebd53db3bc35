use crate::explorer::domain::Language;
use crate::explorer::media::{ImageUrlTemplate, ID_PLACEHOLDER};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PROVINCE: &str = "बागमती प्रदेश";
pub const DEFAULT_DATASET_PATH: &str = "data/candidates.json";
pub const DEFAULT_IMAGE_URL_TEMPLATE: &str =
    "https://result.election.gov.np/Images/Candidate/{id}.jpg";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub explorer: ExplorerConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            explorer: ExplorerConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Where the candidate dataset and label tables come from, and the session defaults.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub dataset_path: PathBuf,
    pub labels_path: Option<PathBuf>,
    pub default_province: String,
    pub language: Language,
    pub image_url_template: ImageUrlTemplate,
}

impl ExplorerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let dataset_path = env::var("EXPLORER_DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));
        let labels_path = env::var("EXPLORER_LABELS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let default_province = env::var("EXPLORER_DEFAULT_PROVINCE")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVINCE.to_string());
        let language = Language::from_code(
            &env::var("EXPLORER_LANGUAGE").unwrap_or_else(|_| "ne".to_string()),
        );
        let template = env::var("EXPLORER_IMAGE_URL_TEMPLATE")
            .unwrap_or_else(|_| DEFAULT_IMAGE_URL_TEMPLATE.to_string());
        let image_url_template =
            ImageUrlTemplate::parse(&template).ok_or(ConfigError::InvalidImageTemplate)?;

        Ok(Self {
            dataset_path,
            labels_path,
            default_province,
            language,
            image_url_template,
        })
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            labels_path: None,
            default_province: DEFAULT_PROVINCE.to_string(),
            language: Language::default(),
            image_url_template: ImageUrlTemplate::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidImageTemplate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidImageTemplate => write!(
                f,
                "EXPLORER_IMAGE_URL_TEMPLATE must contain the {} placeholder",
                ID_PLACEHOLDER
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidImageTemplate => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "EXPLORER_DATASET_PATH",
            "EXPLORER_LABELS_PATH",
            "EXPLORER_DEFAULT_PROVINCE",
            "EXPLORER_LANGUAGE",
            "EXPLORER_IMAGE_URL_TEMPLATE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.explorer.default_province, DEFAULT_PROVINCE);
        assert_eq!(config.explorer.language, Language::Nepali);
        assert_eq!(
            config.explorer.dataset_path,
            PathBuf::from(DEFAULT_DATASET_PATH)
        );
        assert!(config.explorer.labels_path.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn explorer_settings_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("EXPLORER_DEFAULT_PROVINCE", "कोशी प्रदेश");
        env::set_var("EXPLORER_LANGUAGE", "en");
        env::set_var("EXPLORER_LABELS_PATH", "data/labels.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.explorer.default_province, "कोशी प्रदेश");
        assert_eq!(config.explorer.language, Language::English);
        assert_eq!(
            config.explorer.labels_path,
            Some(PathBuf::from("data/labels.json"))
        );
        reset_env();
    }

    #[test]
    fn rejects_image_template_without_placeholder() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("EXPLORER_IMAGE_URL_TEMPLATE", "https://cdn.example/photo.jpg");
        let error = AppConfig::load().expect_err("template without placeholder");
        assert!(matches!(error, ConfigError::InvalidImageTemplate));
        reset_env();
    }
}
