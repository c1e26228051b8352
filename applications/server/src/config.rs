/// Server configuration
use crate::error::{Result, ServerError};
use crate::i18n::Language;
use crate::services::auth::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_admin")]
    pub admin: AdminSettings,

    #[serde(default = "default_i18n")]
    pub i18n: I18nSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminSettings {
    /// Put `/admin*` behind HTTP Basic auth restricted to the admin account
    #[serde(default)]
    pub require_auth: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nSettings {
    /// Language used when the `lang` cookie is absent or unrecognized
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` if given, otherwise `config.toml` when it exists, then
    /// applies `HAMAL_`-prefixed environment variables (`HAMAL_SERVER__PORT=9000`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("HAMAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ServerError::Config(format!(
                "bcrypt cost must be between {} and {} (got {})",
                BCRYPT_MIN_COST,
                BCRYPT_MAX_COST,
                self.auth.bcrypt_cost
            )));
        }

        if Language::from_code(&self.i18n.default_language).is_none() {
            return Err(ServerError::Config(format!(
                "Unsupported default language '{}' (expected 'ar' or 'he')",
                self.i18n.default_language
            )));
        }

        Ok(())
    }

    /// The configured fallback language
    pub fn default_language(&self) -> Language {
        Language::from_code(&self.i18n.default_language).unwrap_or_default()
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./db.sqlite".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        bcrypt_cost: default_bcrypt_cost(),
    }
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_admin() -> AdminSettings {
    AdminSettings {
        require_auth: false,
    }
}

fn default_i18n() -> I18nSettings {
    I18nSettings {
        default_language: default_language(),
    }
}

fn default_language() -> String {
    Language::Arabic.code().to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            admin: default_admin(),
            i18n: default_i18n(),
        }
    }
}
