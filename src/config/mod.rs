use crate::core::{AppError, Result};
use crate::modules::identifiers::validate_gstin;
use crate::modules::taxes::models::is_known_state_code;
use std::env;
use std::str::FromStr;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub company: CompanyConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::configuration(format!("Invalid LOG_FORMAT: {}", s))),
        }
    }
}

/// The selling company's GST registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyConfig {
    /// Two-digit GST state code of the registered place of business
    pub state_code: String,
    pub gstin: Option<String>,
}

impl CompanyConfig {
    /// Builds the company registration from the raw settings.
    ///
    /// The state code falls back to the one embedded in the GSTIN.
    pub fn resolve(state_code: Option<String>, gstin: Option<String>) -> Result<Self> {
        let gstin = gstin
            .map(|value| value.trim().to_ascii_uppercase())
            .filter(|value| !value.is_empty());
        let state_code = state_code
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let state_code = match (state_code, &gstin) {
            (Some(code), _) => code,
            (None, Some(gstin)) => validate_gstin(gstin).state_code.ok_or_else(|| {
                AppError::configuration("COMPANY_GSTIN is not a valid GSTIN")
            })?,
            (None, None) => {
                return Err(AppError::configuration(
                    "COMPANY_STATE_CODE or COMPANY_GSTIN must be set".to_string(),
                ))
            }
        };

        Ok(Self { state_code, gstin })
    }

    pub fn validate(&self) -> Result<()> {
        if !is_known_state_code(&self.state_code) {
            return Err(AppError::configuration(format!(
                "Unknown COMPANY_STATE_CODE: {}",
                self.state_code
            )));
        }

        if let Some(gstin) = &self.gstin {
            let result = validate_gstin(gstin);
            if !result.is_valid {
                return Err(AppError::configuration(format!(
                    "Invalid COMPANY_GSTIN: {}",
                    result.error.unwrap_or_default()
                )));
            }
            if result.state_code.as_deref() != Some(self.state_code.as_str()) {
                return Err(AppError::configuration(format!(
                    "COMPANY_GSTIN belongs to state {} but COMPANY_STATE_CODE is {}",
                    result.state_code.unwrap_or_default(),
                    self.state_code
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            server: ServerConfig::from_env()?,
            company: CompanyConfig::resolve(
                env::var("COMPANY_STATE_CODE").ok(),
                env::var("COMPANY_GSTIN").ok(),
            )?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        self.company.validate()
    }
}
