use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Gemini REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for solution generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Deadline for a single generation call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub generation: GenerationSettings,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for solving (e.g., gemini-2.0-flash)
    pub text_model: String,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub timeout: Duration,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl SolverConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_key = get_env("GOOGLE_API_KEY", None, is_prod)?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GOOGLE_API_KEY is set but empty"
            )));
        }

        let timeout_secs = get_env(
            "GENAI_TIMEOUT_SECS",
            Some(&DEFAULT_TIMEOUT_SECS.to_string()),
            is_prod,
        )?;

        Ok(SolverConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: Secret::new(api_key),
                api_base: get_env("GENAI_API_BASE", Some(DEFAULT_API_BASE), is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
            },
            generation: GenerationSettings {
                timeout: parse_timeout(&timeout_secs)?,
                temperature: get_optional_env("GENAI_TEMPERATURE")?,
                max_output_tokens: get_optional_env("GENAI_MAX_OUTPUT_TOKENS")?,
            },
            observability: ObservabilityConfig {
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "GENAI_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn get_optional_env<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse().map(Some).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has an invalid value: {}", key, e))
        }),
        _ => Ok(None),
    }
}
