use crate::error::AppError;
use crate::validation::{parse_results, DEFAULT_RESULTS};
use serde::{Deserialize, Serialize};

/// Config file read by native builds, relative to the working directory
#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_FILE: &str = "spm.toml";

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Runtime configuration of the photo browser
///
/// Web builds cannot read the environment at runtime, so the defaults are
/// baked in at compile time from `SPM_*` variables. Native builds may override
/// them with `spm.toml` and the process environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the SPM REST API
    pub api_url: String,
    /// Base URL prepended to thumbnail paths
    pub app_route: String,
    /// Token sent as `Authorization: Token <token>`
    pub api_token: Option<String>,
    pub results_per_page: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("SPM_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            app_route: option_env!("SPM_APP_ROUTE").unwrap_or("").to_string(),
            api_token: option_env!("SPM_API_TOKEN")
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            results_per_page: option_env!("SPM_RESULTS_PER_PAGE")
                .map(parse_results)
                .unwrap_or(DEFAULT_RESULTS),
        }
    }
}

impl AppConfig {
    /// Parses a TOML config; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from environment-style variables
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SPM_API_URL") {
            self.api_url = url;
        }
        if let Some(route) = lookup("SPM_APP_ROUTE") {
            self.app_route = route;
        }
        if let Some(token) = lookup("SPM_API_TOKEN") {
            self.api_token = Some(token).filter(|t| !t.is_empty());
        }
        if let Some(results) = lookup("SPM_RESULTS_PER_PAGE") {
            self.results_per_page = parse_results(&results);
        }
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_url.trim().is_empty() {
            return Err(AppError::Config("api_url must not be empty".to_string()));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api_url must be an http(s) URL, got {}",
                self.api_url
            )));
        }

        if self.results_per_page == 0 {
            return Err(AppError::Config(
                "results_per_page must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Loads the configuration for the current platform
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, AppError> {
        let path = std::path::Path::new(CONFIG_FILE);
        let config = if path.exists() {
            log::info!("Reading configuration from {}", path.display());
            let content = std::fs::read_to_string(path)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
            Self::from_toml_str(&content)?
        } else {
            Self::default()
        };

        let config = config.with_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, AppError> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }
}
