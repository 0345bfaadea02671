//! Configuration management for LexRAG.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Defaults
//! - Config file (.lexrag/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Configuration is read once at startup. Nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Providers the factory knows how to build.
pub const KNOWN_PROVIDERS: [&str; 1] = ["gemini"];

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory that may contain `.lexrag/config.yaml`
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// LLM provider (currently only "gemini")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Custom API endpoint (base URL)
    pub endpoint: Option<String>,

    /// API key for the LLM provider
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// LLM provider configurations from the config file
    pub llm: Option<LlmConfig>,
}

/// LLM section of config.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(rename = "activeProvider")]
    pub active_provider: String,

    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Provider-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Environment variable holding the API key
    #[serde(rename = "apiKeyEnv", default)]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    llm: Option<LlmConfig>,
    workspace: Option<WorkspaceConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: None,
            api_key: None,
            log_level: None,
            verbose: false,
            no_color: false,
            llm: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, config file and defaults.
    ///
    /// Environment variables:
    /// - `LEXRAG_WORKSPACE`: Override workspace path
    /// - `LEXRAG_CONFIG`: Path to config file
    /// - `LEXRAG_PROVIDER`: LLM provider
    /// - `LEXRAG_MODEL`: Model identifier
    /// - `LEXRAG_ENDPOINT`: API base URL
    /// - `LEXRAG_API_KEY` (or `API_KEY`): API key
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// The API key is not checked here. A missing or invalid key only shows
    /// up when the first question is asked.
    ///
    /// # Example
    /// ```no_run
    /// use lexrag_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Model: {}", config.model);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(None, None)
    }

    /// Load configuration with an explicit workspace and config file.
    ///
    /// These decide which YAML file is read, so they must be known before
    /// loading. Explicit values win over `LEXRAG_WORKSPACE`/`LEXRAG_CONFIG`.
    /// An explicitly named config file must exist; the workspace default
    /// `.lexrag/config.yaml` is optional.
    pub fn load_with(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) =
            workspace.or_else(|| std::env::var("LEXRAG_WORKSPACE").ok().map(PathBuf::from))
        {
            config.workspace = workspace;
        }

        config.config_file =
            config_file.or_else(|| std::env::var("LEXRAG_CONFIG").ok().map(PathBuf::from));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = config.config_path();
        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file does not exist: {:?}",
                config_path
            )));
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("LEXRAG_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("LEXRAG_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("LEXRAG_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }

        config.api_key = std::env::var("LEXRAG_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Path of the config file to read: explicit, or `<workspace>/.lexrag/config.yaml`.
    pub fn config_path(&self) -> PathBuf {
        match self.config_file {
            Some(ref cf) => cf.clone(),
            None => self.lexrag_dir().join("config.yaml"),
        }
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(ws) = config_file.workspace {
            if let Some(path) = ws.path {
                result.workspace = PathBuf::from(path);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(llm) = config_file.llm {
            result.provider = llm.active_provider.clone();

            if let Some(provider_config) = find_provider(&llm, &llm.active_provider) {
                if let Some(ref model) = provider_config.model {
                    result.model = model.clone();
                }
                if let Some(ref endpoint) = provider_config.endpoint {
                    result.endpoint = Some(endpoint.clone());
                }
            }

            result.llm = Some(llm);
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over environment variables and
    /// the config file. Workspace and config file are not here: they are
    /// inputs to [`AppConfig::load_with`].
    pub fn with_overrides(
        mut self,
        provider: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .lexrag directory.
    pub fn lexrag_dir(&self) -> PathBuf {
        self.workspace.join(".lexrag")
    }

    /// Get a provider's configuration from the config file, if any.
    ///
    /// Provider names match case-insensitively.
    pub fn get_provider_config(&self, provider: &str) -> Option<&ProviderConfig> {
        self.llm
            .as_ref()
            .and_then(|llm| find_provider(llm, provider))
    }

    /// Resolve the API key for a provider.
    ///
    /// An explicit key (`LEXRAG_API_KEY`/`API_KEY`) wins over the
    /// provider's `apiKeyEnv`. Returns `None` when nothing is set.
    pub fn resolve_api_key(&self, provider: &str) -> Option<String> {
        if let Some(ref key) = self.api_key {
            return Some(key.clone());
        }

        self.get_provider_config(provider)
            .and_then(|pc| pc.api_key_env.as_deref())
            .and_then(|env_var| std::env::var(env_var).ok())
    }

    /// Validate configuration for the active provider.
    ///
    /// Only the provider name is checked; credentials are left to the
    /// upstream service.
    pub fn validate(&self) -> AppResult<()> {
        let provider = self.provider.to_lowercase();

        if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                KNOWN_PROVIDERS.join(", ")
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier is empty".to_string()));
        }

        Ok(())
    }
}

fn find_provider<'a>(llm: &'a LlmConfig, provider: &str) -> Option<&'a ProviderConfig> {
    llm.providers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(provider))
        .map(|(_, config)| config)
}
