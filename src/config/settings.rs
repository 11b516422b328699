//! User settings for VerziBiz
//!
//! Manages budget defaults, the chat and feedback endpoints, and display
//! preferences.

use serde::{Deserialize, Serialize};

use super::paths::VerziPaths;
use crate::error::VerziError;
use crate::models::{Amount, PeriodSeries};

/// Defaults for a fresh budget session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDefaults {
    /// Monthly income shown when the tracker opens
    #[serde(default = "default_monthly_income")]
    pub monthly_income: Amount,

    /// Starting spend for each weekday, Monday first
    #[serde(default)]
    pub weekly_spend: PeriodSeries,

    /// Divisor used to turn monthly income into a daily figure
    #[serde(default = "default_days_per_month")]
    pub days_per_month: u32,
}

impl Default for BudgetDefaults {
    fn default() -> Self {
        Self {
            monthly_income: default_monthly_income(),
            weekly_spend: PeriodSeries::default(),
            days_per_month: default_days_per_month(),
        }
    }
}

/// Chat completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Chat completions URL
    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,

    /// Model requested for each completion
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// API key stored in the config file (prefer `api_key_env`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable consulted when `api_key` is unset
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// First assistant message of every transcript
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            endpoint: default_chat_endpoint(),
            model: default_chat_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            greeting: default_greeting(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatSettings {
    /// Resolve the API key, preferring the config file over the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

/// Feedback submission settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSettings {
    /// Endpoint receiving the survey JSON
    #[serde(default = "default_feedback_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            endpoint: default_feedback_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User settings for VerziBiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing filter level (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Budget tracker defaults
    #[serde(default)]
    pub budget: BudgetDefaults,

    /// Chat client settings
    #[serde(default)]
    pub chat: ChatSettings,

    /// Feedback survey settings
    #[serde(default)]
    pub feedback: FeedbackSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_monthly_income() -> Amount {
    Amount::new(20000.0)
}

fn default_days_per_month() -> u32 {
    30
}

fn default_chat_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_greeting() -> String {
    "Hello! How can I assist you today?".to_string()
}

fn default_feedback_endpoint() -> String {
    "https://api.example.com/submit-feedback".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
            budget: BudgetDefaults::default(),
            chat: ChatSettings::default(),
            feedback: FeedbackSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &VerziPaths) -> Result<Self, VerziError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| VerziError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                VerziError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VerziPaths) -> Result<(), VerziError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| VerziError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| VerziError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
