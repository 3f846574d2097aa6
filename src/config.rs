use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::Deserialize;
use std::{
    borrow::Cow,
    collections::HashMap,
};
use url::Url;

fn default_profile_base_url() -> String {
    overwatch::DEFAULT_PROFILE_BASE_URL.to_string()
}

fn default_search_base_url() -> String {
    overwatch::DEFAULT_SEARCH_BASE_URL.to_string()
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_profile_base_url")]
    profile_base_url: String,

    #[serde(default = "default_search_base_url")]
    search_base_url: String,

    default_region: Option<String>,

    log_dir: Option<Utf8PathBuf>,

    user_agent: Option<String>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    pub fn profile_base_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.profile_base_url).context("invalid profile base url")
    }

    pub fn search_base_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.search_base_url).context("invalid search base url")
    }

    pub fn default_region(&self) -> Option<&str> {
        self.default_region.as_deref()
    }

    pub fn log_dir(&self) -> Option<&Utf8Path> {
        self.log_dir.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from '{path}'"))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse config")
    }

    /// Build a client for the configured endpoints
    pub fn build_client(&self) -> anyhow::Result<overwatch::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent() {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().context("failed to build http client")?;

        Ok(overwatch::Client::with_base_urls(
            client,
            self.profile_base_url()?,
            self.search_base_url()?,
        ))
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if Url::parse(&self.profile_base_url).is_err() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidProfileBaseUrl,
            });
        }

        if Url::parse(&self.search_base_url).is_err() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidSearchBaseUrl,
            });
        }

        if let Some(region) = self.default_region.as_deref() {
            if region.is_empty() || region.contains('/') {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidDefaultRegion,
                });
            }
        }

        let mut extra_keys: Vec<_> = self.extra.keys().collect();
        extra_keys.sort();
        for key in extra_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::Generic(format!("Unknown Key `{key}`").into()),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_base_url: default_profile_base_url(),
            search_base_url: default_search_base_url(),
            default_region: None,
            log_dir: None,
            user_agent: None,
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    InvalidProfileBaseUrl,
    InvalidSearchBaseUrl,
    InvalidDefaultRegion,

    Generic(Cow<'static, str>),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidProfileBaseUrl => write!(f, "Invalid Profile Base Url"),
            ValidationError::InvalidSearchBaseUrl => write!(f, "Invalid Search Base Url"),
            ValidationError::InvalidDefaultRegion => write!(f, "Invalid Default Region"),
            ValidationError::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::load_from_str("").expect("failed to parse config");

        assert_eq!(
            config.profile_base_url().expect("invalid url").as_str(),
            overwatch::DEFAULT_PROFILE_BASE_URL
        );
        assert!(config.default_region().is_none());
        assert!(config.log_dir().is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn full_config() {
        let config = Config::load_from_str(
            r#"
profile_base_url = "https://example.com/career/"
search_base_url = "https://example.com/search/"
default_region = "eu"
log_dir = "./logs"
user_agent = "owstats"
"#,
        )
        .expect("failed to parse config");

        assert_eq!(config.default_region(), Some("eu"));
        assert_eq!(config.log_dir(), Some(Utf8Path::new("./logs")));
        assert_eq!(config.user_agent(), Some("owstats"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn validate_config() {
        let config = Config::load_from_str(
            r#"
profile_base_url = "not a url"
default_region = "eu/west"
colour = "blue"
"#,
        )
        .expect("failed to parse config");
        let messages = config.validate();

        let errors = messages
            .iter()
            .filter(|message| message.severity() == Severity::Error)
            .count();
        let warnings = messages
            .iter()
            .filter(|message| message.severity() == Severity::Warn)
            .count();
        assert_eq!(errors, 2);
        assert_eq!(warnings, 1);
    }
}
