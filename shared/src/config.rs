use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse ui config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid ui config: {0}")]
    Invalid(String),
}

/// Downloadable information sheets served under `pdf_endpoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Drugs,
    Treatment,
}

impl ResourceKind {
    pub fn default_title(&self) -> &'static str {
        match self {
            ResourceKind::Drugs => "Recommended Drugs",
            ResourceKind::Treatment => "Treatment Process",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub kind: ResourceKind,
    pub title: String,
}

impl ResourceLink {
    pub fn for_kind(kind: ResourceKind) -> Self {
        Self { kind, title: kind.default_title().to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub predict_endpoint: String,
    pub chat_endpoint: String,
    pub pdf_endpoint: String,
    pub notice_timeout_ms: u32,
    pub resources: Vec<ResourceLink>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            predict_endpoint: "/predict".to_string(),
            chat_endpoint: "/chat".to_string(),
            pdf_endpoint: "/pdf".to_string(),
            notice_timeout_ms: 5000,
            resources: ResourceKind::iter().map(ResourceLink::for_kind).collect(),
        }
    }
}

impl UiConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("predict_endpoint", &self.predict_endpoint),
            ("chat_endpoint", &self.chat_endpoint),
            ("pdf_endpoint", &self.pdf_endpoint),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
            }
        }
        if self.notice_timeout_ms == 0 {
            return Err(ConfigError::Invalid("notice_timeout_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn resource_href(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.pdf_endpoint.trim_end_matches('/'), kind)
    }
}
