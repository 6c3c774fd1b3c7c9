//! Image source configuration.
//!
//! ```toml
//! mode = "remote"
//! endpoint = "https://image.pollinations.ai/prompt"
//! width = 800
//! height = 500
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://image.pollinations.ai/prompt";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 500;

/// Which kind of reference [`crate::image_url`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageMode {
    /// Inline SVG placeholder, no network access.
    #[default]
    Vector,
    /// Prompt URL of an external image generation service.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub mode: ImageMode,
    pub endpoint: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            mode: ImageMode::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot parse image configuration - {0}")]
    Parse(#[from] toml::de::Error),
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("invalid endpoint `{endpoint}` - {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("endpoint `{endpoint}` must use http or https, not `{scheme}`")]
    UnsupportedScheme { endpoint: String, scheme: String },
    #[error("endpoint `{endpoint}` must not carry a query or fragment")]
    EndpointNotAPath { endpoint: String },
}

impl ImageConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        let url = url::Url::parse(&self.endpoint).map_err(|source| {
            ConfigError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                source,
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                endpoint: self.endpoint.clone(),
                scheme: url.scheme().to_string(),
            });
        }
        // The prompt segment and size parameters are appended as text.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::EndpointNotAPath {
                endpoint: self.endpoint.clone(),
            });
        }
        Ok(())
    }
}
