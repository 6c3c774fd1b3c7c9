use crate::{hash::string_hash, palette::resolve_color, style::ImageStyle};
use serde::{Deserialize, Serialize};

/// Attributes that determine how a car is pictured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDescriptor {
    pub make: String,
    pub model: String,
    pub year_built: i32,
    pub color: String,
    #[serde(default)]
    pub style: ImageStyle,
}

impl VehicleDescriptor {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year_built: i32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year_built,
            color: color.into(),
            style: ImageStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = style;
        self
    }

    /// Signed seed over `make + model + year + color`. The style does not take part.
    #[must_use]
    pub fn seed(&self) -> i32 {
        string_hash(&format!(
            "{}{}{}{}",
            self.make, self.model, self.year_built, self.color
        ))
    }

    /// Non-negative form of [`Self::seed`], as sent to image services.
    #[must_use]
    pub fn request_seed(&self) -> u32 {
        self.seed().unsigned_abs()
    }

    #[must_use]
    pub fn display_color(&self) -> String {
        resolve_color(&self.color)
    }
}
