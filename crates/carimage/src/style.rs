use serde::{Deserialize, Serialize};

/// How a car is staged in its generated image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageStyle {
    Museum,
    #[default]
    Showroom,
}

/// Fixed presentation parameters of an [`ImageStyle`].
#[derive(Debug, PartialEq, Eq)]
pub struct StyleSheet {
    /// First two stops of the placeholder background; the car color is the third.
    pub gradient: [&'static str; 2],
    /// Scene wording for remote image prompts.
    pub scene: &'static str,
}

static MUSEUM: StyleSheet = StyleSheet {
    gradient: ["#1a1a2e", "#16213e"],
    scene: "displayed in an elegant automotive museum, dramatic spotlight, dark polished floor",
};

static SHOWROOM: StyleSheet = StyleSheet {
    gradient: ["#2d3436", "#636e72"],
    scene: "in a bright modern car showroom, soft studio lighting, glossy reflective floor",
};

impl ImageStyle {
    #[must_use]
    pub fn sheet(self) -> &'static StyleSheet {
        match self {
            ImageStyle::Museum => &MUSEUM,
            ImageStyle::Showroom => &SHOWROOM,
        }
    }

    /// Badge text, e.g. `SHOWROOM`.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string().to_uppercase()
    }
}
