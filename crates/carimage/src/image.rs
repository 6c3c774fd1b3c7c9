use crate::{
    config::{ImageConfig, ImageMode},
    descriptor::VehicleDescriptor,
    remote::remote_image_url,
    svg::placeholder_data_uri,
};
use log::debug;

/// An image reference plus the placeholder to show if it fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSources {
    pub primary: String,
    pub fallback: String,
}

impl ImageSources {
    /// Whether the primary source needs network access.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.primary != self.fallback
    }
}

#[must_use]
pub fn image_sources(descriptor: &VehicleDescriptor, config: &ImageConfig) -> ImageSources {
    debug!(
        "Building {} image for {} {} {}",
        config.mode, descriptor.year_built, descriptor.make, descriptor.model
    );
    let fallback = placeholder_data_uri(descriptor);
    let primary = match config.mode {
        ImageMode::Vector => fallback.clone(),
        ImageMode::Remote => remote_image_url(descriptor, config),
    };
    ImageSources { primary, fallback }
}

/// The image reference selected by `config.mode`.
#[must_use]
pub fn image_url(descriptor: &VehicleDescriptor, config: &ImageConfig) -> String {
    image_sources(descriptor, config).primary
}
