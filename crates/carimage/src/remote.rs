use crate::{config::ImageConfig, descriptor::VehicleDescriptor};

/// Natural-language description of the car and its staging.
#[must_use]
pub fn prompt(descriptor: &VehicleDescriptor) -> String {
    format!(
        "{} {} {} {}, {}, professional automotive photography",
        descriptor.year_built,
        descriptor.color,
        descriptor.make,
        descriptor.model,
        descriptor.style.sheet().scene
    )
}

/// Prompt URL for the configured image service.
///
/// The prompt is percent-encoded as a single path segment, so `/` or `?` in
/// a model name cannot alter the URL structure.
#[must_use]
pub fn remote_image_url(descriptor: &VehicleDescriptor, config: &ImageConfig) -> String {
    format!(
        "{}/{}?width={}&height={}&seed={}&nologo=true",
        config.endpoint.trim_end_matches('/'),
        urlencoding::encode(&prompt(descriptor)),
        config.width,
        config.height,
        descriptor.request_seed()
    )
}
