//! Deterministic imagery for collection cars.
//!
//! Everything here is a pure function of a [`VehicleDescriptor`]: the display
//! color, the seed and the image reference come out identical for identical
//! input, with no hidden state.

pub mod car;
pub mod config;
pub mod descriptor;
pub mod hash;
pub mod image;
pub mod palette;
pub mod remote;
pub mod style;
pub mod svg;

pub use car::{Car, CarError, CarType, Privacy, ownership_label};
pub use config::{ConfigError, ImageConfig, ImageMode};
pub use descriptor::VehicleDescriptor;
pub use hash::{string_hash, unsigned_hash};
pub use image::{ImageSources, image_sources, image_url};
pub use palette::resolve_color;
pub use style::ImageStyle;
