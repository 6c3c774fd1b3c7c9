pub mod app;
pub mod components;
pub mod loader;

/// Car collection shown when the app starts.
pub const DEMO_COLLECTION: &str = include_str!("../demo_collection.json");
/// Image source configuration compiled into the app.
pub const IMAGE_CONFIG: &str = include_str!("../image_config.toml");
