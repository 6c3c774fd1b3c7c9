use carimage::ImageConfig;
use log::error;
use webui::{
    DEMO_COLLECTION, IMAGE_CONFIG,
    app::{App, AppProps},
    loader::{Collection, load_collection},
};

fn main() {
    init_logging();
    let collection = load_collection(DEMO_COLLECTION).unwrap_or_else(|err| {
        error!("Cannot parse the car collection: {err}");
        Collection::default()
    });
    let image_config = ImageConfig::from_toml_str(IMAGE_CONFIG).unwrap_or_else(|err| {
        error!("Falling back to the default image configuration: {err}");
        ImageConfig::default()
    });

    yew::Renderer::<App>::with_props(AppProps {
        collection,
        image_config,
    })
    .render();
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
