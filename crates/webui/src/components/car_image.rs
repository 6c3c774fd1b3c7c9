use carimage::{ImageConfig, ImageSources, VehicleDescriptor, image_sources};
use log::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CarImageProps {
    pub descriptor: VehicleDescriptor,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Generated car picture. Swaps to the inline placeholder if the primary source fails to load.
#[function_component(CarImage)]
pub fn car_image(
    CarImageProps {
        descriptor,
        alt,
        class,
    }: &CarImageProps,
) -> Html {
    let config = use_context::<ImageConfig>().unwrap_or_default();
    let sources = use_memo((descriptor.clone(), config), |(descriptor, config)| {
        image_sources(descriptor, config)
    });
    // Remembers which primary URL failed, so a new descriptor or config gets a fresh attempt.
    let failed_primary = use_state_eq(|| None::<String>);

    let onerror = {
        let failed_primary = failed_primary.clone();
        let sources = sources.clone();
        let alt = alt.clone();
        Callback::from(move |_: Event| {
            if sources.is_remote() && failed_primary.as_deref() != Some(sources.primary.as_str()) {
                warn!("Image for `{alt}` failed to load, using placeholder");
                failed_primary.set(Some(sources.primary.clone()));
            }
        })
    };

    let src = displayed_source(&sources, failed_primary.as_deref()).to_string();

    html! {
        <div class={classes!("car-image", class.clone())}>
            <img src={src} alt={alt.clone()} onerror={onerror} />
        </div>
    }
}

fn displayed_source<'a>(sources: &'a ImageSources, failed_primary: Option<&str>) -> &'a str {
    if failed_primary == Some(sources.primary.as_str()) {
        &sources.fallback
    } else {
        &sources.primary
    }
}
