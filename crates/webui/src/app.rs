use crate::{components::showroom_page::ShowroomPage, loader::Collection};
use carimage::ImageConfig;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub collection: Collection,
    #[prop_or_default]
    pub image_config: ImageConfig,
}

#[function_component(App)]
pub fn app(
    AppProps {
        collection,
        image_config,
    }: &AppProps,
) -> Html {
    let count = collection.len();
    let suffix = if count == 1 { "" } else { "s" };

    html! {
        <ContextProvider<ImageConfig> context={image_config.clone()}>
            <div class="container">
                <header>
                    <h1>{"Showroom"}</h1>
                    <span class="collection-count">{ format!("{count} car{suffix}") }</span>
                </header>
                <ShowroomPage collection={collection.clone()} />
            </div>
        </ContextProvider<ImageConfig>>
    }
}
