use super::{car_card::CarCard, car_detail::CarDetail};
use crate::loader::Collection;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShowroomPageProps {
    pub collection: Collection,
}

/// All cars of the collection, oldest purchase first. Clicking a card opens its detail view.
#[function_component(ShowroomPage)]
pub fn showroom_page(ShowroomPageProps { collection }: &ShowroomPageProps) -> Html {
    let selected = use_state_eq(|| None::<String>);

    if collection.is_empty() {
        return html! {
            <main class="showroom showroom-empty">
                <p>{"No cars in the showroom yet."}</p>
            </main>
        };
    }

    let onselect = {
        let selected = selected.clone();
        Callback::from(move |id: String| selected.set(Some(id)))
    };
    let onclose = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };
    let detail = selected
        .as_deref()
        .and_then(|id| collection.get(id))
        .map(|car| html! { <CarDetail car={car.clone()} onclose={onclose} /> });

    html! {
        <main class="showroom">
            <div class="showroom-grid">
                { for collection.cars().iter().map(|car| html! {
                    <CarCard key={car.id.clone()} car={car.clone()} onselect={onselect.clone()} />
                })}
            </div>
            { for detail }
        </main>
    }
}
