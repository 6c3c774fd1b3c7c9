use super::{car_card::OwnershipCell, car_image::CarImage};
use carimage::Car;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CarDetailProps {
    pub car: Rc<Car>,
    pub onclose: Callback<()>,
}

/// Modal with everything known about one car. Clicking the backdrop or the close button dismisses it.
#[function_component(CarDetail)]
pub fn car_detail(CarDetailProps { car, onclose }: &CarDetailProps) -> Html {
    let close = {
        let onclose = onclose.clone();
        Callback::from(move |_: MouseEvent| onclose.emit(()))
    };

    html! {
        <div class="car-detail-overlay">
            <div class="car-detail-backdrop" onclick={close.clone()} />
            <div class="car-detail" role="dialog" aria-modal="true">
                <button class="car-detail-close" onclick={close} aria-label="Close">
                    {"×"}
                </button>
                <CarImage
                    descriptor={car.descriptor()}
                    alt={car.alt_text()}
                    class={classes!("car-detail-image")}
                />
                <div class="car-detail-body">
                    <div class="car-detail-header">
                        <div>
                            <h2>{ format!("{} {}", car.make, car.model) }</h2>
                            <p>{ format!("{} • {}", car.year_built, car.color) }</p>
                        </div>
                        <span class="car-type-badge">{ car.car_type.to_string() }</span>
                    </div>
                    <div class="car-detail-ownership">
                        <OwnershipCell label="BOUGHT" value={car.year_bought.to_string()} />
                        <OwnershipCell label="SOLD" value={car.sold_display()} />
                        <OwnershipCell label="OWNERSHIP" value={car.ownership()} />
                    </div>
                    if !car.description.is_empty() {
                        <div class="car-detail-section">
                            <h3>{"DESCRIPTION"}</h3>
                            <p>{ &car.description }</p>
                        </div>
                    }
                    if !car.anecdote.is_empty() {
                        <div class="anecdote-box">
                            <h3>{"STORY"}</h3>
                            <p>{ &car.anecdote }</p>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
