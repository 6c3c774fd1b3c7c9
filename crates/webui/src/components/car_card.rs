use super::car_image::CarImage;
use carimage::Car;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CarCardProps {
    pub car: Rc<Car>,
    /// Receives the car id when the card is clicked.
    #[prop_or_default]
    pub onselect: Callback<String>,
}

/// Timeline entry: picture, name and purchase year.
#[function_component(CarCard)]
pub fn car_card(CarCardProps { car, onselect }: &CarCardProps) -> Html {
    let onclick = {
        let onselect = onselect.clone();
        let id = car.id.clone();
        Callback::from(move |_: MouseEvent| onselect.emit(id.clone()))
    };

    html! {
        <div class="car-card" onclick={onclick}>
            <CarImage
                descriptor={car.descriptor()}
                alt={car.alt_text()}
                class={classes!("car-card-image")}
            />
            <div class="car-card-details">
                <div class="car-card-title">
                    <h3>{ format!("{} {}", car.make, car.model) }</h3>
                    <span class="car-type-badge">{ car.car_type.to_string() }</span>
                </div>
                <p class="car-card-subtitle">
                    { format!("{} • {}", car.year_built, car.color.to_uppercase()) }
                </p>
                if !car.description.is_empty() {
                    <p class="car-description">{ &car.description }</p>
                }
            </div>
            <div class="car-card-timeline">
                <span class="timeline-year">{ car.year_bought.to_string() }</span>
                <span class="timeline-status">{ car.timeline_label() }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct OwnershipCellProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(OwnershipCell)]
pub(crate) fn ownership_cell(OwnershipCellProps { label, value }: &OwnershipCellProps) -> Html {
    html! {
        <div>
            <span class="ownership-label">{ label.as_str() }</span>
            <span class="ownership-value">{ value.as_str() }</span>
        </div>
    }
}
