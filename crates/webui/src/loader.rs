//! Collection loading utilities.

use carimage::Car;
use log::{debug, warn};
use std::rc::Rc;

/// Cars in timeline order, oldest purchase first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    cars: Vec<Rc<Car>>,
}

impl Collection {
    /// Drops cars that fail validation and sorts the rest by year bought.
    ///
    /// The sort is stable, so cars bought in the same year keep their input order.
    pub fn from_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let mut cars: Vec<_> = cars
            .into_iter()
            .filter(|car| match car.validate() {
                Ok(()) => true,
                Err(err) => {
                    warn!("Skipping car: {err}");
                    false
                }
            })
            .map(Rc::new)
            .collect();
        cars.sort_by_key(|car| car.year_bought);
        Self { cars }
    }

    pub fn cars(&self) -> &[Rc<Car>] {
        &self.cars
    }

    pub fn get(&self, id: &str) -> Option<&Rc<Car>> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

/// Parses a JSON array of cars.
pub fn load_collection(json: &str) -> Result<Collection, serde_json::Error> {
    let cars: Vec<Car> = serde_json::from_str(json)?;
    debug!("Parsed {} cars", cars.len());
    Ok(Collection::from_cars(cars))
}
