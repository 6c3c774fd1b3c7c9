//! Collection records.

use crate::{descriptor::VehicleDescriptor, style::ImageStyle};
use serde::{Deserialize, Serialize};

pub const DESCRIPTION_MAX_CHARS: usize = 100;
pub const ANECDOTE_MAX_CHARS: usize = 600;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CarType {
    Sedan,
    Coupe,
    Convertible,
    #[serde(rename = "SUV")]
    #[strum(serialize = "SUV")]
    Suv,
    Wagon,
    Hatchback,
    Truck,
    Van,
    #[serde(rename = "Sports Car")]
    #[strum(serialize = "Sports Car")]
    SportsCar,
    #[default]
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Privacy {
    Public,
    #[default]
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    #[serde(rename = "type", default)]
    pub car_type: CarType,
    pub color: String,
    pub year_built: i32,
    pub year_bought: i32,
    /// `None` while the car is still owned.
    #[serde(default)]
    pub year_sold: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub anecdote: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_style: ImageStyle,
    #[serde(default)]
    pub privacy: Privacy,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarError {
    #[error("description of car `{id}` has {len} characters, at most 100 allowed")]
    DescriptionTooLong { id: String, len: usize },
    #[error("anecdote of car `{id}` has {len} characters, at most 600 allowed")]
    AnecdoteTooLong { id: String, len: usize },
}

impl Car {
    #[must_use]
    pub fn descriptor(&self) -> VehicleDescriptor {
        VehicleDescriptor::new(&self.make, &self.model, self.year_built, &self.color)
            .with_style(self.image_style)
    }

    pub fn validate(&self) -> Result<(), CarError> {
        let len = self.description.chars().count();
        if len > DESCRIPTION_MAX_CHARS {
            return Err(CarError::DescriptionTooLong {
                id: self.id.clone(),
                len,
            });
        }
        let len = self.anecdote.chars().count();
        if len > ANECDOTE_MAX_CHARS {
            return Err(CarError::AnecdoteTooLong {
                id: self.id.clone(),
                len,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn ownership(&self) -> String {
        ownership_label(self.year_bought, self.year_sold)
    }

    /// Year sold, or `Present`.
    #[must_use]
    pub fn sold_display(&self) -> String {
        self.year_sold
            .map_or_else(|| "Present".to_string(), |year| year.to_string())
    }

    /// Caption next to the purchase year on the timeline: `Sold 1995` or `Current`.
    #[must_use]
    pub fn timeline_label(&self) -> String {
        self.year_sold
            .map_or_else(|| "Current".to_string(), |year| format!("Sold {year}"))
    }

    /// e.g. `1986 Fiat X1/9`
    #[must_use]
    pub fn alt_text(&self) -> String {
        format!("{} {} {}", self.year_built, self.make, self.model)
    }
}

/// How long a car was owned: `Current`, `< 1 Yr`, `1 Yr` or `N Yrs`.
#[must_use]
pub fn ownership_label(year_bought: i32, year_sold: Option<i32>) -> String {
    let Some(year_sold) = year_sold else {
        return "Current".to_string();
    };
    match year_sold.saturating_sub(year_bought) {
        1 => "1 Yr".to_string(),
        years if years > 1 => format!("{years} Yrs"),
        _ => "< 1 Yr".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    const FIAT_JSON: &str = r#"{
        "id": "4",
        "userId": "1",
        "make": "Fiat",
        "model": "X1/9",
        "type": "Convertible",
        "color": "Ferrari Red",
        "yearBuilt": 1986,
        "yearBought": 1990,
        "yearSold": 1995,
        "description": "Mini ferrari",
        "anecdote": "By Bertone (special gift)",
        "imageUrl": null,
        "imageStyle": "museum",
        "privacy": "public",
        "createdAt": "2024-01-01T00:00:00Z"
    }"#;

    fn fiat() -> Car {
        serde_json::from_str(FIAT_JSON).unwrap()
    }

    #[rstest]
    #[case(2025, None, "Current")]
    #[case(2020, Some(2020), "< 1 Yr")]
    #[case(2020, Some(2019), "< 1 Yr")]
    #[case(2020, Some(2021), "1 Yr")]
    #[case(1990, Some(1995), "5 Yrs")]
    fn ownership(#[case] bought: i32, #[case] sold: Option<i32>, #[case] expected: &str) {
        assert_eq!(expected, ownership_label(bought, sold));
    }

    #[test]
    fn parses_collection_json() {
        let car = fiat();
        assert_eq!(CarType::Convertible, car.car_type);
        assert_eq!(Some(1995), car.year_sold);
        assert_eq!(ImageStyle::Museum, car.image_style);
        assert_eq!(Privacy::Public, car.privacy);
        assert_eq!("5 Yrs", car.ownership());
        assert_eq!("1995", car.sold_display());
        assert_eq!("1986 Fiat X1/9", car.alt_text());
    }

    #[test]
    fn optional_fields_default() {
        let car: Car = serde_json::from_str(
            r#"{"id":"1","make":"Volvo","model":"XC90","color":"Saville Grey","yearBuilt":2021,"yearBought":2025}"#,
        )
        .unwrap();
        assert_eq!(None, car.year_sold);
        assert_eq!("Present", car.sold_display());
        assert_eq!(CarType::Other, car.car_type);
        assert_eq!(ImageStyle::Showroom, car.image_style);
        assert_eq!(Privacy::Private, car.privacy);
    }

    #[test]
    fn descriptor_carries_style() {
        let descriptor = fiat().descriptor();
        assert_eq!(
            VehicleDescriptor::new("Fiat", "X1/9", 1986, "Ferrari Red")
                .with_style(ImageStyle::Museum),
            descriptor
        );
        assert_eq!("#ff2800", descriptor.display_color());
    }

    #[test]
    fn car_types_in_form_order() {
        let names: Vec<_> = CarType::iter().map(|t| t.to_string()).collect();
        assert_eq!(
            vec![
                "Sedan",
                "Coupe",
                "Convertible",
                "SUV",
                "Wagon",
                "Hatchback",
                "Truck",
                "Van",
                "Sports Car",
                "Other"
            ],
            names
        );
        assert_eq!(CarType::SportsCar, CarType::from_str("Sports Car").unwrap());
        assert_eq!(
            "\"SUV\"",
            serde_json::to_string(&CarType::Suv).unwrap()
        );
    }

    #[test]
    fn text_limits_count_characters() {
        let mut car = fiat();
        car.description = "é".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(Ok(()), car.validate());

        car.description.push('!');
        assert_matches!(
            car.validate(),
            Err(CarError::DescriptionTooLong { len: 101, .. })
        );

        car.description.clear();
        car.anecdote = "x".repeat(ANECDOTE_MAX_CHARS + 1);
        assert_matches!(car.validate(), Err(CarError::AnecdoteTooLong { len: 601, .. }));
    }

    #[test]
    fn timeline_label_shows_sale_year() {
        let mut car = fiat();
        assert_eq!("Sold 1995", car.timeline_label());
        car.year_sold = None;
        assert_eq!("Current", car.timeline_label());
    }
}
