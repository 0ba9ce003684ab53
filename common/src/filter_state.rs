//! Filter state for the restaurant list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::restaurant::Amenity;

/// The non-flag filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterField {
    Name,
    Cuisine,
    Ambience,
    MinRating,
    City,
    PriceRange,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Name,
        FilterField::Cuisine,
        FilterField::Ambience,
        FilterField::MinRating,
        FilterField::City,
        FilterField::PriceRange,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Cuisine => "cuisine",
            FilterField::Ambience => "ambience",
            FilterField::MinRating => "min_rating",
            FilterField::City => "city",
            FilterField::PriceRange => "price_range",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Name => "Restaurant name",
            FilterField::Cuisine => "Cuisine",
            FilterField::Ambience => "Ambience",
            FilterField::MinRating => "Min Rating",
            FilterField::City => "City",
            FilterField::PriceRange => "Price Range",
        }
    }
}

/// A toggle filter. Either required (`true`) or absent; never an explicit `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterFlag {
    OpenNow,
    Amenity(Amenity),
}

impl FilterFlag {
    pub const ALL: [FilterFlag; 13] = [
        FilterFlag::OpenNow,
        FilterFlag::Amenity(Amenity::Delivery),
        FilterFlag::Amenity(Amenity::GoodForKids),
        FilterFlag::Amenity(Amenity::GoodForGroups),
        FilterFlag::Amenity(Amenity::TakeOut),
        FilterFlag::Amenity(Amenity::Reservations),
        FilterFlag::Amenity(Amenity::OutdoorSeating),
        FilterFlag::Amenity(Amenity::WheelchairAccessible),
        FilterFlag::Amenity(Amenity::BikeParking),
        FilterFlag::Amenity(Amenity::CreditCardsAccepted),
        FilterFlag::Amenity(Amenity::HappyHour),
        FilterFlag::Amenity(Amenity::DogsAllowed),
        FilterFlag::Amenity(Amenity::Sustainable),
    ];

    pub fn key(self) -> &'static str {
        match self {
            FilterFlag::OpenNow => "open_now",
            FilterFlag::Amenity(a) => a.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterFlag::OpenNow => "Open Now",
            FilterFlag::Amenity(a) => a.label(),
        }
    }
}

/// A numeric filter kept as the trimmed text the user typed, so the server
/// receives exactly that text. Only finite numbers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericFilter(String);

impl NumericFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let value: f64 = raw.parse().ok()?;
        if value.is_finite() { Some(Self(raw.to_string())) } else { None }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub name: String,
    pub cuisine: Option<u64>,
    pub ambience: Option<u64>,
    pub min_rating: Option<NumericFilter>,
    pub city: String,
    pub price_range: Option<NumericFilter>,
    pub flags: BTreeSet<FilterFlag>,
}

impl FilterState {
    /// Current value as shown in the input widget; empty when unset.
    pub fn input_value(&self, field: FilterField) -> String {
        match field {
            FilterField::Name => self.name.clone(),
            FilterField::City => self.city.clone(),
            FilterField::Cuisine => opt_to_string(self.cuisine),
            FilterField::Ambience => opt_to_string(self.ambience),
            FilterField::MinRating => numeric_to_string(&self.min_rating),
            FilterField::PriceRange => numeric_to_string(&self.price_range),
        }
    }

    /// Sets a field from raw input. Text is stored as-is; numbers keep their
    /// trimmed text, and input that does not parse leaves the field unset.
    pub fn set_input(&mut self, field: FilterField, raw: &str) {
        match field {
            FilterField::Name => self.name = raw.to_string(),
            FilterField::City => self.city = raw.to_string(),
            FilterField::Cuisine => self.cuisine = parse_opt(raw),
            FilterField::Ambience => self.ambience = parse_opt(raw),
            FilterField::MinRating => self.min_rating = NumericFilter::parse(raw),
            FilterField::PriceRange => self.price_range = NumericFilter::parse(raw),
        }
    }

    pub fn is_field_set(&self, field: FilterField) -> bool {
        !self.input_value(field).is_empty()
    }

    pub fn is_flag_set(&self, flag: FilterFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// `false` unsets the flag.
    pub fn set_flag(&mut self, flag: FilterFlag, required: bool) {
        if required {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
    }

    pub fn toggle_flag(&mut self, flag: FilterFlag) {
        let required = !self.is_flag_set(flag);
        self.set_flag(flag, required);
    }

    pub fn clear_all(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_applied(&self) -> bool {
        FilterField::ALL.iter().any(|f| self.is_field_set(*f)) || !self.flags.is_empty()
    }
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn numeric_to_string(value: &Option<NumericFilter>) -> String {
    value.as_ref().map(|v| v.as_str().to_string()).unwrap_or_default()
}

fn parse_opt<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}
