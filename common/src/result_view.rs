//! Projections of the result set into table rows, map markers and map focus.

use chrono::{Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    api_const::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, SELECTED_MAP_TRANSITION_SECS, SELECTED_MAP_ZOOM},
    restaurant::{Amenity, OpeningHours, Restaurant, RestaurantKey},
    restaurant_results::RestaurantResults,
};

/// `1..=4` → that many `$`; anything else → `Unknown`.
pub fn price_tier(price_range: Option<i64>) -> String {
    match price_range {
        Some(tier @ 1..=4) => "$".repeat(tier as usize),
        _ => "Unknown".to_string(),
    }
}

/// `"<openHour>-<closeHour>"` for the given day, minutes dropped, or `Closed`.
pub fn todays_hours(hours: &OpeningHours, day: Weekday) -> String {
    match hours.for_day(day) {
        (Some(open), Some(close)) => format!("{}-{}", open.hour(), close.hour()),
        _ => "Closed".to_string(),
    }
}

pub fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "Unknown",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRow {
    pub key: RestaurantKey,
    pub name: String,
    pub cuisine: String,
    pub city: String,
    pub rating: String,
    pub price_tier: String,
    pub todays_hours: String,
    pub is_selected: bool,
}

impl RestaurantRow {
    pub fn new(key: RestaurantKey, restaurant: &Restaurant, day: Weekday, is_selected: bool) -> Self {
        Self {
            key,
            name: restaurant.name.clone(),
            cuisine: restaurant.cuisine.join(", "),
            city: restaurant.city.clone(),
            rating: format!("{:.1}", restaurant.rating),
            price_tier: price_tier(restaurant.price_range),
            todays_hours: todays_hours(&restaurant.hours, day),
            is_selected,
        }
    }
}

pub fn table_rows(results: &RestaurantResults, day: Weekday) -> Vec<RestaurantRow> {
    let selected = results.selected_key();
    results
        .keyed()
        .map(|(key, r)| RestaurantRow::new(key, r, day, selected == Some(key)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub key: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    /// `(label, value)` lines shown in the marker popup.
    pub details: Vec<(String, String)>,
}

impl MapMarker {
    pub fn new(key: RestaurantKey, restaurant: &Restaurant) -> Option<Self> {
        let (latitude, longitude) = restaurant.coordinates()?;
        let mut details = vec![
            ("Cuisine".to_string(), restaurant.cuisine.join(", ")),
            ("Ambience".to_string(), restaurant.ambience.join(", ")),
            ("City".to_string(), restaurant.city.clone()),
            ("Rating".to_string(), format!("{:.1} stars", restaurant.rating)),
            ("Price Range".to_string(), price_tier(restaurant.price_range)),
        ];
        for amenity in Amenity::ALL {
            details.push((amenity.label().to_string(), yes_no(restaurant.amenities.get(amenity)).to_string()));
        }
        Some(Self {
            key: key.to_string(),
            latitude,
            longitude,
            title: restaurant.name.clone(),
            details,
        })
    }
}

/// Restaurants without both coordinates get no marker.
pub fn map_markers(results: &RestaurantResults) -> Vec<MapMarker> {
    results.keyed().filter_map(|(key, r)| MapMarker::new(key, r)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFocus {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Animated fly-to duration; `None` jumps.
    pub transition_secs: Option<f64>,
}

impl Default for MapFocus {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_MAP_CENTER.0,
            longitude: DEFAULT_MAP_CENTER.1,
            zoom: DEFAULT_MAP_ZOOM,
            transition_secs: None,
        }
    }
}

impl MapFocus {
    /// Centered on the selected restaurant, or the neutral default.
    pub fn for_results(results: &RestaurantResults) -> Self {
        let Some((latitude, longitude)) = results.selected_restaurant().and_then(|r| r.coordinates()) else {
            return Self::default();
        };
        Self {
            latitude,
            longitude,
            zoom: SELECTED_MAP_ZOOM,
            transition_secs: Some(SELECTED_MAP_TRANSITION_SECS),
        }
    }
}
