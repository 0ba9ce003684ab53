//! Restaurant snapshots as returned by the listing endpoint.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::reference_data::{Ambience, Cuisine};

/// Identifies a restaurant inside one fetched result set.
///
/// The listing endpoint does not always send ids; rows without one are keyed
/// by their position, which is stable for the lifetime of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RestaurantKey {
    Id(u64),
    Position(usize),
}

impl std::fmt::Display for RestaurantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id-{id}"),
            Self::Position(position) => write!(f, "pos-{position}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default)]
    pub ambience: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price_range: Option<i64>,
    #[serde(flatten)]
    pub amenities: Amenities,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub hours: OpeningHours,
}

impl Restaurant {
    pub fn key(&self, position: usize) -> RestaurantKey {
        match self.id {
            Some(id) => RestaurantKey::Id(id),
            None => RestaurantKey::Position(position),
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Case-insensitive substring match on the name. An empty needle matches everything.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Keeps the restaurants whose name contains `needle`, in their original order.
pub fn filter_by_name<'a>(restaurants: &'a [Restaurant], needle: &str) -> Vec<&'a Restaurant> {
    restaurants.iter().filter(|r| r.name_matches(needle)).collect()
}

/// Boolean restaurant attributes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Amenity {
    Delivery,
    GoodForKids,
    GoodForGroups,
    TakeOut,
    Reservations,
    OutdoorSeating,
    WheelchairAccessible,
    BikeParking,
    CreditCardsAccepted,
    HappyHour,
    DogsAllowed,
    Sustainable,
}

impl Amenity {
    pub const ALL: [Amenity; 12] = [
        Amenity::Delivery,
        Amenity::GoodForKids,
        Amenity::GoodForGroups,
        Amenity::TakeOut,
        Amenity::Reservations,
        Amenity::OutdoorSeating,
        Amenity::WheelchairAccessible,
        Amenity::BikeParking,
        Amenity::CreditCardsAccepted,
        Amenity::HappyHour,
        Amenity::DogsAllowed,
        Amenity::Sustainable,
    ];

    /// Field name used both in the listing JSON and in the filter query.
    pub fn key(self) -> &'static str {
        match self {
            Amenity::Delivery => "delivery",
            Amenity::GoodForKids => "good_for_kids",
            Amenity::GoodForGroups => "good_for_groups",
            Amenity::TakeOut => "take_out",
            Amenity::Reservations => "reservations",
            Amenity::OutdoorSeating => "outdoor_seating",
            Amenity::WheelchairAccessible => "wheelchair_accessible",
            Amenity::BikeParking => "bike_parking",
            Amenity::CreditCardsAccepted => "credit_cards_accepted",
            Amenity::HappyHour => "happy_hour",
            Amenity::DogsAllowed => "dogs_allowed",
            Amenity::Sustainable => "sustainable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Amenity::Delivery => "Delivery",
            Amenity::GoodForKids => "Good for Kids",
            Amenity::GoodForGroups => "Good for Groups",
            Amenity::TakeOut => "Take Out",
            Amenity::Reservations => "Reservations",
            Amenity::OutdoorSeating => "Outdoor Seating",
            Amenity::WheelchairAccessible => "Wheelchair Accessible",
            Amenity::BikeParking => "Bike Parking",
            Amenity::CreditCardsAccepted => "Credit Cards Accepted",
            Amenity::HappyHour => "Happy Hour",
            Amenity::DogsAllowed => "Dogs Allowed",
            Amenity::Sustainable => "Sustainable",
        }
    }
}

/// Amenity flags of a restaurant; `None` when the server does not know.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenities {
    pub delivery: Option<bool>,
    pub good_for_kids: Option<bool>,
    pub good_for_groups: Option<bool>,
    pub take_out: Option<bool>,
    pub reservations: Option<bool>,
    pub outdoor_seating: Option<bool>,
    pub wheelchair_accessible: Option<bool>,
    pub bike_parking: Option<bool>,
    pub credit_cards_accepted: Option<bool>,
    pub happy_hour: Option<bool>,
    pub dogs_allowed: Option<bool>,
    pub sustainable: Option<bool>,
}

impl Amenities {
    pub fn get(&self, amenity: Amenity) -> Option<bool> {
        match amenity {
            Amenity::Delivery => self.delivery,
            Amenity::GoodForKids => self.good_for_kids,
            Amenity::GoodForGroups => self.good_for_groups,
            Amenity::TakeOut => self.take_out,
            Amenity::Reservations => self.reservations,
            Amenity::OutdoorSeating => self.outdoor_seating,
            Amenity::WheelchairAccessible => self.wheelchair_accessible,
            Amenity::BikeParking => self.bike_parking,
            Amenity::CreditCardsAccepted => self.credit_cards_accepted,
            Amenity::HappyHour => self.happy_hour,
            Amenity::DogsAllowed => self.dogs_allowed,
            Amenity::Sustainable => self.sustainable,
        }
    }
}

/// Per-day opening and closing times (`HH:MM:SS` on the wire).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub monday_open: Option<NaiveTime>,
    pub monday_close: Option<NaiveTime>,
    pub tuesday_open: Option<NaiveTime>,
    pub tuesday_close: Option<NaiveTime>,
    pub wednesday_open: Option<NaiveTime>,
    pub wednesday_close: Option<NaiveTime>,
    pub thursday_open: Option<NaiveTime>,
    pub thursday_close: Option<NaiveTime>,
    pub friday_open: Option<NaiveTime>,
    pub friday_close: Option<NaiveTime>,
    pub saturday_open: Option<NaiveTime>,
    pub saturday_close: Option<NaiveTime>,
    pub sunday_open: Option<NaiveTime>,
    pub sunday_close: Option<NaiveTime>,
}

impl OpeningHours {
    /// `(open, close)` for the given weekday.
    pub fn for_day(&self, day: Weekday) -> (Option<NaiveTime>, Option<NaiveTime>) {
        match day {
            Weekday::Mon => (self.monday_open, self.monday_close),
            Weekday::Tue => (self.tuesday_open, self.tuesday_close),
            Weekday::Wed => (self.wednesday_open, self.wednesday_close),
            Weekday::Thu => (self.thursday_open, self.thursday_close),
            Weekday::Fri => (self.friday_open, self.friday_close),
            Weekday::Sat => (self.saturday_open, self.saturday_close),
            Weekday::Sun => (self.sunday_open, self.sunday_close),
        }
    }

    #[cfg(test)]
    pub fn set_day(&mut self, day: Weekday, open: Option<NaiveTime>, close: Option<NaiveTime>) {
        let (o, c) = match day {
            Weekday::Mon => (&mut self.monday_open, &mut self.monday_close),
            Weekday::Tue => (&mut self.tuesday_open, &mut self.tuesday_close),
            Weekday::Wed => (&mut self.wednesday_open, &mut self.wednesday_close),
            Weekday::Thu => (&mut self.thursday_open, &mut self.thursday_close),
            Weekday::Fri => (&mut self.friday_open, &mut self.friday_close),
            Weekday::Sat => (&mut self.saturday_open, &mut self.saturday_close),
            Weekday::Sun => (&mut self.sunday_open, &mut self.sunday_close),
        };
        *o = open;
        *c = close;
    }
}

/// Envelope of `GET /api/restaurants/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestaurantListing {
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub cuisines: Vec<Cuisine>,
    #[serde(default)]
    pub ambiences: Vec<Ambience>,
}

#[cfg(test)]
pub(crate) fn sample_restaurant(name: &str) -> Restaurant {
    Restaurant {
        id: None,
        name: name.to_string(),
        cuisine: vec![],
        ambience: vec![],
        rating: 0.0,
        city: String::new(),
        price_range: None,
        amenities: Amenities::default(),
        latitude: None,
        longitude: None,
        hours: OpeningHours::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_JSON: &str = r#"{
        "restaurants": [
            {
                "name": "Trattoria Roma",
                "cuisine": ["Italian", "Pizza"],
                "ambience": ["casual"],
                "rating": 4.5,
                "city": "Philadelphia",
                "price_range": 2,
                "delivery": true,
                "good_for_kids": null,
                "outdoor_seating": false,
                "latitude": 39.95,
                "longitude": -75.16,
                "monday_open": "09:00:00",
                "monday_close": "17:00:00",
                "sunday_open": null,
                "sunday_close": null
            },
            {
                "id": 7,
                "name": "Bare Minimum",
                "rating": 3.0,
                "city": "Tampa",
                "price_range": null,
                "latitude": null,
                "longitude": null
            }
        ]
    }"#;

    #[test]
    fn decodes_listing_envelope() {
        let listing: RestaurantListing = serde_json::from_str(LISTING_JSON).unwrap();
        assert_eq!(listing.restaurants.len(), 2);
        assert!(listing.cuisines.is_empty());

        let roma = &listing.restaurants[0];
        assert_eq!(roma.cuisine, vec!["Italian", "Pizza"]);
        assert_eq!(roma.price_range, Some(2));
        assert_eq!(roma.amenities.get(Amenity::Delivery), Some(true));
        assert_eq!(roma.amenities.get(Amenity::GoodForKids), None);
        assert_eq!(roma.amenities.get(Amenity::OutdoorSeating), Some(false));
        assert_eq!(roma.coordinates(), Some((39.95, -75.16)));
        let (open, close) = roma.hours.for_day(Weekday::Mon);
        assert_eq!(open, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(close, NaiveTime::from_hms_opt(17, 0, 0));
        assert_eq!(roma.hours.for_day(Weekday::Sun), (None, None));

        let bare = &listing.restaurants[1];
        assert_eq!(bare.id, Some(7));
        assert_eq!(bare.price_range, None);
        assert_eq!(bare.coordinates(), None);
        assert!(bare.cuisine.is_empty());
    }

    #[test]
    fn key_prefers_server_id() {
        let mut r = sample_restaurant("A");
        assert_eq!(r.key(3), RestaurantKey::Position(3));
        r.id = Some(42);
        assert_eq!(r.key(3), RestaurantKey::Id(42));
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let list = vec![sample_restaurant("Blue Fin"), sample_restaurant("Red Lobster"), sample_restaurant("bluebird cafe")];
        let names: Vec<_> = filter_by_name(&list, "BLUE").into_iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Blue Fin", "bluebird cafe"]);
        assert_eq!(filter_by_name(&list, "").len(), 3);
    }

    #[test]
    fn set_day_round_trips_through_for_day() {
        let mut hours = OpeningHours::default();
        let open = NaiveTime::from_hms_opt(11, 30, 0);
        hours.set_day(Weekday::Thu, open, None);
        assert_eq!(hours.for_day(Weekday::Thu), (open, None));
        assert_eq!(hours.thursday_open, open);
    }
}
