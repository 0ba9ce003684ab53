//! The current result set, the selected restaurant and fetch sequencing.

use crate::{
    reference_data::ReferenceData,
    restaurant::{Restaurant, RestaurantKey, RestaurantListing},
};

/// Issued by [`RestaurantResults::begin_fetch`]; only the latest one may apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied { count: usize },
    /// The previous result set was kept.
    Failed { message: String },
    /// A newer fetch was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RestaurantResults {
    restaurants: Vec<Restaurant>,
    listing_reference: ReferenceData,
    selected: Option<RestaurantKey>,
    last_issued: u64,
    last_completed: u64,
    has_applied: bool,
    last_error: Option<String>,
}

impl RestaurantResults {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_issued += 1;
        FetchTicket(self.last_issued)
    }

    /// Applies a fetch response. The collection, count and selection change
    /// together, and only for the latest ticket; failures keep the previous collection.
    pub fn complete<E: std::fmt::Display>(&mut self, ticket: FetchTicket, response: Result<RestaurantListing, E>) -> FetchOutcome {
        if ticket.0 != self.last_issued || self.last_completed >= ticket.0 {
            return FetchOutcome::Stale;
        }
        self.last_completed = ticket.0;
        match response {
            Ok(listing) => {
                let count = listing.restaurants.len();
                self.restaurants = listing.restaurants;
                self.listing_reference = ReferenceData { cuisines: listing.cuisines, ambiences: listing.ambiences };
                self.selected = None;
                self.has_applied = true;
                self.last_error = None;
                FetchOutcome::Applied { count }
            }
            Err(e) => {
                let message = e.to_string();
                self.last_error = Some(message.clone());
                FetchOutcome::Failed { message }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.last_completed < self.last_issued
    }

    /// Whether any fetch has ever replaced the (initially empty) collection.
    pub fn has_results(&self) -> bool {
        self.has_applied
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn count(&self) -> usize {
        self.restaurants.len()
    }

    pub fn listing_reference(&self) -> &ReferenceData {
        &self.listing_reference
    }

    pub fn keyed(&self) -> impl Iterator<Item = (RestaurantKey, &Restaurant)> {
        self.restaurants.iter().enumerate().map(|(i, r)| (r.key(i), r))
    }

    pub fn get(&self, key: RestaurantKey) -> Option<&Restaurant> {
        self.keyed().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    /// Selects a restaurant of the current collection. Unknown keys are ignored.
    pub fn select(&mut self, key: RestaurantKey) -> bool {
        if self.get(key).is_none() {
            return false;
        }
        self.selected = Some(key);
        true
    }

    pub fn selected_key(&self) -> Option<RestaurantKey> {
        self.selected
    }

    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        self.get(self.selected?)
    }
}
