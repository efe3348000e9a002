use serde::{Deserialize, Serialize};
use tripboard::listing::{Listing, NO_TRIPS_MESSAGE};

use crate::dto::TripDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingDto {
    Empty {
        message: String,
    },
    Listing {
        page: usize,
        total_pages: usize,
        total_trips: usize,
        has_previous: bool,
        has_next: bool,
        trips: Vec<TripDto>,
    },
}

impl ListingDto {
    pub fn from(listing: &Listing<'_>) -> Self {
        match listing {
            Listing::NoTrips => ListingDto::Empty {
                message: NO_TRIPS_MESSAGE.to_string(),
            },
            Listing::Page(page) => ListingDto::Listing {
                page: page.page,
                total_pages: page.total_pages,
                total_trips: page.total_trips,
                has_previous: page.has_previous,
                has_next: page.has_next,
                trips: page.trips.iter().map(TripDto::from).collect(),
            },
        }
    }
}
