use chrono::NaiveDate;
use tracing::debug;

mod badge;
mod eligibility;
mod pagination;
mod pricing;
mod trip;
pub use badge::*;
pub use eligibility::*;
pub use pagination::*;
pub use pricing::*;
pub use trip::*;

use crate::inquiry::{InquiryForm, InquiryPayload, ValidationError, ValidationRules};

pub const NO_TRIPS_MESSAGE: &str = "No trips planned right now. Please check back soon.";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading trips.";

/// A trip with everything a card needs, derived fresh for every render.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTrip<'a> {
    pub trip: &'a Trip,
    pub effective_price: f64,
    pub discount_percent: Option<u32>,
    pub badge: Badge,
}

impl<'a> DisplayTrip<'a> {
    pub fn new(trip: &'a Trip, today: NaiveDate, booking_window_days: i64) -> Self {
        let pricing = Pricing::of(trip.base_price, trip.offer_price);
        Self {
            trip,
            effective_price: pricing.effective_price,
            discount_percent: pricing.discount_percent,
            badge: Badge::classify(trip, today, booking_window_days),
        }
    }

    /// Validates a filled-in inquiry form for this trip and packages it.
    pub fn inquiry(
        &self,
        form: &InquiryForm,
        rules: &ValidationRules,
    ) -> Result<InquiryPayload, ValidationError> {
        let contact = form.validate(rules)?;
        Ok(InquiryPayload::new(
            &self.trip.destination,
            self.effective_price,
            contact,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripPage<'a> {
    pub trips: Vec<DisplayTrip<'a>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_trips: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a> {
    /// Nothing is eligible, the listing is replaced by the "no trips" state.
    NoTrips,
    Page(TripPage<'a>),
}

impl<'a> Listing<'a> {
    pub fn page(&self) -> Option<&TripPage<'a>> {
        match self {
            Listing::NoTrips => None,
            Listing::Page(page) => Some(page),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoTrips)
    }
}

/// Turns the raw trip list into the page a visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripListProcessor {
    page_size: usize,
    booking_window_days: i64,
}

impl Default for TripListProcessor {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            booking_window_days: BOOKING_WINDOW_DAYS,
        }
    }
}

impl TripListProcessor {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn booking_window(mut self, days: i64) -> Self {
        self.booking_window_days = days;
        self
    }

    /// The card for `destination` among eligible trips, soonest first when
    /// the name repeats.
    pub fn find<'a>(
        &self,
        trips: &'a [Trip],
        today: NaiveDate,
        destination: &str,
    ) -> Option<DisplayTrip<'a>> {
        eligible(trips)
            .into_iter()
            .find(|trip| &*trip.destination == destination)
            .map(|trip| DisplayTrip::new(trip, today, self.booking_window_days))
    }

    pub fn process<'a>(&self, trips: &'a [Trip], today: NaiveDate, page: usize) -> Listing<'a> {
        let eligible = eligible(trips);
        if eligible.is_empty() {
            debug!("No eligible trips out of {}", trips.len());
            return Listing::NoTrips;
        }

        let paginator = Paginator::new(eligible.len(), self.page_size).at(page);
        let cards: Vec<DisplayTrip<'a>> = paginator
            .slice(&eligible)
            .iter()
            .copied()
            .map(|trip| DisplayTrip::new(trip, today, self.booking_window_days))
            .collect();
        debug!(
            "Page {} of {} with {} trips",
            paginator.page(),
            paginator.total_pages(),
            cards.len()
        );

        Listing::Page(TripPage {
            trips: cards,
            page: paginator.page(),
            total_pages: paginator.total_pages(),
            total_trips: paginator.count(),
            has_previous: paginator.has_previous(),
            has_next: paginator.has_next(),
        })
    }
}
