pub use crate::{
    inquiry::{Contact, InquiryForm, InquiryPayload, ValidationError, ValidationRules},
    listing::{
        BOOKING_WINDOW_DAYS, Badge, DEFAULT_PAGE_SIZE, DisplayTrip, Listing, Paginator, Pricing,
        Trip, TripListProcessor, TripPage, TripStatus, eligible,
    },
    shared::time::{days_until, format_date, parse_date, today},
    source::{Config, ListingConfig, TripRecord, parse_trips},
};
