use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{listing::Trip, shared::time::days_until};

/// Booking closes this many days before a trip starts, inclusive.
pub const BOOKING_WINDOW_DAYS: i64 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Badge {
    Completed,
    Closed,
    SoldOut,
    Available,
}

impl Badge {
    /// First matching rule wins: finished trips, then the closed booking
    /// window, then slot availability.
    pub fn classify(trip: &Trip, today: NaiveDate, booking_window_days: i64) -> Self {
        if today > trip.end_date {
            Badge::Completed
        } else if days_until(today, trip.start_date) <= booking_window_days {
            Badge::Closed
        } else if trip.remaining_slots <= 0 {
            Badge::SoldOut
        } else {
            Badge::Available
        }
    }

    pub fn is_bookable(&self) -> bool {
        matches!(self, Badge::Available)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::Completed => "Completed",
            Badge::Closed => "Booking Closed",
            Badge::SoldOut => "Sold Out",
            Badge::Available => "Available",
        }
    }
}

impl Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
