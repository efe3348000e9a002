use serde::{Deserialize, Serialize};
use tripboard::{
    listing::{Badge, DisplayTrip},
    shared::time::format_date,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDto {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub dates: String,
    pub slots: String,
    pub base_price: f64,
    pub effective_price: f64,
    pub discount_percent: Option<u32>,
    pub badge: Badge,
    pub badge_label: String,
    pub notes: String,
    pub can_inquire: bool,
}

impl TripDto {
    pub fn from(display: &DisplayTrip<'_>) -> Self {
        let trip = display.trip;
        Self {
            destination: trip.destination.to_string(),
            start_date: trip.start_date.to_string(),
            end_date: trip.end_date.to_string(),
            dates: format!(
                "{} – {}",
                format_date(trip.start_date),
                format_date(trip.end_date)
            ),
            slots: format!("{} / {}", trip.remaining_slots, trip.total_slots),
            base_price: trip.base_price,
            effective_price: display.effective_price,
            discount_percent: display.discount_percent,
            badge: display.badge,
            badge_label: display.badge.label().to_string(),
            notes: trip.notes.as_deref().unwrap_or_default().to_string(),
            can_inquire: display.badge.is_bookable(),
        }
    }
}
