use thiserror::Error;
use tracing::{debug, warn};

mod config;
pub mod models;
pub use config::*;
pub use models::*;

use crate::listing::Trip;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config is missing TRIPS_API_URL")]
    MissingTripsUrl,
    #[error("Trip {destination} has an unreadable {field}: {value:?}")]
    InvalidDate {
        destination: String,
        field: &'static str,
        value: String,
    },
}

/// Parses the trip list body. Records with unreadable dates are skipped,
/// anything that is not a JSON array of objects fails the whole list.
pub fn parse_trips(json: &str) -> Result<Vec<Trip>, self::Error> {
    let records: Vec<TripRecord> = serde_json::from_str(json)?;
    let total = records.len();
    let trips: Vec<Trip> = records
        .into_iter()
        .filter_map(|record| match Trip::try_from(record) {
            Ok(trip) => Some(trip),
            Err(err) => {
                warn!("Skipping trip record: {err}");
                None
            }
        })
        .collect();
    debug!("Parsed {} of {} trip records", trips.len(), total);
    Ok(trips)
}
