use std::{fmt::Display, sync::Arc};

use chrono::NaiveDate;

use crate::{
    shared::time::parse_date,
    source::{self, TripRecord},
};

pub const ACTIVE_STATUS: &str = "ACTIVE";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum TripStatus {
    Active,
    #[default]
    Unknown,
    Other(Arc<str>),
}

impl From<&str> for TripStatus {
    fn from(value: &str) -> Self {
        match value {
            ACTIVE_STATUS => TripStatus::Active,
            "" => TripStatus::Unknown,
            other => TripStatus::Other(other.into()),
        }
    }
}

impl Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripStatus::Active => write!(f, "{ACTIVE_STATUS}"),
            TripStatus::Unknown => Ok(()),
            TripStatus::Other(status) => write!(f, "{status}"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trip {
    pub destination: Arc<str>,
    pub status: TripStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_slots: i64,
    pub remaining_slots: i64,
    pub base_price: f64,
    pub offer_price: f64,
    pub notes: Option<Arc<str>>,
}

impl Trip {
    pub fn is_active(&self) -> bool {
        self.status == TripStatus::Active
    }
}

impl TryFrom<TripRecord> for Trip {
    type Error = source::Error;

    fn try_from(value: TripRecord) -> Result<Self, Self::Error> {
        let start_date = record_date(&value, "Start_Date", &value.start_date)?;
        let end_date = record_date(&value, "End_Date", &value.end_date)?;
        let notes = value.notes.trim();
        Ok(Self {
            status: value.status.as_str().into(),
            start_date,
            end_date,
            total_slots: slots(value.total_slots),
            remaining_slots: slots(value.remaining_slots),
            base_price: value.base_price,
            offer_price: value.offer_price,
            notes: (!notes.is_empty()).then(|| notes.into()),
            destination: value.destination.into(),
        })
    }
}

fn record_date(
    record: &TripRecord,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, source::Error> {
    parse_date(value).ok_or_else(|| source::Error::InvalidDate {
        destination: record.destination.clone(),
        field,
        value: value.to_string(),
    })
}

// Fractions truncate, unreadable counts read as no slots
fn slots(value: f64) -> i64 {
    if value.is_finite() { value.trunc() as i64 } else { 0 }
}
