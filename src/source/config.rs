use serde::{Deserialize, Serialize};

use crate::{
    inquiry::ValidationRules,
    listing::{BOOKING_WINDOW_DAYS, DEFAULT_PAGE_SIZE, TripListProcessor},
    source,
};

/// Widget configuration as served next to the page, keys kept upper case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "TRIPS_API_URL", default)]
    pub trips_api_url: String,
    #[serde(
        rename = "INQUIRY_FORM_URL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inquiry_form_url: Option<String>,
    #[serde(flatten)]
    pub listing: ListingConfig,
}

impl Config {
    pub fn new(trips_api_url: impl Into<String>) -> Self {
        Self {
            trips_api_url: trips_api_url.into(),
            ..Default::default()
        }
    }

    pub fn with_inquiry_form_url(mut self, url: impl Into<String>) -> Self {
        self.inquiry_form_url = Some(url.into());
        self
    }

    pub fn with_listing(mut self, listing: ListingConfig) -> Self {
        self.listing = listing;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, source::Error> {
        let config: Self = serde_json::from_str(json)?;
        if config.trips_api_url.trim().is_empty() {
            return Err(source::Error::MissingTripsUrl);
        }
        Ok(config)
    }

    /// Where inquiries are posted. An explicit `INQUIRY_FORM_URL` wins,
    /// otherwise the trips endpoint without its query string.
    pub fn submission_url(&self) -> &str {
        match self.inquiry_form_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => strip_query(self.trips_api_url.trim()),
        }
    }
}

fn strip_query(url: &str) -> &str {
    match url.find(['?', '#']) {
        Some(end) => url.get(..end).unwrap_or(url),
        None => url,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(rename = "PAGE_SIZE", default = "default_page_size")]
    pub page_size: usize,
    #[serde(rename = "BOOKING_WINDOW_DAYS", default = "default_booking_window")]
    pub booking_window_days: i64,
    /// Off restores the legacy rule where a mobile number only has to be present.
    #[serde(rename = "STRICT_MOBILE_VALIDATION", default = "default_strict_mobile")]
    pub strict_mobile: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            booking_window_days: BOOKING_WINDOW_DAYS,
            strict_mobile: true,
        }
    }
}

impl ListingConfig {
    pub fn processor(&self) -> TripListProcessor {
        TripListProcessor::new()
            .page_size(self.page_size)
            .booking_window(self.booking_window_days)
    }

    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            strict_mobile: self.strict_mobile,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_booking_window() -> i64 {
    BOOKING_WINDOW_DAYS
}

fn default_strict_mobile() -> bool {
    true
}
