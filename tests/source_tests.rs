use chrono::NaiveDate;
use tripboard::{
    Config, ListingConfig,
    listing::TripStatus,
    source::{self, parse_trips},
};

const TRIPS: &str = r#"[
    {
        "Destination": "Sandhan Valley",
        "Status": "ACTIVE",
        "Start_Date": "2026-04-11",
        "End_Date": "2026-04-12",
        "Total_Slots": 30,
        "Remaining_Slots": 12,
        "Base_Price": 3200,
        "Offer_Price": 2800,
        "Notes": "Rappelling gear included"
    },
    {
        "Destination": "Kalsubai",
        "Status": "INACTIVE",
        "Start_Date": "2026-05-02T00:00:00",
        "End_Date": "2026-05-02T00:00:00",
        "Total_Slots": "20",
        "Remaining_Slots": "",
        "Base_Price": "1500",
        "Offer_Price": "",
        "Notes": ""
    },
    {
        "Destination": "Broken",
        "Status": "ACTIVE",
        "Start_Date": "soon",
        "End_Date": "2026-05-02"
    }
]"#;

#[test]
fn parses_trip_list() {
    let trips = parse_trips(TRIPS).unwrap();
    assert_eq!(trips.len(), 2);

    let sandhan = &trips[0];
    assert_eq!(&*sandhan.destination, "Sandhan Valley");
    assert_eq!(sandhan.status, TripStatus::Active);
    assert_eq!(sandhan.start_date, NaiveDate::from_ymd_opt(2026, 4, 11).unwrap());
    assert_eq!(sandhan.remaining_slots, 12);
    assert_eq!(sandhan.offer_price, 2800.0);
    assert_eq!(sandhan.notes.as_deref(), Some("Rappelling gear included"));

    let kalsubai = &trips[1];
    assert_eq!(kalsubai.status, TripStatus::Other("INACTIVE".into()));
    assert_eq!(kalsubai.start_date, NaiveDate::from_ymd_opt(2026, 5, 2).unwrap());
    assert_eq!(kalsubai.total_slots, 20);
    assert_eq!(kalsubai.remaining_slots, 0);
    assert_eq!(kalsubai.base_price, 1500.0);
    assert_eq!(kalsubai.notes, None);
}

#[test]
fn non_array_body_is_an_error() {
    let result = parse_trips(r#"{"error":"quota"}"#);
    assert!(matches!(result, Err(source::Error::Json(_))));
}

#[test]
fn empty_array_is_no_trips() {
    assert!(parse_trips("[]").unwrap().is_empty());
}

#[test]
fn config_defaults() {
    let json = r#"{"TRIPS_API_URL":"https://script.example.com/exec?sheet=trips"}"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(
        config.trips_api_url,
        "https://script.example.com/exec?sheet=trips"
    );
    assert_eq!(config.inquiry_form_url, None);
    assert_eq!(config.listing, ListingConfig::default());
    assert_eq!(config.listing.page_size, 4);
    assert_eq!(config.listing.booking_window_days, 70);
    assert!(config.listing.strict_mobile);
}

#[test]
fn submission_url_strips_query() {
    let config = Config::new("https://script.example.com/exec?sheet=trips#top");
    assert_eq!(config.submission_url(), "https://script.example.com/exec");
}

#[test]
fn submission_url_without_query() {
    let config = Config::new("https://script.example.com/exec");
    assert_eq!(config.submission_url(), "https://script.example.com/exec");
}

#[test]
fn submission_url_override() {
    let config = Config::from_json(
        r#"{
            "TRIPS_API_URL": "https://script.example.com/exec?sheet=trips",
            "INQUIRY_FORM_URL": "https://forms.example.com/inquiry"
        }"#,
    )
    .unwrap();
    assert_eq!(config.submission_url(), "https://forms.example.com/inquiry");
}

#[test]
fn blank_override_falls_back() {
    let config = Config::new("https://a.example.com/exec?x=1").with_inquiry_form_url("  ");
    assert_eq!(config.submission_url(), "https://a.example.com/exec");
}

#[test]
fn missing_trips_url_is_an_error() {
    let result = Config::from_json(r#"{"INQUIRY_FORM_URL":"https://forms.example.com"}"#);
    assert!(matches!(result, Err(source::Error::MissingTripsUrl)));
}

#[test]
fn listing_settings_override() {
    let config = Config::from_json(
        r#"{
            "TRIPS_API_URL": "https://script.example.com/exec",
            "PAGE_SIZE": 6,
            "BOOKING_WINDOW_DAYS": 45,
            "STRICT_MOBILE_VALIDATION": false
        }"#,
    )
    .unwrap();
    assert_eq!(config.listing.page_size, 6);
    assert_eq!(config.listing.booking_window_days, 45);
    assert!(!config.listing.validation_rules().strict_mobile);
}

#[test]
fn padded_status_is_not_active() {
    let json = r#"[{
        "Destination": "Lohagad",
        "Status": " ACTIVE ",
        "Start_Date": "2026-07-01",
        "End_Date": "2026-07-01"
    }]"#;
    let trips = parse_trips(json).unwrap();
    assert_eq!(trips[0].status, TripStatus::Other(" ACTIVE ".into()));
    assert!(!trips[0].is_active());
}
