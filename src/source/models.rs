use serde::{Deserialize, Deserializer, Serialize};

/// One row of the trips endpoint, as the sheet behind it serves it.
/// Numbers may arrive as JSON numbers or as text, blanks read as zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TripRecord {
    #[serde(rename = "Destination", default, deserialize_with = "loose_text")]
    pub destination: String,
    #[serde(rename = "Status", default, deserialize_with = "loose_text")]
    pub status: String,
    #[serde(rename = "Start_Date", default, deserialize_with = "loose_text")]
    pub start_date: String,
    #[serde(rename = "End_Date", default, deserialize_with = "loose_text")]
    pub end_date: String,
    #[serde(rename = "Total_Slots", default, deserialize_with = "loose_number")]
    pub total_slots: f64,
    #[serde(rename = "Remaining_Slots", default, deserialize_with = "loose_number")]
    pub remaining_slots: f64,
    #[serde(rename = "Base_Price", default, deserialize_with = "loose_number")]
    pub base_price: f64,
    #[serde(rename = "Offer_Price", default, deserialize_with = "loose_number")]
    pub offer_price: f64,
    #[serde(rename = "Notes", default, deserialize_with = "loose_text")]
    pub notes: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Flag(bool),
}

fn loose_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Loose>::deserialize(deserializer)? {
        None => 0.0,
        Some(Loose::Number(value)) => value,
        Some(Loose::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                // Unparseable text never satisfies a price or slot comparison
                text.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Loose::Flag(flag)) => f64::from(u8::from(flag)),
    };
    Ok(value)
}

fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Loose>::deserialize(deserializer)? {
        None => String::new(),
        Some(Loose::Text(text)) => text,
        Some(Loose::Number(value)) => value.to_string(),
        Some(Loose::Flag(flag)) => flag.to_string(),
    };
    Ok(value)
}

#[test]
fn numbers_as_text() {
    let json = r#"{"Destination":"Spiti","Base_Price":"12000","Offer_Price":"","Total_Slots":"10","Remaining_Slots":4}"#;
    let record: TripRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.base_price, 12000.0);
    assert_eq!(record.offer_price, 0.0);
    assert_eq!(record.total_slots, 10.0);
    assert_eq!(record.remaining_slots, 4.0);
}

#[test]
fn missing_and_null_fields() {
    let json = r#"{"Destination":"Spiti","Notes":null}"#;
    let record: TripRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.notes, "");
    assert_eq!(record.status, "");
    assert_eq!(record.offer_price, 0.0);
}

#[test]
fn garbage_price_is_nan() {
    let json = r#"{"Offer_Price":"call us"}"#;
    let record: TripRecord = serde_json::from_str(json).unwrap();
    assert!(record.offer_price.is_nan());
}
