use serde::{Deserialize, Serialize};
use tripboard::inquiry::InquiryForm;

/// Body of `POST /inquiry`: the card's destination plus the form. The
/// quoted price is derived again server side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryRequest {
    pub destination: String,
    #[serde(flatten)]
    pub form: InquiryForm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
