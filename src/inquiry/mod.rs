use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listing::format_price;

pub const SUBMITTED_MESSAGE: &str = "Inquiry submitted! We'll contact you soon.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit inquiry. Please try again.";

const MOBILE_DIGITS: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid 10-digit mobile number.")]
    InvalidMobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Require exactly ten ASCII digits instead of any non-blank value.
    pub strict_mobile: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            strict_mobile: true,
        }
    }
}

impl ValidationRules {
    pub fn lenient() -> Self {
        Self {
            strict_mobile: false,
        }
    }
}

/// Raw text as typed into an inquiry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub area: String,
}

/// Trimmed contact details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    mobile: String,
    area: String,
}

impl InquiryForm {
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            area: area.into(),
        }
    }

    pub fn validate(&self, rules: &ValidationRules) -> Result<Contact, ValidationError> {
        let name = self.name.trim();
        let mobile = self.mobile.trim();
        let area = self.area.trim();
        if name.is_empty() || mobile.is_empty() || area.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if rules.strict_mobile && !is_mobile_number(mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        Ok(Contact {
            name: name.to_string(),
            mobile: mobile.to_string(),
            area: area.to_string(),
        })
    }
}

pub fn is_mobile_number(value: &str) -> bool {
    value.len() == MOBILE_DIGITS && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// What gets posted for one inquiry. Built only from a validated [`Contact`].
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryPayload {
    pub destination: String,
    pub effective_price: f64,
    pub name: String,
    pub mobile: String,
    pub area: String,
}

impl InquiryPayload {
    pub fn new(destination: &str, effective_price: f64, contact: Contact) -> Self {
        Self {
            destination: destination.to_string(),
            effective_price,
            name: contact.name,
            mobile: contact.mobile,
            area: contact.area,
        }
    }

    /// URL-encoded form body, in the order the sheet script reads it.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("trip", self.destination.clone()),
            ("price", self.effective_price.to_string()),
            ("name", self.name.clone()),
            ("mobile", self.mobile.clone()),
            ("area", self.area.clone()),
        ]
    }

    pub fn price_label(&self) -> String {
        format_price(self.effective_price)
    }
}
