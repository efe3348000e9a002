/// Price a visitor is quoted for one trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub effective_price: f64,
    pub discount_percent: Option<u32>,
}

impl Pricing {
    /// An offer only counts when it is positive and strictly below the base
    /// price. The discount is always rounded up to the next whole percent.
    pub fn of(base_price: f64, offer_price: f64) -> Self {
        if offer_price > 0.0 && offer_price < base_price {
            let percent = (100.0 * (base_price - offer_price) / base_price).ceil();
            Self {
                effective_price: offer_price,
                discount_percent: Some(percent as u32),
            }
        } else {
            Self {
                effective_price: base_price,
                discount_percent: None,
            }
        }
    }

    pub fn has_offer(&self) -> bool {
        self.discount_percent.is_some()
    }
}

/// Rupee label the cards show, a trailing `.0` dropped.
pub fn format_price(price: f64) -> String {
    format!("₹{price}")
}
