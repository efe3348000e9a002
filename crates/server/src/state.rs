use tripboard::{Config, inquiry::ValidationRules, listing::TripListProcessor};

pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
    pub processor: TripListProcessor,
    pub rules: ValidationRules,
}

impl AppState {
    pub fn new(config: Config, client: reqwest::Client) -> Self {
        let processor = config.listing.processor();
        let rules = config.listing.validation_rules();
        Self {
            config,
            client,
            processor,
            rules,
        }
    }
}
