use reqwest::{Client, header::ACCEPT_ENCODING};
use thiserror::Error;
use tracing::{debug, info};
use tripboard::{Config, inquiry::InquiryPayload, listing::Trip, source};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Response is not success: {0}")]
    Status(reqwest::StatusCode),
    #[error("Source error: {0}")]
    Source(#[from] source::Error),
}

/// Reads the configuration from a local file or an http(s) URL.
pub async fn load_config(client: &Client, location: &str) -> Result<Config, self::Error> {
    let json = if is_url(location) {
        get_text(client, location).await?
    } else {
        tokio::fs::read_to_string(location).await?
    };
    let config = Config::from_json(&json)?;
    info!("Loaded config from {location}");
    Ok(config)
}

pub async fn fetch_trips(client: &Client, url: &str) -> Result<Vec<Trip>, self::Error> {
    let body = get_text(client, url).await?;
    let trips = source::parse_trips(&body)?;
    debug!("Fetched {} trips", trips.len());
    Ok(trips)
}

/// Posts the inquiry as a URL-encoded form. The response is never read,
/// only a failure to send counts as an error.
pub async fn submit_inquiry(
    client: &Client,
    url: &str,
    payload: &InquiryPayload,
) -> Result<(), self::Error> {
    let response = client.post(url).form(&payload.form_fields()).send().await?;
    debug!(
        "Inquiry for {} sent, endpoint answered {}",
        payload.destination,
        response.status()
    );
    Ok(())
}

async fn get_text(client: &Client, url: &str) -> Result<String, self::Error> {
    let response = client
        .get(url)
        .header(ACCEPT_ENCODING, "gzip, deflate")
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(self::Error::Status(response.status()));
    }
    Ok(response.text().await?)
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
