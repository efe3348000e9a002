use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};
use tripboard::{
    inquiry::{SUBMIT_FAILED_MESSAGE, SUBMITTED_MESSAGE},
    listing::LOAD_ERROR_MESSAGE,
    shared::time::today,
};

use crate::{
    api::ApiError,
    dto::{InquiryRequest, MessageDto},
    remote,
    state::AppState,
};

pub const UNKNOWN_TRIP_MESSAGE: &str = "Unknown trip.";
pub const NOT_BOOKABLE_MESSAGE: &str = "Booking is not open for this trip.";

/// `POST /inquiry`. The trip is looked up in a fresh list so the posted
/// price is the one the card shows today. Validation failures and send
/// failures both leave the visitor free to correct the form and retry.
pub async fn inquiry(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InquiryRequest>,
) -> Result<Response, ApiError> {
    let destination = request.destination.trim();
    if destination.is_empty() {
        return Err(ApiError::new(StatusCode::NOT_FOUND, UNKNOWN_TRIP_MESSAGE));
    }

    let trips = remote::fetch_trips(&state.client, &state.config.trips_api_url)
        .await
        .map_err(|err| {
            error!("Failed to load trips: {err}");
            ApiError::new(StatusCode::BAD_GATEWAY, LOAD_ERROR_MESSAGE)
        })?;

    let display = state
        .processor
        .find(&trips, today(), destination)
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, UNKNOWN_TRIP_MESSAGE))?;
    if !display.badge.is_bookable() {
        return Err(ApiError::new(StatusCode::CONFLICT, NOT_BOOKABLE_MESSAGE));
    }

    let payload = display
        .inquiry(&request.form, &state.rules)
        .map_err(|err| ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;

    remote::submit_inquiry(&state.client, state.config.submission_url(), &payload)
        .await
        .map_err(|err| {
            error!("Failed to submit inquiry for {destination}: {err}");
            ApiError::new(StatusCode::BAD_GATEWAY, SUBMIT_FAILED_MESSAGE)
        })?;

    info!("Inquiry submitted for {destination}");
    let body = MessageDto {
        message: SUBMITTED_MESSAGE.to_string(),
    };
    Ok(Json(body).into_response())
}
