use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use tripboard::{listing::LOAD_ERROR_MESSAGE, shared::time::today};

use crate::{api::ApiError, dto::ListingDto, remote, state::AppState};

/// `GET /trips?page=N`. Every call is a fresh page load: the list is fetched
/// again and all derived fields are recomputed for today.
pub async fn trips(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let page: usize = match params.get("page") {
        Some(value) => match value.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(ApiError::new(
                    StatusCode::BAD_REQUEST,
                    "Invalid page number.",
                ));
            }
        },
        None => 1,
    };

    let trips = remote::fetch_trips(&state.client, &state.config.trips_api_url)
        .await
        .map_err(|err| {
            error!("Failed to load trips: {err}");
            ApiError::new(StatusCode::BAD_GATEWAY, LOAD_ERROR_MESSAGE)
        })?;

    let listing = state.processor.process(&trips, today(), page);
    Ok(Json(ListingDto::from(&listing)).into_response())
}
