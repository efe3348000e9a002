use std::sync::Arc;

use axum::{
    Router,
    body::to_bytes,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Days;
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Mutex};
use tripboard::{Config, shared::time::today};

use crate::state::AppState;

/// Nothing listens on port 1, connects fail straight away.
pub(crate) const UNREACHABLE_URL: &str = "http://127.0.0.1:1/exec";

/// A stand-in for the trip sheet: `GET /exec` serves `trips`, `POST /exec`
/// records each form body it receives.
pub(crate) struct FakeSheet {
    pub url: String,
    pub received: Arc<Mutex<Vec<String>>>,
}

pub(crate) async fn fake_sheet(trips: Value) -> FakeSheet {
    let received: Arc<Mutex<Vec<String>>> = Arc::default();
    let body = trips.to_string();
    let sink = received.clone();
    let app = Router::new().route(
        "/exec",
        get(move || async move { body })
            .post(move |form: String| async move { sink.lock().await.push(form) }),
    );
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake sheet");
    let address = listener.local_addr().expect("fake sheet address");
    tokio::spawn(async move { axum::serve(listener, app).await });
    FakeSheet {
        url: format!("http://{address}/exec"),
        received,
    }
}

/// One row per destination, each starting `starts_in` days from today.
pub(crate) fn trip_rows(rows: &[(&str, u64, i64, f64, f64)]) -> Value {
    let rows: Vec<Value> = rows
        .iter()
        .map(|(destination, starts_in, remaining, base, offer)| {
            let start = today()
                .checked_add_days(Days::new(*starts_in))
                .expect("start date");
            json!({
                "Destination": destination,
                "Status": "ACTIVE",
                "Start_Date": start.to_string(),
                "End_Date": start.to_string(),
                "Total_Slots": 20,
                "Remaining_Slots": remaining,
                "Base_Price": base,
                "Offer_Price": offer,
            })
        })
        .collect();
    Value::Array(rows)
}

pub(crate) fn state(trips_url: &str, form_url: Option<&str>) -> Arc<AppState> {
    let mut config = Config::new(trips_url);
    if let Some(url) = form_url {
        config = config.with_inquiry_form_url(url);
    }
    Arc::new(AppState::new(config, reqwest::Client::new()))
}

pub(crate) async fn into_json(response: impl IntoResponse) -> (u16, Value) {
    let response: Response = response.into_response();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}
