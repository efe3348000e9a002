mod api;
mod dto;
mod remote;
mod state;
#[cfg(test)]
mod test_helpers;

use crate::state::AppState;
use axum::routing::{get, post};
use clap::Parser;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "tripboard-server",
    about = "Serves the trip listing and forwards inquiries",
    long_about = None
)]
struct Args {
    /// Config file path or http(s) URL
    #[arg(short, long, env = "TRIPBOARD_CONFIG", default_value = "config.json")]
    config: String,

    /// Server host address
    #[arg(short = 'H', long, env = "TRIPBOARD_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, env = "TRIPBOARD_PORT", default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let start_logo = include_str!("../start_logo.txt");
    println!("{}", start_logo);

    info!("Starting server...");
    let client = reqwest::Client::new();

    info!("Loading config...");
    let now = Instant::now();
    let config = match remote::load_config(&client, &args.config).await {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading config: {err}");
            std::process::exit(1);
        }
    };
    info!("Loading config took {:?}", now.elapsed());
    info!("Trips from {}", config.trips_api_url);
    info!("Inquiries to {}", config.submission_url());

    let state = Arc::new(AppState::new(config, client));
    let app = axum::Router::new()
        .route("/trips", get(api::trips))
        .route("/inquiry", post(api::inquiry))
        .with_state(state);

    let address = format!("{}:{}", args.host, args.port);
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {address}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening on {address}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
