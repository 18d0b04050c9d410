use std::net::SocketAddr;
use std::time::Duration;

use sign_server::groups::{SignGroups, StopGroupConfig};
use sign_server::poller::DEFAULT_REFRESH_INTERVAL;
use sign_server::source::{ArrivalClient, ArrivalClientConfig};
use sign_server::stops::StopId;
use sign_server::web::{AppState, create_router};

/// Stop shown before any group has been configured.
const DEFAULT_STOP_ID: &str = "1_75403";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Get the backend base URL from the environment
    let mut client_config = ArrivalClientConfig::new();
    match std::env::var("ARRIVALS_API_BASE") {
        Ok(base) => client_config = client_config.with_base_url(base),
        Err(_) => eprintln!(
            "Warning: ARRIVALS_API_BASE not set, using {}",
            client_config.base_url
        ),
    }

    let interval = std::env::var("SIGN_REFRESH_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_REFRESH_INTERVAL);

    // Create arrivals client and group registry
    let client = ArrivalClient::new(client_config).expect("Failed to create arrivals client");
    let groups = SignGroups::new(client, interval);

    // Seed one sign so the display works out of the box
    let default_stop = StopId::parse(DEFAULT_STOP_ID).expect("default stop id is valid");
    groups
        .add(StopGroupConfig {
            name: "default".to_string(),
            stop_ids: vec![default_stop],
        })
        .await;

    // Build app state and router
    let state = AppState::new(groups);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Arrival sign server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health              - Health check");
    println!("  GET    /groups              - List stop groups");
    println!("  POST   /groups              - Create or replace a stop group");
    println!("  DELETE /groups/:name        - Remove a stop group");
    println!("  GET    /groups/:name/board  - Rendered sign for a group");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
