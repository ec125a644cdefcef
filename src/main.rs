use axum::extract::State;
use axum::{http::Method, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use voterauth_api::config::AppConfig;
use voterauth_api::database::connection::get_db_client;
use voterauth_api::routes;
use voterauth_api::services::otp_gateway::OtpGateway;
use voterauth_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();

    let db = get_db_client(&config).await;
    let otp_gateway = OtpGateway::new(
        config.two_factor_api_key.clone(),
        config.otp_template.clone(),
    );
    let app_state = AppState::new(db, otp_gateway);

    let app = build_router(app_state);
    start_server(app, &config).await;
}

fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .merge(routes::auth::routes())
        .merge(routes::otp_routes::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn start_server(app: Router, config: &AppConfig) {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");

    tracing::info!("Server starting on {}", addr);

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            axum::serve(listener, app).await.expect("server error");
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}

async fn root_handler() -> &'static str {
    "Voter Registration Auth API"
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    use mongodb::bson::doc;

    let db_status = match state.db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(json!({
        "status": "healthy",
        "database": db_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
