use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use crate::controller::Dashboard;
use crate::protocol::AddressInput;

pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(|| async { "NovaChain is running" }))
        .route("/health", get(|| async { (StatusCode::OK, "OK") }))
        .route("/state", get(get_state))
        .route("/address", post(set_address))
        .route("/connect", post(connect))
        .route("/qr", get(get_qr))
        .route("/export.csv", get(export_csv))
        .with_state(dashboard)
}

async fn get_state(State(dashboard): State<Arc<Dashboard>>) -> Response {
    Json(dashboard.view().await).into_response()
}

async fn set_address(
    State(dashboard): State<Arc<Dashboard>>,
    Json(body): Json<AddressInput>,
) -> Response {
    Json(dashboard.set_input(body.address).await).into_response()
}

async fn connect(State(dashboard): State<Arc<Dashboard>>) -> Response {
    info!("HTTP POST /connect request received");
    Json(dashboard.connect().await).into_response()
}

async fn get_qr(State(dashboard): State<Arc<Dashboard>>) -> Response {
    match dashboard.qr_svg().await {
        Ok(Some(svg)) => ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response(),
        Ok(None) => not_found("Enter address to generate QR code"),
        Err(e) => {
            error!("QR generation failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn export_csv(State(dashboard): State<Arc<Dashboard>>) -> Response {
    match dashboard.export_csv().await {
        Some(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"txs.csv\""),
            ],
            csv,
        )
            .into_response(),
        None => not_found("No transactions to export"),
    }
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
