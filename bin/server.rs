// Zengin Gateway - Web Server
// Single-endpoint REST API with Axum

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use simple_logger::SimpleLogger;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use zengin_gateway::{
    validate_and_format, FileStore, ReceivedParameters, TransferRequest, TransferResponse,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    store: Arc<FileStore>,
}

/// Raw query parameters, before any defaulting. Everything is optional at
/// the wire level; the validator decides what is actually required.
#[derive(Debug, Deserialize)]
struct TransferParams {
    bank_code: Option<String>,
    branch_code: Option<String>,
    account_type: Option<String>,
    account_number: Option<String>,
    account_holder_kana: Option<String>,
    amount: Option<String>,
}

impl TransferParams {
    /// Non-numeric amounts coerce to 0, matching the reference deployment's
    /// integer cast.
    fn parsed_amount(&self) -> Option<u64> {
        self.amount
            .as_ref()
            .map(|v| v.trim().parse().unwrap_or(0))
    }

    fn received(&self) -> ReceivedParameters {
        ReceivedParameters {
            bank_code: self.bank_code.clone(),
            branch_code: self.branch_code.clone(),
            account_type: self.account_type.clone(),
            account_number: self.account_number.clone(),
            account_holder_kana: self.account_holder_kana.clone(),
            amount: self.parsed_amount(),
        }
    }

    fn to_request(&self) -> TransferRequest {
        TransferRequest {
            bank_code: self.bank_code.clone().unwrap_or_default(),
            branch_code: self.branch_code.clone().unwrap_or_default(),
            account_type: self.account_type.clone().unwrap_or_default(),
            account_number: self.account_number.clone().unwrap_or_default(),
            account_holder_kana: self.account_holder_kana.clone().unwrap_or_default(),
            amount: self.parsed_amount().unwrap_or(0),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "success": true, "version": zengin_gateway::VERSION }))
}

/// GET /api/transfer - Validate and format one transfer request
///
/// 200 with the formatted result on success; 400 with the error message on
/// any failure, including unavailable reference data. OPTIONS preflight is
/// answered by the CORS layer with no body.
async fn process_transfer(
    State(state): State<AppState>,
    Query(params): Query<TransferParams>,
) -> impl IntoResponse {
    let received = params.received();
    let request = params.to_request();

    match validate_and_format(state.store.as_ref(), &request) {
        Ok(result) => (
            StatusCode::OK,
            Json(TransferResponse::ok(received, result)),
        )
            .into_response(),
        Err(e) => {
            log::debug!("Request rejected: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(TransferResponse::failure(e.to_string(), received)),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    SimpleLogger::new().env().init().expect("logger init failed");

    println!("🏦 Zengin Gateway - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let data_dir = std::env::var("ZENGIN_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    if !std::path::Path::new(&data_dir).join("banks.json").exists() {
        // Not fatal: the store reports ReferenceDataUnavailable per request
        eprintln!("⚠ banks.json not found under {:?}", data_dir);
    }
    println!("✓ Reference data directory: {}", data_dir);

    let state = AppState {
        store: Arc::new(FileStore::new(data_dir)),
    };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/transfer", get(process_transfer))
        .with_state(state);

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    let addr = std::env::var("ZENGIN_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/transfer?bank_code=0001&branch_code=001&account_number=1234567", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
