use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use doorstep_core::health::{healthz, readyz};
use doorstep_core::middleware::request_id_layer;

use crate::handlers::issue::request_verification;
use crate::handlers::verify::{check_verification, confirm_verification};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Verification tokens
        .route("/verify/request", post(request_verification))
        .route("/verify/email", post(check_verification))
        .route("/verify/email/confirm", post(confirm_verification))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
