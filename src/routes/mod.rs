use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use contact_desk_contact::ContactStore;
use contact_desk_notification::Notifier;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

mod api_contact;
mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub store: ContactStore,
    pub notifier: Notifier,
}

pub fn router(app_state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/contact", post(contact::action))
        .route("/api/contact", post(api_contact::action))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
