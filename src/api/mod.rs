use axum::{
    Router,
    http::HeaderValue,
    middleware,
    response::Html,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AppearanceService, EpisodeService, GuestService, SeaOrmAppearanceService,
    SeaOrmEpisodeService, SeaOrmGuestService,
};

mod appearances;
pub mod episodes;
mod error;
pub mod guests;
mod observability;
mod types;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub episode_service: Arc<dyn EpisodeService>,

    pub guest_service: Arc<dyn GuestService>,

    pub appearance_service: Arc<dyn AppearanceService>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

pub fn create_app_state(
    config: Config,
    store: Store,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        config: Arc::new(config),
        episode_service: Arc::new(SeaOrmEpisodeService::new(store.clone())),
        guest_service: Arc::new(SeaOrmGuestService::new(store.clone())),
        appearance_service: Arc::new(SeaOrmAppearanceService::new(store)),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(create_app_state(config, store, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(index))
        .route("/episodes", get(episodes::list_episodes))
        .route(
            "/episodes/{id}",
            get(episodes::get_episode).delete(episodes::delete_episode),
        )
        .route("/guests", get(guests::list_guests))
        .route("/guests/{id}", get(guests::get_guest))
        .route("/appearances", post(appearances::create_appearance))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_metrics))
}

async fn index() -> Html<&'static str> {
    Html("<h1>Late Show API</h1>")
}
