use std::{net::SocketAddr, str::FromStr};

use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    Res, api,
    chart::ChartFetcher,
    config::Settings,
    management::{SessionManager, session_key},
    spotify::Catalog,
};

/// Shared state of the HTTP service.
#[derive(Clone)]
pub struct AppState {
    pub charts: ChartFetcher,
    pub catalog: Catalog,
    pub sessions: SessionManager,
    key: Key,
}

impl AppState {
    pub fn new(settings: &Settings) -> Res<Self> {
        Ok(Self {
            charts: ChartFetcher::new(&settings.chart_url, settings.http_timeout)?,
            catalog: Catalog::new(settings)?,
            sessions: SessionManager::new(),
            key: session_key(&settings.session_secret),
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/auth", get(api::auth))
        .route("/callback", get(api::callback))
        .route("/api/charts", get(api::charts))
        .route("/api/create_playlist", post(api::create_playlist))
        .route("/api/status", get(api::status))
        .route("/api/search_track", get(api::search_track))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_api_server(settings: Settings) -> Res<()> {
    let addr = SocketAddr::from_str(&settings.server_addr)
        .map_err(|e| format!("invalid server address {}: {}", settings.server_addr, e))?;

    let app = router(AppState::new(&settings)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "chartbridge service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
