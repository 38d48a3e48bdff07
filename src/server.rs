use crate::routes::assets::get_static_asset;
use crate::routes::notes::create::route_create;
use crate::routes::notes::delete::route_delete;
use crate::routes::notes::list::route_notes;
use crate::state::AppState;
use crate::templates::handle_not_found;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

pub fn build_router(state: AppState) -> Router {
    // Create session store
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        .route("/", get(route_notes).post(route_create))
        .route("/note/:id/delete", post(route_delete))
        .route("/static/*path", get(get_static_asset))
        .fallback(handle_not_found)
        .layer(CompressionLayer::new())
        .layer(session_layer)
        .with_state(state)
}

#[tokio::main]
pub async fn serve(api_scheme: &str, api_host: &str, api_port: &u16, host: &str, port: &str) {
    let api_addr = format!("{api_scheme}://{api_host}:{api_port}");
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    let app = build_router(AppState { api_addr });

    // Do it!
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("Unable to serve application. Error: {:#}", e));
}
