use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use atrium_api::{AppState, AppStateInner, invitations, members, workspaces};
use atrium_directory::Directory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atrium=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("ATRIUM_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("ATRIUM_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Shared state: one directory instance owns all workspace relations.
    let state: AppState = Arc::new(AppStateInner {
        directory: Directory::new(),
    });

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Atrium server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/workspaces", post(workspaces::create_workspace))
        .route("/workspaces/{workspace_id}", delete(workspaces::delete_workspace))
        .route(
            "/workspaces/{workspace_id}/invitations",
            post(invitations::invite_user),
        )
        .route(
            "/workspaces/{workspace_id}/members/{user_id}",
            delete(members::remove_member),
        )
        .route("/my/workspaces", get(workspaces::list_my_workspaces))
        .route(
            "/my/workspaces/{workspace_id}/switch",
            post(workspaces::switch_active_workspace),
        )
        .with_state(state);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Atrium workspace directory" }))
}
