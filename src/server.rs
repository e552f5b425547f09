use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

use crate::{api, error::Result, types::PendingLogin};

pub fn router(state: Arc<Mutex<PendingLogin>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/token", post(api::token).layer(Extension(state)))
}

pub async fn start_api_server(listener: TcpListener, state: Arc<Mutex<PendingLogin>>) -> Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
