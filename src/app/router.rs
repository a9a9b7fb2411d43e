//! 应用路由与共享状态

use axum::{http::Uri, middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::product::{product_routes, ProductStore};
use crate::config::SiteConfig;
use crate::core::{error::CoreError, middleware::access_log};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, site: SiteConfig) -> Self {
        Self { store, site }
    }
}

/// 组装完整的应用路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(product_routes())
        .fallback(not_found)
        .layer(middleware::from_fn(access_log))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NoRoute(uri.path().to_string())
}
