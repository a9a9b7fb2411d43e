//! 产品路由表

use axum::{routing::get, Router};

use super::handler;
use crate::app::router::AppState;

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_products))
        .route("/create", get(handler::create_form).post(handler::create_product))
        .route("/:id/details", get(handler::product_detail))
        .route(
            "/:id/update",
            get(handler::update_form).post(handler::update_product),
        )
        .route(
            "/:id/delete",
            get(handler::delete_confirm).post(handler::delete_product),
        )
}
