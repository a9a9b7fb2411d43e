//! 产品请求处理器
//!
//! 写操作成功后重定向到列表页；表单校验失败时以 200 重新渲染表单。

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequestParts, Path, State},
    http::request::Parts,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{debug, info};

use super::form::{FormErrors, ProductForm};
use super::view;
use crate::app::router::AppState;
use crate::core::error::CoreError;

/// 路径中的产品 id，只接受十进制数字，其余视为未匹配的路由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(Path(raw)) = Path::<String>::from_request_parts(parts, state).await else {
            return Err(no_route(parts));
        };
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(no_route(parts));
        }
        raw.parse::<i64>().map(ProductId).map_err(|_| no_route(parts))
    }
}

fn no_route(parts: &Parts) -> CoreError {
    CoreError::NoRoute(parts.uri.path().to_string())
}

fn render(markup: maud::Markup) -> Response {
    Html(markup.into_string()).into_response()
}

fn to_list() -> Response {
    Redirect::to("/").into_response()
}

pub async fn list_products(State(state): State<AppState>) -> Result<Response, CoreError> {
    let products = state.store.list_all().await?;
    Ok(render(view::list_page(&state.site.name, &products)))
}

pub async fn product_detail(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Response, CoreError> {
    let product = state.store.get(id).await?;
    let products = state.store.list_all().await?;
    Ok(render(view::detail_page(&product, &products)))
}

pub async fn create_form() -> Response {
    render(view::create_page(
        &ProductForm::default(),
        &FormErrors::default(),
    ))
}

pub async fn create_product(
    State(state): State<AppState>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Response, CoreError> {
    let Form(form) = form?;
    let fields = match form.clean() {
        Ok(fields) => fields,
        Err(errors) => {
            debug!("Rejected product form: {}", errors);
            return Ok(render(view::create_page(&form, &errors)));
        }
    };

    let product = state.store.create(fields).await?;
    info!("Created product: {} ({})", product.name, product.id);

    Ok(to_list())
}

pub async fn update_form(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Response, CoreError> {
    let product = state.store.get(id).await?;
    Ok(render(view::update_page(
        id,
        &ProductForm::from(&product),
        &FormErrors::default(),
    )))
}

pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Response, CoreError> {
    // 先确认产品存在，未知 id 不做校验直接 404
    state.store.get(id).await?;
    let Form(form) = form?;

    let fields = match form.clean() {
        Ok(fields) => fields,
        Err(errors) => {
            debug!("Rejected update of product {}: {}", id, errors);
            return Ok(render(view::update_page(id, &form, &errors)));
        }
    };

    let product = state.store.update(id, fields).await?;
    info!("Updated product: {} ({})", product.name, product.id);

    Ok(to_list())
}

pub async fn delete_confirm(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Response, CoreError> {
    let product = state.store.get(id).await?;
    Ok(render(view::delete_page(&product)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Response, CoreError> {
    state.store.delete(id).await?;
    info!("Deleted product {}", id);

    Ok(to_list())
}
