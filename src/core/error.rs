//! 核心错误处理模块

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::layout;

/// 核心错误类型
///
/// 表单校验失败不属于这里：它会以 200 重新渲染表单，见 `FormErrors`。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 指定 id 的产品不存在
    #[error("product {0} not found")]
    NotFound(i64),
    /// 路由未匹配
    #[error("page not found: {0}")]
    NoRoute(String),
    /// 请求体不是可解析的表单
    #[error("bad form submission: {0}")]
    BadForm(#[from] FormRejection),
    /// 底层存储失败，对当前请求是致命的
    #[cfg(feature = "database")]
    #[error("store failure: {0}")]
    Store(#[from] sqlx::Error),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) | CoreError::NoRoute(_) => StatusCode::NOT_FOUND,
            CoreError::BadForm(rejection) => rejection.status(),
            #[cfg(feature = "database")]
            CoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match &self {
            CoreError::NotFound(id) => {
                layout::not_found_page(&format!("No product found with id {}.", id))
            }
            CoreError::NoRoute(path) => {
                layout::not_found_page(&format!("The page {} does not exist.", path))
            }
            CoreError::BadForm(rejection) => layout::bad_request_page(&rejection.body_text()),
            #[cfg(feature = "database")]
            CoreError::Store(e) => {
                tracing::error!("Store error: {}", e);
                layout::error_page()
            }
        };

        (status, Html(page.into_string())).into_response()
    }
}
