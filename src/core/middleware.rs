//! 核心中间件模块

use axum::{
    extract::Request,
    http::header::LOCATION,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// 访问日志
///
/// 以结构化字段记录方法、路径、状态码和耗时；重定向额外记录目标地址，5xx 用 warn。
pub async fn access_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let code = status.as_u16();

    if status.is_server_error() {
        warn!(%method, %path, status = code, elapsed_ms, "request failed");
    } else if status.is_redirection() {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        info!(%method, %path, status = code, elapsed_ms, location, "request redirected");
    } else {
        info!(%method, %path, status = code, elapsed_ms, "request handled");
    }

    response
}
