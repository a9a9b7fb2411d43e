//! 产品目录服务器

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use catalog::app::product::{seed_if_empty, MemoryProductStore, ProductStore};
use catalog::config::{load_config, Config};
use catalog::infrastructure::logger::Logger;
use catalog::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    // 文件日志的 guard 需要存活到进程结束
    let _log_guard = Logger::init(&config.logging)?;

    info!("启动产品目录服务器...");

    let store = open_store(&config).await?;
    if config.database.seed {
        seed_if_empty(store.as_ref()).await?;
    }

    let app = build_router(AppState::new(store, config.site.clone()));

    let addr = config.http.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 可用的路由:");
    info!("   GET       /             - 产品列表");
    info!("   GET       /:id/details  - 产品详情");
    info!("   GET/POST  /create       - 创建产品");
    info!("   GET/POST  /:id/update   - 更新产品");
    info!("   GET/POST  /:id/delete   - 删除产品");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

#[cfg(feature = "database")]
async fn open_store(config: &Config) -> Result<Arc<dyn ProductStore>> {
    use catalog::infrastructure::database::DatabaseManager;

    let Some(url) = config.database.url.as_deref() else {
        info!("未配置数据库，使用内存存储");
        return Ok(Arc::new(MemoryProductStore::new()));
    };

    info!("Connecting to database: {}", redact(url));
    let manager = DatabaseManager::new(url, &config.database)
        .await
        .context("数据库连接失败")?;
    manager.migrate().await.context("数据库迁移失败")?;

    Ok(Arc::new(manager.into_store()))
}

#[cfg(not(feature = "database"))]
async fn open_store(config: &Config) -> Result<Arc<dyn ProductStore>> {
    if config.database.url.is_some() {
        warn!("未启用 database 特性，忽略数据库配置，使用内存存储");
    }
    Ok(Arc::new(MemoryProductStore::new()))
}

/// 隐藏连接串中的密码
#[cfg(feature = "database")]
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听关闭信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到关闭信号，正在停止...");
}
