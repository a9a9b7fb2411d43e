//! # 产品目录 Web 应用
//!
//! 一个服务端渲染的产品目录，提供产品的列表、详情、创建、更新和删除：
//! - `app`: 应用层，产品的模型、表单校验、存储、处理器、页面和路由
//! - `core`: 核心层，统一错误、请求日志中间件、页面布局
//! - `infrastructure`: 基础设施层，数据库连接池和日志初始化
//! - `config`: 配置加载与校验

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::product::{MemoryProductStore, NewProduct, Product, ProductStore};
pub use app::router::{build_router, AppState};
pub use config::Config;
pub use core::error::CoreError;
