//! 核心层：统一错误、中间件和页面布局

pub mod error;
pub mod layout;
pub mod middleware;
