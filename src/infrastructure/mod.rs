//! 基础设施层：数据库和日志

#[cfg(feature = "database")]
pub mod database;
pub mod logger;
