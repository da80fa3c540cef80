//! 基础设施层：配置、数据库、日志

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod logger;
