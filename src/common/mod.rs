//! Общие типы для sqlscan: ошибки и конфигурация

pub mod config;
pub mod error;

pub use config::{ConfigOverrides, OutputFormat, ReportConfig};
pub use error::{Error, Result};
