//! Интеграционные тесты sqlscan

pub mod common;
pub mod cli_tests;
pub mod scenario_tests;
