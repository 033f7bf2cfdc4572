//! Конфигурация для sqlscan
//!
//! Настройки касаются только вывода отчета: сканер конфигурации не имеет.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Формат вывода отчета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Текстовые таблицы
    #[default]
    Table,
    /// JSON документ
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}", s)),
        }
    }
}

/// Допустимые уровни логирования
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Конфигурация отчета
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Формат вывода
    pub format: OutputFormat,
    /// Печатать исходный текст перед таблицами
    pub show_source: bool,
    /// Печатать таблицу символов
    pub show_symbols: bool,
    /// Завершаться с ошибкой при лексических ошибках
    pub strict: bool,
    /// Уровень логирования
    pub log_level: String,
    /// Ширина колонки TYPE
    pub type_width: usize,
    /// Ширина колонки LEXEME
    pub lexeme_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_source: true,
            show_symbols: true,
            strict: false,
            log_level: "warn".to_string(),
            type_width: 20,
            lexeme_width: 25,
        }
    }
}

/// Явно заданные настройки из окружения или аргументов командной строки
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub format: Option<OutputFormat>,
    pub show_source: Option<bool>,
    pub show_symbols: Option<bool>,
    pub strict: Option<bool>,
    pub log_level: Option<String>,
}

impl ReportConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ReportConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Читает переменные окружения `SQLSCAN_*`
    pub fn from_env() -> Result<ConfigOverrides> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Собирает только те поля, для которых переменная задана
    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<ConfigOverrides> {
        let mut overrides = ConfigOverrides::default();

        if let Some(format) = var("SQLSCAN_FORMAT") {
            overrides.format = Some(format.parse().map_err(Error::configuration)?);
        }

        overrides.log_level = var("SQLSCAN_LOG_LEVEL");

        if let Some(strict) = var("SQLSCAN_STRICT") {
            overrides.strict = Some(parse_flag("SQLSCAN_STRICT", &strict)?);
        }

        if let Some(show) = var("SQLSCAN_SHOW_SOURCE") {
            overrides.show_source = Some(parse_flag("SQLSCAN_SHOW_SOURCE", &show)?);
        }

        if let Some(show) = var("SQLSCAN_SHOW_SYMBOLS") {
            overrides.show_symbols = Some(parse_flag("SQLSCAN_SHOW_SYMBOLS", &show)?);
        }

        Ok(overrides)
    }

    /// Применяет заданные поля `overrides`, даже если они совпадают со значениями по умолчанию
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(show) = overrides.show_source {
            self.show_source = show;
        }
        if let Some(show) = overrides.show_symbols {
            self.show_symbols = show;
        }
        if let Some(strict) = overrides.strict {
            self.strict = strict;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }

        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.type_width < 8 {
            return Err(Error::configuration("type_width must be at least 8"));
        }

        if self.lexeme_width < 8 {
            return Err(Error::configuration("lexeme_width must be at least 8"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }

        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::configuration(format!(
            "{} expects a boolean, got '{}'",
            name, value
        ))),
    }
}
