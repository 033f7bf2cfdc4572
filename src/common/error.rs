//! Обработка ошибок для sqlscan
//!
//! Лексические ошибки сюда не попадают: сканер собирает их списком
//! (см. [`crate::lexer::LexError`]). Здесь ошибки оболочки: чтение файлов,
//! конфигурация, вывод отчета.

use thiserror::Error;

/// Основной тип ошибки для sqlscan
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Исходный файл не найден
    #[error("File '{path}' not found.")]
    FileNotFound { path: String },

    /// Ошибка сериализации отчета
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка разбора конфигурационного файла
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Строгий режим: в тексте найдены лексические ошибки
    #[error("{count} lexical error(s) found")]
    Lexical { count: usize },
}

/// Тип результата для sqlscan
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку отсутствующего файла
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку строгого режима
    pub fn lexical(count: usize) -> Self {
        Self::Lexical { count }
    }
}
