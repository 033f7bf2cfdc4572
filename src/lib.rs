//! sqlscan - лексический анализатор SQL-подобного языка
//!
//! Ядро библиотеки - [`lexer::Scanner`]: он превращает исходный текст в
//! последовательность токенов и список лексических ошибок. Остальные модули
//! (конфигурация, отчеты, CLI) только обслуживают вызов сканера.
//!
//! ```
//! use sqlscan::lexer::{tokenize, TokenType};
//!
//! let result = tokenize("SELECT name FROM users;");
//! assert!(result.errors.is_empty());
//! assert_eq!(result.tokens[0].token_type, TokenType::Select);
//! ```

pub mod cli;
pub mod common;
pub mod lexer;
pub mod report;

pub use common::error::{Error, Result};
pub use lexer::{tokenize, LexError, ScanResult, Scanner, Token, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
