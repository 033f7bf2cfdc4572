//! Лексический анализатор для SQL-подобного языка

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod readers;
pub mod scanner;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind};
pub use keywords::ReservedWords;
pub use scanner::{tokenize, ScanResult, Scanner};
pub use token::{Position, Token, TokenType};
