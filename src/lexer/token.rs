//! Токены для SQL лексера sqlscan
//!
//! Определяет закрытый набор типов токенов, которые распознает сканер:
//! ключевые слова, идентификаторы, литералы, операторы и разделители.

use serde::{Serialize, Serializer};
use std::fmt;

/// Позиция в исходном тексте
///
/// `line` и `column` начинаются с 1, `offset` считается в символах с 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Токен с позицией и значением
///
/// `value` хранит лексему ровно в том виде, в каком она встретилась в тексте
/// (для строковых литералов вместе с кавычками).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>, position: Position) -> Self {
        Self {
            token_type,
            value: value.into(),
            position,
        }
    }

    /// Длина лексемы в символах
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.token_type, self.value, self.position)
    }
}

/// Типы токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // === Ключевые слова ===
    // DML
    Select,
    From,
    Where,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // DDL
    Create,
    Table,

    // Типы данных
    Int,
    Float,
    Text,

    // Логические операторы
    And,
    Or,
    Not,

    // === Идентификаторы и литералы ===
    /// Идентификатор (имя таблицы, колонки и т.п.)
    Identifier,

    /// Строковый литерал
    StringLiteral,

    /// Целое число
    IntegerLiteral,

    /// Число с плавающей точкой
    FloatLiteral,

    // === Операторы ===
    // Сравнения
    Equal,         // = или ==
    NotEqual,      // !=
    Less,          // <
    Greater,       // >
    LessEqual,     // <=
    GreaterEqual,  // >=

    // Арифметические
    Plus,          // +
    Minus,         // -
    Star,          // *
    Slash,         // /

    // === Разделители ===
    LeftParen,     // (
    RightParen,    // )
    Comma,         // ,
    Semicolon,     // ;
    Dot,           // .
}

impl TokenType {
    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Select
                | TokenType::From
                | TokenType::Where
                | TokenType::Insert
                | TokenType::Into
                | TokenType::Values
                | TokenType::Update
                | TokenType::Set
                | TokenType::Delete
                | TokenType::Create
                | TokenType::Table
                | TokenType::Int
                | TokenType::Float
                | TokenType::Text
                | TokenType::And
                | TokenType::Or
                | TokenType::Not
        )
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenType::StringLiteral | TokenType::IntegerLiteral | TokenType::FloatLiteral
        )
    }

    /// Проверяет, является ли токен оператором
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Equal
                | TokenType::NotEqual
                | TokenType::Less
                | TokenType::Greater
                | TokenType::LessEqual
                | TokenType::GreaterEqual
                | TokenType::Plus
                | TokenType::Minus
                | TokenType::Star
                | TokenType::Slash
        )
    }

    /// Проверяет, является ли токен разделителем
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenType::LeftParen
                | TokenType::RightParen
                | TokenType::Comma
                | TokenType::Semicolon
                | TokenType::Dot
        )
    }

    /// Имя типа токена для таблиц и отчетов
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Select => "SELECT",
            TokenType::From => "FROM",
            TokenType::Where => "WHERE",
            TokenType::Insert => "INSERT",
            TokenType::Into => "INTO",
            TokenType::Values => "VALUES",
            TokenType::Update => "UPDATE",
            TokenType::Set => "SET",
            TokenType::Delete => "DELETE",
            TokenType::Create => "CREATE",
            TokenType::Table => "TABLE",
            TokenType::Int => "INT",
            TokenType::Float => "FLOAT",
            TokenType::Text => "TEXT",
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::Not => "NOT",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::StringLiteral => "STRING",
            TokenType::IntegerLiteral => "INTEGER",
            TokenType::FloatLiteral => "FLOAT",
            TokenType::Equal => "EQUAL",
            TokenType::NotEqual => "NOT_EQUAL",
            TokenType::Less => "LESS",
            TokenType::Greater => "GREATER",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Star => "STAR",
            TokenType::Slash => "SLASH",
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::Comma => "COMMA",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Dot => "DOT",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
