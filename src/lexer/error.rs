//! Лексические ошибки
//!
//! Ошибки сканера не прерывают работу: они собираются в список и
//! возвращаются вместе с токенами.

use crate::lexer::token::Position;
use serde::Serialize;
use std::fmt;

/// Вид лексической ошибки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexErrorKind {
    /// Символ, который не начинает ни один токен
    InvalidCharacter,
    /// Строка без закрывающей кавычки
    UnclosedString,
    /// Многострочный комментарий без закрывающего `##`
    UnclosedComment,
}

/// Лексическая ошибка с позицией
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Начало ошибочной конструкции
    pub position: Position,
    /// Недопустимый символ (только для `InvalidCharacter`)
    pub character: Option<char>,
}

impl LexError {
    pub fn invalid_character(character: char, position: Position) -> Self {
        Self {
            kind: LexErrorKind::InvalidCharacter,
            position,
            character: Some(character),
        }
    }

    pub fn unclosed_string(position: Position) -> Self {
        Self {
            kind: LexErrorKind::UnclosedString,
            position,
            character: None,
        }
    }

    pub fn unclosed_comment(position: Position) -> Self {
        Self {
            kind: LexErrorKind::UnclosedComment,
            position,
            character: None,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::InvalidCharacter => write!(
                f,
                "invalid character '{}' at line {}, position {}.",
                self.character.unwrap_or('\u{FFFD}'),
                self.position.line,
                self.position.column
            ),
            LexErrorKind::UnclosedString => {
                write!(f, "unclosed string starting at line {}.", self.position.line)
            }
            LexErrorKind::UnclosedComment => {
                write!(f, "unclosed comment starting at line {}.", self.position.line)
            }
        }
    }
}

impl std::error::Error for LexError {}
