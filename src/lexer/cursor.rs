//! Курсор по исходному тексту
//!
//! Единственное место, где меняются строка и колонка: все читатели двигаются
//! по тексту только через [`Cursor::advance`].

use crate::lexer::token::Position;

/// Курсор с отслеживанием позиции
#[derive(Debug, Clone)]
pub struct Cursor {
    /// Исходный текст
    input: Vec<char>,
    /// Позиция следующего непрочитанного символа
    position: Position,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            position: Position::start(),
        }
    }

    /// Символ на расстоянии `offset` от текущей позиции, `None` за концом текста
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position.offset + offset).copied()
    }

    /// Текущий символ
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Проверяет, что следующие символы совпадают с `pattern`
    pub fn starts_with(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek(i) == Some(expected))
    }

    /// Потребляет один символ и обновляет строку/колонку
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.position.offset += 1;

        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        Some(ch)
    }

    /// Потребляет символы, пока выполняется условие
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let start = self.position.offset;
        while self.current().is_some_and(&predicate) {
            self.advance();
        }
        self.position.offset - start
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.input.len()
    }

    /// Длина исходного текста в символах
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Текст от `start` до текущей позиции
    pub fn slice_from(&self, start: usize) -> String {
        self.input[start..self.position.offset].iter().collect()
    }
}
