//! Лексический анализатор SQL для sqlscan
//!
//! Преобразует входной текст в последовательность токенов и список
//! лексических ошибок. Ошибки не прерывают разбор: недопустимый символ
//! пропускается, а незакрытые строка или комментарий забирают остаток текста.

use crate::lexer::cursor::Cursor;
use crate::lexer::error::LexError;
use crate::lexer::keywords::ReservedWords;
use crate::lexer::readers::{self, CharClass, ReadOutcome};
use crate::lexer::token::Token;
use log::{debug, trace, warn};
use serde::Serialize;

/// Результат полного прохода сканера
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanResult {
    /// Токены в порядке появления в тексте
    pub tokens: Vec<Token>,
    /// Ошибки в порядке обнаружения
    pub errors: Vec<LexError>,
    /// Сколько символов потреблено (всегда равно длине входа)
    pub consumed: usize,
}

impl ScanResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Лексический анализатор
pub struct Scanner<'a> {
    /// Курсор по исходному тексту
    cursor: Cursor,
    /// Таблица ключевых слов
    reserved: &'a ReservedWords,
    /// Распознанные токены
    tokens: Vec<Token>,
    /// Накопленные ошибки
    errors: Vec<LexError>,
}

impl Scanner<'static> {
    /// Создает сканер со стандартной таблицей ключевых слов
    pub fn new(source: &str) -> Self {
        Self::with_reserved_words(source, ReservedWords::standard())
    }
}

impl<'a> Scanner<'a> {
    /// Создает сканер с заданной таблицей ключевых слов
    pub fn with_reserved_words(source: &str, reserved: &'a ReservedWords) -> Self {
        Self {
            cursor: Cursor::new(source),
            reserved,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Разбирает весь текст
    pub fn tokenize(mut self) -> ScanResult {
        debug!("Начало сканирования: {} символов", self.cursor.len());

        while let Some(class) = readers::classify(&self.cursor) {
            let start = self.cursor.offset();
            let outcome = self.dispatch(class);
            let consumed = self.cursor.offset() - start;
            debug_assert!(consumed > 0, "читатель {:?} не продвинул курсор", class);

            match outcome {
                ReadOutcome::Token(token) => {
                    trace!("{} ({} симв.)", token, consumed);
                    self.tokens.push(token);
                }
                ReadOutcome::Skipped => {}
                ReadOutcome::Failed(error) => {
                    warn!("{}", error);
                    self.errors.push(error);
                }
            }
        }

        debug!(
            "Сканирование завершено: {} токенов, {} ошибок",
            self.tokens.len(),
            self.errors.len()
        );

        ScanResult {
            tokens: self.tokens,
            errors: self.errors,
            consumed: self.cursor.offset(),
        }
    }

    /// Вызывает читатель, отвечающий за класс конструкции
    fn dispatch(&mut self, class: CharClass) -> ReadOutcome {
        let cursor = &mut self.cursor;
        match class {
            CharClass::Whitespace => readers::skip_whitespace(cursor),
            CharClass::LineComment => readers::skip_line_comment(cursor),
            CharClass::BlockComment => readers::skip_block_comment(cursor),
            CharClass::Letter => readers::read_identifier_or_keyword(cursor, self.reserved),
            CharClass::Digit => readers::read_number(cursor),
            CharClass::Quote => readers::read_string(cursor),
            CharClass::Symbol(token_type, length) => {
                readers::read_operator(cursor, token_type, length)
            }
            CharClass::Invalid(ch) => readers::read_invalid(cursor, ch),
        }
    }
}

/// Разбирает текст стандартным сканером
pub fn tokenize(source: &str) -> ScanResult {
    Scanner::new(source).tokenize()
}
