//! Таблица зарезервированных слов
//!
//! Таблица строится один раз на процесс и дальше только читается, поэтому
//! любое количество сканеров может пользоваться ею одновременно.

use crate::lexer::token::TokenType;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref STANDARD: ReservedWords = ReservedWords::from_entries(&[
        // DML
        ("SELECT", TokenType::Select),
        ("FROM", TokenType::From),
        ("WHERE", TokenType::Where),
        ("INSERT", TokenType::Insert),
        ("INTO", TokenType::Into),
        ("VALUES", TokenType::Values),
        ("UPDATE", TokenType::Update),
        ("SET", TokenType::Set),
        ("DELETE", TokenType::Delete),
        // DDL
        ("CREATE", TokenType::Create),
        ("TABLE", TokenType::Table),
        // Типы данных
        ("INT", TokenType::Int),
        ("FLOAT", TokenType::Float),
        ("TEXT", TokenType::Text),
        // Логические операторы
        ("AND", TokenType::And),
        ("OR", TokenType::Or),
        ("NOT", TokenType::Not),
    ]);
}

/// Набор зарезервированных слов с регистрозависимым поиском
#[derive(Debug, Clone)]
pub struct ReservedWords {
    words: HashMap<&'static str, TokenType>,
}

impl ReservedWords {
    /// Стандартный набор ключевых слов языка
    pub fn standard() -> &'static ReservedWords {
        &STANDARD
    }

    /// Создает набор из пар (написание, тип токена)
    pub fn from_entries(entries: &[(&'static str, TokenType)]) -> Self {
        Self {
            words: entries.iter().copied().collect(),
        }
    }

    /// Ищет слово целиком, с точным совпадением регистра
    pub fn lookup(&self, word: &str) -> Option<TokenType> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Все слова в алфавитном порядке
    pub fn sorted(&self) -> Vec<(&'static str, TokenType)> {
        let mut entries: Vec<_> = self.words.iter().map(|(w, t)| (*w, *t)).collect();
        entries.sort_by_key(|(word, _)| *word);
        entries
    }
}
