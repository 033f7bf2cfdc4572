//! Таблица символов
//!
//! Строится по готовым токенам: первое вхождение каждого идентификатора,
//! в порядке появления в тексте.

use crate::lexer::{Position, Token, TokenType};
use indexmap::IndexMap;
use serde::Serialize;

/// Запись таблицы символов
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    pub symbol_type: TokenType,
    /// Позиция первого вхождения
    pub position: Position,
}

/// Таблица символов
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Собирает таблицу из токенов
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Добавляет идентификатор, если он встретился впервые
    pub fn record(&mut self, token: &Token) {
        if token.token_type != TokenType::Identifier {
            return;
        }

        self.symbols
            .entry(token.value.clone())
            .or_insert_with(|| Symbol {
                name: token.value.clone(),
                symbol_type: token.token_type,
                position: token.position,
            });
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_first_occurrence_wins() {
        let result = tokenize("SELECT name FROM users\nWHERE name = 'x' AND age > 1");
        let table = SymbolTable::from_tokens(&result.tokens);

        assert_eq!(table.len(), 3);
        let name = table.get("name").unwrap();
        assert_eq!(name.position, Position::new(1, 8, 7));
        assert_eq!(name.symbol_type, TokenType::Identifier);

        let names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["name", "users", "age"]);
    }

    #[test]
    fn test_keywords_and_literals_skipped() {
        let result = tokenize("SELECT 'users' 42 FLOAT");
        let table = SymbolTable::from_tokens(&result.tokens);
        assert!(table.is_empty());
    }

    #[test]
    fn test_case_distinguishes_symbols() {
        let result = tokenize("Users users");
        let table = SymbolTable::from_tokens(&result.tokens);
        assert_eq!(table.len(), 2);
    }
}
