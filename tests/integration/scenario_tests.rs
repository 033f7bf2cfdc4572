//! Сценарии разбора через публичный API

use sqlscan::lexer::{tokenize, LexErrorKind, TokenType};
use sqlscan::report::SymbolTable;

#[test]
fn test_invalid_character_scenario() {
    let result = tokenize("SELECT @id FROM users;");

    let summary: Vec<_> = result
        .tokens
        .iter()
        .map(|t| (t.token_type, t.value.as_str(), t.position.line, t.position.column))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenType::Select, "SELECT", 1, 1),
            (TokenType::Identifier, "id", 1, 9),
            (TokenType::From, "FROM", 1, 12),
            (TokenType::Identifier, "users", 1, 17),
            (TokenType::Semicolon, ";", 1, 22),
        ]
    );
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].to_string(),
        "invalid character '@' at line 1, position 8."
    );
}

#[test]
fn test_unclosed_string_scenario() {
    let result = tokenize("INSERT INTO test VALUES ('Ali;");

    assert_eq!(result.tokens.len(), 5);
    assert_eq!(result.tokens[4].token_type, TokenType::LeftParen);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, LexErrorKind::UnclosedString);
    assert_eq!(result.errors[0].line(), 1);
    assert_eq!(result.errors[0].column(), 26);
}

#[test]
fn test_unclosed_comment_scenario() {
    let result = tokenize("SELECT * FROM users; ## this comment never closes");

    assert_eq!(result.tokens.len(), 5);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].to_string(),
        "unclosed comment starting at line 1."
    );
}

#[test]
fn test_multi_statement_script() {
    let sql = "-- схема\n\
               CREATE TABLE users (id INT, name TEXT);\n\
               ## заполнение\n   данными ##\n\
               INSERT INTO users VALUES (1, 'Hello World!');\n\
               SELECT name FROM users WHERE id >= 1;\n";

    let result = tokenize(sql);
    assert!(result.errors.is_empty(), "ошибки: {:?}", result.errors);
    assert_eq!(result.consumed, sql.chars().count());

    let string = result
        .tokens
        .iter()
        .find(|t| t.token_type == TokenType::StringLiteral)
        .unwrap();
    assert_eq!(string.value, "'Hello World!'");
    assert_eq!(string.position.line, 5);

    let select = result
        .tokens
        .iter()
        .find(|t| t.token_type == TokenType::Select)
        .unwrap();
    assert_eq!((select.position.line, select.position.column), (6, 1));

    let symbols = SymbolTable::from_tokens(&result.tokens);
    let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["users", "id", "name"]);
}

#[test]
fn test_scanners_share_reserved_words_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let sql = format!("SELECT c{} FROM t WHERE c{} = {};", i, i, i);
                tokenize(&sql)
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(result.tokens[0].token_type, TokenType::Select);
        assert_eq!(result.tokens.len(), 9);
    }
}
