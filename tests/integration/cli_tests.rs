//! Тесты бинарника sqlscan

use super::common::{stderr, stdout, TestWorkspace};

#[test]
fn test_scan_prints_all_sections() {
    let ws = TestWorkspace::new();
    ws.write("query.sql", "SELECT @id FROM users;\n");

    let output = ws.run(&["scan", "query.sql"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("Analyzing file: query.sql\n"));
    assert!(text.contains("Source Code:"));
    assert!(text.contains("TOKENS"));
    assert!(text.contains("SEMICOLON"));
    assert!(text.contains("SYMBOL TABLE"));
    assert!(text.contains("1. Error: invalid character '@' at line 1, position 8."));
}

#[test]
fn test_scan_json_output() {
    let ws = TestWorkspace::new();
    ws.write("query.sql", "SELECT x FROM t WHERE x <= 1.");

    let output = ws.run(&["scan", "query.sql", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let tokens = value["tokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[7]["token_type"], "INTEGER");
    assert_eq!(tokens[8]["token_type"], "DOT");
    assert!(value["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_strict_mode_fails_on_lexical_errors() {
    let ws = TestWorkspace::new();
    ws.write("bad.sql", "SELECT * FROM users; ## never closed");

    let relaxed = ws.run(&["scan", "bad.sql"]);
    assert!(relaxed.status.success());

    let strict = ws.run(&["scan", "bad.sql", "--strict", "--no-source"]);
    assert!(!strict.status.success());
    assert!(stdout(&strict).contains("1. Error: unclosed comment starting at line 1."));
    assert!(stderr(&strict).contains("1 lexical error(s) found"));
}

#[test]
fn test_missing_file_reported() {
    let ws = TestWorkspace::new();

    let output = ws.run(&["scan", "nope.sql"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: File 'nope.sql' not found."));
}

#[test]
fn test_config_file_in_working_directory() {
    let ws = TestWorkspace::new();
    ws.write("sqlscan.toml", "show_source = false\nshow_symbols = false\n");
    ws.write("query.sql", "SELECT name FROM users;");

    let output = ws.run(&["scan", "query.sql"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(!text.contains("Source Code:"));
    assert!(!text.contains("SYMBOL TABLE"));
    assert!(text.contains("TOKENS"));
}

#[test]
fn test_keywords_listing() {
    let ws = TestWorkspace::new();

    let output = ws.run(&["keywords"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for word in ["SELECT", "FROM", "WHERE", "INT", "FLOAT", "TEXT", "NOT"] {
        assert!(text.contains(word), "нет слова {}", word);
    }
}
