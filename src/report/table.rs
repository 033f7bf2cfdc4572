//! Текстовые таблицы отчета

use crate::common::ReportConfig;
use crate::lexer::{LexError, Token};
use crate::report::symbols::SymbolTable;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;
const SOURCE_RULE_WIDTH: usize = 60;
const NUMBER_WIDTH: usize = 10;

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))
}

/// Печатает имя файла и исходный текст
pub fn write_source<W: Write>(out: &mut W, path: &str, source: &str) -> io::Result<()> {
    writeln!(out, "Analyzing file: {}", path)?;
    writeln!(out, "{}", rule('=', SOURCE_RULE_WIDTH))?;
    writeln!(out, "Source Code:")?;
    writeln!(out, "{}", rule('=', SOURCE_RULE_WIDTH))?;
    writeln!(out, "{}", source)?;
    writeln!(out)
}

/// Печатает таблицу токенов
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], config: &ReportConfig) -> io::Result<()> {
    let (tw, lw, nw) = (config.type_width, config.lexeme_width, NUMBER_WIDTH);

    write_header(out, "TOKENS")?;
    writeln!(out, "{:<tw$} {:<lw$} {:<nw$} {:<nw$}", "TYPE", "LEXEME", "LINE", "COLUMN")?;
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    for token in tokens {
        writeln!(
            out,
            "{:<tw$} {:<lw$} {:<nw$} {:<nw$}",
            token.token_type.name(),
            token.value,
            token.position.line,
            token.position.column
        )?;
    }
    writeln!(out, "{}", rule('=', RULE_WIDTH))
}

/// Печатает таблицу символов; пустая таблица не печатается
pub fn write_symbols<W: Write>(out: &mut W, symbols: &SymbolTable, config: &ReportConfig) -> io::Result<()> {
    if symbols.is_empty() {
        return Ok(());
    }

    let (tw, lw, nw) = (config.type_width, config.lexeme_width, NUMBER_WIDTH);

    write_header(out, "SYMBOL TABLE")?;
    writeln!(out, "{:<lw$} {:<tw$} {:<nw$} {:<nw$}", "NAME", "TYPE", "LINE", "COLUMN")?;
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    for symbol in symbols.iter() {
        writeln!(
            out,
            "{:<lw$} {:<tw$} {:<nw$} {:<nw$}",
            symbol.name,
            symbol.symbol_type.name(),
            symbol.position.line,
            symbol.position.column
        )?;
    }
    writeln!(out, "{}", rule('=', RULE_WIDTH))
}

/// Печатает пронумерованный список ошибок; без ошибок ничего не печатается
pub fn write_errors<W: Write>(out: &mut W, errors: &[LexError]) -> io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    write_header(out, "ERRORS")?;
    for (i, error) in errors.iter().enumerate() {
        writeln!(out, "{}. Error: {}", i + 1, error)?;
    }
    writeln!(out, "{}", rule('=', RULE_WIDTH))
}
