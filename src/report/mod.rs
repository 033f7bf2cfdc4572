//! Отчет по результатам сканирования
//!
//! Таблицы токенов, символов и ошибок в текстовом виде или одним JSON
//! документом. На работу сканера отчет не влияет.

pub mod symbols;
pub mod table;

pub use symbols::{Symbol, SymbolTable};

use crate::common::{OutputFormat, ReportConfig, Result};
use crate::lexer::{LexError, LexErrorKind, ScanResult, Token};
use serde::Serialize;
use std::io::Write;

/// Ошибка в JSON отчете
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEntry {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: usize,
    pub character: Option<char>,
    pub message: String,
}

impl From<&LexError> for ErrorEntry {
    fn from(error: &LexError) -> Self {
        Self {
            kind: error.kind,
            line: error.line(),
            column: error.column(),
            character: error.character,
            message: error.to_string(),
        }
    }
}

/// JSON отчет
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport<'a> {
    pub file: &'a str,
    pub tokens: &'a [Token],
    pub symbols: Vec<&'a Symbol>,
    pub errors: Vec<ErrorEntry>,
}

impl<'a> ScanReport<'a> {
    pub fn new(file: &'a str, result: &'a ScanResult, symbols: &'a SymbolTable) -> Self {
        Self {
            file,
            tokens: &result.tokens,
            symbols: symbols.iter().collect(),
            errors: result.errors.iter().map(ErrorEntry::from).collect(),
        }
    }
}

/// Печатает отчет в выбранном формате
pub fn render<W: Write>(
    out: &mut W,
    path: &str,
    source: &str,
    result: &ScanResult,
    config: &ReportConfig,
) -> Result<()> {
    let symbols = SymbolTable::from_tokens(&result.tokens);

    match config.format {
        OutputFormat::Table => {
            if config.show_source {
                table::write_source(out, path, source)?;
            }
            table::write_tokens(out, &result.tokens, config)?;
            if config.show_symbols {
                table::write_symbols(out, &symbols, config)?;
            }
            table::write_errors(out, &result.errors)?;
        }
        OutputFormat::Json => {
            let report = ScanReport::new(path, result, &symbols);
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
