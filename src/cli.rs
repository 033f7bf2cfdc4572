//! CLI интерфейс для sqlscan
//!
//! Читает файл целиком, передает текст сканеру и печатает отчет.

use crate::common::{ConfigOverrides, Error, OutputFormat, ReportConfig, Result};
use crate::lexer::{tokenize, ReservedWords};
use crate::report;
use clap::{Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Конфигурационный файл, который ищется в текущей директории
const DEFAULT_CONFIG_FILE: &str = "sqlscan.toml";

/// sqlscan - лексический анализатор SQL-подобного языка
#[derive(Parser, Debug)]
#[command(name = "sqlscan")]
#[command(about = "sqlscan - A lexical analyzer for a small SQL-like language")]
#[command(version = crate::VERSION)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Разобрать файл и напечатать токены, символы и ошибки
    Scan {
        /// Путь к исходному файлу
        path: PathBuf,

        /// Формат вывода
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Не печатать исходный текст
        #[arg(long)]
        no_source: bool,

        /// Не печатать таблицу символов
        #[arg(long)]
        no_symbols: bool,

        /// Завершаться с ошибкой, если найдены лексические ошибки
        #[arg(long)]
        strict: bool,
    },

    /// Показать зарезервированные слова
    Keywords,
}

impl Cli {
    /// Загружает конфигурацию с учетом переменных окружения `SQLSCAN_*`
    pub fn load_config(&self) -> Result<ReportConfig> {
        self.resolve_config(ReportConfig::from_env()?)
    }

    /// Собирает конфигурацию по слоям: файл, затем `env`, затем аргументы.
    /// Каждый следующий слой меняет только явно заданные в нем поля.
    fn resolve_config(&self, env: ConfigOverrides) -> Result<ReportConfig> {
        let config = match &self.config {
            Some(path) => ReportConfig::from_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    ReportConfig::from_file(path)?
                } else {
                    ReportConfig::default()
                }
            }
        };

        let config = config.merge(env).merge(self.flag_overrides());
        config.validate()?;
        Ok(config)
    }

    /// Настройки, явно переданные в командной строке
    fn flag_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            log_level: self.log_level.clone(),
            ..ConfigOverrides::default()
        };

        if let Commands::Scan {
            format,
            no_source,
            no_symbols,
            strict,
            ..
        } = &self.command
        {
            overrides.format = *format;
            overrides.show_source = no_source.then_some(false);
            overrides.show_symbols = no_symbols.then_some(false);
            overrides.strict = strict.then_some(true);
        }

        overrides
    }

    /// Выполняет команду
    pub fn execute<W: Write>(&self, config: &ReportConfig, out: &mut W) -> Result<()> {
        match &self.command {
            Commands::Scan { path, .. } => scan_file(path, config, out),
            Commands::Keywords => list_keywords(out),
        }
    }
}

/// Разбирает файл и печатает отчет
pub fn scan_file<W: Write>(path: &Path, config: &ReportConfig, out: &mut W) -> Result<()> {
    let display = path.display().to_string();
    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::file_not_found(&display),
        _ => Error::Io(e),
    })?;

    info!("Разбор файла {} ({} байт)", display, source.len());
    let result = tokenize(&source);
    report::render(out, &display, &source, &result, config)?;

    if config.strict && result.has_errors() {
        return Err(Error::lexical(result.errors.len()));
    }

    Ok(())
}

/// Печатает таблицу зарезервированных слов
fn list_keywords<W: Write>(out: &mut W) -> Result<()> {
    let words = ReservedWords::standard();
    writeln!(out, "Reserved words ({}):", words.len())?;
    for (word, token_type) in words.sorted() {
        writeln!(out, "  {:<10} {:?}", word, token_type)?;
    }
    Ok(())
}
