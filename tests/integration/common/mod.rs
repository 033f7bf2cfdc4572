//! Общие утилиты для интеграционных тестов

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Временная директория с исходными файлами для тестов
pub struct TestWorkspace {
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Не удалось создать временную директорию"),
        }
    }

    /// Создает файл с заданным содержимым
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Не удалось записать файл");
        path
    }

    /// Запускает собранный бинарник из временной директории
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_sqlscan"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("SQLSCAN_FORMAT")
            .env_remove("SQLSCAN_STRICT")
            .env_remove("SQLSCAN_SHOW_SOURCE")
            .env_remove("SQLSCAN_SHOW_SYMBOLS")
            .env_remove("SQLSCAN_LOG_LEVEL")
            .output()
            .expect("Не удалось запустить sqlscan")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
