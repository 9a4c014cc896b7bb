use crate::domain::model::Game;
use crate::domain::ports::GameStore;
use crate::utils::error::{LotteryError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "jogos.json";

/// 以單一 JSON 檔保存所有遊戲: `[{"numeros": [...]}, ...]`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl GameStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Game>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Store {} not found, starting empty", self.display_path());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(LotteryError::StorageReadError {
                    path: self.display_path(),
                    message: e.to_string(),
                })
            }
        };

        serde_json::from_slice(&data).map_err(|e| LotteryError::StorageReadError {
            path: self.display_path(),
            message: e.to_string(),
        })
    }

    fn save(&self, games: &[Game]) -> Result<()> {
        let to_write_error = |message: String| LotteryError::StorageWriteError {
            path: self.display_path(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| to_write_error(e.to_string()))?;
            }
        }

        let mut data = serde_json::to_vec(games).map_err(|e| to_write_error(e.to_string()))?;
        data.push(b'\n');
        fs::write(&self.path, data).map_err(|e| to_write_error(e.to_string()))?;

        tracing::debug!("Wrote {} games to {}", games.len(), self.display_path());
        Ok(())
    }
}
