//! Best-distance persistence
//!
//! The simulation tracks the best score itself; these stores only carry it
//! across sessions. Storage failures are logged and otherwise ignored.

use serde::{Deserialize, Serialize};

/// Persistence collaborator for the best score
pub trait BestStore {
    /// Stored best, 0 when missing or unreadable
    fn read_best(&self) -> u64;
    fn write_best(&mut self, best: u64);
}

/// In-memory store (tests, headless runs without a file)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub best: u64,
    /// Number of writes seen
    pub writes: usize,
}

impl MemoryStore {
    pub fn new(best: u64) -> Self {
        Self { best, writes: 0 }
    }
}

impl BestStore for MemoryStore {
    fn read_best(&self) -> u64 {
        self.best
    }

    fn write_best(&mut self, best: u64) {
        self.best = best;
        self.writes += 1;
    }
}

/// On-disk record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestRecord {
    pub best: u64,
}

/// JSON file store (native)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BestStore for JsonFileStore {
    fn read_best(&self) -> u64 {
        let Ok(json) = std::fs::read_to_string(&self.path) else {
            log::info!("No best score found, starting fresh");
            return 0;
        };
        match serde_json::from_str::<BestRecord>(&json) {
            Ok(record) => {
                log::info!("Loaded best score {}", record.best);
                record.best
            }
            Err(e) => {
                log::warn!("Ignoring unreadable best score {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn write_best(&mut self, best: u64) {
        let json = match serde_json::to_string(&BestRecord { best }) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not encode best score: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::warn!("Could not save best score to {}: {}", self.path.display(), e);
        }
    }
}

/// LocalStorage store (wasm); plain integer under `sk_best`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "sk_best";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestStore for LocalStorageStore {
    fn read_best(&self) -> u64 {
        Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    fn write_best(&mut self, best: u64) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(Self::STORAGE_KEY, &best.to_string()).is_err() {
                log::warn!("Could not save best score");
            }
        }
    }
}
