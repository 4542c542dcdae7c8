//! Persisted best-score record
//!
//! One integer, read once at startup and written at most once per run, on
//! entry to game over, only when strictly exceeded. Persisted to
//! LocalStorage on wasm; native builds keep it in memory only.

use serde::{Deserialize, Serialize};

/// Best score across runs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "skyflap_highscore";

    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run's score would replace the record
    pub fn beats(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a run's score. Returns true if the record changed.
    pub fn record(&mut self, score: u32) -> bool {
        if self.beats(score) {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load the record from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(record) = serde_json::from_str::<HighScore>(&json) {
                    log::info!("Loaded high score: {}", record.best);
                    return record;
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save the record to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved ({})", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
