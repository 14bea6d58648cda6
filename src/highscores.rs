//! High score persistence
//!
//! A single integer under a fixed key, written whenever it improves.

use crate::persistence::KeyValueStore;

/// Storage key, identical across sessions
pub const HIGH_SCORE_KEY: &str = "endless_road_high_score";

/// Read the persisted high score (0 when absent or negative)
pub fn load_high_score(store: &dyn KeyValueStore) -> i64 {
    match store.get(HIGH_SCORE_KEY) {
        Some(score) if score >= 0 => {
            log::info!("Loaded high score {}", score);
            score
        }
        Some(score) => {
            log::warn!("Ignoring invalid stored high score {}", score);
            0
        }
        None => {
            log::info!("No high score found, starting fresh");
            0
        }
    }
}

/// Write through a new high score
pub fn save_high_score(store: &mut dyn KeyValueStore, score: i64) {
    store.set(HIGH_SCORE_KEY, score);
    log::debug!("High score saved ({})", score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_absent_is_zero() {
        assert_eq!(load_high_score(&MemoryStore::new()), 0);
    }

    #[test]
    fn test_negative_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, -5);
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save_high_score(&mut store, 812);
        assert_eq!(load_high_score(&store), 812);
    }
}
