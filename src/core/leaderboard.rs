//! Leaderboard - top-5 score buckets per grid size, persisted as one blob.
//!
//! The persisted payload is a record of three arrays keyed "3", "4", "5" of
//! `{score, moves, time, date}` entries. A corrupt or partial record (any
//! bucket missing, any field malformed) is discarded wholesale and play
//! continues with an empty leaderboard; persistence failures are logged and
//! never surface as game errors.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::collab::storage::Storage;
use crate::types::{GridSize, LEADERBOARD_CAP, LEADERBOARD_KEY};

/// One solved classic puzzle. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub moves: u32,
    /// Elapsed solve time in milliseconds.
    pub time: u64,
    /// Unix epoch milliseconds at solve time.
    pub date: u64,
}

type Bucket = ArrayVec<ScoreEntry, LEADERBOARD_CAP>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(rename = "3")]
    three: Bucket,
    #[serde(rename = "4")]
    four: Bucket,
    #[serde(rename = "5")]
    five: Bucket,
}

impl Leaderboard {
    pub fn bucket(&self, size: GridSize) -> &[ScoreEntry] {
        match size {
            GridSize::Three => &self.three,
            GridSize::Four => &self.four,
            GridSize::Five => &self.five,
        }
    }

    fn bucket_mut(&mut self, size: GridSize) -> &mut Bucket {
        match size {
            GridSize::Three => &mut self.three,
            GridSize::Four => &mut self.four,
            GridSize::Five => &mut self.five,
        }
    }

    /// Insert an entry, keeping the bucket sorted descending by score and
    /// capped at 5. Returns false if the entry did not make the cut.
    pub fn insert(&mut self, size: GridSize, entry: ScoreEntry) -> bool {
        let bucket = self.bucket_mut(size);
        let pos = bucket
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(bucket.len());

        if bucket.is_full() {
            if pos >= bucket.len() {
                return false;
            }
            bucket.pop();
        }
        bucket.insert(pos, entry);
        true
    }

    /// Read the leaderboard from storage, falling back to empty on any
    /// absent, corrupt, or partial record.
    pub fn load(storage: &dyn Storage) -> Self {
        let Some(raw) = storage.get(LEADERBOARD_KEY) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(board) => board,
            Err(e) => {
                log::warn!("discarding corrupt leaderboard record: {}", e);
                Self::default()
            }
        }
    }

    /// Persist the whole structure under the fixed key. Failures are logged
    /// and swallowed; the in-memory leaderboard stays authoritative.
    pub fn persist(&self, storage: &mut dyn Storage) {
        let payload = match serde_json::to_string(self) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("failed to serialize leaderboard: {}", e);
                return;
            }
        };
        if let Err(e) = storage.set(LEADERBOARD_KEY, &payload) {
            log::warn!("failed to persist leaderboard: {}", e);
        }
    }
}

/// Current time as Unix epoch milliseconds, 0 if the clock is unavailable.
pub fn epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::storage::MemoryStorage;

    fn entry(score: u32) -> ScoreEntry {
        ScoreEntry {
            score,
            moves: 10,
            time: 30_000,
            date: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_bucket_stays_sorted_and_capped() {
        let mut board = Leaderboard::default();
        for score in [100, 900, 300, 700, 500, 800, 50, 950] {
            board.insert(GridSize::Three, entry(score));
        }

        let bucket = board.bucket(GridSize::Three);
        assert_eq!(bucket.len(), LEADERBOARD_CAP);
        let scores: Vec<u32> = bucket.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![950, 900, 800, 700, 500]);
    }

    #[test]
    fn test_low_score_rejected_when_full() {
        let mut board = Leaderboard::default();
        for score in [500, 400, 300, 200, 100] {
            assert!(board.insert(GridSize::Four, entry(score)));
        }
        assert!(!board.insert(GridSize::Four, entry(50)));
        assert_eq!(board.bucket(GridSize::Four).len(), 5);
    }

    #[test]
    fn test_buckets_are_independent() {
        let mut board = Leaderboard::default();
        board.insert(GridSize::Three, entry(10));
        assert!(board.bucket(GridSize::Four).is_empty());
        assert!(board.bucket(GridSize::Five).is_empty());
    }

    #[test]
    fn test_storage_round_trip() {
        let mut board = Leaderboard::default();
        board.insert(GridSize::Five, entry(42_000));

        let mut storage = MemoryStorage::new();
        board.persist(&mut storage);

        let restored = Leaderboard::load(&storage);
        assert_eq!(restored, board);
    }

    #[test]
    fn test_absent_record_yields_empty_board() {
        let storage = MemoryStorage::new();
        let board = Leaderboard::load(&storage);
        assert_eq!(board, Leaderboard::default());
    }

    #[test]
    fn test_corrupt_record_yields_empty_board() {
        let mut storage = MemoryStorage::new();
        storage.set(LEADERBOARD_KEY, "{not json").unwrap();
        assert_eq!(Leaderboard::load(&storage), Leaderboard::default());
    }

    #[test]
    fn test_partial_record_missing_bucket_is_discarded() {
        let mut storage = MemoryStorage::new();
        storage.set(LEADERBOARD_KEY, r#"{"3":[],"4":[]}"#).unwrap();
        assert_eq!(Leaderboard::load(&storage), Leaderboard::default());
    }

    #[test]
    fn test_payload_field_names() {
        let mut board = Leaderboard::default();
        board.insert(GridSize::Three, entry(123));
        let json = serde_json::to_string(&board).unwrap();
        for key in ["\"3\"", "\"4\"", "\"5\"", "\"score\"", "\"moves\"", "\"time\"", "\"date\""] {
            assert!(json.contains(key), "missing {} in {}", key, json);
        }
    }
}
