//! Leaderboard Ranking
//!
//! `LeaderboardState` is the pure ranked list: always sorted by score
//! (descending), never longer than `MAX_ENTRIES`, ties kept in submission
//! order. `Leaderboard` binds a state to a store and persists every
//! submission.

use serde::Serialize;
use tracing::{info, warn};

use crate::core::hash::{short_hex, StateHash, StateHasher};
use crate::leaderboard::entry::LeaderboardEntry;
use crate::leaderboard::store::LeaderboardStore;

/// Maximum ranked entries kept.
pub const MAX_ENTRIES: usize = 10;

// =============================================================================
// STATE
// =============================================================================

/// Ranked top-N list.
///
/// Serialises as a bare array; build from stored data with `from_entries`
/// so the ranking invariant holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LeaderboardState {
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardState {
    /// Empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank arbitrary entries: stable sort by score descending, then
    /// truncate to `MAX_ENTRIES`.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        // sort_by is stable, so equal scores keep their input order.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    /// Fold one entry in and return the new state.
    pub fn submit(&self, entry: LeaderboardEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(entry);
        Self::from_entries(entries)
    }

    /// Ranked entries, best first.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Consume into the ranked entries.
    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no dives are ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best entry.
    pub fn leader(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    /// Best ranked entry for a participant.
    pub fn best_for(&self, participant_id: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.participant_id == participant_id)
    }

    /// 1-based rank of a participant's best entry.
    pub fn rank_of(&self, participant_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.participant_id == participant_id)
            .map(|i| i + 1)
    }

    /// Whether a new entry with this score would make the board.
    ///
    /// A full board evicts a newcomer that only ties the last place, since
    /// earlier submissions win ties.
    pub fn qualifies(&self, score: u32) -> bool {
        match self.entries.last() {
            Some(last) if self.entries.len() >= MAX_ENTRIES => score > last.score,
            _ => true,
        }
    }

    /// Digest of the ranked contents. Equal states hash equal.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_leaderboard();
        hasher.update_u32(self.entries.len() as u32);
        for entry in &self.entries {
            hasher.update_str(&entry.participant_id);
            hasher.update_u32(entry.score);
            hasher.update_u8(entry.tier.rank());
            hasher.update_i64(entry.timestamp);
            hasher.update_opt_str(entry.style.map(|s| s.as_str()));
            hasher.update_opt_str(entry.character.as_deref());
        }
        hasher.finalize()
    }
}

// =============================================================================
// STORE-BACKED LEADERBOARD
// =============================================================================

/// A ranked leaderboard persisted through a store.
///
/// `submit` takes `&mut self`, so one handle is the single writer for its
/// key. Store failures never reach the caller: a failed load starts from
/// an empty board and a failed save keeps the in-memory state.
pub struct Leaderboard<S: LeaderboardStore> {
    store: S,
    key: String,
    state: LeaderboardState,
}

impl<S: LeaderboardStore> Leaderboard<S> {
    /// Open the leaderboard stored under `key`.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load_state(&store, &key);
        info!("Leaderboard {} opened with {} entries", key, state.len());
        Self { store, key, state }
    }

    /// Current ranked state.
    pub fn state(&self) -> &LeaderboardState {
        &self.state
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rank a new entry, persist the result and return it.
    pub fn submit(&mut self, entry: LeaderboardEntry) -> &LeaderboardState {
        let next = self.state.submit(entry);

        if let Err(e) = self.store.save(&self.key, next.entries()) {
            warn!("Failed to save leaderboard {}: {}", self.key, e);
        }

        self.state = next;
        &self.state
    }

    /// Discard the in-memory state and read the store again.
    pub fn reload(&mut self) -> &LeaderboardState {
        self.state = load_state(&self.store, &self.key);
        &self.state
    }

    /// Short digest of the current state, for logs.
    pub fn digest(&self) -> String {
        short_hex(&self.state.compute_hash())
    }
}

/// Load and re-rank, degrading any failure to an empty board.
fn load_state<S: LeaderboardStore>(store: &S, key: &str) -> LeaderboardState {
    match store.load(key) {
        Ok(Some(entries)) => LeaderboardState::from_entries(entries),
        Ok(None) => LeaderboardState::new(),
        Err(e) => {
            warn!("Leaderboard {} unreadable, starting empty: {}", key, e);
            LeaderboardState::new()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dive::style::DiveStyle;
    use crate::leaderboard::store::{MemoryStore, StoreError, LEADERBOARD_KEY};
    use proptest::prelude::*;

    fn entry(id: &str, score: u32, timestamp: i64) -> LeaderboardEntry {
        LeaderboardEntry::new(id, score, timestamp)
    }

    /// Store that fails every call.
    struct DownStore;

    impl LeaderboardStore for DownStore {
        fn load(&self, _key: &str) -> Result<Option<Vec<LeaderboardEntry>>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }

        fn save(&self, _key: &str, _entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
    }

    #[test]
    fn test_eleven_increasing_scores_keep_top_ten() {
        let mut state = LeaderboardState::new();
        for score in 1..=11u32 {
            state = state.submit(entry("p", score, score as i64));
        }

        let scores: Vec<u32> = state.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, (2..=11).rev().collect::<Vec<u32>>());
        assert_eq!(state.leader().map(|e| e.score), Some(11));
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let state = LeaderboardState::new()
            .submit(entry("first", 50, 1))
            .submit(entry("high", 80, 2))
            .submit(entry("second", 50, 3));

        let ids: Vec<&str> = state.entries().iter().map(|e| e.participant_id.as_str()).collect();
        assert_eq!(ids, vec!["high", "first", "second"]);
    }

    #[test]
    fn test_submit_does_not_mutate_previous_state() {
        let before = LeaderboardState::new().submit(entry("a", 10, 1));
        let after = before.submit(entry("b", 20, 2));
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_rank_and_best_for() {
        let state = LeaderboardState::from_entries(vec![
            entry("a", 30, 1),
            entry("b", 90, 2),
            entry("a", 70, 3),
        ]);

        assert_eq!(state.rank_of("b"), Some(1));
        assert_eq!(state.rank_of("a"), Some(2));
        assert_eq!(state.best_for("a").map(|e| e.score), Some(70));
        assert_eq!(state.rank_of("zed"), None);
    }

    #[test]
    fn test_qualifies() {
        let mut state = LeaderboardState::new();
        assert!(state.qualifies(0));
        for score in 0..MAX_ENTRIES as u32 {
            state = state.submit(entry("p", score + 10, 0));
        }
        // Last place holds 10.
        assert!(!state.qualifies(10));
        assert!(state.qualifies(11));
    }

    #[test]
    fn test_hash_tracks_contents() {
        let a = LeaderboardState::new().submit(entry("a", 10, 1));
        let b = LeaderboardState::new().submit(entry("a", 10, 1));
        let c = LeaderboardState::new().submit(entry("a", 11, 1));
        assert_eq!(a.compute_hash(), b.compute_hash());
        assert_ne!(a.compute_hash(), c.compute_hash());
    }

    #[test]
    fn test_leaderboard_persists_and_reloads() {
        let store = MemoryStore::new();
        {
            let mut board = Leaderboard::open(&store, LEADERBOARD_KEY);
            assert!(board.state().is_empty());
            board.submit(entry("a", 40, 1));
            board.submit(entry("b", 60, 2));
        }

        let board = Leaderboard::open(&store, LEADERBOARD_KEY);
        let scores: Vec<u32> = board.state().entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![60, 40]);
    }

    #[test]
    fn test_open_reranks_unsorted_store() {
        let store = MemoryStore::new();
        let unsorted: Vec<LeaderboardEntry> = (0..15).map(|i| entry("p", i, i as i64)).collect();
        store.save(LEADERBOARD_KEY, &unsorted).unwrap();

        let board = Leaderboard::open(&store, LEADERBOARD_KEY);
        assert_eq!(board.state().len(), MAX_ENTRIES);
        assert_eq!(board.state().leader().map(|e| e.score), Some(14));
    }

    #[test]
    fn test_corrupt_store_opens_empty() {
        let store = MemoryStore::new();
        store.set_raw(LEADERBOARD_KEY, "definitely not json");

        let mut board = Leaderboard::open(&store, LEADERBOARD_KEY);
        assert!(board.state().is_empty());

        // The next submit overwrites the corrupt data.
        board.submit(entry("a", 5, 1));
        assert_eq!(store.load(LEADERBOARD_KEY).unwrap().map(|v| v.len()), Some(1));
    }

    #[test]
    fn test_legacy_board_with_unknown_style_survives_submit() {
        let store = MemoryStore::new();
        store.set_raw(
            LEADERBOARD_KEY,
            r#"[
                {"address":"0x1234567890","score":88,"tier":"Perfect Dive","style":"Unknown","character":"Pro Swimmer","timestamp":1700000000000},
                {"address":"0xabc","score":70,"tier":"Great Dive","style":"swan_dive","character":"Ninja Diver","timestamp":1700000001000}
            ]"#,
        );

        let mut board = Leaderboard::open(&store, LEADERBOARD_KEY);
        assert_eq!(board.state().len(), 2);
        assert_eq!(board.state().entries()[0].style, None);
        assert_eq!(board.state().entries()[1].style, Some(DiveStyle::SwanDive));

        board.submit(entry("0xnew", 10, 1700000002000));

        let stored = store.load(LEADERBOARD_KEY).unwrap().unwrap();
        let ids: Vec<&str> = stored.iter().map(|e| e.participant_id.as_str()).collect();
        assert_eq!(ids, vec!["0x1234567890", "0xabc", "0xnew"]);
    }

    #[test]
    fn test_unavailable_store_degrades() {
        let mut board = Leaderboard::open(DownStore, LEADERBOARD_KEY);
        assert!(board.state().is_empty());

        let state = board.submit(entry("a", 77, 1));
        assert_eq!(state.len(), 1);
        assert!(board.reload().is_empty());
    }

    proptest! {
        #[test]
        fn prop_state_sorted_and_bounded(scores in proptest::collection::vec(0u32..=100, 0..40)) {
            let mut state = LeaderboardState::new();
            for (i, score) in scores.iter().enumerate() {
                state = state.submit(entry("p", *score, i as i64));
                prop_assert!(state.len() <= MAX_ENTRIES);
                prop_assert!(state.entries().windows(2).all(|w| w[0].score >= w[1].score));
            }
        }

        #[test]
        fn prop_equal_scores_keep_submission_order(scores in proptest::collection::vec(0u32..=5, 0..30)) {
            let mut state = LeaderboardState::new();
            for (i, score) in scores.iter().enumerate() {
                state = state.submit(entry("p", *score, i as i64));
            }
            // Timestamps record submission order.
            for w in state.entries().windows(2) {
                if w[0].score == w[1].score {
                    prop_assert!(w[0].timestamp < w[1].timestamp);
                }
            }
        }
    }
}
