//! Session high score leaderboard
//!
//! Lives in the shell for the lifetime of the process and is never written
//! to disk. Tracks the top 10 round scores and the best one.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Round score (whole points)
    pub score: u32,
    /// Ticks the round lasted
    pub ticks: u64,
    /// Round number within the session (1-based)
    pub round: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
    /// Best score this session
    best: u32,
    /// Rounds recorded so far
    rounds: u32,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score so far (0 before any round)
    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished round
    ///
    /// Updates the best score to `max(best, score)` and returns true if this
    /// round set a new best.
    pub fn record(&mut self, score: u32, ticks: u64) -> bool {
        self.rounds += 1;
        let new_best = score > self.best;
        self.best = self.best.max(score);

        if self.qualifies(score) {
            let entry = HighScoreEntry {
                score,
                ticks,
                round: self.rounds,
            };
            // Sorted descending by score; ties keep the earlier round first
            let pos = self
                .entries
                .iter()
                .position(|e| score > e.score)
                .unwrap_or(self.entries.len());
            self.entries.insert(pos, entry);
            self.entries.truncate(MAX_HIGH_SCORES);
        }

        if new_best {
            log::info!("New high score: {}", score);
        }
        new_best
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
