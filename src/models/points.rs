//! Point tables and rankings.

use serde::{Deserialize, Serialize};

use super::{Medal, Roster};

/// Points held by one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPoints {
    pub player: String,
    pub points: u64,
}

/// Accumulated points per player, kept in roster order.
///
/// Every roster player has an entry from construction onwards, so no player
/// can be missing from a table whatever the transitions contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointTable(Vec<PlayerPoints>);

impl PointTable {
    /// A table with a zero entry for every roster player.
    pub fn zeroed(roster: &Roster) -> Self {
        Self(
            roster
                .iter()
                .map(|player| PlayerPoints {
                    player: player.to_string(),
                    points: 0,
                })
                .collect(),
        )
    }

    /// Build a table by evaluating `points` for each roster player.
    pub fn from_fn<F>(roster: &Roster, mut points: F) -> Self
    where
        F: FnMut(&str) -> u64,
    {
        let mut table = Self::zeroed(roster);
        for entry in &mut table.0 {
            entry.points = points(&entry.player);
        }
        table
    }

    /// Add `points` to `player`, saturating at `u64::MAX`.
    /// Returns false if the player has no entry.
    pub fn add(&mut self, player: &str, points: u64) -> bool {
        match self.0.iter_mut().find(|e| e.player == player) {
            Some(entry) => {
                entry.points = entry.points.saturating_add(points);
                true
            }
            None => false,
        }
    }

    /// Add another table elementwise.
    pub fn add_table(&mut self, other: &PointTable) {
        for entry in &other.0 {
            self.add(&entry.player, entry.points);
        }
    }

    pub fn get(&self, player: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.points)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerPoints> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.points))
    }

    /// Rank players by points, highest first. Ties keep table order.
    pub fn ranked(&self) -> Vec<RankedPlayer> {
        let mut sorted: Vec<&PlayerPoints> = self.0.iter().collect();
        sorted.sort_by(|a, b| b.points.cmp(&a.points));

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedPlayer {
                position: i + 1,
                player: entry.player.clone(),
                points: entry.points,
                medal: Medal::for_position(i + 1),
            })
            .collect()
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    /// 1-based position in the ranking
    pub position: usize,
    pub player: String,
    pub points: u64,
    pub medal: Option<Medal>,
}
