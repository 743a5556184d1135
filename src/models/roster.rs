//! Ordered list of the players in a game.

use serde::{Deserialize, Serialize};

/// Players taking part in a game, in the order they were registered.
///
/// Roster order drives color assignment, zero-entry insertion and the
/// tiebreak of the final ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(players.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.0.iter().any(|p| p == player)
    }

    /// Position of `player` in the roster.
    pub fn position(&self, player: &str) -> Option<usize> {
        self.0.iter().position(|p| p == player)
    }

    /// First name that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        self.0
            .iter()
            .enumerate()
            .find(|&(i, p)| self.0[..i].contains(p))
            .map(|(_, p)| p.as_str())
    }
}
