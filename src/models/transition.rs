//! Crown transitions.

use serde::{Deserialize, Serialize};

/// A single reign: `player` held the crown for `duration` seconds.
///
/// The first transition of a game belongs to the player who started as king,
/// the last one to the player still holding the crown when the game ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub player: String,
    pub duration: f64,
}

impl Transition {
    pub fn new(player: impl Into<String>, duration: f64) -> Self {
        Self {
            player: player.into(),
            duration,
        }
    }
}

/// Chronological list of transitions for one game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionLog(Vec<Transition>);

impl TransitionLog {
    pub fn new(transitions: Vec<Transition>) -> Self {
        Self(transitions)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all reign durations, in seconds.
    pub fn total_duration(&self) -> f64 {
        self.0.iter().map(|t| t.duration).sum()
    }

    /// Player who held the crown when the game started.
    pub fn first_king(&self) -> Option<&str> {
        self.0.first().map(|t| t.player.as_str())
    }

    /// Player holding the crown when the game ended.
    pub fn last_king(&self) -> Option<&str> {
        self.0.last().map(|t| t.player.as_str())
    }

    /// Reigns held by `player`, in game order.
    pub fn reigns_of<'a>(&'a self, player: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.0
            .iter()
            .filter(move |t| t.player == player)
            .map(|t| t.duration)
    }
}

impl<'a> IntoIterator for &'a TransitionLog {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
