//! Display colors for players and ranking medals.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Roster;

/// Pastel qualitative palette, cycled when a game has more players than colors.
pub const PLAYER_PALETTE: [&str; 9] = [
    "#FBB4AE", "#B3CDE3", "#CCEBC5", "#DECBE4", "#FED9A6", "#FFFFCC", "#E5D8BD", "#FDDAEC",
    "#F2F2F2",
];

/// Bar color for players outside the podium.
pub const NO_MEDAL_COLOR: &str = "#3E3E40";

/// A player with the color every chart should paint them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColor {
    pub player: String,
    pub color: String,
}

/// Assign each player a color by roster position.
pub fn player_colors(roster: &Roster) -> Vec<PlayerColor> {
    roster
        .iter()
        .zip(PLAYER_PALETTE.iter().cycle())
        .map(|(player, color)| PlayerColor {
            player: player.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// Podium medal for the top three of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based ranking position.
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Medal::Gold => "#FFD700",
            Medal::Silver => "#C9C0BB",
            Medal::Bronze => "#CD7F32",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Medal::Gold => write!(f, "gold"),
            Medal::Silver => write!(f, "silver"),
            Medal::Bronze => write!(f, "bronze"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_colors_follow_roster_order() {
        let colors = player_colors(&Roster::new(["A", "B", "C"]));

        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0].player, "A");
        assert_eq!(colors[0].color, "#FBB4AE");
        assert_eq!(colors[2].color, "#CCEBC5");
    }

    #[test]
    fn test_player_colors_cycle() {
        let players: Vec<String> = (0..11).map(|i| format!("P{}", i)).collect();
        let colors = player_colors(&Roster::new(players));

        assert_eq!(colors.len(), 11);
        assert_eq!(colors[9].color, colors[0].color);
        assert_eq!(colors[10].color, colors[1].color);
    }

    #[test]
    fn test_medal_for_position() {
        assert_eq!(Medal::for_position(1), Some(Medal::Gold));
        assert_eq!(Medal::for_position(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_position(4), None);
        assert_eq!(Medal::for_position(0), None);
    }

    #[test]
    fn test_medal_display() {
        assert_eq!(format!("{}", Medal::Silver), "silver");
        assert_eq!(Medal::Gold.color(), "#FFD700");
    }
}
