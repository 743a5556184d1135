//! Headline facts about a game.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::{GameContext, PlayerValue};

/// Game length, first and last king, and mean reign time per player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// When the game was played, if known
    pub played_at: Option<DateTime<Utc>>,

    /// Total duration in seconds
    pub duration_seconds: f64,

    /// Total duration as H:MM:SS
    pub duration_display: String,

    pub transitions: usize,
    pub first_king: String,
    pub last_king: String,

    /// Mean reign per player in seconds (0 for players who never reigned)
    pub mean_reign_time: Vec<PlayerValue>,
}

impl GameSummary {
    pub fn new(ctx: &GameContext) -> Self {
        let log = ctx.transitions();

        let mean_reign_time = ctx
            .roster()
            .iter()
            .map(|player| {
                let (sum, count) = log
                    .reigns_of(player)
                    .fold((0.0, 0usize), |(sum, n), d| (sum + d, n + 1));
                PlayerValue {
                    player: player.to_string(),
                    value: if count == 0 { 0.0 } else { sum / count as f64 },
                }
            })
            .collect();

        Self {
            played_at: None,
            duration_seconds: ctx.game_duration(),
            duration_display: format_duration(ctx.game_duration()),
            transitions: log.len(),
            first_king: log.first_king().unwrap_or_default().to_string(),
            last_king: log.last_king().unwrap_or_default().to_string(),
            mean_reign_time,
        }
    }

    /// Record when the game was played.
    pub fn with_played_at(mut self, played_at: DateTime<Utc>) -> Self {
        self.played_at = Some(played_at);
        self
    }
}

/// Format whole seconds as `H:MM:SS`, truncating any fraction.
pub fn format_duration(seconds: f64) -> String {
    let duration = Duration::seconds(seconds.max(0.0) as i64);
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let secs = duration.num_seconds() % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}
