//! Statistics computed from a game's crown transitions.
//!
//! Every statistic is built from the same validated [`GameContext`] and
//! exposes:
//! - a per-player point contribution, summed by the score service
//! - a data series for an external chart renderer
//!
//! The set of statistics is closed: total reign time, reign time
//! distribution, crowns claimed and the transition timeline.

mod crowns_claimed;
mod reign_time;
mod timeline;
mod total_reign_time;

pub use crowns_claimed::CrownsClaimed;
pub use reign_time::ReignTime;
pub use timeline::GraphVisualization;
pub use total_reign_time::TotalReignTime;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::config::ScoreParameters;
use crate::models::{player_colors, PlayerColor, PointTable, Roster, TransitionLog};

/// Errors that prevent a game from being analysed.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("Game has no transitions")]
    EmptyLog,

    #[error("Game duration must be positive, got {duration} seconds")]
    DegenerateGame { duration: f64 },

    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),
}

/// Validated input shared by every statistic of one game.
#[derive(Debug, Clone)]
pub struct GameContext {
    roster: Roster,
    transitions: TransitionLog,
    params: ScoreParameters,
    game_duration: f64,
    colors: Vec<PlayerColor>,
}

impl GameContext {
    /// Validate a game and compute its total duration.
    ///
    /// Fails if the log is empty, if the total duration is zero, or if a
    /// transition names a player outside the roster or carries a negative or
    /// non-finite duration.
    pub fn new(
        roster: Roster,
        transitions: TransitionLog,
        params: ScoreParameters,
    ) -> Result<Self, StatsError> {
        if let Some(name) = roster.first_duplicate() {
            return Err(StatsError::DataIntegrity(format!(
                "player '{}' appears twice in the roster",
                name
            )));
        }

        if transitions.is_empty() {
            return Err(StatsError::EmptyLog);
        }

        for (i, transition) in transitions.iter().enumerate() {
            if !roster.contains(&transition.player) {
                return Err(StatsError::DataIntegrity(format!(
                    "transition {} references unknown player '{}'",
                    i, transition.player
                )));
            }
            if !transition.duration.is_finite() || transition.duration < 0.0 {
                return Err(StatsError::DataIntegrity(format!(
                    "transition {} has invalid duration {}",
                    i, transition.duration
                )));
            }
        }

        let game_duration = transitions.total_duration();
        if game_duration <= 0.0 {
            return Err(StatsError::DegenerateGame {
                duration: game_duration,
            });
        }

        debug!(
            "Game context: {} players, {} transitions, {}s",
            roster.len(),
            transitions.len(),
            game_duration
        );

        let colors = player_colors(&roster);

        Ok(Self {
            roster,
            transitions,
            params,
            game_duration,
            colors,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn transitions(&self) -> &TransitionLog {
        &self.transitions
    }

    pub fn params(&self) -> &ScoreParameters {
        &self.params
    }

    /// Total game duration in seconds, always positive.
    pub fn game_duration(&self) -> f64 {
        self.game_duration
    }

    pub fn colors(&self) -> &[PlayerColor] {
        &self.colors
    }

    pub fn color_of(&self, player: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.player == player)
            .map(|c| c.color.as_str())
    }

    /// Share of the game covered by `duration`, as a percentage rounded up.
    pub fn percent_of_game(&self, duration: f64) -> u64 {
        (duration / self.game_duration * 100.0).ceil() as u64
    }
}

/// The four statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    TotalReignTime,
    ReignTime,
    CrownsClaimed,
    GraphVisualization,
}

impl StatKind {
    pub fn title(&self) -> &'static str {
        match self {
            StatKind::TotalReignTime => "Fraction of time as king",
            StatKind::ReignTime => "Reign time",
            StatKind::CrownsClaimed => "Number of crowns claimed",
            StatKind::GraphVisualization => "Visualization of crown transitions",
        }
    }

    pub fn chart(&self) -> ChartKind {
        match self {
            StatKind::TotalReignTime => ChartKind::Pie,
            StatKind::ReignTime => ChartKind::Box,
            StatKind::CrownsClaimed => ChartKind::Bar,
            StatKind::GraphVisualization => ChartKind::StepLine,
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKind::TotalReignTime => write!(f, "total_reign_time"),
            StatKind::ReignTime => write!(f, "reign_time"),
            StatKind::CrownsClaimed => write!(f, "crowns_claimed"),
            StatKind::GraphVisualization => write!(f, "graph_visualization"),
        }
    }
}

/// Chart a renderer is expected to draw for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Box,
    Bar,
    StepLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerValue {
    pub player: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSamples {
    pub player: String,
    pub samples: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCount {
    pub player: String,
    pub count: u64,
}

/// Data behind one statistic, handed to a chart renderer as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Series {
    /// One value per player (seconds)
    Totals(Vec<PlayerValue>),
    /// Every individual sample per player (seconds)
    Distribution(Vec<PlayerSamples>),
    /// One count per player
    Counts(Vec<PlayerCount>),
    /// Crown holder at each percentage point of the game
    Timeline(Vec<String>),
}

/// Capability shared by every statistic.
pub trait Statistic {
    fn kind(&self) -> StatKind;

    /// Point contribution of this statistic for `player`.
    fn points(&self, _player: &str) -> u64 {
        0
    }

    fn series(&self) -> Series;

    /// Points for every roster player, in roster order.
    fn point_table(&self, roster: &Roster) -> PointTable {
        PointTable::from_fn(roster, |player| self.points(player))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Transition;

    pub(crate) fn context(players: &[&str], transitions: &[(&str, f64)]) -> GameContext {
        context_with(players, transitions, ScoreParameters::default())
    }

    pub(crate) fn context_with(
        players: &[&str],
        transitions: &[(&str, f64)],
        params: ScoreParameters,
    ) -> GameContext {
        GameContext::new(
            Roster::new(players.iter().copied()),
            TransitionLog::new(
                transitions
                    .iter()
                    .map(|(p, d)| Transition::new(*p, *d))
                    .collect(),
            ),
            params,
        )
        .unwrap()
    }

    fn try_context(players: &[&str], transitions: &[(&str, f64)]) -> Result<GameContext, StatsError> {
        GameContext::new(
            Roster::new(players.iter().copied()),
            TransitionLog::new(
                transitions
                    .iter()
                    .map(|(p, d)| Transition::new(*p, *d))
                    .collect(),
            ),
            ScoreParameters::default(),
        )
    }

    #[test]
    fn test_game_duration() {
        let ctx = context(&["A", "B", "C"], &[("A", 10.0), ("B", 20.0), ("C", 30.0)]);
        assert_eq!(ctx.game_duration(), 60.0);
    }

    #[test]
    fn test_empty_log_rejected() {
        assert_eq!(try_context(&["A"], &[]).unwrap_err(), StatsError::EmptyLog);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = try_context(&["A", "B"], &[("A", 0.0), ("B", 0.0)]).unwrap_err();
        assert_eq!(err, StatsError::DegenerateGame { duration: 0.0 });
    }

    #[test]
    fn test_unknown_player_rejected() {
        let err = try_context(&["A", "B"], &[("A", 10.0), ("Z", 5.0)]).unwrap_err();
        assert!(matches!(err, StatsError::DataIntegrity(msg) if msg.contains("'Z'")));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = try_context(&["A"], &[("A", -1.0), ("A", 5.0)]).unwrap_err();
        assert!(matches!(err, StatsError::DataIntegrity(_)));
    }

    #[test]
    fn test_non_finite_duration_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = try_context(&["A", "B"], &[("B", 10.0), ("A", bad)]).unwrap_err();
            assert!(
                matches!(&err, StatsError::DataIntegrity(msg) if msg.contains("transition 1")),
                "{:?} accepted as a duration: {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_duplicate_roster_rejected() {
        let err = try_context(&["A", "A"], &[("A", 1.0)]).unwrap_err();
        assert!(matches!(err, StatsError::DataIntegrity(_)));
    }

    #[test]
    fn test_colors_by_roster_order() {
        let ctx = context(&["B", "A"], &[("A", 1.0)]);
        assert_eq!(ctx.color_of("B"), Some("#FBB4AE"));
        assert_eq!(ctx.color_of("A"), Some("#B3CDE3"));
        assert_eq!(ctx.color_of("Z"), None);
    }

    #[test]
    fn test_percent_of_game_rounds_up() {
        let ctx = context(&["A", "B", "C"], &[("A", 10.0), ("B", 20.0), ("C", 30.0)]);
        assert_eq!(ctx.percent_of_game(10.0), 17);
        assert_eq!(ctx.percent_of_game(20.0), 34);
        assert_eq!(ctx.percent_of_game(30.0), 50);
        assert_eq!(ctx.percent_of_game(0.0), 0);
        assert_eq!(ctx.percent_of_game(60.0), 100);
    }

    #[test]
    fn test_stat_kind_metadata() {
        assert_eq!(StatKind::TotalReignTime.chart(), ChartKind::Pie);
        assert_eq!(StatKind::CrownsClaimed.title(), "Number of crowns claimed");
        assert_eq!(format!("{}", StatKind::ReignTime), "reign_time");
    }

    #[test]
    fn test_series_serialization() {
        let series = Series::Timeline(vec!["A".to_string()]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"type":"timeline","data":["A"]}"#);
    }
}
