//! # KOTH Stats
//!
//! Statistics and scoring for King of the Hill ping-pong games.
//!
//! ## Architecture
//!
//! - **models**: Transitions, roster, point tables, colors
//! - **stats**: The four statistics derived from a game's transitions
//! - **score**: Combined score and ranking
//! - **summary**: Duration, first/last king, mean reign time
//! - **report**: Serializable report and text rendering
//! - **config**: Score parameters loading and validation

pub mod config;
pub mod models;
pub mod report;
pub mod score;
pub mod stats;
pub mod summary;

pub use config::ScoreParameters;
pub use models::*;
pub use score::GameStatService;
pub use stats::{GameContext, Series, StatKind, Statistic, StatsError};

/// Parse a duration in seconds (e.g., "45", "12.5", "90s", "2m", "1h").
pub fn parse_seconds(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('h') {
        (n, 3600.0)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60.0)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1.0)
    } else {
        // Default to seconds
        (s, 1.0)
    };

    let num: f64 = num_str.trim().parse().ok()?;
    if !num.is_finite() || num < 0.0 {
        return None;
    }
    Some(num * multiplier)
}

/// Parse a `NAME=DURATION` token into a transition.
pub fn parse_transition(s: &str) -> Option<Transition> {
    let (name, duration) = s.rsplit_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Transition::new(name, parse_seconds(duration)?))
}
