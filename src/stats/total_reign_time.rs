//! Total time spent as king.

use tracing::debug;

use super::{GameContext, PlayerValue, Series, StatKind, Statistic};

/// Total held duration per player.
///
/// Points: `ceil(alpha * player_total / game_duration)`.
#[derive(Debug, Clone)]
pub struct TotalReignTime {
    totals: Vec<PlayerValue>,
    alpha: f64,
    game_duration: f64,
}

impl TotalReignTime {
    pub fn new(ctx: &GameContext) -> Self {
        let mut totals: Vec<PlayerValue> = ctx
            .roster()
            .iter()
            .map(|player| PlayerValue {
                player: player.to_string(),
                value: 0.0,
            })
            .collect();

        for transition in ctx.transitions() {
            if let Some(i) = ctx.roster().position(&transition.player) {
                totals[i].value += transition.duration;
            }
        }

        debug!("Total reign time computed for {} players", totals.len());

        Self {
            totals,
            alpha: ctx.params().alpha,
            game_duration: ctx.game_duration(),
        }
    }

    /// Seconds `player` spent as king.
    pub fn total_of(&self, player: &str) -> f64 {
        self.totals
            .iter()
            .find(|t| t.player == player)
            .map(|t| t.value)
            .unwrap_or(0.0)
    }

    /// Fraction of the game `player` spent as king (0.0 to 1.0).
    pub fn share_of(&self, player: &str) -> f64 {
        self.total_of(player) / self.game_duration
    }

    pub fn totals(&self) -> &[PlayerValue] {
        &self.totals
    }
}

impl Statistic for TotalReignTime {
    fn kind(&self) -> StatKind {
        StatKind::TotalReignTime
    }

    fn points(&self, player: &str) -> u64 {
        (self.alpha * self.share_of(player)).ceil() as u64
    }

    fn series(&self) -> Series {
        Series::Totals(self.totals.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreParameters;
    use crate::stats::tests::{context, context_with};

    #[test]
    fn test_points_default_alpha() {
        let ctx = context(&["A", "B", "C"], &[("A", 10.0), ("B", 20.0), ("C", 30.0)]);
        let stat = TotalReignTime::new(&ctx);

        assert_eq!(stat.points("A"), 32);
        assert_eq!(stat.points("B"), 64);
        assert_eq!(stat.points("C"), 95);
    }

    #[test]
    fn test_totals_include_absent_players() {
        let ctx = context(&["A", "B", "C"], &[("B", 10.0), ("A", 5.0), ("B", 15.0)]);
        let stat = TotalReignTime::new(&ctx);

        let players: Vec<_> = stat.totals().iter().map(|t| t.player.as_str()).collect();
        assert_eq!(players, vec!["A", "B", "C"]);
        assert_eq!(stat.total_of("B"), 25.0);
        assert_eq!(stat.total_of("C"), 0.0);
        assert_eq!(stat.points("C"), 0);
    }

    #[test]
    fn test_conservation() {
        let ctx = context(
            &["A", "B", "C", "D"],
            &[("A", 13.0), ("C", 7.0), ("A", 41.0), ("B", 2.0), ("C", 19.0)],
        );
        let stat = TotalReignTime::new(&ctx);

        let sum: f64 = stat.totals().iter().map(|t| t.value).sum();
        assert_eq!(sum, ctx.game_duration());
    }

    #[test]
    fn test_monotonic_in_held_duration() {
        let mut previous = 0;
        for a in 0..=60 {
            let b = 60 - a;
            let ctx = context(&["A", "B"], &[("B", b as f64), ("A", a as f64)]);
            let points = TotalReignTime::new(&ctx).points("A");
            assert!(points >= previous, "points dropped at a={}", a);
            previous = points;
        }
    }

    #[test]
    fn test_custom_alpha() {
        let params = ScoreParameters::new(100.0, 0.05, 1.9, 30);
        let ctx = context_with(&["A", "B"], &[("A", 30.0), ("B", 10.0)], params);

        assert_eq!(TotalReignTime::new(&ctx).points("A"), 75);
    }

    #[test]
    fn test_series_is_totals() {
        let ctx = context(&["A"], &[("A", 3.0)]);
        match TotalReignTime::new(&ctx).series() {
            Series::Totals(totals) => assert_eq!(totals[0].value, 3.0),
            other => panic!("unexpected series {:?}", other),
        }
    }
}
