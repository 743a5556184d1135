//! Distribution of individual reign durations.

use tracing::debug;

use super::{GameContext, PlayerSamples, Series, StatKind, Statistic};

/// Every individual reign per player.
///
/// Each reign is turned into its rounded-up percentage of the game and raised
/// to `sigma`, so a few long reigns outscore many short ones. Players who never
/// held the crown carry a single zero-length reign.
///
/// Points: `ceil(beta * sum(percent_i ** sigma))`.
#[derive(Debug, Clone)]
pub struct ReignTime {
    reigns: Vec<PlayerSamples>,
    percents: Vec<Vec<u64>>,
    beta: f64,
    sigma: f64,
}

impl ReignTime {
    pub fn new(ctx: &GameContext) -> Self {
        let mut reigns: Vec<PlayerSamples> = ctx
            .roster()
            .iter()
            .map(|player| PlayerSamples {
                player: player.to_string(),
                samples: Vec::new(),
            })
            .collect();

        for transition in ctx.transitions() {
            if let Some(i) = ctx.roster().position(&transition.player) {
                reigns[i].samples.push(transition.duration);
            }
        }

        for entry in reigns.iter_mut().filter(|r| r.samples.is_empty()) {
            entry.samples.push(0.0);
        }

        let percents: Vec<Vec<u64>> = reigns
            .iter()
            .map(|r| r.samples.iter().map(|&d| ctx.percent_of_game(d)).collect())
            .collect();

        debug!("Reign time distribution computed for {} players", reigns.len());

        Self {
            reigns,
            percents,
            beta: ctx.params().beta,
            sigma: ctx.params().sigma,
        }
    }

    /// Individual reigns of `player`, in game order.
    pub fn reigns_of(&self, player: &str) -> &[f64] {
        self.reigns
            .iter()
            .find(|r| r.player == player)
            .map(|r| r.samples.as_slice())
            .unwrap_or(&[])
    }

    /// Reigns of `player` as rounded-up percentages of the game.
    pub fn percents_of(&self, player: &str) -> &[u64] {
        self.reigns
            .iter()
            .position(|r| r.player == player)
            .map(|i| self.percents[i].as_slice())
            .unwrap_or(&[])
    }

    pub fn reigns(&self) -> &[PlayerSamples] {
        &self.reigns
    }
}

impl Statistic for ReignTime {
    fn kind(&self) -> StatKind {
        StatKind::ReignTime
    }

    fn points(&self, player: &str) -> u64 {
        let weighted: f64 = self
            .percents_of(player)
            .iter()
            .map(|&percent| (percent as f64).powf(self.sigma))
            .sum();

        (self.beta * weighted).ceil() as u64
    }

    fn series(&self) -> Series {
        Series::Distribution(self.reigns.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::tests::context;

    #[test]
    fn test_points_default_parameters() {
        let ctx = context(&["A", "B", "C"], &[("A", 10.0), ("B", 20.0), ("C", 30.0)]);
        let stat = ReignTime::new(&ctx);

        // 17 ** 1.9 = 217.7, 34 ** 1.9 = 812.5, 50 ** 1.9 = 1690.6
        assert_eq!(stat.points("A"), 11);
        assert_eq!(stat.points("B"), 41);
        assert_eq!(stat.points("C"), 85);
    }

    #[test]
    fn test_multiple_reigns_kept_in_order() {
        let ctx = context(&["A", "B"], &[("A", 5.0), ("B", 10.0), ("A", 25.0)]);
        let stat = ReignTime::new(&ctx);

        assert_eq!(stat.reigns_of("A"), &[5.0, 25.0]);
        assert_eq!(stat.percents_of("A"), &[13, 63]);
    }

    #[test]
    fn test_absent_player_gets_zero_reign() {
        let ctx = context(&["A", "B", "C"], &[("A", 40.0), ("B", 20.0)]);
        let stat = ReignTime::new(&ctx);

        assert_eq!(stat.reigns_of("C"), &[0.0]);
        assert_eq!(stat.points("C"), 0);
        assert_eq!(stat.reigns().len(), 3);
    }

    #[test]
    fn test_long_reign_beats_many_short_ones() {
        // Same total time (50%), one reign versus five
        let ctx = context(
            &["Long", "Short", "Other"],
            &[
                ("Long", 50.0),
                ("Short", 10.0),
                ("Other", 0.0),
                ("Short", 10.0),
                ("Other", 0.0),
                ("Short", 10.0),
                ("Other", 0.0),
                ("Short", 10.0),
                ("Other", 0.0),
                ("Short", 10.0),
            ],
        );
        let stat = ReignTime::new(&ctx);

        assert!(stat.points("Long") > stat.points("Short"));
    }

    #[test]
    fn test_series_is_distribution() {
        let ctx = context(&["A", "B"], &[("A", 3.0)]);
        match ReignTime::new(&ctx).series() {
            Series::Distribution(reigns) => {
                assert_eq!(reigns.len(), 2);
                assert_eq!(reigns[1].samples, vec![0.0]);
            }
            other => panic!("unexpected series {:?}", other),
        }
    }
}
