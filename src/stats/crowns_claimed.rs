//! Number of times each player took the crown.

use tracing::debug;

use super::{GameContext, PlayerCount, Series, StatKind, Statistic};

/// Crowns claimed per player.
///
/// Each transition counts as a claim for its player, except the first one:
/// the first king started the game with the crown. Contributes no points.
#[derive(Debug, Clone)]
pub struct CrownsClaimed {
    counts: Vec<PlayerCount>,
}

impl CrownsClaimed {
    pub fn new(ctx: &GameContext) -> Self {
        let mut counts: Vec<PlayerCount> = ctx
            .roster()
            .iter()
            .map(|player| PlayerCount {
                player: player.to_string(),
                count: 0,
            })
            .collect();

        for transition in ctx.transitions() {
            if let Some(i) = ctx.roster().position(&transition.player) {
                counts[i].count += 1;
            }
        }

        // The first transition is always attributed to the first king, so
        // their count is at least 1 here.
        if let Some(i) = ctx
            .transitions()
            .first_king()
            .and_then(|king| ctx.roster().position(king))
        {
            counts[i].count = counts[i].count.saturating_sub(1);
        }

        debug!("Crowns claimed computed for {} players", counts.len());

        Self { counts }
    }

    pub fn claimed_by(&self, player: &str) -> u64 {
        self.counts
            .iter()
            .find(|c| c.player == player)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn counts(&self) -> &[PlayerCount] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }
}

impl Statistic for CrownsClaimed {
    fn kind(&self) -> StatKind {
        StatKind::CrownsClaimed
    }

    fn series(&self) -> Series {
        Series::Counts(self.counts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Roster;
    use crate::stats::tests::context;

    #[test]
    fn test_first_king_did_not_claim() {
        let ctx = context(&["A", "B", "C"], &[("A", 10.0), ("B", 20.0), ("C", 30.0)]);
        let stat = CrownsClaimed::new(&ctx);

        assert_eq!(stat.claimed_by("A"), 0);
        assert_eq!(stat.claimed_by("B"), 1);
        assert_eq!(stat.claimed_by("C"), 1);
    }

    #[test]
    fn test_first_king_reclaims() {
        let ctx = context(
            &["A", "B"],
            &[("A", 10.0), ("B", 5.0), ("A", 3.0), ("B", 8.0), ("A", 1.0)],
        );
        let stat = CrownsClaimed::new(&ctx);

        assert_eq!(stat.claimed_by("A"), 2);
        assert_eq!(stat.claimed_by("B"), 2);
    }

    #[test]
    fn test_crowns_count_matches_transitions() {
        let transitions = [
            ("C", 4.0),
            ("A", 9.0),
            ("C", 2.0),
            ("B", 11.0),
            ("A", 6.0),
            ("C", 1.0),
        ];
        let ctx = context(&["A", "B", "C", "D"], &transitions);
        let stat = CrownsClaimed::new(&ctx);

        assert_eq!(stat.total(), transitions.len() as u64 - 1);
        assert_eq!(stat.claimed_by("D"), 0);
        assert_eq!(stat.counts().len(), 4);
    }

    #[test]
    fn test_single_transition_game() {
        let ctx = context(&["A", "B"], &[("A", 60.0)]);
        let stat = CrownsClaimed::new(&ctx);

        assert_eq!(stat.total(), 0);
    }

    #[test]
    fn test_no_points() {
        let ctx = context(&["A", "B"], &[("A", 10.0), ("B", 50.0)]);
        let stat = CrownsClaimed::new(&ctx);

        let table = stat.point_table(&Roster::new(["A", "B"]));
        assert_eq!(table.total(), 0);
    }
}
