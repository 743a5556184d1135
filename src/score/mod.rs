//! Final score of a game.
//!
//! Sums the point contribution of every statistic, adds the last-king bonus
//! and ranks the players.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ScoreParameters;
use crate::models::{PointTable, RankedPlayer, Roster, TransitionLog};
use crate::stats::{
    CrownsClaimed, GameContext, GraphVisualization, ReignTime, StatKind, Statistic, StatsError,
    TotalReignTime,
};

/// Where a player's points came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub player: String,
    pub total_reign_time: u64,
    pub reign_time: u64,
    pub crowns_claimed: u64,
    pub graph_visualization: u64,
    pub last_king_bonus: u64,
    pub total: u64,
}

/// Every statistic of one game, plus the combined score.
#[derive(Debug, Clone)]
pub struct GameStatService {
    ctx: GameContext,
    pub total_reign_time: TotalReignTime,
    pub reign_time: ReignTime,
    pub crowns_claimed: CrownsClaimed,
    pub graph_visualization: GraphVisualization,
}

impl GameStatService {
    /// Validate the game and compute all four statistics.
    pub fn new(
        roster: Roster,
        transitions: TransitionLog,
        params: ScoreParameters,
    ) -> Result<Self, StatsError> {
        let ctx = GameContext::new(roster, transitions, params)?;
        Ok(Self::from_context(ctx))
    }

    pub fn from_context(ctx: GameContext) -> Self {
        let total_reign_time = TotalReignTime::new(&ctx);
        let reign_time = ReignTime::new(&ctx);
        let crowns_claimed = CrownsClaimed::new(&ctx);
        let graph_visualization = GraphVisualization::new(&ctx);

        info!(
            "Computed statistics for a {}s game with {} players",
            ctx.game_duration(),
            ctx.roster().len()
        );

        Self {
            ctx,
            total_reign_time,
            reign_time,
            crowns_claimed,
            graph_visualization,
        }
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn roster(&self) -> &Roster {
        self.ctx.roster()
    }

    pub fn params(&self) -> &ScoreParameters {
        self.ctx.params()
    }

    /// The four statistics, in scoring order.
    pub fn statistics(&self) -> [&dyn Statistic; 4] {
        [
            &self.total_reign_time,
            &self.reign_time,
            &self.crowns_claimed,
            &self.graph_visualization,
        ]
    }

    /// Player holding the crown at the end of the game.
    pub fn last_king(&self) -> &str {
        // GameContext guarantees a non-empty log
        self.ctx.transitions().last_king().unwrap_or_default()
    }

    /// Points per player in roster order, bonus included.
    pub fn points(&self) -> PointTable {
        let mut table = PointTable::zeroed(self.roster());

        for stat in self.statistics() {
            let contribution = stat.point_table(self.roster());
            debug!("{} contributes {} points", stat.kind(), contribution.total());
            table.add_table(&contribution);
        }

        table.add(self.last_king(), self.params().points_last_king);
        table
    }

    /// Players sorted by points, highest first. Ties keep roster order.
    pub fn ranking(&self) -> Vec<RankedPlayer> {
        self.points().ranked()
    }

    /// Per-statistic points for every player, in roster order.
    pub fn breakdown(&self) -> Vec<PointBreakdown> {
        let last_king = self.last_king();

        self.roster()
            .iter()
            .map(|player| {
                let mut row = PointBreakdown {
                    player: player.to_string(),
                    total_reign_time: 0,
                    reign_time: 0,
                    crowns_claimed: 0,
                    graph_visualization: 0,
                    last_king_bonus: 0,
                    total: 0,
                };

                for stat in self.statistics() {
                    let points = stat.points(player);
                    match stat.kind() {
                        StatKind::TotalReignTime => row.total_reign_time = points,
                        StatKind::ReignTime => row.reign_time = points,
                        StatKind::CrownsClaimed => row.crowns_claimed = points,
                        StatKind::GraphVisualization => row.graph_visualization = points,
                    }
                    row.total = row.total.saturating_add(points);
                }

                if player == last_king {
                    row.last_king_bonus = self.params().points_last_king;
                    row.total = row.total.saturating_add(row.last_king_bonus);
                }

                row
            })
            .collect()
    }
}
