//! Step-function view of who held the crown over the game.

use tracing::debug;

use super::{GameContext, Series, StatKind, Statistic};

/// Crown holder at each percentage point of the game.
///
/// Every transition is expanded into its player's name, repeated once per
/// rounded-up percentage point of the game it covered. Rounding is done per
/// transition, so the timeline can be slightly longer than 100 entries.
/// Contributes no points.
#[derive(Debug, Clone)]
pub struct GraphVisualization {
    timeline: Vec<String>,
}

impl GraphVisualization {
    pub fn new(ctx: &GameContext) -> Self {
        let mut timeline = Vec::new();
        for transition in ctx.transitions() {
            let steps = ctx.percent_of_game(transition.duration) as usize;
            timeline.extend(std::iter::repeat(transition.player.clone()).take(steps));
        }

        debug!("Crown timeline has {} steps", timeline.len());

        Self { timeline }
    }

    pub fn timeline(&self) -> &[String] {
        &self.timeline
    }

    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

impl Statistic for GraphVisualization {
    fn kind(&self) -> StatKind {
        StatKind::GraphVisualization
    }

    fn series(&self) -> Series {
        Series::Timeline(self.timeline.clone())
    }
}
