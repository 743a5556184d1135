//! Game report handed to renderers and printed by the CLI.

use serde::{Deserialize, Serialize};

use crate::config::ScoreParameters;
use crate::models::{PlayerColor, PointTable, RankedPlayer, NO_MEDAL_COLOR};
use crate::score::{GameStatService, PointBreakdown};
use crate::stats::{ChartKind, Series, StatKind};
use crate::summary::GameSummary;

/// One statistic with its chart metadata, series and points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticReport {
    pub kind: StatKind,
    pub title: String,
    pub chart: ChartKind,
    pub series: Series,
    pub points: PointTable,
}

/// A ranking row with the bar color a renderer should use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    #[serde(flatten)]
    pub ranked: RankedPlayer,
    pub color: String,
}

/// Everything known about one scored game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub parameters: ScoreParameters,
    pub summary: GameSummary,
    pub colors: Vec<PlayerColor>,
    pub statistics: Vec<StatisticReport>,
    pub breakdown: Vec<PointBreakdown>,
    pub ranking: Vec<RankingRow>,
}

impl GameReport {
    pub fn new(service: &GameStatService) -> Self {
        Self::with_summary(service, GameSummary::new(service.context()))
    }

    pub fn with_summary(service: &GameStatService, summary: GameSummary) -> Self {
        let statistics = service
            .statistics()
            .into_iter()
            .map(|stat| {
                let kind = stat.kind();
                StatisticReport {
                    kind,
                    title: kind.title().to_string(),
                    chart: kind.chart(),
                    series: stat.series(),
                    points: stat.point_table(service.roster()),
                }
            })
            .collect();

        let ranking = service
            .ranking()
            .into_iter()
            .map(|ranked| RankingRow {
                color: ranked
                    .medal
                    .map(|m| m.color())
                    .unwrap_or(NO_MEDAL_COLOR)
                    .to_string(),
                ranked,
            })
            .collect();

        Self {
            parameters: *service.params(),
            summary,
            colors: service.context().colors().to_vec(),
            statistics,
            breakdown: service.breakdown(),
            ranking,
        }
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let summary = &self.summary;

        out.push_str("=== Game Summary ===\n");
        if let Some(played_at) = summary.played_at {
            out.push_str(&format!(
                "Played:       {}\n",
                played_at.format("%d/%m/%Y %H:%M:%S")
            ));
        }
        out.push_str(&format!("Duration:     {}\n", summary.duration_display));
        out.push_str(&format!("Transitions:  {}\n", summary.transitions));
        out.push_str(&format!(
            "First king:   {} | Last king: {}\n",
            summary.first_king, summary.last_king
        ));

        out.push_str("\n=== Statistics ===\n");
        for stat in &self.statistics {
            out.push_str(&format!("{}:\n", stat.title));
            match &stat.series {
                Series::Totals(totals) => {
                    let game = summary.duration_seconds;
                    for t in totals {
                        out.push_str(&format!(
                            "  {:<16} {:>8.1}s  {:>5.1}%\n",
                            t.player,
                            t.value,
                            t.value / game * 100.0
                        ));
                    }
                }
                Series::Distribution(reigns) => {
                    for r in reigns {
                        let formatted: Vec<String> =
                            r.samples.iter().map(|s| format!("{:.1}", s)).collect();
                        out.push_str(&format!("  {:<16} [{}]\n", r.player, formatted.join(", ")));
                    }
                }
                Series::Counts(counts) => {
                    for c in counts {
                        out.push_str(&format!("  {:<16} {:>3}\n", c.player, c.count));
                    }
                }
                Series::Timeline(timeline) => {
                    out.push_str(&format!("  {}\n", compress_timeline(timeline)));
                }
            }
        }

        out.push_str("\n=== Mean Reign Time ===\n");
        for m in &summary.mean_reign_time {
            out.push_str(&format!("  {:<16} {:>8.1}s\n", m.player, m.value));
        }

        out.push('\n');
        out.push_str(&render_ranking(&self.ranking));
        out
    }
}

/// Render the final ranking as a table.
pub fn render_ranking(ranking: &[RankingRow]) -> String {
    let mut out = String::from("=== Final Score ===\n");
    for row in ranking {
        let medal = row
            .ranked
            .medal
            .map(|m| format!(" ({})", m))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>3}. {:<16} {:>6}{}\n",
            row.ranked.position, row.ranked.player, row.ranked.points, medal
        ));
    }
    out
}

/// Collapse consecutive holders: `A x17 -> B x34 -> C x50`.
fn compress_timeline(timeline: &[String]) -> String {
    let mut runs: Vec<(&str, usize)> = Vec::new();
    for player in timeline {
        match runs.last_mut() {
            Some((last, n)) if *last == player.as_str() => *n += 1,
            _ => runs.push((player.as_str(), 1)),
        }
    }

    runs.iter()
        .map(|(player, n)| format!("{} x{}", player, n))
        .collect::<Vec<_>>()
        .join(" -> ")
}
