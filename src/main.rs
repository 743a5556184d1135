use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use koth_stats::report::{render_ranking, GameReport, RankingRow};
use koth_stats::summary::GameSummary;
use koth_stats::{
    parse_transition, GameStatService, Roster, ScoreParameters, Transition, TransitionLog,
};

#[derive(Parser)]
#[command(name = "koth-stats")]
#[command(about = "King of the Hill ping-pong statistics and scoring")]
#[command(version)]
struct Cli {
    /// Path to a JSON score parameters file (defaults are used if unreadable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GameArgs {
    /// Players in roster order (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    players: Vec<String>,

    /// Transitions in game order as NAME=DURATION (e.g. "A=45,B=1m,A=90s")
    #[arg(long, value_delimiter = ',', required = true)]
    transitions: Vec<String>,

    /// Do not award the last-king bonus
    #[arg(long)]
    no_last_king_bonus: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the final ranking of a game
    Score {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Print the full game report
    Report {
        #[command(flatten)]
        game: GameArgs,

        /// When the game was played (RFC 3339, e.g. 2024-05-17T18:30:00Z)
        #[arg(long)]
        played_at: Option<String>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective score parameters as JSON
    Params,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting koth-stats v{}", env!("CARGO_PKG_VERSION"));

    let params = match &cli.config {
        Some(path) => ScoreParameters::from_file(path),
        None => ScoreParameters::default(),
    };

    match cli.command {
        Commands::Score { game } => {
            let service = build_service(&game, params)?;

            let ranking: Vec<RankingRow> = GameReport::new(&service).ranking;
            print!("{}", render_ranking(&ranking));
        }

        Commands::Report {
            game,
            played_at,
            json,
        } => {
            let service = build_service(&game, params)?;

            let mut summary = GameSummary::new(service.context());
            if let Some(s) = played_at {
                let date = DateTime::parse_from_rfc3339(&s)
                    .with_context(|| format!("Invalid --played-at date: {}", s))?;
                summary = summary.with_played_at(date.with_timezone(&Utc));
            }

            let report = GameReport::with_summary(&service, summary);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }

        Commands::Params => {
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
    }

    Ok(())
}

fn build_service(game: &GameArgs, params: ScoreParameters) -> Result<GameStatService> {
    let params = if game.no_last_king_bonus {
        params.without_last_king_bonus()
    } else {
        params
    };

    let transitions = game
        .transitions
        .iter()
        .map(|token| match parse_transition(token) {
            Some(t) => Ok(t),
            None => bail!(
                "Invalid transition '{}' (expected NAME=DURATION, e.g. Alice=90s)",
                token
            ),
        })
        .collect::<Result<Vec<Transition>>>()?;

    let roster = Roster::new(game.players.iter().map(|p| p.trim()));

    GameStatService::new(roster, TransitionLog::new(transitions), params)
        .context("Failed to score game")
}
