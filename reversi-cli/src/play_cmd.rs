//! Play command - one game between two configured players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: runner::play_game(), report()
//! - Level 3: text and JSON formatting

use anyhow::{Context, Result};
use clap::Args;

use crate::config::GameArgs;
use crate::render::render;
use crate::runner::{self, GameRecord};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Output the game record as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = args.game.resolve()?;

    tracing::info!(
        "Starting {:?} game (side length {}): {:?} vs {:?}",
        config.topology,
        config.side_len,
        config.first,
        config.second
    );

    let mut rng = runner::create_rng(seed);
    let record = runner::play_game(&config, &mut rng)?;

    report(&record, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report(record: &GameRecord, json: bool) -> Result<()> {
    if json {
        let output =
            serde_json::to_string_pretty(record).context("Failed to serialize game record")?;
        println!("{}", output);
    } else {
        println!("{}", format_text(record));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

fn format_text(record: &GameRecord) -> String {
    let outcome = match (record.finished, record.winner) {
        (false, _) => "Unfinished".to_string(),
        (true, Some(winner)) => format!("Winner: {}", winner),
        (true, None) => "Draw".to_string(),
    };

    format!(
        "{}\n\nScore: X {} - {} O\n{} after {} actions",
        render(&record.board, record.topology, record.side_len),
        record.first_score,
        record.second_score,
        outcome,
        record.actions.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_format_text() {
        let record =
            runner::play_game(&GameConfig::hex(3), &mut runner::create_rng(Some(5))).unwrap();
        let text = format_text(&record);
        assert!(text.contains(&format!(
            "Score: X {} - {} O",
            record.first_score, record.second_score
        )));
        assert!(text.lines().count() >= 5 + 3);
    }
}
