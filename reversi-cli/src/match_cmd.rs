//! Match command - play a series of games between two player kinds
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand_chacha::ChaCha8Rng;

use reversi_core::Tile;

use crate::config::{GameArgs, GameConfig, PlayerKind};
use crate::runner::{self, GameRecord};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Number of games to play (will alternate colors)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of one game, from the point of view of the configured players
#[derive(Clone, Debug)]
struct GameSummary {
    game_number: usize,
    /// True when the configured second player moved first
    swapped: bool,
    record: GameRecord,
}

impl GameSummary {
    /// Player kind that won, if any
    fn winner(&self) -> Option<Side> {
        let winner = self.record.winner?;
        let first_won = winner == Tile::First;
        Some(if first_won != self.swapped { Side::A } else { Side::B })
    }
}

/// The two configured players, independent of which color they hold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    player_a: PlayerKind,
    player_b: PlayerKind,
    games: Vec<GameSummary>,
    a_wins: usize,
    b_wins: usize,
    draws: usize,
    unfinished: usize,
    avg_actions: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Resolve the game config
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let config = args.game.resolve()?;

    tracing::info!(
        "Starting match: {:?} vs {:?} on {:?} board ({} games)",
        config.first,
        config.second,
        config.topology,
        args.games
    );

    let results = play_match(&config, args.games, seed)?;

    report_results(&results, args.json);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(config: &GameConfig, games: usize, seed: Option<u64>) -> Result<MatchResults> {
    let mut rng = runner::create_rng(seed);
    let mut summaries = Vec::with_capacity(games);

    for game_num in 0..games {
        // Alternate colors for fairness
        let swapped = game_num % 2 == 1;
        let summary = play_single_game(config, game_num + 1, swapped, &mut rng)?;

        tracing::info!(
            "Game {}: {:?} ({} - {}, {} actions)",
            summary.game_number,
            summary.winner(),
            summary.record.first_score,
            summary.record.second_score,
            summary.record.actions.len()
        );

        summaries.push(summary);
    }

    Ok(compute_match_statistics(config, summaries))
}

/// Report match results
fn report_results(results: &MatchResults, json: bool) {
    if json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_single_game(
    config: &GameConfig,
    game_number: usize,
    swapped: bool,
    rng: &mut ChaCha8Rng,
) -> Result<GameSummary> {
    let game_config = if swapped { config.swapped() } else { config.clone() };
    let record = runner::play_game(&game_config, rng)?;

    Ok(GameSummary {
        game_number,
        swapped,
        record,
    })
}

/// Compute aggregate statistics from game summaries
fn compute_match_statistics(config: &GameConfig, games: Vec<GameSummary>) -> MatchResults {
    let a_wins = games.iter().filter(|g| g.winner() == Some(Side::A)).count();
    let b_wins = games.iter().filter(|g| g.winner() == Some(Side::B)).count();
    let draws = games.iter().filter(|g| g.record.is_draw()).count();
    let unfinished = games.iter().filter(|g| !g.record.finished).count();

    let total_actions: usize = games.iter().map(|g| g.record.actions.len()).sum();
    let avg_actions = if games.is_empty() {
        0.0
    } else {
        total_actions as f32 / games.len() as f32
    };

    MatchResults {
        player_a: config.first,
        player_b: config.second,
        games,
        a_wins,
        b_wins,
        draws,
        unfinished,
        avg_actions,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        first_player: PlayerKind,
        second_player: PlayerKind,
        first_score: usize,
        second_score: usize,
        winner: Option<Tile>,
        finished: bool,
        actions: usize,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        player_a: PlayerKind,
        player_b: PlayerKind,
        a_wins: usize,
        b_wins: usize,
        draws: usize,
        unfinished: usize,
        avg_actions: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        player_a: results.player_a,
        player_b: results.player_b,
        a_wins: results.a_wins,
        b_wins: results.b_wins,
        draws: results.draws,
        unfinished: results.unfinished,
        avg_actions: results.avg_actions,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                first_player: g.record.first_player,
                second_player: g.record.second_player,
                first_score: g.record.first_score,
                second_score: g.record.second_score,
                winner: g.record.winner,
                finished: g.record.finished,
                actions: g.record.actions.len(),
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!(
        "{:?} (A) wins: {} ({:.1}%)",
        results.player_a,
        results.a_wins,
        percent(results.a_wins, total)
    );
    println!(
        "{:?} (B) wins: {} ({:.1}%)",
        results.player_b,
        results.b_wins,
        percent(results.b_wins, total)
    );
    println!("Draws:       {} ({:.1}%)", results.draws, percent(results.draws, total));
    if results.unfinished > 0 {
        println!("Unfinished:  {}", results.unfinished);
    }
    println!("Avg actions: {:.1}", results.avg_actions);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: X={:?} O={:?} -> {} - {}",
            game.game_number,
            game.record.first_player,
            game.record.second_player,
            game.record.first_score,
            game.record.second_score
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
