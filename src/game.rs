//! Driving loop: the agent plays a board until it wins, detonates or runs
//! out of moves.

use crate::agent::Agent;
use crate::board::{Board, Reveal};
use crate::config::GameConfig;
use crate::error::Result;
use crate::rng::GameRng;
use crate::types::Cell;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Outcome {
    /// Every mine identified and every safe cell revealed.
    Won,
    /// A guess hit a mine.
    Detonated { cell: Cell },
    /// No move left, yet the known mines differ from the board's.
    Stuck,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReport {
    pub outcome: Outcome,
    /// Cells revealed, including a detonating one.
    pub moves: usize,
    /// How many of those moves were random fallbacks.
    pub guesses: usize,
    pub mines_found: usize,
}

/// Play until the game ends. Safe moves are always preferred over guesses.
pub fn play<R: Rng + ?Sized>(board: &Board, agent: &mut Agent, rng: &mut R) -> Result<GameReport> {
    let mut moves = 0usize;
    let mut guesses = 0usize;

    let outcome = loop {
        let cell = match agent.safe_move() {
            Some(cell) => cell,
            None => match agent.random_move(rng) {
                Some(cell) => {
                    guesses += 1;
                    debug!(%cell, "no safe move, guessing");
                    cell
                }
                None if board.won(agent.known_mines()) => break Outcome::Won,
                None => break Outcome::Stuck,
            },
        };

        moves += 1;
        match board.reveal(cell)? {
            Reveal::Mine => break Outcome::Detonated { cell },
            Reveal::Safe(count) => agent.add_knowledge(cell, count)?,
        }
    };

    let report = GameReport {
        outcome,
        moves,
        guesses,
        mines_found: agent.known_mines().len(),
    };
    info!(?report, "game over");
    Ok(report)
}

/// Build a board and an agent from `config` and play one game.
pub fn run(config: &GameConfig) -> Result<GameReport> {
    let mut rng = GameRng::from_optional_seed(config.seed);
    let board = Board::random(config, &mut rng)?;
    let mut agent = Agent::from_config(config)?;
    play(&board, &mut agent, &mut rng)
}
