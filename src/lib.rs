//! Minesweeper agent driven by logical inference.
//!
//! A [`KnowledgeBase`](knowledge::KnowledgeBase) of [`Sentence`](sentence::Sentence)s
//! ("exactly N of these cells are mines") derives provably safe and mined
//! cells; the [`Agent`](agent::Agent) turns each reveal into a sentence and
//! picks the next move. The [`board`] and [`game`] modules supply a board and
//! a driving loop for native use and tests.
//!
//! On `wasm32` the agent and a full-game runner are exported to JavaScript.

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod knowledge;
pub mod rng;
pub mod sentence;
pub mod types;

pub use agent::Agent;
pub use config::GameConfig;
pub use error::{Error, Result};
pub use types::Cell;

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use crate::rng::GameRng;
    use crate::types::Cell;
    use crate::{game, Agent, GameConfig};

    fn cell_to_js(cell: Option<Cell>) -> JsValue {
        match cell {
            Some(cell) => {
                let obj = js_sys::Object::new();
                js_sys::Reflect::set(&obj, &"row".into(), &(cell.row as u32).into()).unwrap();
                js_sys::Reflect::set(&obj, &"col".into(), &(cell.col as u32).into()).unwrap();
                obj.into()
            }
            None => JsValue::NULL,
        }
    }

    fn to_js_error(e: impl std::fmt::Display) -> JsError {
        JsError::new(&e.to_string())
    }

    /// Agent plus its own random source for fallback moves.
    #[wasm_bindgen(js_name = "Agent")]
    pub struct WasmAgent {
        agent: Agent,
        rng: GameRng,
    }

    #[wasm_bindgen(js_class = "Agent")]
    impl WasmAgent {
        #[wasm_bindgen(constructor)]
        pub fn new(height: usize, width: usize, seed: Option<u64>) -> WasmAgent {
            WasmAgent {
                agent: Agent::new(height, width),
                rng: GameRng::from_optional_seed(seed),
            }
        }

        /// Feed a safe reveal: `count` mines around `(row, col)`.
        #[wasm_bindgen(js_name = "addKnowledge")]
        pub fn add_knowledge(&mut self, row: usize, col: usize, count: u8) -> Result<(), JsError> {
            self.agent
                .add_knowledge(Cell::new(row, col), count)
                .map_err(to_js_error)
        }

        /// `{ row, col }` of a provably safe cell, or `null`.
        #[wasm_bindgen(js_name = "safeMove")]
        pub fn safe_move(&self) -> JsValue {
            cell_to_js(self.agent.safe_move())
        }

        /// `{ row, col }` of a random unplayed, unflagged cell, or `null`.
        #[wasm_bindgen(js_name = "randomMove")]
        pub fn random_move(&mut self) -> JsValue {
            cell_to_js(self.agent.random_move(&mut self.rng))
        }

        #[wasm_bindgen(js_name = "knownMines")]
        pub fn known_mines(&self) -> Result<JsValue, JsError> {
            serde_wasm_bindgen::to_value(self.agent.known_mines()).map_err(to_js_error)
        }

        #[wasm_bindgen(js_name = "knownSafes")]
        pub fn known_safes(&self) -> Result<JsValue, JsError> {
            serde_wasm_bindgen::to_value(self.agent.known_safes()).map_err(to_js_error)
        }
    }

    /// Play one full game from a `{ height, width, mines, seed }` object.
    /// Returns `{ outcome: { kind, cell? }, moves, guesses, minesFound }`.
    #[wasm_bindgen(js_name = "playGame")]
    pub fn wasm_play_game(config: JsValue) -> Result<JsValue, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(to_js_error)?
        };
        let report = game::run(&config).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&report).map_err(to_js_error)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM agent ready".to_string()
    }
}
