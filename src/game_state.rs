// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    board, board_layout, error, game_config, inventory, lexicon, play_scorer, turn_buffer,
};
use rand::prelude::*;

// Every input modality reduces to these.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Select {
        tray_index: usize,
    },
    Place {
        tray_index: usize,
        x: i8,
        y: i8,
    },
    Withdraw {
        x: i8,
        y: i8,
    },
    Move {
        from_x: i8,
        from_y: i8,
        to_x: i8,
        to_y: i8,
    },
    Trade {
        tray_indices: Vec<usize>,
    },
    EndTurn,
    Recall,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    Selected(Option<usize>),
    Placed { x: i8, y: i8, tile: u8 },
    Withdrawn { x: i8, y: i8, tile: u8 },
    Moved { to_x: i8, to_y: i8 },
    Traded { count: usize, drawn: usize },
    Recalled { count: usize },
    TurnCommitted(play_scorer::TurnScore),
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct CellView {
    pub letter: Option<&'static str>,
    pub pending: bool,
    pub bonus: board_layout::Bonus,
}

// What a renderer needs, detached from the session.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Snapshot {
    pub board: Vec<Vec<CellView>>, // [y][x]
    pub tray: Vec<&'static str>,
    pub selected: Option<usize>,
    pub score: i32,
    pub turns_played: u32,
    pub pool_size: usize,
    pub dictionary_loaded: bool,
    pub dictionary_words: usize,
    pub status: String,
}

pub struct GameSession {
    game_config: game_config::GameConfig,
    board: board::Board,
    turn: turn_buffer::TurnBuffer,
    inventory: inventory::Inventory<'static>,
    scorer: play_scorer::PlayScorer<'static>,
    lexicon: std::sync::Arc<lexicon::Lexicon>,
    rng: rand_chacha::ChaCha20Rng,
    score: i32,
    turns_played: u32,
    selected: Option<usize>,
    status: String,
}

impl GameSession {
    pub fn new(
        game_config: game_config::GameConfig,
        lexicon: std::sync::Arc<lexicon::Lexicon>,
    ) -> error::Returns<Self> {
        game_config.validate()?;
        let mut rng = make_rng(&game_config);
        let layout = board_layout::BoardLayout::make(
            game_config.layout,
            game_config.dim(),
            game_config.bonus_probability,
            &mut rng,
        );
        Ok(Self::start(game_config, layout, lexicon, rng))
    }

    // for a layout decided elsewhere. the config's layout fields are ignored.
    pub fn with_layout(
        game_config: game_config::GameConfig,
        layout: board_layout::BoardLayout,
        lexicon: std::sync::Arc<lexicon::Lexicon>,
    ) -> error::Returns<Self> {
        game_config.validate()?;
        if layout.dim() != game_config.dim() {
            return_error!(format!(
                "layout is {}x{} but board_size is {}",
                layout.dim().cols,
                layout.dim().rows,
                game_config.board_size
            ));
        }
        let rng = make_rng(&game_config);
        Ok(Self::start(game_config, layout, lexicon, rng))
    }

    fn start(
        game_config: game_config::GameConfig,
        layout: board_layout::BoardLayout,
        lexicon: std::sync::Arc<lexicon::Lexicon>,
        mut rng: rand_chacha::ChaCha20Rng,
    ) -> Self {
        let alphabet = game_config.alphabet();
        let mut inventory = inventory::Inventory::new(
            alphabet,
            game_config.rack_size as usize,
            game_config.allow_oversupply,
        );
        inventory.refill_tray(&mut rng);
        Self {
            turn: turn_buffer::TurnBuffer::new(layout.dim()),
            board: board::Board::new(layout),
            inventory,
            scorer: play_scorer::PlayScorer::new(alphabet, game_config.min_word_len),
            lexicon,
            rng,
            score: 0,
            turns_played: 0,
            selected: None,
            status: String::new(),
            game_config,
        }
    }

    pub fn game_config(&self) -> &game_config::GameConfig {
        &self.game_config
    }

    pub fn board(&self) -> &board::Board {
        &self.board
    }

    pub fn turn(&self) -> &turn_buffer::TurnBuffer {
        &self.turn
    }

    pub fn tray(&self) -> &[u8] {
        self.inventory.tray.tiles()
    }

    pub fn pool_size(&self) -> usize {
        self.inventory.bag.len()
    }

    pub fn lexicon(&self) -> &lexicon::Lexicon {
        &self.lexicon
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, error::Rejection> {
        log::debug!("dispatching {:?}", command);
        let result = match command {
            Command::Select { tray_index } => self.select(tray_index),
            Command::Place { tray_index, x, y } => self.place(tray_index, x, y),
            Command::Withdraw { x, y } => self.withdraw(x, y),
            Command::Move {
                from_x,
                from_y,
                to_x,
                to_y,
            } => self.move_tile(from_x, from_y, to_x, to_y),
            Command::Trade { tray_indices } => self.trade(&tray_indices),
            Command::EndTurn => self.end_turn(),
            Command::Recall => self.recall(),
        };
        self.status = match &result {
            Ok(outcome) => self.describe(outcome),
            Err(rejection) => {
                log::debug!("rejected: {}", rejection);
                rejection.to_string()
            }
        };
        result
    }

    pub fn select(&mut self, tray_index: usize) -> Result<Outcome, error::Rejection> {
        self.inventory.tray.get(tray_index)?;
        self.selected = if self.selected == Some(tray_index) {
            None
        } else {
            Some(tray_index)
        };
        Ok(Outcome::Selected(self.selected))
    }

    pub fn place(&mut self, tray_index: usize, x: i8, y: i8) -> Result<Outcome, error::Rejection> {
        let tile = self.inventory.tray.get(tray_index)?;
        self.turn.place(&self.board, x, y, tile)?;
        self.inventory.tray.take(tray_index)?;
        self.selected = None;
        Ok(Outcome::Placed { x, y, tile })
    }

    pub fn withdraw(&mut self, x: i8, y: i8) -> Result<Outcome, error::Rejection> {
        let placed = self.turn.withdraw(x, y)?;
        self.inventory.tray.push(placed.tile);
        self.selected = None;
        Ok(Outcome::Withdrawn {
            x,
            y,
            tile: placed.tile,
        })
    }

    pub fn move_tile(
        &mut self,
        from_x: i8,
        from_y: i8,
        to_x: i8,
        to_y: i8,
    ) -> Result<Outcome, error::Rejection> {
        self.turn
            .move_tile(&self.board, from_x, from_y, to_x, to_y)?;
        Ok(Outcome::Moved { to_x, to_y })
    }

    pub fn trade(&mut self, tray_indices: &[usize]) -> Result<Outcome, error::Rejection> {
        if !self.turn.is_empty() {
            return Err(error::Rejection::TradeAfterPlacement);
        }
        let (count, drawn) = self.inventory.trade_tiles(&mut self.rng, tray_indices)?;
        self.selected = None;
        Ok(Outcome::Traded { count, drawn })
    }

    pub fn recall(&mut self) -> Result<Outcome, error::Rejection> {
        let cleared = self.turn.clear();
        for placed in cleared.iter() {
            self.inventory.tray.push(placed.tile);
        }
        self.selected = None;
        Ok(Outcome::Recalled {
            count: cleared.len(),
        })
    }

    // All or nothing: on any rejection the board, turn and score stay put.
    pub fn end_turn(&mut self) -> Result<Outcome, error::Rejection> {
        if self.turn.is_empty() {
            return Err(error::Rejection::NoWordsFormed);
        }
        if play_scorer::PlayScorer::placement_direction(&self.turn).is_none() {
            return Err(error::Rejection::NonCollinearPlacement);
        }
        let words = self.scorer.find_words(&self.board, &self.turn);
        if words.is_empty() {
            return Err(error::Rejection::NoWordsFormed);
        }
        let invalid_words = words
            .iter()
            .filter(|word| !self.lexicon.validate(&word.text))
            .map(|word| word.text.clone())
            .collect::<Vec<_>>();
        if !invalid_words.is_empty() {
            return Err(error::Rejection::InvalidWords(invalid_words));
        }

        let bingo_bonus = self.game_config.num_played_bonus(self.turn.len());
        let total = words
            .iter()
            .fold(bingo_bonus, |total, word| total.saturating_add(word.score));
        self.board.commit_all(
            self.turn
                .tiles()
                .iter()
                .map(|placed| (placed.x, placed.y, placed.tile)),
        )?;
        self.turn.clear();
        self.score = self.score.saturating_add(total);
        self.turns_played += 1;
        self.selected = None;
        self.inventory.refill_tray(&mut self.rng);
        log::info!(
            "turn {} committed: {} for {}",
            self.turns_played,
            words
                .iter()
                .map(|word| word.text.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            total
        );
        Ok(Outcome::TurnCommitted(play_scorer::TurnScore {
            words,
            bingo_bonus,
            total,
        }))
    }

    fn describe(&self, outcome: &Outcome) -> String {
        let alphabet = self.game_config.alphabet();
        let label = |tile: u8| alphabet.of_board(tile).unwrap_or("?");
        match outcome {
            Outcome::Selected(Some(tray_index)) => format!("Selected tile {}", tray_index),
            Outcome::Selected(None) => "Selection cleared".into(),
            Outcome::Placed { x, y, tile } => format!("Placed {} at ({}, {})", label(*tile), x, y),
            Outcome::Withdrawn { x, y, tile } => {
                format!("Withdrew {} from ({}, {})", label(*tile), x, y)
            }
            Outcome::Moved { to_x, to_y } => format!("Moved tile to ({}, {})", to_x, to_y),
            Outcome::Traded { count, drawn } => format!("Traded {} tiles, drew {}", count, drawn),
            Outcome::Recalled { count } => format!("Recalled {} tiles", count),
            Outcome::TurnCommitted(turn_score) => format!(
                "Turn complete! Words: {}. Score: {}",
                turn_score
                    .words
                    .iter()
                    .map(|word| word.text.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                turn_score.total
            ),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let alphabet = self.game_config.alphabet();
        let dim = self.board.dim();
        Snapshot {
            board: (0..dim.rows)
                .map(|y| {
                    (0..dim.cols)
                        .map(|x| {
                            let pending = self.turn.get(x, y);
                            CellView {
                                letter: self
                                    .board
                                    .letter_at(x, y)
                                    .or(pending)
                                    .and_then(|tile| alphabet.of_board(tile)),
                                pending: pending.is_some(),
                                bonus: self.board.bonus_at(x, y),
                            }
                        })
                        .collect()
                })
                .collect(),
            tray: self
                .inventory
                .tray
                .tiles()
                .iter()
                .filter_map(|&tile| alphabet.of_board(tile))
                .collect(),
            selected: self.selected,
            score: self.score,
            turns_played: self.turns_played,
            pool_size: self.inventory.bag.len(),
            dictionary_loaded: self.lexicon.is_loaded(),
            dictionary_words: self.lexicon.num_words(),
            status: self.status.clone(),
        }
    }
}

fn make_rng(game_config: &game_config::GameConfig) -> rand_chacha::ChaCha20Rng {
    rand_chacha::ChaCha20Rng::seed_from_u64(game_config.seed.unwrap_or_else(rand::random))
}
