// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, matrix, turn_buffer};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WordTile {
    pub x: i8,
    pub y: i8,
    pub tile: u8,
    pub is_new: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FormedWord {
    pub text: String,
    pub down: bool,
    pub tiles: Vec<WordTile>,
    pub score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TurnScore {
    pub words: Vec<FormedWord>,
    pub bingo_bonus: i32,
    pub total: i32,
}

pub struct PlayScorer<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    min_word_len: usize,
}

impl<'a> PlayScorer<'a> {
    pub fn new(alphabet: &'a alphabet::Alphabet<'a>, min_word_len: usize) -> Self {
        Self {
            alphabet,
            min_word_len,
        }
    }

    // Some(down) if the pending tiles share a row (false) or a column (true).
    // A single tile counts as across.
    pub fn placement_direction(turn: &turn_buffer::TurnBuffer) -> Option<bool> {
        let first = turn.tiles().first()?;
        if turn.tiles().iter().all(|placed| placed.y == first.y) {
            Some(false)
        } else if turn.tiles().iter().all(|placed| placed.x == first.x) {
            Some(true)
        } else {
            None
        }
    }

    // The main word (if long enough) followed by the cross words in
    // reading order. Empty if nothing qualifies or the tiles are not in line.
    pub fn find_words(
        &self,
        board: &board::Board,
        turn: &turn_buffer::TurnBuffer,
    ) -> Vec<FormedWord> {
        let mut words = Vec::new();
        let Some(down) = Self::placement_direction(turn) else {
            log::debug!("pending tiles are not in line");
            return words;
        };
        let mut sorted = turn.tiles().to_vec();
        sorted.sort_unstable_by_key(|placed| (placed.y, placed.x));
        let first = sorted[0];

        let main_word = if down {
            self.word_through(board, turn, true, first.x, first.y)
        } else {
            self.word_through(board, turn, false, first.y, first.x)
        };
        if main_word.tiles.len() >= self.min_word_len {
            words.push(main_word);
        }

        for placed in sorted.iter() {
            let cross_word = if down {
                self.word_through(board, turn, false, placed.y, placed.x)
            } else {
                self.word_through(board, turn, true, placed.x, placed.y)
            };
            // no perpendicular neighbor.
            if cross_word.tiles.len() >= 2 {
                words.push(cross_word);
            }
        }

        words
    }

    // The run of occupied cells through idx along the lane, scored.
    // Premiums only count under tiles placed this turn.
    fn word_through(
        &self,
        board: &board::Board,
        turn: &turn_buffer::TurnBuffer,
        down: bool,
        lane: i8,
        idx: i8,
    ) -> FormedWord {
        let strider = board.dim().lane(down, lane);
        let tile_at = |i: i8| -> (u8, bool) {
            let cell = strider.at(i);
            match board.tiles()[cell] {
                0 => turn
                    .tile_at_index(cell)
                    .map_or((0, false), |tile| (tile, true)),
                tile => (tile, false),
            }
        };

        let mut start = idx;
        while start > 0 && tile_at(start - 1).0 != 0 {
            start -= 1;
        }

        let mut word = FormedWord {
            text: String::new(),
            down,
            tiles: Vec::new(),
            score: 0,
        };
        let mut word_multiplier = 1i32;
        for i in start..strider.len() {
            let (tile, is_new) = tile_at(i);
            if tile == 0 {
                break;
            }
            let (x, y) = matrix::Dim::lane_xy(down, lane, i);
            let mut tile_score = self.alphabet.score(tile) as i32;
            if is_new {
                let premium = board.bonus_at(x, y).premium();
                tile_score *= premium.tile_multiplier as i32;
                // word bonuses compound, so a long lane of them saturates.
                word_multiplier = word_multiplier.saturating_mul(premium.word_multiplier as i32);
            }
            word.score = word.score.saturating_add(tile_score);
            word.text.push_str(self.alphabet.of_board(tile).unwrap_or("?"));
            word.tiles.push(WordTile { x, y, tile, is_new });
        }
        word.score = word.score.saturating_mul(word_multiplier);
        word
    }
}
