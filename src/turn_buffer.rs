// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, fash, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PlacedTile {
    pub x: i8,
    pub y: i8,
    pub tile: u8,
}

// Tiles placed since the last commit. No two share a cell, and every cell
// was empty on the board when its tile went in.
pub struct TurnBuffer {
    dim: matrix::Dim,
    tiles: Vec<PlacedTile>,
    index: fash::MyHashMap<usize, usize>, // cell -> position in tiles
}

impl TurnBuffer {
    pub fn new(dim: matrix::Dim) -> Self {
        Self {
            dim,
            tiles: Vec::new(),
            index: fash::MyHashMap::default(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[PlacedTile] {
        &self.tiles
    }

    #[inline(always)]
    pub fn tile_at_index(&self, idx: usize) -> Option<u8> {
        self.index.get(&idx).map(|&i| self.tiles[i].tile)
    }

    #[inline(always)]
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        if self.dim.contains(x, y) {
            self.tile_at_index(self.dim.at_xy(x, y))
        } else {
            None
        }
    }

    fn check_target(&self, board: &board::Board, x: i8, y: i8) -> Result<(), error::Rejection> {
        if !self.dim.contains(x, y) {
            Err(error::Rejection::OutOfBounds { x, y })
        } else if !board.is_empty(x, y) || self.index.contains_key(&self.dim.at_xy(x, y)) {
            Err(error::Rejection::OccupiedCell { x, y })
        } else {
            Ok(())
        }
    }

    pub fn place(
        &mut self,
        board: &board::Board,
        x: i8,
        y: i8,
        tile: u8,
    ) -> Result<(), error::Rejection> {
        self.check_target(board, x, y)?;
        self.index.insert(self.dim.at_xy(x, y), self.tiles.len());
        self.tiles.push(PlacedTile { x, y, tile });
        Ok(())
    }

    pub fn withdraw(&mut self, x: i8, y: i8) -> Result<PlacedTile, error::Rejection> {
        let cell = self.dim.contains(x, y).then(|| self.dim.at_xy(x, y));
        let pos = cell
            .and_then(|cell| self.index.remove(&cell))
            .ok_or(error::Rejection::NoSuchPendingTile { x, y })?;
        let removed = self.tiles.swap_remove(pos);
        if let Some(moved) = self.tiles.get(pos) {
            self.index.insert(self.dim.at_xy(moved.x, moved.y), pos);
        }
        Ok(removed)
    }

    // checks everything before touching anything.
    pub fn move_tile(
        &mut self,
        board: &board::Board,
        from_x: i8,
        from_y: i8,
        to_x: i8,
        to_y: i8,
    ) -> Result<(), error::Rejection> {
        if self.get(from_x, from_y).is_none() {
            return Err(error::Rejection::NoSuchPendingTile {
                x: from_x,
                y: from_y,
            });
        }
        self.check_target(board, to_x, to_y)?;
        let pos = self.index[&self.dim.at_xy(from_x, from_y)];
        self.index.remove(&self.dim.at_xy(from_x, from_y));
        self.index.insert(self.dim.at_xy(to_x, to_y), pos);
        let placed = &mut self.tiles[pos];
        placed.x = to_x;
        placed.y = to_y;
        Ok(())
    }

    // the caller puts the letters back in the tray.
    pub fn clear(&mut self) -> Vec<PlacedTile> {
        self.index.clear();
        std::mem::take(&mut self.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_layout::BoardLayout;
    use error::Rejection;

    fn setup() -> (board::Board, TurnBuffer) {
        let dim = matrix::Dim::square(15);
        let mut board = board::Board::new(BoardLayout::plain(dim));
        board.commit(7, 7, 1).unwrap();
        (board, TurnBuffer::new(dim))
    }

    #[test]
    fn place_rejects_occupied_cells() {
        let (board, mut turn) = setup();
        assert_eq!(
            turn.place(&board, 7, 7, 2),
            Err(Rejection::OccupiedCell { x: 7, y: 7 })
        );
        assert!(turn.is_empty());
        turn.place(&board, 8, 7, 2).unwrap();
        assert_eq!(
            turn.place(&board, 8, 7, 3),
            Err(Rejection::OccupiedCell { x: 8, y: 7 })
        );
        assert_eq!(turn.len(), 1);
        assert_eq!(turn.get(8, 7), Some(2));
        assert_eq!(
            turn.place(&board, 15, 7, 3),
            Err(Rejection::OutOfBounds { x: 15, y: 7 })
        );
    }

    #[test]
    fn withdraw_only_pending_tiles() {
        let (board, mut turn) = setup();
        turn.place(&board, 8, 7, 2).unwrap();
        turn.place(&board, 9, 7, 3).unwrap();
        turn.place(&board, 10, 7, 4).unwrap();
        assert_eq!(
            turn.withdraw(7, 7),
            Err(Rejection::NoSuchPendingTile { x: 7, y: 7 })
        );
        assert_eq!(
            turn.withdraw(3, 3),
            Err(Rejection::NoSuchPendingTile { x: 3, y: 3 })
        );
        assert_eq!(
            turn.withdraw(8, 7),
            Ok(PlacedTile {
                x: 8,
                y: 7,
                tile: 2
            })
        );
        // the swapped-in entry must still be found.
        assert_eq!(turn.get(10, 7), Some(4));
        assert_eq!(turn.get(9, 7), Some(3));
        assert_eq!(turn.get(8, 7), None);
        assert_eq!(turn.len(), 2);
    }

    #[test]
    fn move_is_atomic() {
        let (board, mut turn) = setup();
        turn.place(&board, 8, 7, 2).unwrap();
        turn.place(&board, 9, 7, 3).unwrap();
        assert_eq!(
            turn.move_tile(&board, 8, 7, 7, 7),
            Err(Rejection::OccupiedCell { x: 7, y: 7 })
        );
        assert_eq!(
            turn.move_tile(&board, 8, 7, 9, 7),
            Err(Rejection::OccupiedCell { x: 9, y: 7 })
        );
        assert_eq!(
            turn.move_tile(&board, 7, 7, 7, 8),
            Err(Rejection::NoSuchPendingTile { x: 7, y: 7 })
        );
        assert_eq!(turn.get(8, 7), Some(2));
        turn.move_tile(&board, 8, 7, 7, 8).unwrap();
        assert_eq!(turn.get(8, 7), None);
        assert_eq!(turn.get(7, 8), Some(2));
        assert_eq!(turn.len(), 2);
        assert_eq!(turn.withdraw(7, 8).map(|t| t.tile), Ok(2));
    }

    #[test]
    fn clear_hands_back_everything() {
        let (board, mut turn) = setup();
        turn.place(&board, 8, 7, 2).unwrap();
        turn.place(&board, 7, 8, 3).unwrap();
        let cleared = turn.clear();
        assert_eq!(cleared.len(), 2);
        assert!(turn.is_empty());
        assert_eq!(turn.get(8, 7), None);
        turn.place(&board, 8, 7, 5).unwrap();
        assert_eq!(turn.get(8, 7), Some(5));
    }
}
