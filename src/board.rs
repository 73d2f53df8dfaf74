// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error, matrix};

// Committed letters only. Pending tiles live in the turn buffer.
#[derive(Clone)]
pub struct Board {
    layout: board_layout::BoardLayout,
    tiles: Box<[u8]>,
}

impl Board {
    pub fn new(layout: board_layout::BoardLayout) -> Self {
        let num_cells = layout.dim().num_cells();
        Self {
            layout,
            tiles: vec![0u8; num_cells].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.layout.dim()
    }

    #[inline(always)]
    pub fn layout(&self) -> &board_layout::BoardLayout {
        &self.layout
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    // false off the board, so nothing can be placed there.
    #[inline(always)]
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        self.dim().contains(x, y) && self.tiles[self.dim().at_xy(x, y)] == 0
    }

    #[inline(always)]
    pub fn letter_at(&self, x: i8, y: i8) -> Option<u8> {
        if self.dim().contains(x, y) {
            match self.tiles[self.dim().at_xy(x, y)] {
                0 => None,
                tile => Some(tile),
            }
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn bonus_at(&self, x: i8, y: i8) -> board_layout::Bonus {
        self.layout.bonus_at(x, y)
    }

    pub fn commit(&mut self, x: i8, y: i8, tile: u8) -> Result<(), error::Rejection> {
        let dim = self.dim();
        if !dim.contains(x, y) {
            return Err(error::Rejection::OutOfBounds { x, y });
        }
        let cell = &mut self.tiles[dim.at_xy(x, y)];
        if *cell != 0 {
            return Err(error::Rejection::OccupiedCell { x, y });
        }
        *cell = tile;
        Ok(())
    }

    // All or nothing: on the first refusal the cells already written are
    // emptied again. Returns how many were committed.
    pub fn commit_all<I: IntoIterator<Item = (i8, i8, u8)>>(
        &mut self,
        placements: I,
    ) -> Result<usize, error::Rejection> {
        let dim = self.dim();
        let mut written = Vec::new();
        for (x, y, tile) in placements {
            if let Err(rejection) = self.commit(x, y, tile) {
                for idx in written {
                    self.tiles[idx] = 0;
                }
                return Err(rejection);
            }
            written.push(dim.at_xy(x, y));
        }
        Ok(written.len())
    }

    pub fn num_committed(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_layout::{BoardLayout, Bonus};

    fn plain_board() -> Board {
        Board::new(BoardLayout::plain(matrix::Dim::square(15)))
    }

    #[test]
    fn commit_fills_cell_once() {
        let mut board = plain_board();
        assert!(board.is_empty(4, 9));
        board.commit(4, 9, 3).unwrap();
        assert!(!board.is_empty(4, 9));
        assert_eq!(board.letter_at(4, 9), Some(3));
        assert_eq!(
            board.commit(4, 9, 5),
            Err(error::Rejection::OccupiedCell { x: 4, y: 9 })
        );
        assert_eq!(board.letter_at(4, 9), Some(3));
        assert_eq!(board.num_committed(), 1);
    }

    #[test]
    fn cells_off_the_board_are_never_empty() {
        let mut board = plain_board();
        assert!(!board.is_empty(15, 0));
        assert!(!board.is_empty(0, -1));
        assert_eq!(board.letter_at(20, 20), None);
        assert_eq!(
            board.commit(-1, 0, 1),
            Err(error::Rejection::OutOfBounds { x: -1, y: 0 })
        );
    }

    #[test]
    fn commit_all_rolls_back_on_refusal() {
        let mut board = plain_board();
        board.commit(6, 7, 9).unwrap();
        assert_eq!(
            board.commit_all([(4, 7, 1), (5, 7, 2), (6, 7, 3), (7, 7, 4)]),
            Err(error::Rejection::OccupiedCell { x: 6, y: 7 })
        );
        assert_eq!(board.num_committed(), 1);
        assert!(board.is_empty(4, 7));
        assert!(board.is_empty(5, 7));
        assert_eq!(board.letter_at(6, 7), Some(9));
        // a cell repeated within one batch is refused too.
        assert_eq!(
            board.commit_all([(1, 1, 1), (1, 1, 2)]),
            Err(error::Rejection::OccupiedCell { x: 1, y: 1 })
        );
        assert!(board.is_empty(1, 1));
        assert_eq!(board.commit_all([(4, 7, 1), (5, 7, 2)]), Ok(2));
        assert_eq!(board.num_committed(), 3);
    }

    #[test]
    fn bonus_at_reads_layout() {
        let board = Board::new(
            BoardLayout::plain(matrix::Dim::square(15)).with_bonus(9, 7, Bonus::DoubleWord),
        );
        assert_eq!(board.bonus_at(9, 7), Bonus::DoubleWord);
        assert_eq!(board.bonus_at(8, 7), Bonus::None);
    }
}
