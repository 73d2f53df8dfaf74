// Copyright (C) 2020-2026 Andy Kurnia.

// x is the column, y is the row.

#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn square(size: i8) -> Self {
        Self {
            rows: size,
            cols: size,
        }
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn contains(&self, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && x < self.cols && y < self.rows
    }

    // the row y, walked by x.
    #[inline(always)]
    pub fn across(&self, y: i8) -> Strider {
        Strider {
            base: (y as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    // the column x, walked by y.
    #[inline(always)]
    pub fn down(&self, x: i8) -> Strider {
        Strider {
            base: x as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: i8) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    // (x, y) of position idx along lane.
    #[inline(always)]
    pub fn lane_xy(down: bool, lane: i8, idx: i8) -> (i8, i8) {
        if down { (lane, idx) } else { (idx, lane) }
    }

    #[inline(always)]
    pub fn at_xy(&self, x: i8, y: i8) -> usize {
        (((y as isize) * (self.cols as isize)) + (x as isize)) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn striders_walk_rows_and_columns() {
        let dim = Dim::square(15);
        let row = dim.across(7);
        assert_eq!(row.len(), 15);
        assert_eq!(row.at(5), dim.at_xy(5, 7));
        let col = dim.down(3);
        assert_eq!(col.at(10), dim.at_xy(3, 10));
        assert_eq!(Dim::lane_xy(true, 3, 10), (3, 10));
        assert_eq!(Dim::lane_xy(false, 7, 5), (5, 7));
    }

    #[test]
    fn contains_checks_both_axes() {
        let dim = Dim::square(15);
        assert!(dim.contains(0, 14));
        assert!(!dim.contains(15, 0));
        assert!(!dim.contains(-1, 3));
        assert_eq!(dim.num_cells(), 225);
    }
}
