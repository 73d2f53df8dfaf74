// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

#[derive(Clone)]
pub struct Tray {
    tiles: Vec<u8>,
    capacity: usize,
}

impl Tray {
    pub fn new(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
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
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.tiles.len())
    }

    pub fn get(&self, index: usize) -> Result<u8, error::Rejection> {
        self.tiles
            .get(index)
            .copied()
            .ok_or(error::Rejection::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            })
    }

    // no capacity check. withdrawn tiles came from this tray.
    pub fn push(&mut self, tile: u8) {
        self.tiles.push(tile);
    }

    // keeps the order of the remaining tiles.
    pub fn take(&mut self, index: usize) -> Result<u8, error::Rejection> {
        self.get(index)?;
        Ok(self.tiles.remove(index))
    }

    // all or nothing. duplicate indices count once.
    pub fn take_many(&mut self, indices: &[usize]) -> Result<Vec<u8>, error::Rejection> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if let Some(&index) = sorted.last() {
            self.get(index)?;
        }
        Ok(sorted
            .iter()
            .rev()
            .map(|&index| self.tiles.remove(index))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tray_of(tiles: &[u8]) -> Tray {
        let mut tray = Tray::new(7);
        tiles.iter().for_each(|&tile| tray.push(tile));
        tray
    }

    #[test]
    fn take_keeps_order() {
        let mut tray = tray_of(&[8, 15, 18, 19, 5]);
        assert_eq!(tray.take(1), Ok(15));
        assert_eq!(tray.tiles(), &[8, 18, 19, 5]);
        assert_eq!(tray.free_slots(), 3);
    }

    #[test]
    fn take_out_of_range_is_rejected() {
        let mut tray = tray_of(&[8, 15]);
        assert_eq!(
            tray.take(2),
            Err(error::Rejection::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(tray.len(), 2);
    }

    #[test]
    fn take_many_is_all_or_nothing() {
        let mut tray = tray_of(&[1, 2, 3, 4]);
        assert_eq!(
            tray.take_many(&[0, 9]),
            Err(error::Rejection::IndexOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(tray.tiles(), &[1, 2, 3, 4]);
        let mut taken = tray.take_many(&[3, 0, 3]).unwrap();
        taken.sort_unstable();
        assert_eq!(taken, vec![1, 4]);
        assert_eq!(tray.tiles(), &[2, 3]);
    }
}
