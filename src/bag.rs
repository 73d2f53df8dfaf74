// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

// The letter pool. Order carries no meaning; draws pick uniformly.
pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Bag(Vec::with_capacity(alphabet.num_tiles() as usize));
        bag.refill(alphabet);
        bag
    }

    // back to the full distribution, discarding whatever was left.
    pub fn refill(&mut self, alphabet: &alphabet::Alphabet) {
        self.0.clear();
        for tile in 1..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                self.0.push(tile);
            }
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn draw(&mut self, rng: &mut dyn RngCore) -> Option<u8> {
        if self.0.is_empty() {
            None
        } else {
            let idx = rng.random_range(0..self.0.len());
            Some(self.0.swap_remove(idx))
        }
    }

    pub fn put_back(&mut self, tile: u8) {
        self.0.push(tile);
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(bag: &Bag, tile: u8) -> usize {
        bag.0.iter().filter(|&&t| t == tile).count()
    }

    #[test]
    fn new_bag_has_full_distribution() {
        let bag = Bag::new(&alphabet::ENGLISH_ALPHABET);
        assert_eq!(bag.len(), 98);
        assert_eq!(count(&bag, 5), 12); // E
        assert_eq!(count(&bag, 17), 1); // Q
        assert_eq!(count(&bag, 0), 0);
    }

    #[test]
    fn draw_empties_without_replacement() {
        let alphabet = &alphabet::ENGLISH_ALPHABET;
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(3);
        let mut bag = Bag::new(alphabet);
        let mut tally = vec![0u8; alphabet.len() as usize];
        while let Some(tile) = bag.draw(&mut rng) {
            tally[tile as usize] += 1;
        }
        assert!(bag.is_empty());
        for tile in 1..alphabet.len() {
            assert_eq!(tally[tile as usize], alphabet.freq(tile));
        }
        assert_eq!(bag.draw(&mut rng), None);
    }

    #[test]
    fn put_back_then_refill() {
        let alphabet = &alphabet::ENGLISH_ALPHABET;
        let mut bag = Bag(Vec::new());
        bag.put_back(26);
        assert_eq!(bag.len(), 1);
        assert_eq!(count(&bag, 26), 1);
        bag.refill(alphabet);
        assert_eq!(bag.len(), 98);
        assert_eq!(count(&bag, 26), 1);
    }
}
