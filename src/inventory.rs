// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, bag, error, tray};
use rand::prelude::*;

// The pool and the tray. Tiles move between them, never in or out,
// except when oversupply lets the pool reset.
pub struct Inventory<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    pub bag: bag::Bag,
    pub tray: tray::Tray,
    allow_oversupply: bool,
}

impl<'a> Inventory<'a> {
    pub fn new(
        alphabet: &'a alphabet::Alphabet<'a>,
        rack_size: usize,
        allow_oversupply: bool,
    ) -> Self {
        Self {
            alphabet,
            bag: bag::Bag::new(alphabet),
            tray: tray::Tray::new(rack_size),
            allow_oversupply,
        }
    }

    // With oversupply allowed, a pool that cannot satisfy the draw is reset
    // to the full distribution even though copies of those letters are
    // still on the board or in the tray.
    pub fn replenish(&mut self, wanted: usize) -> bool {
        if self.allow_oversupply && self.bag.len() < wanted {
            log::warn!(
                "pool has {} tiles, {} wanted; resetting to full distribution",
                self.bag.len(),
                wanted
            );
            self.bag.refill(self.alphabet);
            true
        } else {
            false
        }
    }

    // Draws up to n, limited by the pool and by free tray slots.
    // Returns how many were drawn.
    pub fn draw_tiles(&mut self, rng: &mut dyn RngCore, n: usize) -> usize {
        let n = n.min(self.tray.free_slots());
        self.replenish(n);
        let mut drawn = 0;
        while drawn < n {
            match self.bag.draw(rng) {
                Some(tile) => {
                    self.tray.push(tile);
                    drawn += 1;
                }
                None => break,
            }
        }
        log::debug!(
            "drew {} of {} tiles, tray: {}",
            drawn,
            n,
            self.alphabet.fmt_rack(self.tray.tiles())
        );
        drawn
    }

    pub fn refill_tray(&mut self, rng: &mut dyn RngCore) -> usize {
        self.draw_tiles(rng, self.tray.free_slots())
    }

    pub fn return_to_pool(&mut self, tile: u8) {
        self.bag.put_back(tile);
    }

    // The caller checks that nothing is pending this turn.
    // Returns (traded, drawn).
    pub fn trade_tiles(
        &mut self,
        rng: &mut dyn RngCore,
        indices: &[usize],
    ) -> Result<(usize, usize), error::Rejection> {
        if indices.is_empty() {
            return Err(error::Rejection::NothingToTrade);
        }
        let traded = self.tray.take_many(indices)?;
        log::debug!("trading in {}", self.alphabet.fmt_rack(&traded));
        for &tile in traded.iter() {
            self.return_to_pool(tile);
        }
        Ok((traded.len(), self.draw_tiles(rng, traded.len())))
    }
}
