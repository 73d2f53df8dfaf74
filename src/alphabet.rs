// Copyright (C) 2020-2026 Andy Kurnia.

// tile 0 is reserved for "no tile". tiles 1..=26 are A..Z.

pub struct Tile<'a> {
    label: &'a str,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn of_board(&self, idx: u8) -> Option<&'a str> {
        if idx == 0 || idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        if idx < self.len() {
            self.get(idx).score
        } else {
            0
        }
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    pub fn num_tiles(&self) -> u16 {
        (1..self.len()).map(|tile| self.freq(tile) as u16).sum()
    }

    // case-insensitive.
    pub fn tile_of(&self, c: char) -> Option<u8> {
        let mut buf = [0u8; 4];
        let upper = &*c.to_ascii_uppercase().encode_utf8(&mut buf);
        (1..self.len()).find(|&tile| self.get(tile).label == upper)
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter()
            .filter_map(|&tile| self.of_board(tile))
            .collect::<String>()
    }
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        Tile {
            label: ".",
            freq: 0,
            score: 0,
        },
        Tile {
            label: "A",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "B",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "C",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "D",
            freq: 4,
            score: 2,
        },
        Tile {
            label: "E",
            freq: 12,
            score: 1,
        },
        Tile {
            label: "F",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "G",
            freq: 3,
            score: 2,
        },
        Tile {
            label: "H",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "I",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "J",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "K",
            freq: 1,
            score: 5,
        },
        Tile {
            label: "L",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "M",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "N",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "O",
            freq: 8,
            score: 1,
        },
        Tile {
            label: "P",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "Q",
            freq: 1,
            score: 10,
        },
        Tile {
            label: "R",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "S",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "T",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "U",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "V",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "W",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "X",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "Y",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "Z",
            freq: 1,
            score: 10,
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_distribution_has_98_tiles() {
        assert_eq!(ENGLISH_ALPHABET.len(), 27);
        assert_eq!(ENGLISH_ALPHABET.num_tiles(), 98);
    }

    #[test]
    fn letter_values_follow_the_table() {
        let a = &ENGLISH_ALPHABET;
        let score_of = |c| a.score(a.tile_of(c).unwrap());
        assert_eq!(score_of('H'), 4);
        assert_eq!(score_of('K'), 5);
        assert_eq!(score_of('x'), 8);
        assert_eq!(score_of('Q'), 10);
        assert_eq!(score_of('d'), 2);
    }

    #[test]
    fn tile_of_rejects_non_letters() {
        assert_eq!(ENGLISH_ALPHABET.tile_of('?'), None);
        assert_eq!(ENGLISH_ALPHABET.tile_of('.'), None);
        assert_eq!(ENGLISH_ALPHABET.tile_of('a'), Some(1));
        assert_eq!(ENGLISH_ALPHABET.tile_of('Z'), Some(26));
    }

    #[test]
    fn fmt_rack_skips_empty() {
        assert_eq!(ENGLISH_ALPHABET.fmt_rack(&[8, 0, 15]), "HO");
    }
}
