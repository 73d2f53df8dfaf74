// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Bonus {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

static BONUS_KINDS: [Bonus; 4] = [
    Bonus::DoubleLetter,
    Bonus::TripleLetter,
    Bonus::DoubleWord,
    Bonus::TripleWord,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

impl Bonus {
    #[inline(always)]
    pub fn premium(self) -> Premium {
        match self {
            Bonus::None => Premium {
                word_multiplier: 1,
                tile_multiplier: 1,
            },
            Bonus::DoubleLetter => Premium {
                word_multiplier: 1,
                tile_multiplier: 2,
            },
            Bonus::TripleLetter => Premium {
                word_multiplier: 1,
                tile_multiplier: 3,
            },
            Bonus::DoubleWord => Premium {
                word_multiplier: 2,
                tile_multiplier: 1,
            },
            Bonus::TripleWord => Premium {
                word_multiplier: 3,
                tile_multiplier: 1,
            },
        }
    }

    // one-character label for an empty cell.
    pub fn symbol(self) -> char {
        match self {
            Bonus::None => ' ',
            Bonus::DoubleLetter => '\'',
            Bonus::TripleLetter => '"',
            Bonus::DoubleWord => '-',
            Bonus::TripleWord => '=',
        }
    }

    fn of_symbol(c: char) -> Option<Self> {
        BONUS_KINDS
            .iter()
            .chain(std::iter::once(&Bonus::None))
            .copied()
            .find(|bonus| bonus.symbol() == c)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Random,
    Standard,
    Plain,
}

// '=' 3W, '-' 2W, '"' 3L, '\'' 2L.
static STANDARD_LAYOUT: [&str; 15] = [
    r#"=  '   =   '  ="#,
    r#" -   "   "   - "#,
    r#"  -   ' '   -  "#,
    r#"'  -   '   -  '"#,
    r#"    -     -    "#,
    r#" "   "   "   " "#,
    r#"  '   ' '   '  "#,
    r#"=  '   -   '  ="#,
    r#"  '   ' '   '  "#,
    r#" "   "   "   " "#,
    r#"    -     -    "#,
    r#"'  -   '   -  '"#,
    r#"  -   ' '   -  "#,
    r#" -   "   "   - "#,
    r#"=  '   =   '  ="#,
];

// Fixed for the lifetime of a game.
#[derive(Clone)]
pub struct BoardLayout {
    dim: matrix::Dim,
    bonuses: Box<[Bonus]>,
}

impl BoardLayout {
    pub fn plain(dim: matrix::Dim) -> Self {
        Self {
            dim,
            bonuses: vec![Bonus::None; dim.num_cells()].into_boxed_slice(),
        }
    }

    // each cell independently gets a bonus with the given probability,
    // the kind picked uniformly among the four.
    pub fn random(dim: matrix::Dim, probability: f64, rng: &mut dyn RngCore) -> Self {
        let bonuses = (0..dim.num_cells())
            .map(|_| {
                if rng.random_bool(probability) {
                    BONUS_KINDS[rng.random_range(0..BONUS_KINDS.len())]
                } else {
                    Bonus::None
                }
            })
            .collect();
        Self { dim, bonuses }
    }

    pub fn standard() -> Self {
        let dim = matrix::Dim::square(STANDARD_LAYOUT.len() as i8);
        let bonuses = STANDARD_LAYOUT
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| Bonus::of_symbol(c).unwrap_or(Bonus::None))
            .collect();
        Self { dim, bonuses }
    }

    pub fn make(
        kind: LayoutKind,
        dim: matrix::Dim,
        probability: f64,
        rng: &mut dyn RngCore,
    ) -> Self {
        match kind {
            LayoutKind::Random => Self::random(dim, probability, rng),
            LayoutKind::Standard => Self::standard(),
            LayoutKind::Plain => Self::plain(dim),
        }
    }

    pub fn with_bonus(mut self, x: i8, y: i8, bonus: Bonus) -> Self {
        if self.dim.contains(x, y) {
            self.bonuses[self.dim.at_xy(x, y)] = bonus;
        }
        self
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }

    #[inline(always)]
    pub fn bonus_at(&self, x: i8, y: i8) -> Bonus {
        if self.dim.contains(x, y) {
            self.bonuses[self.dim.at_xy(x, y)]
        } else {
            Bonus::None
        }
    }
}
