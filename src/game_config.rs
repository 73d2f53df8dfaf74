// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error, matrix};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_size: i8,
    pub rack_size: i8,
    pub bingo_bonus: i32,
    // main word only. cross words always need two letters.
    pub min_word_len: usize,
    pub allow_oversupply: bool,
    pub bonus_probability: f64,
    pub layout: board_layout::LayoutKind,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        make_english_game_config()
    }
}

pub fn make_english_game_config() -> GameConfig {
    GameConfig {
        board_size: 15,
        rack_size: 7,
        bingo_bonus: 50,
        min_word_len: 2,
        allow_oversupply: false,
        bonus_probability: 0.15,
        layout: board_layout::LayoutKind::Random,
        seed: None,
    }
}

impl GameConfig {
    #[inline(always)]
    pub fn alphabet(&self) -> &'static alphabet::Alphabet<'static> {
        &alphabet::ENGLISH_ALPHABET
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        matrix::Dim::square(self.board_size)
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i32 {
        if num_played >= self.rack_size as usize {
            self.bingo_bonus
        } else {
            0
        }
    }

    pub fn validate(&self) -> error::Returns<()> {
        if self.board_size < 1 {
            return_error!(format!("board_size must be positive, got {}", self.board_size));
        }
        if self.layout == board_layout::LayoutKind::Standard && self.board_size != 15 {
            return_error!(format!(
                "standard layout needs board_size 15, got {}",
                self.board_size
            ));
        }
        if self.rack_size < 1 {
            return_error!(format!("rack_size must be positive, got {}", self.rack_size));
        }
        if self.min_word_len < 1 {
            return_error!("min_word_len must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.bonus_probability) {
            return_error!(format!(
                "bonus_probability must be within 0..=1, got {}",
                self.bonus_probability
            ));
        }
        Ok(())
    }

    pub fn from_json(s: &str) -> error::Returns<Self> {
        let game_config = serde_json::from_str::<Self>(s)?;
        game_config.validate()?;
        Ok(game_config)
    }

    pub fn load<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let game_config = GameConfig::default();
        assert_eq!(game_config.dim(), matrix::Dim::square(15));
        assert_eq!(game_config.rack_size, 7);
        assert_eq!(game_config.min_word_len, 2);
        assert!(!game_config.allow_oversupply);
        assert!(game_config.validate().is_ok());
    }

    #[test]
    fn bingo_only_for_a_full_tray() {
        let game_config = GameConfig::default();
        assert_eq!(game_config.num_played_bonus(6), 0);
        assert_eq!(game_config.num_played_bonus(7), 50);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let game_config =
            GameConfig::from_json(r#"{ "seed": 42, "layout": "plain", "min_word_len": 1 }"#)
                .unwrap();
        assert_eq!(game_config.seed, Some(42));
        assert_eq!(game_config.layout, board_layout::LayoutKind::Plain);
        assert_eq!(game_config.min_word_len, 1);
        assert_eq!(game_config.bingo_bonus, 50);
    }

    #[test]
    fn bad_json_is_rejected() {
        assert!(GameConfig::from_json(r#"{ "rack_size": 0 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "bonus_probability": 1.5 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "layout": "standard", "board_size": 11 }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "layout": "hexagonal" }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "rack_sise": 7 }"#).is_err());
    }
}
