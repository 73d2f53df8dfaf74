// Copyright (C) 2020-2026 Andy Kurnia.

use super::game_state;
use std::fmt::Write;

// committed letters upper case, pending letters lower case, bonuses as
// '=' 3W, '-' 2W, '"' 3L, '\'' 2L.
#[inline(always)]
pub fn cell_label(cell: &game_state::CellView) -> String {
    match cell.letter {
        Some(label) if cell.pending => label.to_lowercase(),
        Some(label) => label.to_string(),
        None => cell.bonus.symbol().to_string(),
    }
}

fn write_column_header(s: &mut String, cols: usize) {
    s.push_str("  ");
    for c in 0..cols {
        let _ = write!(s, " {:x}", c % 16);
    }
    s.push('\n');
}

fn write_border(s: &mut String, cols: usize) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn board_to_string(snapshot: &game_state::Snapshot) -> String {
    let cols = snapshot.board.first().map_or(0, |row| row.len());
    let mut s = String::new();
    write_column_header(&mut s, cols);
    write_border(&mut s, cols);
    for (y, row) in snapshot.board.iter().enumerate() {
        let _ = write!(s, "{:2}|", y);
        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                s.push(' ');
            }
            s.push_str(&cell_label(cell));
        }
        let _ = writeln!(s, "|{}", y);
    }
    write_border(&mut s, cols);
    write_column_header(&mut s, cols);
    s
}

pub fn tray_to_string(snapshot: &game_state::Snapshot) -> String {
    let mut s = String::new();
    for (i, label) in snapshot.tray.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        if snapshot.selected == Some(i) {
            let _ = write!(s, "[{}:{}]", i, label);
        } else {
            let _ = write!(s, "{}:{}", i, label);
        }
    }
    s
}

pub fn summary_line(snapshot: &game_state::Snapshot) -> String {
    format!(
        "score: {}, turns: {}, pool: {}, {}",
        snapshot.score,
        snapshot.turns_played,
        snapshot.pool_size,
        if snapshot.dictionary_loaded {
            format!("dictionary: {} words", snapshot.dictionary_words)
        } else {
            "dictionary not loaded, all words accepted".into()
        }
    )
}

pub fn print_snapshot(snapshot: &game_state::Snapshot) {
    print!("{}", board_to_string(snapshot));
    println!("tray: {}", tray_to_string(snapshot));
    println!("{}", summary_line(snapshot));
    if !snapshot.status.is_empty() {
        println!("{}", snapshot.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_layout::Bonus;

    fn cell(letter: Option<&'static str>, pending: bool, bonus: Bonus) -> game_state::CellView {
        game_state::CellView {
            letter,
            pending,
            bonus,
        }
    }

    fn snapshot() -> game_state::Snapshot {
        game_state::Snapshot {
            board: vec![
                vec![
                    cell(None, false, Bonus::TripleWord),
                    cell(Some("H"), false, Bonus::DoubleLetter),
                    cell(None, false, Bonus::None),
                ],
                vec![
                    cell(None, false, Bonus::TripleLetter),
                    cell(Some("A"), true, Bonus::DoubleWord),
                    cell(None, false, Bonus::DoubleLetter),
                ],
                vec![
                    cell(None, false, Bonus::None),
                    cell(None, false, Bonus::None),
                    cell(None, false, Bonus::DoubleWord),
                ],
            ],
            tray: vec!["Q", "I"],
            selected: Some(1),
            score: 0,
            turns_played: 0,
            pool_size: 90,
            dictionary_loaded: true,
            dictionary_words: 178691,
            status: String::new(),
        }
    }

    #[test]
    fn board_shows_letters_and_bonuses() {
        let s = board_to_string(&snapshot());
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "   0 1 2");
        assert_eq!(lines[1], "  +-----+");
        assert_eq!(lines[2], " 0|= H  |0");
        assert_eq!(lines[3], " 1|\" a '|1");
        assert_eq!(lines[4], " 2|    -|2");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn summary_reports_dictionary_size() {
        let mut snapshot = snapshot();
        assert_eq!(
            summary_line(&snapshot),
            "score: 0, turns: 0, pool: 90, dictionary: 178691 words"
        );
        snapshot.dictionary_loaded = false;
        snapshot.dictionary_words = 0;
        assert!(summary_line(&snapshot).ends_with("dictionary not loaded, all words accepted"));
    }

    #[test]
    fn tray_marks_the_selection() {
        assert_eq!(tray_to_string(&snapshot()), "0:Q [1:I]");
    }
}
