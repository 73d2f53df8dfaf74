// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

pub static COMMAND_NAMES: &[&str] = &[
    "check", "end", "exit", "help", "json", "move", "place", "recall", "select", "show",
    "source", "trade", "withdraw",
];

#[derive(rustyline_derive::Helper)]
pub struct MyHelper {
    completer: rustyline::completion::FilenameCompleter,
    hinter: rustyline::hint::HistoryHinter,
}

// start of the word under the cursor, and whether it is the first word.
fn word_start(line: &str, pos: usize) -> (usize, bool) {
    let before = &line[..pos];
    let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
    (start, before[..start].trim().is_empty())
}

pub fn complete_command(line: &str, pos: usize) -> Option<(usize, Vec<String>)> {
    let (start, is_first_word) = word_start(line, pos);
    if !is_first_word {
        return None;
    }
    let prefix = &line[start..pos];
    Some((
        start,
        COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| name.to_string())
            .collect(),
    ))
}

impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<rustyline::completion::Pair>)> {
        match complete_command(line, pos) {
            Some((start, names)) => Ok((
                start,
                names
                    .into_iter()
                    .map(|name| rustyline::completion::Pair {
                        display: name.clone(),
                        replacement: name + " ",
                    })
                    .collect(),
            )),
            // file names for source, and for anything else too.
            None => self.completer.complete(line, pos, ctx),
        }
    }
}

impl rustyline::hint::Hinter for MyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl rustyline::highlight::Highlighter for MyHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }
}

impl rustyline::validate::Validator for MyHelper {}

pub type MyEditor = rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<MyEditor> {
    let mut rl = MyEditor::new()?;
    rl.set_helper(Some(MyHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        hinter: rustyline::hint::HistoryHinter {},
    }));
    Ok(rl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_command_names() {
        assert_eq!(
            complete_command("pl", 2),
            Some((0, vec!["place".to_string()]))
        );
        assert_eq!(
            complete_command("  s", 3),
            Some((2, vec!["select".into(), "show".into(), "source".into()]))
        );
        assert_eq!(complete_command("e", 1).map(|(_, v)| v.len()), Some(2));
    }

    #[test]
    fn arguments_are_not_commands() {
        assert_eq!(complete_command("source wor", 10), None);
        assert_eq!(complete_command("place 0 ", 8), None);
    }
}
