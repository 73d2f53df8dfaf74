// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, trie};

// A dictionary that may not be there yet. Until a trie is installed every
// word is accepted, and a failed load keeps it that way.
#[derive(Default)]
pub struct Lexicon {
    trie: std::sync::OnceLock<trie::Trie>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trie(trie: trie::Trie) -> Self {
        let lexicon = Self::new();
        lexicon.install(trie);
        lexicon
    }

    // first install wins.
    pub fn install(&self, trie: trie::Trie) -> bool {
        self.trie.set(trie).is_ok()
    }

    pub fn is_loaded(&self) -> bool {
        self.trie.get().is_some()
    }

    pub fn num_words(&self) -> usize {
        self.trie.get().map_or(0, |trie| trie.len())
    }

    pub fn validate(&self, word: &str) -> bool {
        match self.trie.get() {
            Some(trie) => {
                let is_valid = trie.search(word);
                log::debug!(
                    "dictionary result for {}: {}",
                    word,
                    if is_valid { "valid" } else { "invalid" }
                );
                is_valid
            }
            None => {
                log::debug!("dictionary not loaded, allowing word: {}", word);
                true
            }
        }
    }
}

// A JSON array of strings, or plain text with one word per line.
pub fn parse_wordlist(giant_string: &str) -> error::Returns<Vec<String>> {
    if giant_string.trim_start().starts_with('[') {
        let words = serde_json::from_str::<Vec<String>>(giant_string)?;
        Ok(words
            .into_iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect())
    } else {
        Ok(giant_string
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect())
    }
}

pub fn read_wordlist<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Vec<String>> {
    parse_wordlist(&std::fs::read_to_string(path)?)
}

pub fn load_trie<P: AsRef<std::path::Path>>(path: P) -> error::Returns<trie::Trie> {
    let words = read_wordlist(path)?;
    if words.is_empty() {
        return_error!("wordlist has no words".into());
    }
    Ok(trie::Trie::from_words(&words))
}

// Loads on the blocking pool and installs into the lexicon. Commands keep
// running meanwhile and see a fail-open dictionary until this finishes.
pub fn spawn_load(
    lexicon: std::sync::Arc<Lexicon>,
    path: std::path::PathBuf,
) -> tokio::task::JoinHandle<bool> {
    tokio::task::spawn_blocking(move || match load_trie(&path) {
        Ok(trie) => {
            let num_words = trie.len();
            if lexicon.install(trie) {
                log::info!(
                    "dictionary loaded successfully with {} words from {}",
                    num_words,
                    path.display()
                );
                true
            } else {
                log::warn!("dictionary already installed, ignoring {}", path.display());
                false
            }
        }
        Err(err) => {
            log::warn!(
                "failed to load dictionary from {}: {}; accepting all words",
                path.display(),
                err
            );
            false
        }
    })
}
