// Copyright (C) 2020-2026 Andy Kurnia.

// Prefix tree over uppercased chars. Nodes live in one Vec; node 0 is the
// root. Children of a node form a singly linked sibling list, so lookup
// scans at most one alphabet's worth of siblings per char.

#[derive(Clone, Copy)]
struct Node {
    label: char,
    accepts: bool,
    arc_index: u32,  // first child, 0 if none
    next_index: u32, // next sibling, 0 if none
}

pub struct Trie {
    nodes: Vec<Node>,
    num_words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                label: '\0',
                accepts: false,
                arc_index: 0,
                next_index: 0,
            }],
            num_words: 0,
        }
    }

    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.build(words);
        trie
    }

    pub fn build<I: IntoIterator<Item = S>, S: AsRef<str>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    #[inline(always)]
    fn seek(&self, p: u32, label: char) -> Option<u32> {
        let mut q = self.nodes[p as usize].arc_index;
        while q != 0 {
            let node = &self.nodes[q as usize];
            if node.label == label {
                return Some(q);
            }
            q = node.next_index;
        }
        None
    }

    fn seek_or_insert(&mut self, p: u32, label: char) -> u32 {
        if let Some(q) = self.seek(p, label) {
            return q;
        }
        let q = self.nodes.len() as u32;
        self.nodes.push(Node {
            label,
            accepts: false,
            arc_index: 0,
            next_index: self.nodes[p as usize].arc_index,
        });
        self.nodes[p as usize].arc_index = q;
        q
    }

    // Idempotent. Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut p = 0;
        for label in word.chars().flat_map(char::to_uppercase) {
            p = self.seek_or_insert(p, label);
        }
        let node = &mut self.nodes[p as usize];
        if !node.accepts {
            node.accepts = true;
            self.num_words += 1;
        }
    }

    // Exact words only, not prefixes.
    pub fn search(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut p = 0;
        for label in word.chars().flat_map(char::to_uppercase) {
            match self.seek(p, label) {
                Some(q) => p = q,
                None => return false,
            }
        }
        self.nodes[p as usize].accepts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserted_words_are_found() {
        let trie = Trie::from_words(["horse", "HORSES", "Hose", "at", "eat"]);
        for word in ["HORSE", "horses", "HOSE", "AT", "Eat"] {
            assert!(trie.search(word), "{}", word);
        }
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn prefixes_and_strangers_are_not_words() {
        let trie = Trie::from_words(["HORSES", "EAT"]);
        assert!(!trie.search("HORSE"));
        assert!(!trie.search("H"));
        assert!(!trie.search("EATS"));
        assert!(!trie.search("TEA"));
        assert!(!trie.search(""));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("QI");
        let num_nodes = trie.nodes.len();
        trie.insert("qi");
        trie.insert("Qi");
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.nodes.len(), num_nodes);
        assert!(trie.search("QI"));
    }

    #[test]
    fn prefix_inserted_later_becomes_a_word() {
        let mut trie = Trie::from_words(["HORSES"]);
        assert!(!trie.search("HORSE"));
        trie.insert("HORSE");
        assert!(trie.search("HORSE"));
        assert!(trie.search("HORSES"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn empty_words_are_ignored() {
        let trie = Trie::from_words(["", "A"]);
        assert_eq!(trie.len(), 1);
        assert!(!trie.search(""));
        assert!(Trie::new().is_empty());
    }
}
