// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash for small integer keys such as
// cell indexes.

#[derive(Default)]
pub struct MyHasher(u64);

impl std::hash::Hasher for MyHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (std::num::Wrapping(self.0) * std::num::Wrapping(3467)).0 ^ (!b as u64);
        }
    }

    #[inline(always)]
    fn write_usize(&mut self, i: usize) {
        self.0 = (std::num::Wrapping(self.0 ^ i as u64) * std::num::Wrapping(0x9e3779b97f4a7c15)).0;
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashMap<K, V> = std::collections::HashMap<K, V, MyHasherDefault>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_indexes_hash_apart() {
        let mut map = MyHashMap::<usize, u8>::default();
        for idx in 0..225 {
            map.insert(idx, (idx % 26) as u8);
        }
        assert_eq!(map.len(), 225);
        assert_eq!(map.get(&112), Some(&8));
        assert_eq!(map.get(&225), None);
    }
}
