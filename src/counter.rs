use std::collections::{BTreeMap, HashMap};

use fnv::FnvHashMap;

pub trait WordCounter: Default {
    fn add(&mut self, word: &str);
    fn distinct(&self) -> usize;
    fn total(&self) -> u64;
}

impl WordCounter for HashMap<String, u64> {
    fn add(&mut self, word: &str) {
        // Allocate the owned key only when the word is first seen
        if let Some(count) = self.get_mut(word) {
            *count += 1;
        } else {
            self.insert(word.to_owned(), 1);
        }
    }

    fn distinct(&self) -> usize {
        self.len()
    }

    fn total(&self) -> u64 {
        self.values().sum()
    }
}

impl WordCounter for FnvHashMap<String, u64> {
    fn add(&mut self, word: &str) {
        if let Some(count) = self.get_mut(word) {
            *count += 1;
        } else {
            self.insert(word.to_owned(), 1);
        }
    }

    fn distinct(&self) -> usize {
        self.len()
    }

    fn total(&self) -> u64 {
        self.values().sum()
    }
}

impl WordCounter for BTreeMap<String, u64> {
    fn add(&mut self, word: &str) {
        if let Some(count) = self.get_mut(word) {
            *count += 1;
        } else {
            self.insert(word.to_owned(), 1);
        }
    }

    fn distinct(&self) -> usize {
        self.len()
    }

    fn total(&self) -> u64 {
        self.values().sum()
    }
}
