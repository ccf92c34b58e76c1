//! Trie insert and search steppers; one step per character.

use crate::event::{Outcome, StepEvent, StepKind};
use crate::structures::Trie;
use crate::stepper::{InputError, Stepper};

/// Inserts a word one character per step, creating nodes as needed.
pub struct TrieInsert {
    trie: Trie,
    chars: Vec<char>,
    pos: usize,
}

impl TrieInsert {
    pub fn new(trie: Trie, word: &str) -> Result<Self, InputError> {
        if word.is_empty() {
            return Err(InputError::EmptyWord);
        }
        Ok(Self {
            trie,
            chars: word.chars().collect(),
            pos: 0,
        })
    }

    /// The trie in its current state.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Recover the trie once stepping is finished.
    pub fn into_trie(self) -> Trie {
        self.trie
    }
}

impl Stepper for TrieInsert {
    fn next_event(&mut self) -> Option<StepEvent> {
        if self.pos == self.chars.len() {
            return None;
        }
        let ch = self.chars[self.pos];
        // Re-walk the already-inserted prefix; words are short.
        let mut node = &mut self.trie.root;
        for &c in &self.chars[..self.pos] {
            node = node.children.entry(c).or_default();
        }
        let created = !node.children.contains_key(&ch);
        let node = node.children.entry(ch).or_default();
        self.pos += 1;
        if self.pos == self.chars.len() && !node.is_end {
            node.is_end = true;
            self.trie.mark_inserted();
        }
        Some(StepEvent::new(
            StepKind::Advance { ch, created },
            if created {
                format!("create node for '{ch}' and advance")
            } else {
                format!("advance along existing edge '{ch}'")
            },
        ))
    }

    fn outcome(&self) -> Outcome {
        if self.pos == self.chars.len() {
            Outcome::Done
        } else {
            Outcome::InProgress
        }
    }
}

/// Searches for a word one character per step.
///
/// A missing edge ends the run with a miss event; consuming the whole word
/// reports whether the final node is marked as a word end.
pub struct TrieSearch<'t> {
    trie: &'t Trie,
    chars: Vec<char>,
    pos: usize,
    result: Option<bool>,
}

impl<'t> TrieSearch<'t> {
    pub fn new(trie: &'t Trie, word: &str) -> Result<Self, InputError> {
        if word.is_empty() {
            return Err(InputError::EmptyWord);
        }
        Ok(Self {
            trie,
            chars: word.chars().collect(),
            pos: 0,
            result: None,
        })
    }
}

impl Stepper for TrieSearch<'_> {
    fn next_event(&mut self) -> Option<StepEvent> {
        if self.result.is_some() {
            return None;
        }
        let ch = self.chars[self.pos];
        let prefix: String = self.chars[..self.pos].iter().collect();
        // The prefix exists: every previous step advanced along it.
        let node = self.trie.walk(&prefix)?;
        match node.children.get(&ch) {
            None => {
                self.result = Some(false);
                Some(StepEvent::new(
                    StepKind::Miss { ch },
                    format!("no edge for '{ch}'; word is absent"),
                ))
            }
            Some(child) => {
                self.pos += 1;
                if self.pos == self.chars.len() {
                    self.result = Some(child.is_end);
                }
                Some(StepEvent::new(
                    StepKind::Advance { ch, created: false },
                    format!("advance along edge '{ch}'"),
                ))
            }
        }
    }

    fn outcome(&self) -> Outcome {
        match self.result {
            Some(found) => Outcome::Present { found },
            None => Outcome::InProgress,
        }
    }
}
