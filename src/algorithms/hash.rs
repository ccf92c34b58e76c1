//! Hash table insertion stepper; one step per key.

use crate::event::{Outcome, StepEvent, StepKind};
use crate::structures::ChainedHashTable;
use crate::stepper::{InputError, Stepper};

/// Inserts a batch of keys, one bucket event per key.
pub struct HashInsert {
    table: ChainedHashTable,
    keys: Vec<i64>,
    pos: usize,
}

impl HashInsert {
    pub fn new(table: ChainedHashTable, keys: Vec<i64>) -> Result<Self, InputError> {
        if keys.is_empty() {
            return Err(InputError::EmptySequence);
        }
        Ok(Self {
            table,
            keys,
            pos: 0,
        })
    }

    /// The table in its current state.
    pub fn table(&self) -> &ChainedHashTable {
        &self.table
    }

    /// Recover the table once stepping is finished.
    pub fn into_table(self) -> ChainedHashTable {
        self.table
    }
}

impl Stepper for HashInsert {
    fn next_event(&mut self) -> Option<StepEvent> {
        let &key = self.keys.get(self.pos)?;
        self.pos += 1;
        let bucket = self.table.insert(key);
        let chain_len = self.table.chain(bucket).len();
        Some(StepEvent::new(
            StepKind::Bucket {
                key,
                bucket,
                chain_len,
            },
            format!(
                "{key} mod {} = bucket {bucket} (chain length {chain_len})",
                self.table.bucket_count()
            ),
        ))
    }

    fn outcome(&self) -> Outcome {
        if self.pos == self.keys.len() {
            Outcome::Done
        } else {
            Outcome::InProgress
        }
    }
}
