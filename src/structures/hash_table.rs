//! Hash table with separate chaining.

use crate::stepper::InputError;

/// Fixed-size bucket array; collisions chain in insertion order.
#[derive(Debug, Clone)]
pub struct ChainedHashTable {
    buckets: Vec<Vec<i64>>,
    items: usize,
}

impl ChainedHashTable {
    /// Create a table with `bucket_count` empty buckets.
    pub fn new(bucket_count: usize) -> Result<Self, InputError> {
        if bucket_count == 0 {
            return Err(InputError::NoBuckets);
        }
        Ok(Self {
            buckets: vec![Vec::new(); bucket_count],
            items: 0,
        })
    }

    /// The bucket a key hashes to: `key mod bucket_count`, non-negative.
    pub fn bucket_of(&self, key: i64) -> usize {
        key.rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Append `key` to its bucket's chain, returning the bucket index.
    pub fn insert(&mut self, key: i64) -> usize {
        let bucket = self.bucket_of(key);
        self.buckets[bucket].push(key);
        self.items += 1;
        bucket
    }

    /// Whether any bucket's chain holds `key`.
    pub fn contains(&self, key: i64) -> bool {
        self.buckets[self.bucket_of(key)].contains(&key)
    }

    /// The chain of one bucket, in insertion order.
    pub fn chain(&self, bucket: usize) -> &[i64] {
        &self.buckets[bucket]
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items
    }

    /// Whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Stored keys divided by bucket count.
    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.buckets.len() as f64
    }

    /// Length of the longest chain.
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}
