//! Linear and binary search steppers.

use crate::event::{Outcome, StepEvent, StepKind};
use crate::stepper::{InputError, Stepper};

/// Left-to-right scan; one step per element examined.
///
/// Terminates on the lowest matching index or on exhaustion.
pub struct LinearSearch {
    seq: Vec<i64>,
    target: i64,
    pos: usize,
    found: Option<usize>,
    done: bool,
}

impl LinearSearch {
    /// Validate the input and build the stepper.
    pub fn new(seq: &[i64], target: i64) -> Result<Self, InputError> {
        if seq.is_empty() {
            return Err(InputError::EmptySequence);
        }
        Ok(Self {
            seq: seq.to_vec(),
            target,
            pos: 0,
            found: None,
            done: false,
        })
    }
}

impl Stepper for LinearSearch {
    fn next_event(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        let index = self.pos;
        let value = self.seq[index];
        if value == self.target {
            self.found = Some(index);
            self.done = true;
        } else {
            self.pos += 1;
            if self.pos == self.seq.len() {
                self.done = true;
            }
        }
        Some(StepEvent::new(
            StepKind::Examine { index, value },
            format!("examine a[{index}]={value} against target {}", self.target),
        ))
    }

    fn outcome(&self) -> Outcome {
        if !self.done {
            Outcome::InProgress
        } else {
            match self.found {
                Some(index) => Outcome::FoundAt { index },
                None => Outcome::NotFound,
            }
        }
    }
}

/// Halving search over a **pre-sorted** sequence; one step per midpoint.
///
/// Sortedness is a precondition, not a checked property: on unsorted input
/// the stepper still terminates but its answer is silently wrong. That
/// matches the behavior being visualized and is deliberate.
pub struct BinarySearch {
    seq: Vec<i64>,
    target: i64,
    low: usize,
    high: usize,
    found: Option<usize>,
    done: bool,
}

impl BinarySearch {
    /// Validate the input and build the stepper.
    pub fn new(seq: &[i64], target: i64) -> Result<Self, InputError> {
        if seq.is_empty() {
            return Err(InputError::EmptySequence);
        }
        Ok(Self {
            seq: seq.to_vec(),
            target,
            low: 0,
            high: seq.len() - 1,
            found: None,
            done: false,
        })
    }
}

impl Stepper for BinarySearch {
    fn next_event(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        let (low, high) = (self.low, self.high);
        let mid = (low + high) / 2;
        let value = self.seq[mid];
        if value == self.target {
            self.found = Some(mid);
            self.done = true;
        } else if value < self.target {
            self.low = mid + 1;
            if self.low > self.high {
                self.done = true;
            }
        } else if mid == 0 {
            // Interval would move below index 0.
            self.done = true;
        } else {
            self.high = mid - 1;
            if self.low > self.high {
                self.done = true;
            }
        }
        Some(StepEvent::new(
            StepKind::Probe {
                low,
                high,
                mid,
                value,
            },
            format!("probe a[{mid}]={value} in [{low}, {high}] for {}", self.target),
        ))
    }

    fn outcome(&self) -> Outcome {
        if !self.done {
            Outcome::InProgress
        } else {
            match self.found {
                Some(index) => Outcome::FoundAt { index },
                None => Outcome::NotFound,
            }
        }
    }
}
