//! Bottom-up dynamic programming steppers; one step per table cell.
//!
//! Every fill event carries the recurrence operands and the resulting
//! value, so its description is reproducible without re-deriving it.

use crate::event::{Outcome, StepEvent, StepKind};
use crate::stepper::{InputError, Stepper};

/// Largest `n` with `fib(n)` representable in a `u64`.
const FIB_MAX: u64 = 93;

/// Largest `n` with `n!` representable in a `u64`.
const FACTORIAL_MAX: u64 = 20;

/// Fibonacci numbers filled into a 1-D table.
pub struct Fibonacci {
    n: usize,
    table: Vec<u64>,
}

impl Fibonacci {
    pub fn new(n: u64) -> Result<Self, InputError> {
        if n > FIB_MAX {
            return Err(InputError::OutOfRange {
                value: n,
                max: FIB_MAX,
            });
        }
        Ok(Self {
            n: n as usize,
            table: Vec::with_capacity(n as usize + 1),
        })
    }

    /// The table filled so far.
    pub fn table(&self) -> &[u64] {
        &self.table
    }
}

impl Stepper for Fibonacci {
    fn next_event(&mut self) -> Option<StepEvent> {
        let i = self.table.len();
        if i > self.n {
            return None;
        }
        let (value, inputs, description) = match i {
            0 => (0, vec![], "F(0) = 0".to_string()),
            1 => (1, vec![], "F(1) = 1".to_string()),
            _ => {
                let (a, b) = (self.table[i - 1], self.table[i - 2]);
                (
                    a + b,
                    vec![a, b],
                    format!("F({i}) = F({}) + F({}) = {a} + {b} = {}", i - 1, i - 2, a + b),
                )
            }
        };
        self.table.push(value);
        Some(StepEvent::new(
            StepKind::Fill {
                row: 0,
                col: i,
                value,
                inputs,
            },
            description,
        ))
    }

    fn outcome(&self) -> Outcome {
        match self.table.get(self.n) {
            Some(&value) => Outcome::Value { value },
            None => Outcome::InProgress,
        }
    }
}

/// Factorials filled into a 1-D table.
pub struct Factorial {
    n: usize,
    table: Vec<u64>,
}

impl Factorial {
    pub fn new(n: u64) -> Result<Self, InputError> {
        if n > FACTORIAL_MAX {
            return Err(InputError::OutOfRange {
                value: n,
                max: FACTORIAL_MAX,
            });
        }
        Ok(Self {
            n: n as usize,
            table: Vec::with_capacity(n as usize + 1),
        })
    }

    /// The table filled so far.
    pub fn table(&self) -> &[u64] {
        &self.table
    }
}

impl Stepper for Factorial {
    fn next_event(&mut self) -> Option<StepEvent> {
        let i = self.table.len();
        if i > self.n {
            return None;
        }
        let (value, inputs, description) = if i == 0 {
            (1, vec![], "0! = 1".to_string())
        } else {
            let prev = self.table[i - 1];
            let value = i as u64 * prev;
            (
                value,
                vec![i as u64, prev],
                format!("{i}! = {i} * {}! = {i} * {prev} = {value}", i - 1),
            )
        };
        self.table.push(value);
        Some(StepEvent::new(
            StepKind::Fill {
                row: 0,
                col: i,
                value,
                inputs,
            },
            description,
        ))
    }

    fn outcome(&self) -> Outcome {
        match self.table.get(self.n) {
            Some(&value) => Outcome::Value { value },
            None => Outcome::InProgress,
        }
    }
}

/// 0/1 knapsack over an items-by-capacity table.
pub struct Knapsack {
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: usize,
    table: Vec<Vec<u64>>,
    row: usize,
    col: usize,
}

impl Knapsack {
    pub fn new(weights: Vec<u64>, values: Vec<u64>, capacity: usize) -> Result<Self, InputError> {
        if weights.len() != values.len() {
            return Err(InputError::LengthMismatch {
                expected: weights.len(),
                got: values.len(),
            });
        }
        let rows = weights.len() + 1;
        Ok(Self {
            weights,
            values,
            capacity,
            table: vec![vec![0; capacity + 1]; rows],
            row: 1,
            col: 0,
        })
    }

    /// The table, including the zeroed base row.
    pub fn table(&self) -> &[Vec<u64>] {
        &self.table
    }
}

impl Stepper for Knapsack {
    fn next_event(&mut self) -> Option<StepEvent> {
        if self.row > self.weights.len() {
            return None;
        }
        let (i, j) = (self.row, self.col);
        let weight = self.weights[i - 1];
        let without = self.table[i - 1][j];
        let (value, inputs, description) = if weight as usize <= j {
            let with = self.values[i - 1] + self.table[i - 1][j - weight as usize];
            let best = without.max(with);
            (
                best,
                vec![without, with],
                format!(
                    "item {i} at capacity {j}: max(skip={without}, take={with}) = {best}"
                ),
            )
        } else {
            (
                without,
                vec![without],
                format!("item {i} (weight {weight}) does not fit capacity {j}; carry {without}"),
            )
        };
        self.table[i][j] = value;
        self.col += 1;
        if self.col > self.capacity {
            self.col = 0;
            self.row += 1;
        }
        Some(StepEvent::new(
            StepKind::Fill {
                row: i,
                col: j,
                value,
                inputs,
            },
            description,
        ))
    }

    fn outcome(&self) -> Outcome {
        if self.row > self.weights.len() {
            Outcome::Value {
                value: self.table[self.weights.len()][self.capacity],
            }
        } else {
            Outcome::InProgress
        }
    }
}

/// Longest common subsequence length over a 2-D table.
pub struct Lcs {
    a: Vec<char>,
    b: Vec<char>,
    table: Vec<Vec<u64>>,
    row: usize,
    col: usize,
}

impl Lcs {
    /// Build the stepper. Any pair of strings is valid input, including
    /// empty ones, which complete immediately at length zero.
    pub fn new(a: &str, b: &str) -> Result<Self, InputError> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let table = vec![vec![0; b.len() + 1]; a.len() + 1];
        Ok(Self {
            a,
            b,
            table,
            row: 1,
            col: 1,
        })
    }

    /// The table, including the zeroed base row and column.
    pub fn table(&self) -> &[Vec<u64>] {
        &self.table
    }

    fn finished(&self) -> bool {
        self.a.is_empty() || self.b.is_empty() || self.row > self.a.len()
    }
}

impl Stepper for Lcs {
    fn next_event(&mut self) -> Option<StepEvent> {
        if self.finished() {
            return None;
        }
        let (i, j) = (self.row, self.col);
        let (ca, cb) = (self.a[i - 1], self.b[j - 1]);
        let (value, inputs, description) = if ca == cb {
            let diag = self.table[i - 1][j - 1];
            (
                diag + 1,
                vec![diag],
                format!("'{ca}' matches: extend {diag} to {}", diag + 1),
            )
        } else {
            let up = self.table[i - 1][j];
            let left = self.table[i][j - 1];
            let best = up.max(left);
            (
                best,
                vec![up, left],
                format!("'{ca}' vs '{cb}': carry max({up}, {left}) = {best}"),
            )
        };
        self.table[i][j] = value;
        self.col += 1;
        if self.col > self.b.len() {
            self.col = 1;
            self.row += 1;
        }
        Some(StepEvent::new(
            StepKind::Fill {
                row: i,
                col: j,
                value,
                inputs,
            },
            description,
        ))
    }

    fn outcome(&self) -> Outcome {
        if self.finished() {
            Outcome::Value {
                value: self.table[self.a.len()][self.b.len()],
            }
        } else {
            Outcome::InProgress
        }
    }
}
