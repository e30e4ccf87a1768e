// crates/engine/src/stats.rs
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Counters for one input source.
///
/// All four fields are always present; modes that skip decoding simply
/// leave the unneeded counters at zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub bytes: u64,
    pub chars: u64,
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
            bytes: self.bytes + rhs.bytes,
            chars: self.chars + rhs.chars,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Counts for one source together with its output label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub label: String,
    pub counts: Counts,
}

/// Outcome of a full engine run: successful reports in input order plus
/// per-source errors, collected side by side so one unreadable source
/// never aborts the rest.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<SourceReport>,
    pub errors: Vec<(String, EngineError)>,
}
