//! Session clock formatting and end-of-run grading.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    #[must_use]
    pub const fn remark(self) -> &'static str {
        match self {
            Self::S => "Perfect!",
            Self::A => "Excellent!",
            Self::B => "Good Job!",
            Self::C => "Not Bad!",
            Self::D => "Try Again!",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub const fn grade_for(total_score: u32) -> Grade {
    match total_score {
        900.. => Grade::S,
        800..=899 => Grade::A,
        700..=799 => Grade::B,
        600..=699 => Grade::C,
        _ => Grade::D,
    }
}

/// Whole seconds between two epoch-millisecond stamps; zero if the clock
/// went backwards.
#[must_use]
pub const fn elapsed_secs(start_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(start_ms) / 1000
}

/// `MM:SS`; minutes keep counting past 99.
#[must_use]
pub fn format_elapsed(start_ms: u64, now_ms: u64) -> String {
    let secs = elapsed_secs(start_ms, now_ms);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
