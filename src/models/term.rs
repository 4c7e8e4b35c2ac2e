//! Academic term models.
//!
//! Terms follow a fixed four-term cycle within an academic year:
//! Fall → Winter → Spring → Summer. The academic year label advances when
//! the cycle wraps back to Fall.
//!
//! # Time Model
//! A planning horizon is an ordered list of [`TermSlot`]s. Slots are compared
//! by their position in the horizon ("term index"), never by calendar dates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A term within the academic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TermName {
    Fall,
    Winter,
    Spring,
    Summer,
}

impl TermName {
    /// The cycle in order. `CYCLE[0]` starts a new year.
    pub const CYCLE: [TermName; 4] = [
        TermName::Fall,
        TermName::Winter,
        TermName::Spring,
        TermName::Summer,
    ];

    /// Position of this term within [`TermName::CYCLE`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TermName::Fall => 0,
            TermName::Winter => 1,
            TermName::Spring => 2,
            TermName::Summer => 3,
        }
    }

    /// The term following this one, and whether the cycle wrapped.
    pub fn next(self) -> (TermName, bool) {
        let next = (self.index() + 1) % Self::CYCLE.len();
        (Self::CYCLE[next], next == 0)
    }

    /// Term name as displayed.
    pub fn as_str(self) -> &'static str {
        match self {
            TermName::Fall => "Fall",
            TermName::Winter => "Winter",
            TermName::Spring => "Spring",
            TermName::Summer => "Summer",
        }
    }
}

impl fmt::Display for TermName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (year, term) pair in which a course is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offering {
    pub year: i32,
    pub term: TermName,
}

impl Offering {
    pub fn new(year: i32, term: TermName) -> Self {
        Self { year, term }
    }
}

/// One term of the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermSlot {
    /// Academic year label.
    pub year: i32,
    /// Term within the year.
    pub term: TermName,
}

impl TermSlot {
    /// Creates a new slot.
    pub fn new(year: i32, term: TermName) -> Self {
        Self { year, term }
    }

    /// The slot immediately after this one, or `None` past the last
    /// representable year.
    pub fn succ(self) -> Option<Self> {
        let (term, wrapped) = self.term.next();
        let year = if wrapped {
            self.year.checked_add(1)?
        } else {
            self.year
        };
        Some(Self { year, term })
    }
}

impl fmt::Display for TermSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

/// Generates `count` consecutive slots starting at `start_year`/`start_term`.
///
/// The year increments exactly when the cycle wraps back to Fall. The
/// sequence ends early if the year would pass `i32::MAX`.
///
/// # Example
/// ```
/// use u_courseplan::models::{term_sequence, TermName, TermSlot};
///
/// let slots = term_sequence(2025, TermName::Summer, 2);
/// assert_eq!(slots[0], TermSlot::new(2025, TermName::Summer));
/// assert_eq!(slots[1], TermSlot::new(2026, TermName::Fall));
/// ```
pub fn term_sequence(start_year: i32, start_term: TermName, count: usize) -> Vec<TermSlot> {
    std::iter::successors(Some(TermSlot::new(start_year, start_term)), |s| s.succ())
        .take(count)
        .collect()
}
