// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calculation history log.
//!
//! Every completed evaluation appends one or two entries to the
//! [`History`]: a fresh calculation contributes a divider line followed
//! by the new total, a chained operation contributes a full equation
//! line. The UI renders entries through their `Display` form and may
//! clear the stored log without touching the rest of the calculator.

use std::fmt;

use crate::types::{Duration, Sign};

/// Divider line separating rounds of calculation in the log.
const DIVIDER_LINE: &str = "------------------------";

/// A single line of the calculation history.
///
/// # Examples
///
/// ```
/// use chronosum::{Duration, HistoryEntry, Sign};
///
/// let entry = HistoryEntry::Equation {
///     total: Duration::new(0, 6, 30),
///     previous: Duration::new(0, 5, 30),
///     operator: Sign::Plus,
///     operand: Duration::new(0, 1, 0),
/// };
/// assert_eq!(entry.to_string(), "0:06:30 = 0:05:30 + 0:01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEntry {
    /// Separator marking the start of a fresh round of calculation.
    Divider,

    /// The total set by a fresh calculation.
    Result(Duration),

    /// A chained operation against the previous total.
    Equation {
        /// The new running total.
        total: Duration,
        /// The total before this operation.
        previous: Duration,
        /// The operator the user pressed.
        operator: Sign,
        /// The committed operand, in display (absolute) form.
        operand: Duration,
    },
}

impl HistoryEntry {
    /// Returns `true` if this is a divider line.
    #[must_use]
    pub const fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }

    /// Returns `true` if this is a fresh-calculation result line.
    #[must_use]
    pub const fn is_result(&self) -> bool {
        matches!(self, Self::Result(_))
    }

    /// Returns `true` if this is a chained-operation equation line.
    #[must_use]
    pub const fn is_equation(&self) -> bool {
        matches!(self, Self::Equation { .. })
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Divider => f.write_str(DIVIDER_LINE),
            Self::Result(total) => write!(f, "{total}"),
            Self::Equation {
                total,
                previous,
                operator,
                operand,
            } => write!(f, "{total} = {previous} {operator} {operand}"),
        }
    }
}

/// Append-only log of completed calculation steps.
///
/// # Examples
///
/// ```
/// use chronosum::{Calculator, Digit};
///
/// let mut calc = Calculator::new();
/// calc.digit(Digit::new(5).unwrap());
/// calc.equals()?;
///
/// let lines: Vec<String> = calc.history().lines().collect();
/// assert_eq!(lines[1], "0:00:05");
/// # Ok::<(), chronosum::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a new empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the log.
    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates over the rendered display lines in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries have been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deletes all entries.
    ///
    /// Clearing the log never affects the running total or the pending
    /// input.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
