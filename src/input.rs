// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pending input buffer.
//!
//! [`InputBuffer`] accumulates the raw symbols of the operand the user
//! is currently typing and enforces the placement rules that keep the
//! text parseable: at most one sign character, only at the front, and at
//! most two `:` separators. [`InputBuffer::expr`] classifies the buffer
//! into a [`PendingExpr`] so the calculator can dispatch on the shape of
//! the expression instead of inspecting raw characters.

use crate::types::{Digit, Sign};

/// The raw, not-yet-evaluated symbol buffer.
///
/// Edits report whether they actually changed the buffer, so callers
/// can skip change notifications for no-op edits.
///
/// # Examples
///
/// ```
/// use chronosum::{Digit, InputBuffer};
///
/// let mut buffer = InputBuffer::new();
/// buffer.push_digit(Digit::new(5).unwrap());
/// buffer.push_colon();
/// buffer.push_digit(Digit::new(3).unwrap());
/// assert_eq!(buffer.as_str(), "5:3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Creates a new empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit. Always changes the buffer.
    pub fn push_digit(&mut self, digit: Digit) -> bool {
        self.text.push(digit.as_char());
        true
    }

    /// Appends a `:` separator, supplying implied zero fields as needed.
    ///
    /// - On an empty buffer (or a bare sign), an implied leading zero
    ///   field is inserted: the buffer gains `"0:"`.
    /// - With fewer than two separators and a digit at the end, a plain
    ///   `":"` is appended.
    /// - With exactly one separator and no digit at the end, an implied
    ///   zero field is inserted before the new separator: `"00:"`. This
    ///   lets `5::` read as 5 hours, 0 minutes, seconds entry pending.
    /// - With two separators already present, the edit is a no-op.
    ///
    /// Returns whether the buffer changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronosum::InputBuffer;
    ///
    /// let mut buffer = InputBuffer::new();
    /// assert!(buffer.push_colon());
    /// assert_eq!(buffer.as_str(), "0:");
    /// assert!(buffer.push_colon());
    /// assert_eq!(buffer.as_str(), "0:00:");
    /// assert!(!buffer.push_colon());
    /// ```
    pub fn push_colon(&mut self) -> bool {
        if matches!(self.text.as_str(), "" | "+" | "-") {
            self.text.push_str("0:");
            return true;
        }
        let separators = self.text.matches(':').count();
        let ends_with_digit = self.text.ends_with(|c: char| c.is_ascii_digit());
        if separators < 2 && ends_with_digit {
            self.text.push(':');
            true
        } else if separators == 1 {
            self.text.push_str("00:");
            true
        } else {
            false
        }
    }

    /// Appends an operator sign.
    ///
    /// The calculator calls this only on an empty buffer (after the
    /// pending operand has been committed), so the sign lands at the
    /// front.
    pub fn push_sign(&mut self, sign: Sign) -> bool {
        self.text.push(sign.as_char());
        true
    }

    /// Removes the last character. Returns `false` on an empty buffer.
    pub fn delete(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Empties the buffer. Returns `false` if it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        true
    }

    /// Returns the buffered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the buffered length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Classifies the buffer by the shape of the pending expression.
    #[must_use]
    pub fn expr(&self) -> PendingExpr<'_> {
        match self.text.as_str() {
            "" => PendingExpr::Empty,
            "+" => PendingExpr::DanglingSign(Sign::Plus),
            "-" => PendingExpr::DanglingSign(Sign::Minus),
            text => {
                if let Some(rest) = text.strip_prefix('+') {
                    PendingExpr::Add(rest)
                } else if text.starts_with('-') {
                    // The whole text, sign included: the operand parses
                    // negative and subtraction becomes addition.
                    PendingExpr::Sub(text)
                } else {
                    PendingExpr::Operand(text)
                }
            }
        }
    }
}

/// The shape of the pending expression.
///
/// Produced by [`InputBuffer::expr`]; the calculator dispatches its
/// evaluation step on this instead of sniffing the first character of
/// the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingExpr<'a> {
    /// Nothing buffered.
    Empty,
    /// A bare `+` or `-` with no operand behind it.
    DanglingSign(Sign),
    /// An unsigned operand; evaluating it starts a fresh calculation.
    Operand(&'a str),
    /// A `+`-prefixed operand; the payload is the text after the sign.
    Add(&'a str),
    /// A `-`-prefixed operand; the payload is the whole text including
    /// the sign, so it parses as a negative duration.
    Sub(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn push_digit_appends() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.push_digit(digit(1)));
        assert!(buffer.push_digit(digit(2)));
        assert_eq!(buffer.as_str(), "12");
    }

    #[test]
    fn colon_on_empty_supplies_leading_zero() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.push_colon());
        assert_eq!(buffer.as_str(), "0:");
    }

    #[test]
    fn colon_on_bare_sign_supplies_leading_zero() {
        let mut buffer = InputBuffer::new();
        buffer.push_sign(Sign::Plus);
        assert!(buffer.push_colon());
        assert_eq!(buffer.as_str(), "+0:");

        let mut buffer = InputBuffer::new();
        buffer.push_sign(Sign::Minus);
        assert!(buffer.push_colon());
        assert_eq!(buffer.as_str(), "-0:");
    }

    #[test]
    fn colon_after_digit_appends_plain_separator() {
        let mut buffer = InputBuffer::new();
        buffer.push_digit(digit(5));
        assert!(buffer.push_colon());
        assert_eq!(buffer.as_str(), "5:");
    }

    #[test]
    fn double_colon_supplies_zero_field() {
        let mut buffer = InputBuffer::new();
        buffer.push_digit(digit(5));
        buffer.push_colon();
        assert!(buffer.push_colon());
        assert_eq!(buffer.as_str(), "5:00:");
    }

    #[test]
    fn third_colon_is_noop() {
        let mut buffer = InputBuffer::new();
        buffer.push_digit(digit(1));
        buffer.push_colon();
        buffer.push_digit(digit(2));
        buffer.push_colon();
        assert_eq!(buffer.as_str(), "1:2:");
        assert!(!buffer.push_colon());
        assert_eq!(buffer.as_str(), "1:2:");
    }

    #[test]
    fn colon_sequence_from_empty() {
        // ":" -> "0:", ":" -> "0:00:", ":" -> no-op
        let mut buffer = InputBuffer::new();
        buffer.push_colon();
        assert_eq!(buffer.as_str(), "0:");
        buffer.push_colon();
        assert_eq!(buffer.as_str(), "0:00:");
        assert!(!buffer.push_colon());
        assert_eq!(buffer.as_str(), "0:00:");
    }

    #[test]
    fn delete_trims_one_character() {
        let mut buffer = InputBuffer::new();
        buffer.push_digit(digit(1));
        buffer.push_colon();
        assert!(buffer.delete());
        assert_eq!(buffer.as_str(), "1");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut buffer = InputBuffer::new();
        assert!(!buffer.delete());
        assert_eq!(buffer.as_str(), "");
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_digit(digit(7));
        assert!(buffer.clear());
        assert!(buffer.is_empty());
        assert!(!buffer.clear());
    }

    #[test]
    fn len_reports_buffered_bytes() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.len(), 0);
        buffer.push_digit(digit(5));
        buffer.push_colon();
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn classify_empty() {
        assert_eq!(InputBuffer::new().expr(), PendingExpr::Empty);
    }

    #[test]
    fn classify_dangling_signs() {
        let mut buffer = InputBuffer::new();
        buffer.push_sign(Sign::Plus);
        assert_eq!(buffer.expr(), PendingExpr::DanglingSign(Sign::Plus));

        let mut buffer = InputBuffer::new();
        buffer.push_sign(Sign::Minus);
        assert_eq!(buffer.expr(), PendingExpr::DanglingSign(Sign::Minus));
    }

    #[test]
    fn classify_operand() {
        let mut buffer = InputBuffer::new();
        buffer.push_digit(digit(5));
        buffer.push_colon();
        buffer.push_digit(digit(3));
        assert_eq!(buffer.expr(), PendingExpr::Operand("5:3"));
    }

    #[test]
    fn classify_add_strips_sign() {
        let mut buffer = InputBuffer::new();
        buffer.push_sign(Sign::Plus);
        buffer.push_digit(digit(9));
        assert_eq!(buffer.expr(), PendingExpr::Add("9"));
    }

    #[test]
    fn classify_sub_keeps_sign() {
        let mut buffer = InputBuffer::new();
        buffer.push_sign(Sign::Minus);
        buffer.push_digit(digit(2));
        assert_eq!(buffer.expr(), PendingExpr::Sub("-2"));
    }

    #[test]
    fn classify_operand_with_leading_separator_field() {
        // A buffer beginning "0:" classifies as an operand even though
        // the zero was implied by the colon rule.
        let mut buffer = InputBuffer::new();
        buffer.push_colon();
        buffer.push_digit(digit(4));
        assert_eq!(buffer.expr(), PendingExpr::Operand("0:4"));
    }
}
