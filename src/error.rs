// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `chronosum` library.
//!
//! This module provides the error hierarchy for the calculator core:
//! operand text parsing and constrained-value construction.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when driving
/// the calculator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error occurred while parsing operand text.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors related to parsing duration operand text.
///
/// Operand text is produced by the calculator's own symbol-restricted
/// input buffer, so these errors indicate a caller feeding text to the
/// parser outside that contract. They fail fast rather than yielding a
/// wrong value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The operand text was empty.
    #[error("empty operand text")]
    Empty,

    /// The operand contained a character other than a digit, a colon,
    /// or a leading minus.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte position of the character in the operand text.
        position: usize,
    },

    /// The operand contained more than two `:` separators.
    #[error("operand has {count} ':' separators, at most 2 allowed")]
    TooManySeparators {
        /// Number of separators found.
        count: usize,
    },

    /// A field between separators was empty or not a valid number.
    #[error("failed to parse {field} field: {value:?}")]
    InvalidField {
        /// The field that failed to parse.
        field: &'static str,
        /// The text of the field.
        value: String,
    },
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A digit value is outside the valid range (0-9).
    #[error("digit value {0} is out of range [0, 9]")]
    InvalidDigit(u8),

    /// A character has no calculator symbol bound to it.
    #[error("character {0:?} is not bound to a calculator symbol")]
    UnknownSymbol(char),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
