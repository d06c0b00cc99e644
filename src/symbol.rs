// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calculator symbol events.
//!
//! A [`Symbol`] is one discrete key event the calculator consumes: a
//! digit, the `:` separator, an operator, `=`, delete, or clear. The UI
//! collaborator translates its own key and button events into symbols
//! (usually through [`Symbol::from_char`]) and feeds them to
//! [`Calculator::apply`](crate::Calculator::apply).

use std::fmt;

use crate::error::ValueError;
use crate::types::Digit;

/// A single calculator input event.
///
/// # Examples
///
/// ```
/// use chronosum::{Digit, Symbol};
///
/// assert_eq!(Symbol::from_char('7').unwrap(), Symbol::Digit(Digit::new(7).unwrap()));
/// assert_eq!(Symbol::from_char('+').unwrap(), Symbol::Plus);
/// assert!(Symbol::from_char('x').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A decimal digit key.
    Digit(Digit),
    /// The `:` field separator key.
    Colon,
    /// The `+` operator key.
    Plus,
    /// The `-` operator key.
    Minus,
    /// The `=` key; commits the pending input.
    Equals,
    /// The delete key; removes the last buffered character.
    Delete,
    /// The clear key; empties the pending input.
    Clear,
}

impl Symbol {
    /// Maps a keyboard character to its symbol.
    ///
    /// Bindings: `'0'`-`'9'`, `':'`, `'+'`, `'-'`, `'='`, backspace and
    /// DEL for [`Symbol::Delete`], and `'c'`/`'C'` for [`Symbol::Clear`].
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownSymbol` for any other character.
    pub fn from_char(c: char) -> Result<Self, ValueError> {
        match c {
            '0'..='9' => Ok(Self::Digit(Digit::from_char(c)?)),
            ':' => Ok(Self::Colon),
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Minus),
            '=' => Ok(Self::Equals),
            '\u{8}' | '\u{7f}' => Ok(Self::Delete),
            'c' | 'C' => Ok(Self::Clear),
            _ => Err(ValueError::UnknownSymbol(c)),
        }
    }

    /// Returns `true` if this is the `+` or `-` operator key.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::Colon => f.write_str(":"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Equals => f.write_str("="),
            Self::Delete => f.write_str("delete"),
            Self::Clear => f.write_str("clear"),
        }
    }
}
