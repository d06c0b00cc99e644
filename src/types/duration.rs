// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signed hours:minutes:seconds duration value.
//!
//! This module provides [`Duration`], the calculator's value model: a
//! signed quantity of hours, minutes, and seconds kept in canonical
//! base-60 normalized form.
//!
//! # Canonical form
//!
//! Minutes and seconds are always in `[0, 59]`, hours is non-negative,
//! and the sign flag is set only for nonzero quantities (there is no
//! negative zero). The textual form is `[-]H:MM:SS` with unpadded hours
//! and zero-padded minutes and seconds.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParseError;

/// Field names for parse diagnostics, right-to-left like the fields.
const FIELD_NAMES: [&str; 3] = ["seconds", "minutes", "hours"];

/// A signed duration in normalized hours:minutes:seconds form.
///
/// All operations are pure: parsing, arithmetic, and sign manipulation
/// produce new values and never mutate their operands. Arithmetic is
/// performed by collapsing both operands to a single signed seconds
/// count, combining, and re-normalizing, so base-60 borrow and carry
/// never have to be handled across multiple fields.
///
/// # Examples
///
/// ```
/// use chronosum::Duration;
///
/// // Parse from the calculator's operand syntax
/// let d: Duration = "5:3".parse().unwrap();
/// assert_eq!(d.to_string(), "0:05:30");
///
/// // Raw seconds normalize on construction
/// let d = Duration::from_signed_seconds(90);
/// assert_eq!(d.to_string(), "0:01:30");
///
/// // Arithmetic through signed seconds
/// let sum = "1:30:00".parse::<Duration>().unwrap() + "0:45:00".parse::<Duration>().unwrap();
/// assert_eq!(sum.to_string(), "2:15:00");
///
/// // Subtraction below zero yields a negative duration
/// let diff = Duration::from_signed_seconds(10) - Duration::from_signed_seconds(25);
/// assert_eq!(diff.to_string(), "-0:00:15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    /// True for nonzero quantities below zero.
    negative: bool,
    /// Whole hours, non-negative.
    hours: i64,
    /// Minutes past the hour (0-59).
    minutes: u8,
    /// Seconds past the minute (0-59).
    seconds: u8,
}

impl Duration {
    /// The zero duration. Always non-negative.
    pub const ZERO: Self = Self {
        negative: false,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a duration from non-negative raw field values.
    ///
    /// Fields outside base-60 range carry upward: 90 seconds become
    /// 1 minute 30 seconds, 90 minutes become 1 hour 30 minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronosum::Duration;
    ///
    /// let d = Duration::new(1, 2, 3);
    /// assert_eq!(d.to_string(), "1:02:03");
    ///
    /// let carried = Duration::new(0, 90, 90);
    /// assert_eq!(carried.to_string(), "1:31:30");
    /// ```
    #[must_use]
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        let total =
            i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds);
        Self::from_signed_seconds(total)
    }

    /// Creates a duration from a single signed seconds count.
    ///
    /// This is the canonical construction: the count is split into
    /// hours, minutes, and seconds, and the sign flag is set iff the
    /// count is negative. Zero is always non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronosum::Duration;
    ///
    /// let d = Duration::from_signed_seconds(-3723);
    /// assert_eq!(d.to_string(), "-1:02:03");
    /// assert!(d.is_negative());
    ///
    /// assert!(!Duration::from_signed_seconds(0).is_negative());
    /// ```
    #[must_use]
    pub fn from_signed_seconds(secs: i64) -> Self {
        let magnitude = secs.unsigned_abs();
        // Truncation and wrap are safe: minutes/seconds are below 60 and
        // magnitude / 3600 is at most 2^63 / 3600.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        Self {
            negative: secs < 0,
            hours: (magnitude / 3600) as i64,
            minutes: ((magnitude % 3600) / 60) as u8,
            seconds: (magnitude % 60) as u8,
        }
    }

    /// Returns the whole duration as a signed seconds count.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronosum::Duration;
    ///
    /// assert_eq!(Duration::new(1, 2, 3).as_signed_seconds(), 3723);
    /// assert_eq!(Duration::from_signed_seconds(-90).as_signed_seconds(), -90);
    /// ```
    #[must_use]
    pub const fn as_signed_seconds(&self) -> i64 {
        let magnitude = self.hours * 3600 + self.minutes as i64 * 60 + self.seconds as i64;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Returns this duration with the sign cleared.
    ///
    /// The magnitude is unchanged; the fields are already non-negative.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self {
            negative: false,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }

    /// Returns `true` if the duration is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the duration is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Returns the whole hours component.
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// Returns the minutes component (0-59).
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns the seconds component (0-59).
    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    /// Parses the calculator's operand syntax.
    ///
    /// The contract: an optional leading `-`, then ASCII digits with at
    /// most two `:` separators. A trailing separator implies a zero
    /// final field, so `"5:"` reads as `5:0` and `"5:3:"` as `5:3:0`.
    /// Fields are read right-to-left as seconds, minutes, hours; missing
    /// leading fields are zero. The result is normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }

        for (position, character) in digits.char_indices() {
            if !character.is_ascii_digit() && character != ':' {
                return Err(ParseError::InvalidCharacter {
                    character,
                    position: position + usize::from(negative),
                });
            }
        }

        let separators = digits.matches(':').count();
        if separators > 2 {
            return Err(ParseError::TooManySeparators { count: separators });
        }

        let mut fields: Vec<&str> = digits.split(':').collect();
        // A trailing separator means the final field was left implied.
        if let Some(last) = fields.last_mut()
            && last.is_empty()
        {
            *last = "0";
        }

        // Right-to-left: seconds, then minutes, then hours.
        let mut values = [0_i64; 3];
        for (slot, field) in fields.iter().rev().enumerate() {
            values[slot] = field.parse().map_err(|_| ParseError::InvalidField {
                field: FIELD_NAMES[slot],
                value: (*field).to_string(),
            })?;
        }
        let [seconds, minutes, hours] = values;

        let magnitude = hours * 3600 + minutes * 60 + seconds;
        let total = if negative { -magnitude } else { magnitude };
        Ok(Self::from_signed_seconds(total))
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_signed_seconds(self.as_signed_seconds() + rhs.as_signed_seconds())
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_signed_seconds(self.as_signed_seconds() - rhs.as_signed_seconds())
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_signed_seconds().cmp(&other.as_signed_seconds())
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl serde::Serialize for Duration {
    /// Serializes as the canonical `[-]H:MM:SS` string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DurationVisitor;

        impl serde::de::Visitor<'_> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a duration string in [-]H:MM:SS form")
            }

            fn visit_str<E>(self, v: &str) -> Result<Duration, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Construction and normalization
    // -------------------------------------------------------------------------

    #[test]
    fn zero_is_default_and_non_negative() {
        assert_eq!(Duration::default(), Duration::ZERO);
        assert!(!Duration::ZERO.is_negative());
        assert!(Duration::ZERO.is_zero());
    }

    #[test]
    fn new_normalizes_fields() {
        let d = Duration::new(0, 90, 90);
        assert_eq!(d.hours(), 1);
        assert_eq!(d.minutes(), 31);
        assert_eq!(d.seconds(), 30);
    }

    #[test]
    fn from_signed_seconds_positive() {
        let d = Duration::from_signed_seconds(3723);
        assert_eq!(d.hours(), 1);
        assert_eq!(d.minutes(), 2);
        assert_eq!(d.seconds(), 3);
        assert!(!d.is_negative());
    }

    #[test]
    fn from_signed_seconds_negative() {
        let d = Duration::from_signed_seconds(-90);
        assert!(d.is_negative());
        assert_eq!(d.minutes(), 1);
        assert_eq!(d.seconds(), 30);
    }

    #[test]
    fn normalization_closure() {
        for s in [-1_000_000, -3661, -60, -1, 0, 1, 59, 60, 3599, 86_401] {
            let d = Duration::from_signed_seconds(s);
            assert!(d.minutes() < 60);
            assert!(d.seconds() < 60);
            assert!(d.hours() >= 0);
            assert_eq!(d.is_negative(), s < 0);
            assert_eq!(d.as_signed_seconds(), s);
        }
    }

    #[test]
    fn no_negative_zero() {
        assert!(!Duration::from_signed_seconds(0).is_negative());
        assert_eq!("-0".parse::<Duration>().unwrap(), Duration::ZERO);
        assert_eq!("-0:0:0".parse::<Duration>().unwrap(), Duration::ZERO);
    }

    // -------------------------------------------------------------------------
    // Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn parse_seconds_only() {
        let d: Duration = "90".parse().unwrap();
        assert_eq!(d, Duration::new(0, 1, 30));
    }

    #[test]
    fn parse_minutes_and_seconds() {
        let d: Duration = "5:3".parse().unwrap();
        assert_eq!(d, Duration::new(0, 5, 3));
    }

    #[test]
    fn parse_full_form() {
        let d: Duration = "1:2:3".parse().unwrap();
        assert_eq!(d, Duration::new(1, 2, 3));
    }

    #[test]
    fn parse_implied_trailing_zero() {
        assert_eq!("5:".parse::<Duration>().unwrap(), Duration::new(0, 5, 0));
        assert_eq!("5:3:".parse::<Duration>().unwrap(), Duration::new(5, 3, 0));
    }

    #[test]
    fn parse_negative() {
        let d: Duration = "-1:30".parse().unwrap();
        assert!(d.is_negative());
        assert_eq!(d.as_signed_seconds(), -90);
    }

    #[test]
    fn parse_empty_is_error() {
        assert_eq!("".parse::<Duration>(), Err(ParseError::Empty));
        assert_eq!("-".parse::<Duration>(), Err(ParseError::Empty));
    }

    #[test]
    fn parse_invalid_character() {
        let err = "1:x0".parse::<Duration>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCharacter {
                character: 'x',
                position: 2,
            }
        );

        // Position counts the stripped sign.
        let err = "-1x".parse::<Duration>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCharacter {
                character: 'x',
                position: 2,
            }
        );
    }

    #[test]
    fn parse_too_many_separators() {
        let err = "1:2:3:4".parse::<Duration>().unwrap_err();
        assert_eq!(err, ParseError::TooManySeparators { count: 3 });
    }

    #[test]
    fn parse_empty_middle_field() {
        let err = "5::3".parse::<Duration>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidField {
                field: "minutes",
                value: String::new(),
            }
        );
    }

    #[test]
    fn parse_leading_separator_is_error() {
        let err = ":30".parse::<Duration>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { field: "minutes", .. }));
    }

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------

    #[test]
    fn display_zero_pads_minutes_and_seconds() {
        assert_eq!(Duration::new(0, 5, 30).to_string(), "0:05:30");
        assert_eq!(Duration::new(1, 2, 3).to_string(), "1:02:03");
        assert_eq!(Duration::ZERO.to_string(), "0:00:00");
    }

    #[test]
    fn display_hours_unpadded() {
        assert_eq!(Duration::new(123, 0, 0).to_string(), "123:00:00");
    }

    #[test]
    fn display_negative() {
        assert_eq!(Duration::from_signed_seconds(-15).to_string(), "-0:00:15");
    }

    #[test]
    fn round_trip() {
        for text in ["0:00:00", "0:05:30", "1:02:03", "-0:00:15", "123:59:59"] {
            let d: Duration = text.parse().unwrap();
            assert_eq!(d.to_string(), text);
            assert_eq!(d.to_string().parse::<Duration>().unwrap(), d);
        }
    }

    // -------------------------------------------------------------------------
    // Arithmetic
    // -------------------------------------------------------------------------

    #[test]
    fn add_consistent_with_signed_seconds() {
        let a = Duration::new(0, 5, 30);
        let b = Duration::new(0, 1, 0);
        assert_eq!(
            (a + b).as_signed_seconds(),
            a.as_signed_seconds() + b.as_signed_seconds()
        );
        assert_eq!((a + b).to_string(), "0:06:30");
    }

    #[test]
    fn add_carries_across_fields() {
        let a = Duration::new(0, 59, 59);
        let b = Duration::new(0, 0, 1);
        assert_eq!((a + b).to_string(), "1:00:00");
    }

    #[test]
    fn subtract_below_zero() {
        let a = Duration::new(0, 0, 10);
        let b = Duration::new(0, 0, 25);
        let diff = a - b;
        assert!(diff.is_negative());
        assert_eq!(diff.to_string(), "-0:00:15");
    }

    #[test]
    fn add_then_subtract_returns_original() {
        let a = Duration::new(2, 15, 45);
        let b = Duration::from_signed_seconds(-500);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn add_negative_operand_is_subtraction() {
        let a = Duration::new(0, 6, 30);
        let negative: Duration = "-2".parse().unwrap();
        assert_eq!((a + negative).to_string(), "0:06:28");
    }

    #[test]
    fn operands_unchanged_by_arithmetic() {
        let a = Duration::new(0, 5, 30);
        let b = Duration::new(0, 1, 0);
        let _ = a + b;
        assert_eq!(a, Duration::new(0, 5, 30));
        assert_eq!(b, Duration::new(0, 1, 0));
    }

    #[test]
    fn abs_clears_sign_only() {
        let d = Duration::from_signed_seconds(-90);
        let abs = d.abs();
        assert!(!abs.is_negative());
        assert_eq!(abs.as_signed_seconds(), 90);
        // Original is untouched.
        assert!(d.is_negative());
    }

    #[test]
    fn ordering_by_signed_seconds() {
        let negative = Duration::from_signed_seconds(-10);
        let zero = Duration::ZERO;
        let positive = Duration::from_signed_seconds(10);
        assert!(negative < zero);
        assert!(zero < positive);
        assert!(negative < positive);
    }

    // -------------------------------------------------------------------------
    // Serde
    // -------------------------------------------------------------------------

    #[test]
    fn serializes_as_canonical_string() {
        let d = Duration::new(1, 2, 3);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"1:02:03\"");
    }

    #[test]
    fn deserializes_from_string() {
        let d: Duration = serde_json::from_str("\"-0:01:30\"").unwrap();
        assert_eq!(d.as_signed_seconds(), -90);
    }

    #[test]
    fn deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Duration>("\"1:2:3:4\"").is_err());
        assert!(serde_json::from_str::<Duration>("42").is_err());
    }
}
