// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the duration calculator.
//!
//! This module provides the calculator's value model. Each type keeps its
//! invariants at construction time, so downstream code never handles
//! out-of-range fields.
//!
//! # Types
//!
//! - [`Duration`] - Signed hours:minutes:seconds quantity in normalized base-60 form
//! - [`Digit`] - A single decimal digit (0-9)
//! - [`Sign`] - Plus/minus operator sign

mod digit;
mod duration;
mod sign;

pub use digit::Digit;
pub use duration::Duration;
pub use sign::Sign;
