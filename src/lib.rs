// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ChronoSum` - A Rust library implementing an interactive duration calculator.
//!
//! This library provides the core of an hours:minutes:seconds calculator:
//! a signed, base-60 normalized [`Duration`] value model and a
//! [`Calculator`] state machine that turns a raw keystroke stream into
//! parsed operands, running totals, and history entries.
//!
//! # Supported Features
//!
//! - **Duration arithmetic**: Signed H:MM:SS values with carry/borrow
//!   normalization, addition, and subtraction
//! - **Symbol-driven input**: Digits, `:`, `+`, `-`, `=`, delete, and
//!   clear events with the placement rules that keep input parseable
//! - **Chained operations**: Pressing an operator commits the pending
//!   operand against the running total
//! - **History log**: Append-only record of every completed step, with
//!   rendered display lines
//! - **Change subscriptions**: Callback registration for input, total,
//!   and history updates, so a UI stays current without polling
//!
//! # Quick Start
//!
//! ```
//! use chronosum::{Calculator, Symbol};
//!
//! fn main() -> chronosum::Result<()> {
//!     let mut calc = Calculator::new();
//!
//!     // Type "5:3" and evaluate: a fresh calculation
//!     for c in "5:3".chars() {
//!         calc.apply(Symbol::from_char(c)?)?;
//!     }
//!     calc.equals()?;
//!     assert_eq!(calc.total().to_string(), "0:05:30");
//!
//!     // Chain an addition against the running total
//!     for c in "+1:0".chars() {
//!         calc.apply(Symbol::from_char(c)?)?;
//!     }
//!     calc.equals()?;
//!     assert_eq!(calc.total().to_string(), "0:06:30");
//!
//!     // The history records both steps
//!     let lines: Vec<String> = calc.history().lines().collect();
//!     assert_eq!(lines.last().unwrap(), "0:06:30 = 0:05:30 + 0:01:00");
//!     Ok(())
//! }
//! ```
//!
//! # Driving a UI
//!
//! The calculator is the model; a UI collaborator feeds it symbols and
//! renders the accessor output. Subscriptions push changes to the UI as
//! they happen:
//!
//! ```
//! use chronosum::{Calculator, Digit};
//!
//! let mut calc = Calculator::new();
//! calc.on_total_changed(|total| {
//!     println!("answer field: {total}");
//! });
//! calc.on_history_appended(|entry| {
//!     println!("history line: {entry}");
//! });
//!
//! calc.digit(Digit::new(9).unwrap());
//! calc.equals().unwrap();
//! ```

pub mod error;
pub mod input;
pub mod state;
pub mod subscription;
pub mod symbol;
pub mod types;

pub use error::{Error, ParseError, Result, ValueError};
pub use input::{InputBuffer, PendingExpr};
pub use state::{Calculator, History, HistoryEntry};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use symbol::Symbol;
pub use types::{Digit, Duration, Sign};
