// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calculator state machine.

use crate::error::Result;
use crate::input::{InputBuffer, PendingExpr};
use crate::state::{History, HistoryEntry};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::symbol::Symbol;
use crate::types::{Digit, Duration, Sign};

/// The interactive duration calculator.
///
/// A `Calculator` consumes discrete [`Symbol`] events and maintains
/// three pieces of session state: the pending input buffer, the running
/// total, and the append-only history log. Each event is handled to
/// completion before the next; there is no terminal state.
///
/// Each session owns its own instance; nothing is process-wide.
///
/// # Evaluation rules
///
/// - An unsigned operand (`5:30`) starts a fresh calculation: it
///   replaces the total outright.
/// - A `+`-prefixed operand is added to the total.
/// - A `-`-prefixed operand parses as a negative duration and is added
///   to the total, which amounts to subtraction; the history line shows
///   the absolute operand next to a `-` operator.
/// - Pressing `+` or `-` first commits any pending operand, so operands
///   can be chained without pressing `=` in between. A bare dangling
///   sign is discarded instead of evaluated.
///
/// # Examples
///
/// ```
/// use chronosum::{Calculator, Symbol};
///
/// let mut calc = Calculator::new();
/// for c in "5:3=+1:0=".chars() {
///     calc.apply(Symbol::from_char(c)?)?;
/// }
/// assert_eq!(calc.total().to_string(), "0:06:30");
/// # Ok::<(), chronosum::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    /// Raw accumulated symbols not yet evaluated.
    input: InputBuffer,
    /// The running answer.
    total: Duration,
    /// Completed calculation steps.
    history: History,
    /// Change observers registered by the UI collaborator.
    callbacks: CallbackRegistry,
}

impl Calculator {
    /// Creates a new calculator with an empty buffer, a zero total, and
    /// an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Event application ==========

    /// Applies one symbol event.
    ///
    /// This is the single dispatch point for UI collaborators that
    /// translate key events through [`Symbol::from_char`]; the
    /// per-symbol methods below are equivalent.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if an evaluating event (`+`, `-`, `=`)
    /// commits operand text that violates the parser contract. The
    /// calculator's own buffer rules never produce such text, so this
    /// indicates a caller bug; state is left untouched in that case.
    pub fn apply(&mut self, symbol: Symbol) -> Result<()> {
        tracing::trace!(symbol = %symbol, "applying symbol");
        match symbol {
            Symbol::Digit(digit) => {
                self.digit(digit);
                Ok(())
            }
            Symbol::Colon => {
                self.colon();
                Ok(())
            }
            Symbol::Plus => self.plus(),
            Symbol::Minus => self.minus(),
            Symbol::Equals => self.equals(),
            Symbol::Delete => {
                self.delete();
                Ok(())
            }
            Symbol::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Appends a digit to the pending input. Always succeeds.
    pub fn digit(&mut self, digit: Digit) {
        self.input.push_digit(digit);
        self.notify_input();
    }

    /// Appends a `:` separator, following the buffer's placement rules.
    pub fn colon(&mut self) {
        if self.input.push_colon() {
            self.notify_input();
        }
    }

    /// Commits any pending operand, then starts a `+` operand.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` on a contract-violating pending operand.
    pub fn plus(&mut self) -> Result<()> {
        self.operator(Sign::Plus)
    }

    /// Commits any pending operand, then starts a `-` operand.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` on a contract-violating pending operand.
    pub fn minus(&mut self) -> Result<()> {
        self.operator(Sign::Minus)
    }

    /// Evaluates the pending input against the running total.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` on a contract-violating pending operand.
    pub fn equals(&mut self) -> Result<()> {
        self.evaluate()
    }

    /// Removes the last character of the pending input; no-op if empty.
    pub fn delete(&mut self) {
        if self.input.delete() {
            self.notify_input();
        }
    }

    /// Empties the pending input. The total and history are untouched.
    pub fn clear(&mut self) {
        if self.input.clear() {
            self.notify_input();
        }
    }

    // ========== Read accessors ==========

    /// Returns the pending input as display text.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        self.input.as_str()
    }

    /// Returns the running total.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Returns the history log.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Empties the history log without affecting the total or the
    /// pending input.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ========== Subscriptions ==========

    /// Registers a callback for pending-input changes.
    ///
    /// The callback receives the new buffer text after every edit that
    /// actually changed it.
    pub fn on_input_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callbacks.on_input_changed(callback)
    }

    /// Registers a callback for running-total changes.
    pub fn on_total_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Duration) + Send + Sync + 'static,
    {
        self.callbacks.on_total_changed(callback)
    }

    /// Registers a callback for appended history entries.
    pub fn on_history_appended<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&HistoryEntry) + Send + Sync + 'static,
    {
        self.callbacks.on_history_appended(callback)
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }

    // ========== Transitions ==========

    /// Commits the pending operand (if any), then starts the next one
    /// with the given sign.
    fn operator(&mut self, sign: Sign) -> Result<()> {
        match self.input.expr() {
            // A dangling sign has no operand to commit; discard it.
            PendingExpr::DanglingSign(_) => {
                self.input.clear();
            }
            PendingExpr::Empty => {}
            _ => self.evaluate()?,
        }
        self.input.push_sign(sign);
        self.notify_input();
        Ok(())
    }

    /// The core transition: parses the pending expression, updates the
    /// total, and logs the step. The buffer is cleared in every
    /// non-empty branch; on a parse error nothing is modified.
    fn evaluate(&mut self) -> Result<()> {
        match self.input.expr() {
            PendingExpr::Empty => Ok(()),
            PendingExpr::DanglingSign(_) => {
                // Reached via `=` on a bare sign: nothing to evaluate,
                // but the buffer is still cleared.
                if self.input.clear() {
                    self.notify_input();
                }
                Ok(())
            }
            PendingExpr::Operand(text) => {
                tracing::debug!(operand = %text, "starting fresh calculation");
                let total: Duration = text.parse()?;
                self.total = total;
                self.push_history(HistoryEntry::Divider);
                self.push_history(HistoryEntry::Result(total));
                self.finish_step(total);
                Ok(())
            }
            PendingExpr::Add(rest) => {
                let previous = self.total;
                tracing::debug!(operand = %rest, total = %previous, "adding to total");
                let operand: Duration = rest.parse()?;
                let total = previous + operand;
                self.total = total;
                self.push_history(HistoryEntry::Equation {
                    total,
                    previous,
                    operator: Sign::Plus,
                    operand,
                });
                self.finish_step(total);
                Ok(())
            }
            PendingExpr::Sub(text) => {
                let previous = self.total;
                tracing::debug!(operand = %text, total = %previous, "subtracting from total");
                // The operand parses with its sign, so adding it to the
                // total performs the subtraction. The history line shows
                // the absolute operand.
                let operand: Duration = text.parse()?;
                let total = previous + operand;
                self.total = total;
                self.push_history(HistoryEntry::Equation {
                    total,
                    previous,
                    operator: Sign::Minus,
                    operand: operand.abs(),
                });
                self.finish_step(total);
                Ok(())
            }
        }
    }

    /// Clears the committed buffer and notifies observers of the new
    /// total.
    fn finish_step(&mut self, total: Duration) {
        self.input.clear();
        self.notify_input();
        self.callbacks.dispatch_total_changed(total);
    }

    fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        self.callbacks.dispatch_history_appended(&entry);
    }

    fn notify_input(&self) {
        self.callbacks.dispatch_input_changed(self.input.as_str());
    }
}
