// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for calculator change subscriptions.
//!
//! This module provides the core types for managing subscription
//! callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Internal registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::HistoryEntry;
use crate::types::Duration;

/// Unique identifier for a subscription.
///
/// This ID is returned when creating a subscription and can be used to
/// unsubscribe later. IDs are unique within a calculator's lifetime.
///
/// # Examples
///
/// ```ignore
/// let sub_id = calculator.on_total_changed(|total| { /* ... */ });
///
/// // Later, unsubscribe
/// calculator.unsubscribe(sub_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for pending-input callbacks.
type InputCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Type alias for running-total callbacks.
type TotalCallback = Arc<dyn Fn(Duration) + Send + Sync>;

/// Type alias for history-entry callbacks.
type HistoryCallback = Arc<dyn Fn(&HistoryEntry) + Send + Sync>;

/// Registry for managing calculator subscription callbacks.
///
/// This is an internal type used by the calculator to store and dispatch
/// callbacks. Dispatch is synchronous: the UI collaborator's handlers run
/// to completion inside the event that triggered them, which preserves
/// the one-event-at-a-time session model.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Pending-input change callbacks.
    input_callbacks: RwLock<HashMap<SubscriptionId, InputCallback>>,
    /// Running-total change callbacks.
    total_callbacks: RwLock<HashMap<SubscriptionId, TotalCallback>>,
    /// History-append callbacks.
    history_callbacks: RwLock<HashMap<SubscriptionId, HistoryCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            input_callbacks: RwLock::new(HashMap::new()),
            total_callbacks: RwLock::new(HashMap::new()),
            history_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for pending-input changes.
    ///
    /// The callback receives the new buffer text.
    pub fn on_input_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.input_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for running-total changes.
    pub fn on_total_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Duration) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.total_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for appended history entries.
    pub fn on_history_appended<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&HistoryEntry) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.history_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.input_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.total_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.history_callbacks.write().remove(&id).is_some() {
            return true;
        }
        false
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.input_callbacks.write().clear();
        self.total_callbacks.write().clear();
        self.history_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a pending-input change to all input callbacks.
    ///
    /// Callbacks are called synchronously in an arbitrary order.
    pub fn dispatch_input_changed(&self, text: &str) {
        let callbacks = self.input_callbacks.read();
        for callback in callbacks.values() {
            callback(text);
        }
    }

    /// Dispatches a running-total change to all total callbacks.
    pub fn dispatch_total_changed(&self, total: Duration) {
        let callbacks = self.total_callbacks.read();
        for callback in callbacks.values() {
            callback(total);
        }
    }

    /// Dispatches an appended history entry to all history callbacks.
    pub fn dispatch_history_appended(&self, entry: &HistoryEntry) {
        let callbacks = self.history_callbacks.read();
        for callback in callbacks.values() {
            callback(entry);
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.input_callbacks.read().len()
            + self.total_callbacks.read().len()
            + self.history_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
