// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for calculator state changes.
//!
//! This module provides a callback-based subscription system for
//! receiving notifications when calculator state changes. It is how a
//! UI collaborator keeps its input field, answer field, and history
//! widget current without polling.
//!
//! # Overview
//!
//! The subscription system consists of:
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Internal registry that manages callbacks and dispatches events
//!
//! # Usage
//!
//! Subscriptions are created through methods on the calculator:
//!
//! ```
//! use chronosum::{Calculator, Digit};
//!
//! let mut calc = Calculator::new();
//!
//! // Mirror the pending input into the UI's input field
//! let sub_id = calc.on_input_changed(|text| {
//!     println!("input: {text}");
//! });
//!
//! calc.digit(Digit::new(5).unwrap());
//!
//! // Later, unsubscribe
//! calc.unsubscribe(sub_id);
//! ```

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
