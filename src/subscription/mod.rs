// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for status changes.
//!
//! This module provides a callback-based subscription system for receiving
//! notifications when the simulated air conditioner's status changes — the
//! hook a presentation layer uses to re-render after each transition,
//! including the deferred connect completion.
//!
//! # Overview
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Internal registry that manages callbacks and dispatches changes
//! - [`Subscribable`] - Trait for types that support change subscriptions
//!
//! # Usage
//!
//! Subscriptions are created through the [`AcRemote`](crate::AcRemote):
//!
//! ```
//! use acsim_lib::AcRemote;
//! use acsim_lib::subscription::Subscribable;
//!
//! let remote = AcRemote::builder("Living Room AC").build();
//!
//! // Subscribe to power state changes
//! let sub_id = remote.on_power_changed(|power| {
//!     println!("Power is now {power}");
//! });
//!
//! // Later, unsubscribe
//! remote.unsubscribe(sub_id);
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
