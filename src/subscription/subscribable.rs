// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that support change subscriptions.

use crate::state::{ConnectionState, StateChange};
use crate::subscription::SubscriptionId;
use crate::types::{AcMode, PowerState, Temperature};

/// Trait for types that support status change subscriptions.
///
/// This trait provides methods to subscribe to the individual facets of
/// the air conditioner's status. It is implemented by
/// [`AcRemote`](crate::AcRemote).
///
/// Callbacks fire only for effective changes — a request that is rejected
/// by the gateway, or that would set a value to what it already is,
/// notifies nobody.
///
/// # Examples
///
/// ```
/// use acsim_lib::AcRemote;
/// use acsim_lib::subscription::Subscribable;
///
/// let remote = AcRemote::builder("Living Room AC").build();
///
/// // Subscribe to temperature changes
/// let sub_id = remote.on_temperature_changed(|temperature| {
///     println!("Setpoint: {temperature}");
/// });
///
/// // Subscribe to connection lifecycle transitions
/// remote.on_connection_changed(|connection| {
///     println!("Connection: {connection}");
/// });
///
/// // Unsubscribe when no longer needed
/// remote.unsubscribe(sub_id);
/// ```
pub trait Subscribable {
    /// Subscribes to connection state changes.
    ///
    /// The callback is called for every lifecycle transition, including
    /// the deferred connect completion.
    fn on_connection_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ConnectionState) + Send + Sync + 'static;

    /// Subscribes to power state changes.
    fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static;

    /// Subscribes to temperature setpoint changes.
    fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static;

    /// Subscribes to operating mode changes.
    fn on_mode_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AcMode) + Send + Sync + 'static;

    /// Subscribes to all status changes.
    ///
    /// The callback receives every effective change; useful for logging
    /// or a render loop that redraws on any transition.
    fn on_status_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
