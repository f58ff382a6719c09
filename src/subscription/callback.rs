// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for status subscriptions.
//!
//! This module provides the core types for managing subscription callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Internal registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::{ConnectionState, StateChange};
use crate::types::{AcMode, PowerState, Temperature};

/// Unique identifier for a subscription.
///
/// This ID is returned when creating a subscription and can be used to
/// unsubscribe later. IDs are unique within a remote's lifetime.
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

/// Type alias for connection state callbacks.
type ConnectionCallback = Arc<dyn Fn(ConnectionState) + Send + Sync>;

/// Type alias for power state callbacks.
type PowerCallback = Arc<dyn Fn(PowerState) + Send + Sync>;

/// Type alias for temperature callbacks.
type TemperatureCallback = Arc<dyn Fn(Temperature) + Send + Sync>;

/// Type alias for mode callbacks.
type ModeCallback = Arc<dyn Fn(AcMode) + Send + Sync>;

/// Type alias for generic status change callbacks.
type StatusChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

/// Registry for managing subscription callbacks.
///
/// This is an internal type used by [`AcRemote`](crate::AcRemote) to store
/// and dispatch callbacks. It uses thread-safe interior mutability via
/// `parking_lot::RwLock` so callbacks can be registered and dispatched from
/// any task. Callbacks are wrapped in `Arc` so they can be cloned cheaply.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Connection state change callbacks.
    connection_callbacks: RwLock<HashMap<SubscriptionId, ConnectionCallback>>,
    /// Power state change callbacks.
    power_callbacks: RwLock<HashMap<SubscriptionId, PowerCallback>>,
    /// Temperature setpoint change callbacks.
    temperature_callbacks: RwLock<HashMap<SubscriptionId, TemperatureCallback>>,
    /// Operating mode change callbacks.
    mode_callbacks: RwLock<HashMap<SubscriptionId, ModeCallback>>,
    /// Generic status change callbacks (receive all changes).
    status_changed_callbacks: RwLock<HashMap<SubscriptionId, StatusChangedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            connection_callbacks: RwLock::new(HashMap::new()),
            power_callbacks: RwLock::new(HashMap::new()),
            temperature_callbacks: RwLock::new(HashMap::new()),
            mode_callbacks: RwLock::new(HashMap::new()),
            status_changed_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for connection state changes.
    pub fn on_connection_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ConnectionState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.connection_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for power state changes.
    pub fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.power_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for temperature setpoint changes.
    pub fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.temperature_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for operating mode changes.
    pub fn on_mode_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AcMode) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.mode_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for all status changes.
    ///
    /// This is useful for logging or for a render loop that redraws the
    /// whole widget on any change.
    pub fn on_status_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.status_changed_callbacks
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
        if self.connection_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.power_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.temperature_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.mode_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.status_changed_callbacks.write().remove(&id).is_some() {
            return true;
        }
        false
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.connection_callbacks.write().clear();
        self.power_callbacks.write().clear();
        self.temperature_callbacks.write().clear();
        self.mode_callbacks.write().clear();
        self.status_changed_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches a status change to relevant callbacks.
    ///
    /// This method calls all registered callbacks that match the change
    /// type. Callbacks are called synchronously in an arbitrary order.
    pub fn dispatch(&self, change: &StateChange) {
        // Always dispatch to generic status_changed callbacks
        {
            let callbacks = self.status_changed_callbacks.read();
            for callback in callbacks.values() {
                callback(change);
            }
        }

        // Dispatch to specific callbacks based on change type
        match change {
            StateChange::Connection(connection) => {
                let callbacks = self.connection_callbacks.read();
                for callback in callbacks.values() {
                    callback(*connection);
                }
            }
            StateChange::Power(power) => {
                let callbacks = self.power_callbacks.read();
                for callback in callbacks.values() {
                    callback(*power);
                }
            }
            StateChange::Temperature(temperature) => {
                let callbacks = self.temperature_callbacks.read();
                for callback in callbacks.values() {
                    callback(*temperature);
                }
            }
            StateChange::Mode(mode) => {
                let callbacks = self.mode_callbacks.read();
                for callback in callbacks.values() {
                    callback(*mode);
                }
            }
            StateChange::Batch(changes) => {
                // Recursively dispatch each change in the batch
                for nested_change in changes {
                    self.dispatch(nested_change);
                }
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.connection_callbacks.read().len()
            + self.power_callbacks.read().len()
            + self.temperature_callbacks.read().len()
            + self.mode_callbacks.read().len()
            + self.status_changed_callbacks.read().len()
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn subscription_id_display() {
        let id = SubscriptionId::new(7);
        assert_eq!(id.to_string(), "Sub(7)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn power_callback_dispatch_and_unsubscribe() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = registry.on_power_changed(move |_power| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::power_on());
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.dispatch(&StateChange::power_off());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn temperature_callback_receives_value() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<Temperature>));
        let received_clone = received.clone();

        registry.on_temperature_changed(move |temperature| {
            *received_clone.write() = Some(temperature);
        });

        let temp = Temperature::new(27).unwrap();
        registry.dispatch(&StateChange::Temperature(temp));

        assert_eq!(*received.read(), Some(temp));
    }

    #[test]
    fn connection_callback_receives_value() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<ConnectionState>));
        let received_clone = received.clone();

        registry.on_connection_changed(move |connection| {
            *received_clone.write() = Some(connection);
        });

        registry.dispatch(&StateChange::connected());
        assert_eq!(*received.read(), Some(ConnectionState::Connected));
    }

    #[test]
    fn status_changed_sees_every_change() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        registry.on_status_changed(move |_change| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::power_on());
        registry.dispatch(&StateChange::mode(AcMode::Fan));
        registry.dispatch(&StateChange::connecting());

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn batch_dispatch_reaches_each_member() {
        let registry = CallbackRegistry::new();
        let connection_hits = Arc::new(AtomicU32::new(0));
        let power_hits = Arc::new(AtomicU32::new(0));
        let c = connection_hits.clone();
        let p = power_hits.clone();

        registry.on_connection_changed(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        registry.on_power_changed(move |_| {
            p.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::disconnected());

        assert_eq!(connection_hits.load(Ordering::SeqCst), 1);
        assert_eq!(power_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn multiple_callbacks_same_type() {
        let registry = CallbackRegistry::new();
        let counter1 = Arc::new(AtomicU32::new(0));
        let counter2 = Arc::new(AtomicU32::new(0));
        let c1 = counter1.clone();
        let c2 = counter2.clone();

        registry.on_mode_changed(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        registry.on_mode_changed(move |_| {
            c2.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::mode(AcMode::Heat));

        assert_eq!(counter1.load(Ordering::SeqCst), 1);
        assert_eq!(counter2.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn clear_removes_everything() {
        let registry = CallbackRegistry::new();

        registry.on_connection_changed(|_| {});
        registry.on_power_changed(|_| {});
        registry.on_status_changed(|_| {});

        assert_eq!(registry.callback_count(), 3);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_unique_across_types() {
        let registry = CallbackRegistry::new();

        let id1 = registry.on_power_changed(|_| {});
        let id2 = registry.on_temperature_changed(|_| {});
        let id3 = registry.on_connection_changed(|_| {});

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }
}
