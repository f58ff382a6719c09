// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level remote abstraction for the simulated air conditioner.
//!
//! [`AcRemote`] is the composition root: it owns the status record, routes
//! every request through the [`gateway`](crate::gateway) guards, runs the
//! deferred connect timer, and fans effective changes out to observers.
//!
//! # Request semantics
//!
//! Requests never fail. A request whose preconditions do not hold is
//! silently ignored — each `request_*` method returns whether the request
//! took effect, and callers are free to discard that.
//!
//! # Observing changes
//!
//! Three surfaces, all fed from the same serialized write path:
//!
//! - per-facet callbacks via [`Subscribable`],
//! - broadcast [`RemoteEvent`]s via [`subscribe`](AcRemote::subscribe),
//! - a [`watch`](AcRemote::watch_status) channel carrying full status
//!   snapshots for render loops.

mod builder;

pub use builder::AcRemoteBuilder;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::event::{EventBus, RemoteEvent, RemoteId};
use crate::gateway::{self, ConnectionDecision, StepDirection};
use crate::state::{DeviceStatus, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::{AcMode, PowerState, Temperature};

/// How long a simulated connect takes to complete.
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_secs(2);

/// State shared between the remote and its deferred connect task.
struct RemoteShared {
    /// Unique remote identifier.
    id: RemoteId,
    /// Display name, fixed at creation.
    name: String,
    /// Current status; the single source of truth.
    status: RwLock<DeviceStatus>,
    /// Watch channel carrying full status snapshots.
    status_tx: watch::Sender<DeviceStatus>,
    /// Per-facet callback registry.
    callbacks: CallbackRegistry,
    /// Broadcast bus for remote events.
    events: EventBus,
}

impl RemoteShared {
    /// Applies a change and, if anything changed, notifies all observers.
    fn apply_and_notify(&self, change: StateChange) -> bool {
        let (changed, snapshot) = {
            let mut status = self.status.write();
            let changed = status.apply(&change);
            (changed, status.clone())
        };
        if !changed {
            return false;
        }
        self.notify(change, snapshot);
        true
    }

    /// Completes an in-flight connect.
    ///
    /// The check and the transition happen under one write lock so a stale
    /// completion (the remote is no longer connecting) is dropped whole.
    fn complete_connect(&self) -> bool {
        let change = StateChange::connected();
        let snapshot = {
            let mut status = self.status.write();
            if !status.is_connecting() {
                return false;
            }
            status.apply(&change);
            status.clone()
        };
        self.notify(change, snapshot);
        true
    }

    /// Fans one effective change out to every notification surface.
    fn notify(&self, change: StateChange, snapshot: DeviceStatus) {
        // send_replace stores the snapshot even with no receiver attached;
        // a late watch subscriber starts from the current status
        self.status_tx.send_replace(snapshot.clone());
        self.callbacks.dispatch(&change);

        let involves_connection = change.involves_connection();
        let connection = snapshot.connection();
        self.events
            .publish(RemoteEvent::state_changed(self.id, change, snapshot));
        if involves_connection {
            self.events
                .publish(RemoteEvent::connection_changed(self.id, connection));
        }
    }
}

/// A simulated smart air-conditioner remote control.
///
/// The remote holds the [`DeviceStatus`] for one simulated unit and
/// exposes the request entry points a control surface wires its buttons
/// to. No real hardware is addressed: "connecting" is a timer that
/// completes after a fixed delay, and every other request is a guarded
/// local state transition.
///
/// # Examples
///
/// ```no_run
/// use acsim_lib::{AcMode, AcRemote};
///
/// #[tokio::main]
/// async fn main() {
///     let remote = AcRemote::builder("Living Room AC").build();
///
///     remote.request_connection_toggle();
///     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
///
///     remote.request_power_toggle();
///     remote.request_temperature(24);
///     remote.request_mode(AcMode::Heat);
/// }
/// ```
#[derive(Debug)]
pub struct AcRemote {
    shared: Arc<RemoteShared>,
    connect_delay: Duration,
    /// Handle of the in-flight connect task, if any.
    connect_task: Mutex<Option<JoinHandle<()>>>,
}

impl AcRemote {
    /// Creates a remote with factory defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    /// Returns a builder for a remote with custom settings.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> AcRemoteBuilder {
        AcRemoteBuilder::new(name)
    }

    pub(crate) fn from_builder(builder: AcRemoteBuilder) -> Self {
        let status = DeviceStatus::with_settings(
            builder.name.clone(),
            builder.initial_temperature,
            builder.initial_mode,
        );
        let (status_tx, _) = watch::channel(status.clone());

        Self {
            shared: Arc::new(RemoteShared {
                id: RemoteId::new(),
                name: builder.name,
                status: RwLock::new(status),
                status_tx,
                callbacks: CallbackRegistry::new(),
                events: EventBus::with_capacity(builder.event_capacity),
            }),
            connect_delay: builder.connect_delay,
            connect_task: Mutex::new(None),
        }
    }

    /// Returns the unique identifier of this remote.
    #[must_use]
    pub fn id(&self) -> RemoteId {
        self.shared.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Returns a snapshot of the current status.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        self.shared.status.read().clone()
    }

    /// Returns the configured simulated connect delay.
    #[must_use]
    pub fn connect_delay(&self) -> Duration {
        self.connect_delay
    }

    /// Creates a watch receiver carrying full status snapshots.
    ///
    /// A render loop awaits `changed()` and redraws from the borrowed
    /// snapshot; the receiver observes every effective transition,
    /// including the deferred connect completion.
    #[must_use]
    pub fn watch_status(&self) -> watch::Receiver<DeviceStatus> {
        self.shared.status_tx.subscribe()
    }

    /// Subscribes to remote events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RemoteEvent> {
        self.shared.events.subscribe()
    }

    // =========================================================================
    // Request entry points
    // =========================================================================

    /// Requests a connect or disconnect, depending on the current state.
    ///
    /// While disconnected this begins a simulated connect that completes
    /// after the configured delay. While connected it disconnects
    /// immediately, switching the unit off. While a connect is in flight
    /// the request is ignored.
    ///
    /// Returns `true` if the request took effect.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime when a connect needs to
    /// be scheduled.
    pub fn request_connection_toggle(&self) -> bool {
        let decision = gateway::connection_toggle(&self.shared.status.read());
        match decision {
            ConnectionDecision::Ignore => {
                tracing::debug!(remote = %self.shared.id, "connection toggle ignored while connecting");
                false
            }
            ConnectionDecision::Disconnect => {
                // The slot may still hold the finished connect task's handle
                if let Some(task) = self.connect_task.lock().take() {
                    task.abort();
                }
                tracing::info!(remote = %self.shared.id, name = %self.shared.name, "disconnected");
                self.shared.apply_and_notify(StateChange::disconnected())
            }
            ConnectionDecision::BeginConnect => {
                let changed = self.shared.apply_and_notify(StateChange::connecting());
                if changed {
                    tracing::info!(
                        remote = %self.shared.id,
                        name = %self.shared.name,
                        delay = ?self.connect_delay,
                        "starting simulated connect"
                    );
                    let task = self.spawn_connect_task();
                    if let Some(stale) = self.connect_task.lock().replace(task) {
                        stale.abort();
                    }
                }
                changed
            }
        }
    }

    /// Requests a power toggle.
    ///
    /// Ignored unless the remote is connected. Returns `true` if the
    /// request took effect.
    pub fn request_power_toggle(&self) -> bool {
        let change = gateway::power_toggle(&self.shared.status.read());
        self.apply_request(change, "power toggle")
    }

    /// Requests a new temperature setpoint in whole degrees Celsius.
    ///
    /// Out-of-range values are clamped to 16-30 °C. Ignored unless the
    /// remote is connected with the power on. Returns `true` if the
    /// request took effect.
    pub fn request_temperature(&self, degrees: u8) -> bool {
        let target = Temperature::clamped(degrees);
        let change = gateway::set_temperature(&self.shared.status.read(), target);
        self.apply_request(change, "temperature change")
    }

    /// Requests a one-degree warmer setpoint.
    ///
    /// Ignored at 30 °C and under the same gating as
    /// [`request_temperature`](Self::request_temperature). Returns `true`
    /// if the request took effect.
    pub fn request_temperature_up(&self) -> bool {
        let change = gateway::step_temperature(&self.shared.status.read(), StepDirection::Up);
        self.apply_request(change, "temperature step up")
    }

    /// Requests a one-degree cooler setpoint.
    ///
    /// Ignored at 16 °C and under the same gating as
    /// [`request_temperature`](Self::request_temperature). Returns `true`
    /// if the request took effect.
    pub fn request_temperature_down(&self) -> bool {
        let change = gateway::step_temperature(&self.shared.status.read(), StepDirection::Down);
        self.apply_request(change, "temperature step down")
    }

    /// Requests an operating mode change.
    ///
    /// Ignored unless the remote is connected with the power on. Returns
    /// `true` if the request took effect.
    pub fn request_mode(&self, mode: AcMode) -> bool {
        let change = gateway::set_mode(&self.shared.status.read(), mode);
        self.apply_request(change, "mode change")
    }

    /// Applies a gateway decision, logging rejected requests.
    fn apply_request(&self, change: Option<StateChange>, request: &'static str) -> bool {
        match change {
            Some(change) => self.shared.apply_and_notify(change),
            None => {
                tracing::debug!(remote = %self.shared.id, request, "request ignored");
                false
            }
        }
    }

    /// Spawns the deferred connect completion.
    fn spawn_connect_task(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let delay = self.connect_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if shared.complete_connect() {
                tracing::info!(remote = %shared.id, name = %shared.name, "connection established");
            } else {
                tracing::debug!(remote = %shared.id, "stale connect completion dropped");
            }
        })
    }
}

impl Drop for AcRemote {
    fn drop(&mut self) {
        if let Some(task) = self.connect_task.lock().take() {
            task.abort();
        }
    }
}

impl Subscribable for AcRemote {
    fn on_connection_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(crate::state::ConnectionState) + Send + Sync + 'static,
    {
        self.shared.callbacks.on_connection_changed(callback)
    }

    fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static,
    {
        self.shared.callbacks.on_power_changed(callback)
    }

    fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static,
    {
        self.shared.callbacks.on_temperature_changed(callback)
    }

    fn on_mode_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AcMode) + Send + Sync + 'static,
    {
        self.shared.callbacks.on_mode_changed(callback)
    }

    fn on_status_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.shared.callbacks.on_status_changed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.callbacks.unsubscribe(id)
    }
}

impl std::fmt::Debug for RemoteShared {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteShared")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("status", &*self.status.read())
            .finish_non_exhaustive()
    }
}
