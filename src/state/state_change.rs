// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the fundamental building blocks for updating the
//! air conditioner's status. They represent discrete transitions produced
//! by the request gateway and applied to a
//! [`DeviceStatus`](super::DeviceStatus).
//!
//! # Change Types
//!
//! - [`StateChange::Connection`] - Connection lifecycle transitions
//! - [`StateChange::Power`] - Power on/off transitions
//! - [`StateChange::Temperature`] - Setpoint changes
//! - [`StateChange::Mode`] - Operating mode changes
//! - [`StateChange::Batch`] - Multiple changes applied together
//!
//! # Examples
//!
//! ```
//! use acsim_lib::state::{DeviceStatus, StateChange};
//!
//! let mut status = DeviceStatus::new("Bedroom AC");
//!
//! // Apply returns true if the status actually changed
//! assert!(status.apply(&StateChange::connecting()));
//!
//! // Applying the same change again returns false
//! assert!(!status.apply(&StateChange::connecting()));
//! ```

use crate::types::{AcMode, PowerState, Temperature};

use super::ConnectionState;

/// Represents a change in the air conditioner's status.
///
/// State changes are used to update [`DeviceStatus`](super::DeviceStatus)
/// and to notify observers when the status changes. Each variant represents
/// a specific kind of transition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// The connection lifecycle advanced.
    Connection(ConnectionState),

    /// Power was switched on or off.
    Power(PowerState),

    /// The temperature setpoint changed.
    Temperature(Temperature),

    /// The operating mode changed.
    Mode(AcMode),

    /// Multiple changes applied together.
    ///
    /// Used when one request implies several transitions, such as a
    /// disconnect forcing the power off.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a connection change announcing an in-flight attempt.
    #[must_use]
    pub fn connecting() -> Self {
        Self::Connection(ConnectionState::Connecting)
    }

    /// Creates a connection change for a completed connect.
    #[must_use]
    pub fn connected() -> Self {
        Self::Connection(ConnectionState::Connected)
    }

    /// Creates the full disconnect transition.
    ///
    /// Disconnecting always switches the unit off, so this is a batch of
    /// the connection drop and a power-off.
    #[must_use]
    pub fn disconnected() -> Self {
        Self::Batch(vec![
            Self::Connection(ConnectionState::Disconnected),
            Self::Power(PowerState::Off),
        ])
    }

    /// Creates a power-on change.
    #[must_use]
    pub fn power_on() -> Self {
        Self::Power(PowerState::On)
    }

    /// Creates a power-off change.
    #[must_use]
    pub fn power_off() -> Self {
        Self::Power(PowerState::Off)
    }

    /// Creates a temperature setpoint change.
    #[must_use]
    pub fn temperature(temp: Temperature) -> Self {
        Self::Temperature(temp)
    }

    /// Creates an operating mode change.
    #[must_use]
    pub fn mode(mode: AcMode) -> Self {
        Self::Mode(mode)
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns `true` if this is a connection change.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this is a power change.
    #[must_use]
    pub fn is_power(&self) -> bool {
        matches!(self, Self::Power(_))
    }

    /// Returns `true` if this is a temperature change.
    #[must_use]
    pub fn is_temperature(&self) -> bool {
        matches!(self, Self::Temperature(_))
    }

    /// Returns `true` if this is a mode change.
    #[must_use]
    pub fn is_mode(&self) -> bool {
        matches!(self, Self::Mode(_))
    }

    /// Returns `true` if this is a batch of changes.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Returns `true` if this change touches the connection state,
    /// looking through batches.
    #[must_use]
    pub fn involves_connection(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Batch(changes) => changes.iter().any(Self::involves_connection),
            _ => false,
        }
    }

    /// Returns the number of individual changes.
    ///
    /// For batch changes, returns the total count of nested changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        match self {
            Self::Batch(changes) => changes.iter().map(Self::change_count).sum(),
            _ => 1,
        }
    }
}
