// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status tracking.

use crate::types::{AcMode, PowerState, Temperature};

use super::{ConnectionState, StateChange};

/// Tracked status of the simulated air conditioner.
///
/// This struct is the single source of truth the presentation layer
/// renders from: connection lifecycle, power, temperature setpoint, and
/// operating mode, plus the immutable display name.
///
/// The status carries no guard logic of its own — preconditions are
/// enforced by the [`gateway`](crate::gateway) before a change reaches
/// [`apply`](Self::apply).
///
/// # Examples
///
/// ```
/// use acsim_lib::state::DeviceStatus;
///
/// let status = DeviceStatus::new("Living Room AC");
/// assert_eq!(status.name(), "Living Room AC");
/// assert!(status.connection().is_disconnected());
/// assert_eq!(status.temperature().degrees(), 22);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceStatus {
    /// Display label, fixed at creation.
    name: String,
    /// Connection lifecycle state.
    connection: ConnectionState,
    /// Power state, meaningful only while connected.
    power: PowerState,
    /// Target temperature (16-30 °C).
    temperature: Temperature,
    /// Operating mode.
    mode: AcMode,
}

impl DeviceStatus {
    /// Creates a status record with factory defaults: disconnected,
    /// powered off, 22 °C, cooling mode.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, Temperature::DEFAULT, AcMode::default())
    }

    /// Creates a status record with custom initial setpoint and mode.
    #[must_use]
    pub fn with_settings(name: impl Into<String>, temperature: Temperature, mode: AcMode) -> Self {
        Self {
            name: name.into(),
            connection: ConnectionState::Disconnected,
            power: PowerState::Off,
            temperature,
            mode,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the connection state.
    #[must_use]
    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the temperature setpoint.
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Returns the operating mode.
    #[must_use]
    pub fn mode(&self) -> AcMode {
        self.mode
    }

    /// Returns `true` if the remote is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Returns `true` if a connection attempt is in flight.
    #[must_use]
    pub fn is_connecting(&self) -> bool {
        self.connection.is_connecting()
    }

    /// Returns `true` if setpoint and mode adjustments are permitted:
    /// connected with the power on.
    #[must_use]
    pub fn can_adjust(&self) -> bool {
        self.connection.is_connected() && self.power.is_on()
    }

    /// Applies a state change and returns whether the status actually
    /// changed.
    ///
    /// # Returns
    ///
    /// Returns `true` if the status was modified, `false` if it was
    /// already at the target value.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Connection(connection) => {
                if self.connection == *connection {
                    false
                } else {
                    self.connection = *connection;
                    true
                }
            }
            StateChange::Power(power) => {
                if self.power == *power {
                    false
                } else {
                    self.power = *power;
                    true
                }
            }
            StateChange::Temperature(temperature) => {
                if self.temperature == *temperature {
                    false
                } else {
                    self.temperature = *temperature;
                    true
                }
            }
            StateChange::Mode(mode) => {
                if self.mode == *mode {
                    false
                } else {
                    self.mode = *mode;
                    true
                }
            }
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    if self.apply(c) {
                        any_changed = true;
                    }
                }
                any_changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_status_has_factory_defaults() {
        let status = DeviceStatus::new("Living Room AC");
        assert_eq!(status.name(), "Living Room AC");
        assert_eq!(status.connection(), ConnectionState::Disconnected);
        assert_eq!(status.power(), PowerState::Off);
        assert_eq!(status.temperature(), Temperature::DEFAULT);
        assert_eq!(status.mode(), AcMode::Cool);
    }

    #[test]
    fn with_settings_overrides_defaults() {
        let status = DeviceStatus::with_settings(
            "Bedroom AC",
            Temperature::new(18).unwrap(),
            AcMode::Heat,
        );
        assert_eq!(status.temperature().degrees(), 18);
        assert_eq!(status.mode(), AcMode::Heat);
        assert!(status.connection().is_disconnected());
    }

    #[test]
    fn apply_connection_change() {
        let mut status = DeviceStatus::new("AC");

        assert!(status.apply(&StateChange::connecting()));
        assert!(status.is_connecting());

        // Applying the same state returns false
        assert!(!status.apply(&StateChange::connecting()));

        assert!(status.apply(&StateChange::connected()));
        assert!(status.is_connected());
        assert!(!status.is_connecting());
    }

    #[test]
    fn apply_power_change() {
        let mut status = DeviceStatus::new("AC");

        assert!(status.apply(&StateChange::power_on()));
        assert!(status.power().is_on());
        assert!(!status.apply(&StateChange::power_on()));
    }

    #[test]
    fn apply_temperature_and_mode_changes() {
        let mut status = DeviceStatus::new("AC");

        let temp = Temperature::new(26).unwrap();
        assert!(status.apply(&StateChange::temperature(temp)));
        assert_eq!(status.temperature(), temp);
        assert!(!status.apply(&StateChange::temperature(temp)));

        assert!(status.apply(&StateChange::mode(AcMode::Fan)));
        assert_eq!(status.mode(), AcMode::Fan);
    }

    #[test]
    fn apply_disconnect_batch_forces_power_off() {
        let mut status = DeviceStatus::new("AC");
        status.apply(&StateChange::connected());
        status.apply(&StateChange::power_on());

        assert!(status.apply(&StateChange::disconnected()));
        assert!(status.connection().is_disconnected());
        assert_eq!(status.power(), PowerState::Off);
        // Setpoint and mode survive the disconnect
        assert_eq!(status.temperature(), Temperature::DEFAULT);
        assert_eq!(status.mode(), AcMode::Cool);
    }

    #[test]
    fn batch_reports_change_if_any_member_changes() {
        let mut status = DeviceStatus::new("AC");
        status.apply(&StateChange::connected());

        // Power is already off; only the connection member changes
        assert!(status.apply(&StateChange::disconnected()));
        // Nothing left to change
        assert!(!status.apply(&StateChange::disconnected()));
    }

    #[test]
    fn can_adjust_requires_connected_and_on() {
        let mut status = DeviceStatus::new("AC");
        assert!(!status.can_adjust());

        status.apply(&StateChange::connecting());
        assert!(!status.can_adjust());

        status.apply(&StateChange::connected());
        assert!(!status.can_adjust());

        status.apply(&StateChange::power_on());
        assert!(status.can_adjust());
    }
}
