// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Guard logic for remote-control requests.
//!
//! Every user-facing request passes through one of the pure decision
//! functions in this module before it may touch the
//! [`DeviceStatus`](crate::state::DeviceStatus). Each function inspects the
//! current status and either produces the [`StateChange`] to apply or
//! yields nothing — a disallowed request is ignored, never an error.
//!
//! A presentation layer typically disables the controls whose requests
//! would be rejected here; that disabling is a convenience, the functions
//! in this module are the authoritative enforcement.
//!
//! # Gating rules
//!
//! - Connection toggle: ignored while a connect is in flight.
//! - Power toggle: requires a connected remote.
//! - Temperature and mode: require a connected remote with the power on.
//! - Temperature steps additionally refuse to cross the 16-30 °C bounds.

use crate::state::{DeviceStatus, StateChange};
use crate::types::{AcMode, Temperature};

/// Outcome of a connection-toggle request.
///
/// The connect path is the one request that cannot be expressed as a plain
/// [`StateChange`]: beginning a connect also schedules the deferred
/// completion, which is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionDecision {
    /// The request is ignored (an attempt is already in flight).
    Ignore,
    /// Drop the connection; the unit switches off with it.
    Disconnect,
    /// Begin a connection attempt and schedule its completion.
    BeginConnect,
}

/// Direction of a single-degree temperature step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// One degree warmer.
    Up,
    /// One degree cooler.
    Down,
}

/// Decides what a connection-toggle request should do.
///
/// An in-flight attempt cannot be reversed, a connected remote
/// disconnects, and a disconnected remote begins connecting.
#[must_use]
pub fn connection_toggle(status: &DeviceStatus) -> ConnectionDecision {
    if status.is_connecting() {
        ConnectionDecision::Ignore
    } else if status.is_connected() {
        ConnectionDecision::Disconnect
    } else {
        ConnectionDecision::BeginConnect
    }
}

/// Decides whether a power-toggle request takes effect.
///
/// Returns the power flip when the remote is connected, `None` otherwise.
#[must_use]
pub fn power_toggle(status: &DeviceStatus) -> Option<StateChange> {
    if !status.is_connected() {
        return None;
    }
    Some(StateChange::Power(status.power().toggled()))
}

/// Decides whether a setpoint request takes effect.
///
/// Returns the temperature change when the remote is connected with the
/// power on, `None` otherwise. Out-of-range raw input is clamped by the
/// caller ([`Temperature::clamped`]) before it reaches this function.
#[must_use]
pub fn set_temperature(status: &DeviceStatus, target: Temperature) -> Option<StateChange> {
    if !status.can_adjust() {
        return None;
    }
    Some(StateChange::Temperature(target))
}

/// Decides whether a single-degree step request takes effect.
///
/// Gated like [`set_temperature`]; additionally refuses the step when the
/// setpoint is already at the relevant bound, so a step never produces an
/// out-of-range request in the first place.
#[must_use]
pub fn step_temperature(status: &DeviceStatus, direction: StepDirection) -> Option<StateChange> {
    if !status.can_adjust() {
        return None;
    }
    let stepped = match direction {
        StepDirection::Up => status.temperature().step_up(),
        StepDirection::Down => status.temperature().step_down(),
    };
    stepped.map(StateChange::Temperature)
}

/// Decides whether a mode-change request takes effect.
///
/// Returns the mode change when the remote is connected with the power
/// on, `None` otherwise.
#[must_use]
pub fn set_mode(status: &DeviceStatus, mode: AcMode) -> Option<StateChange> {
    if !status.can_adjust() {
        return None;
    }
    Some(StateChange::Mode(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConnectionState;
    use crate::types::PowerState;

    fn status_in(connection: ConnectionState, power: PowerState) -> DeviceStatus {
        let mut status = DeviceStatus::new("AC");
        status.apply(&StateChange::Connection(connection));
        status.apply(&StateChange::Power(power));
        status
    }

    // ========== Connection toggle ==========

    #[test]
    fn toggle_from_disconnected_begins_connect() {
        let status = DeviceStatus::new("AC");
        assert_eq!(connection_toggle(&status), ConnectionDecision::BeginConnect);
    }

    #[test]
    fn toggle_while_connecting_is_ignored() {
        let status = status_in(ConnectionState::Connecting, PowerState::Off);
        assert_eq!(connection_toggle(&status), ConnectionDecision::Ignore);
    }

    #[test]
    fn toggle_while_connected_disconnects() {
        let status = status_in(ConnectionState::Connected, PowerState::On);
        assert_eq!(connection_toggle(&status), ConnectionDecision::Disconnect);
    }

    // ========== Power toggle ==========

    #[test]
    fn power_toggle_rejected_unless_connected() {
        let disconnected = DeviceStatus::new("AC");
        assert_eq!(power_toggle(&disconnected), None);

        let connecting = status_in(ConnectionState::Connecting, PowerState::Off);
        assert_eq!(power_toggle(&connecting), None);
    }

    #[test]
    fn power_toggle_flips_when_connected() {
        let off = status_in(ConnectionState::Connected, PowerState::Off);
        assert_eq!(
            power_toggle(&off),
            Some(StateChange::Power(PowerState::On))
        );

        let on = status_in(ConnectionState::Connected, PowerState::On);
        assert_eq!(
            power_toggle(&on),
            Some(StateChange::Power(PowerState::Off))
        );
    }

    // ========== Temperature ==========

    #[test]
    fn set_temperature_rejected_while_powered_off() {
        let status = status_in(ConnectionState::Connected, PowerState::Off);
        let target = Temperature::new(25).unwrap();
        assert_eq!(set_temperature(&status, target), None);
    }

    #[test]
    fn set_temperature_rejected_while_disconnected_or_connecting() {
        let target = Temperature::new(25).unwrap();

        let disconnected = DeviceStatus::new("AC");
        assert_eq!(set_temperature(&disconnected, target), None);

        let connecting = status_in(ConnectionState::Connecting, PowerState::Off);
        assert_eq!(set_temperature(&connecting, target), None);
    }

    #[test]
    fn set_temperature_accepted_when_adjustable() {
        let status = status_in(ConnectionState::Connected, PowerState::On);
        let target = Temperature::new(25).unwrap();
        assert_eq!(
            set_temperature(&status, target),
            Some(StateChange::Temperature(target))
        );
    }

    #[test]
    fn step_up_at_max_is_rejected() {
        let mut status = status_in(ConnectionState::Connected, PowerState::On);
        status.apply(&StateChange::Temperature(Temperature::MAX));
        assert_eq!(step_temperature(&status, StepDirection::Up), None);
    }

    #[test]
    fn step_down_at_min_is_rejected() {
        let mut status = status_in(ConnectionState::Connected, PowerState::On);
        status.apply(&StateChange::Temperature(Temperature::MIN));
        assert_eq!(step_temperature(&status, StepDirection::Down), None);
    }

    #[test]
    fn step_within_range_moves_one_degree() {
        let status = status_in(ConnectionState::Connected, PowerState::On);

        assert_eq!(
            step_temperature(&status, StepDirection::Up),
            Some(StateChange::Temperature(Temperature::new(23).unwrap()))
        );
        assert_eq!(
            step_temperature(&status, StepDirection::Down),
            Some(StateChange::Temperature(Temperature::new(21).unwrap()))
        );
    }

    #[test]
    fn step_rejected_under_same_gating_as_set() {
        let status = status_in(ConnectionState::Connected, PowerState::Off);
        assert_eq!(step_temperature(&status, StepDirection::Up), None);
        assert_eq!(step_temperature(&status, StepDirection::Down), None);
    }

    // ========== Mode ==========

    #[test]
    fn set_mode_gated_like_temperature() {
        let powered_off = status_in(ConnectionState::Connected, PowerState::Off);
        assert_eq!(set_mode(&powered_off, AcMode::Heat), None);

        let disconnected = DeviceStatus::new("AC");
        assert_eq!(set_mode(&disconnected, AcMode::Heat), None);

        let adjustable = status_in(ConnectionState::Connected, PowerState::On);
        assert_eq!(
            set_mode(&adjustable, AcMode::Heat),
            Some(StateChange::Mode(AcMode::Heat))
        );
    }
}
