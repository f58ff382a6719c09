// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection state of the simulated air conditioner.

use std::fmt;

/// Connection state of the air conditioner.
///
/// The lifecycle is linear: `Disconnected → Connecting → Connected →
/// Disconnected`. Modeling the progression as a single enum makes
/// "connecting and connected at the same time" unrepresentable.
///
/// # Examples
///
/// ```
/// use acsim_lib::state::ConnectionState;
///
/// let state = ConnectionState::Connecting;
/// assert!(state.is_connecting());
/// assert!(!state.is_connected());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionState {
    /// No connection to the air conditioner.
    #[default]
    Disconnected,
    /// A connection attempt is in flight.
    Connecting,
    /// The remote is paired with the air conditioner.
    Connected,
}

impl ConnectionState {
    /// Returns the display string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "DISCONNECTED",
            Self::Connecting => "CONNECTING",
            Self::Connected => "CONNECTED",
        }
    }

    /// Returns `true` if the remote is connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Returns `true` if a connection attempt is in flight.
    #[must_use]
    pub const fn is_connecting(&self) -> bool {
        matches!(self, Self::Connecting)
    }

    /// Returns `true` if the remote is disconnected.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_mutually_exclusive() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(!ConnectionState::Connected.is_connecting());

        assert!(ConnectionState::Connecting.is_connecting());
        assert!(!ConnectionState::Connecting.is_connected());

        assert!(ConnectionState::Disconnected.is_disconnected());
        assert!(!ConnectionState::Disconnected.is_connected());
        assert!(!ConnectionState::Disconnected.is_connecting());
    }

    #[test]
    fn default_is_disconnected() {
        assert_eq!(ConnectionState::default(), ConnectionState::Disconnected);
    }

    #[test]
    fn display() {
        assert_eq!(ConnectionState::Connecting.to_string(), "CONNECTING");
        assert_eq!(ConnectionState::Connected.to_string(), "CONNECTED");
        assert_eq!(ConnectionState::Disconnected.to_string(), "DISCONNECTED");
    }
}
