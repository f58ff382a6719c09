// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote event types.

use crate::state::{ConnectionState, DeviceStatus, StateChange};

use super::RemoteId;

/// Events emitted by a simulated remote.
///
/// Every effective transition produces a [`StateChanged`](Self::StateChanged)
/// event carrying the specific change and the complete new status.
/// Transitions that touch the connection lifecycle additionally produce a
/// [`ConnectionChanged`](Self::ConnectionChanged) event, so connection
/// observers need not pattern-match through state changes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum RemoteEvent {
    /// The connection lifecycle advanced.
    ConnectionChanged {
        /// The ID of the remote.
        remote_id: RemoteId,
        /// The new connection state.
        connection: ConnectionState,
    },

    /// The status changed.
    ///
    /// Emitted for every effective transition, including the deferred
    /// connect completion.
    StateChanged {
        /// The ID of the remote.
        remote_id: RemoteId,
        /// The specific change that occurred.
        change: StateChange,
        /// The complete new status of the air conditioner.
        status: DeviceStatus,
    },
}

impl RemoteEvent {
    /// Returns the remote ID associated with this event.
    #[must_use]
    pub fn remote_id(&self) -> RemoteId {
        match self {
            Self::ConnectionChanged { remote_id, .. } | Self::StateChanged { remote_id, .. } => {
                *remote_id
            }
        }
    }

    /// Returns `true` if this is a connection event.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionChanged { .. })
    }

    /// Returns `true` if this is a state change event.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }

    /// Creates a connection changed event.
    #[must_use]
    pub fn connection_changed(remote_id: RemoteId, connection: ConnectionState) -> Self {
        Self::ConnectionChanged {
            remote_id,
            connection,
        }
    }

    /// Creates a state changed event.
    #[must_use]
    pub fn state_changed(remote_id: RemoteId, change: StateChange, status: DeviceStatus) -> Self {
        Self::StateChanged {
            remote_id,
            change,
            status,
        }
    }
}
