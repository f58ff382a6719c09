// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote identifier type.

use std::fmt;

use uuid::Uuid;

/// Unique identifier for a simulated remote.
///
/// This is a wrapper around UUID v4 that provides a distinct type for
/// remote identification, preventing accidental confusion with other
/// UUID-based identifiers.
///
/// # Examples
///
/// ```
/// use acsim_lib::event::RemoteId;
///
/// let id = RemoteId::new();
/// println!("Remote: {id}");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RemoteId(Uuid);

impl RemoteId {
    /// Creates a new unique remote identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a remote identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RemoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only first 8 characters for readability
        let short = &self.0.to_string()[..8];
        write!(f, "RemoteId({short}...)")
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RemoteId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<RemoteId> for Uuid {
    fn from(id: RemoteId) -> Self {
        id.0
    }
}
