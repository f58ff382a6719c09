// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for configuring a simulated remote.

use std::time::Duration;

use crate::types::{AcMode, Temperature};

use super::{AcRemote, DEFAULT_CONNECT_DELAY};

/// Default event bus capacity for a remote.
const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Builder for creating an [`AcRemote`] with custom settings.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use acsim_lib::AcRemote;
/// use acsim_lib::types::{AcMode, Temperature};
///
/// let remote = AcRemote::builder("Bedroom AC")
///     .with_initial_temperature(Temperature::new(18).unwrap())
///     .with_initial_mode(AcMode::Heat)
///     .with_connect_delay(Duration::from_millis(500))
///     .build();
///
/// assert_eq!(remote.status().temperature().degrees(), 18);
/// ```
#[derive(Debug, Clone)]
pub struct AcRemoteBuilder {
    pub(super) name: String,
    pub(super) initial_temperature: Temperature,
    pub(super) initial_mode: AcMode,
    pub(super) connect_delay: Duration,
    pub(super) event_capacity: usize,
}

impl AcRemoteBuilder {
    /// Creates a builder with factory defaults: 22 °C, cooling mode, and
    /// the standard two-second connect delay.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_temperature: Temperature::DEFAULT,
            initial_mode: AcMode::default(),
            connect_delay: DEFAULT_CONNECT_DELAY,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Sets the initial temperature setpoint.
    #[must_use]
    pub fn with_initial_temperature(mut self, temperature: Temperature) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Sets the initial operating mode.
    #[must_use]
    pub fn with_initial_mode(mut self, mode: AcMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Sets the simulated connect delay.
    ///
    /// Tests typically shorten this; the default matches the two seconds
    /// a real pairing handshake is simulated to take.
    #[must_use]
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = delay;
        self
    }

    /// Sets the event bus capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Builds the remote.
    #[must_use]
    pub fn build(self) -> AcRemote {
        AcRemote::from_builder(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = AcRemoteBuilder::new("AC");
        assert_eq!(builder.initial_temperature, Temperature::DEFAULT);
        assert_eq!(builder.initial_mode, AcMode::Cool);
        assert_eq!(builder.connect_delay, DEFAULT_CONNECT_DELAY);
    }

    #[test]
    fn builder_overrides() {
        let builder = AcRemoteBuilder::new("AC")
            .with_initial_temperature(Temperature::MAX)
            .with_initial_mode(AcMode::Fan)
            .with_connect_delay(Duration::from_millis(10))
            .with_event_capacity(8);

        assert_eq!(builder.initial_temperature, Temperature::MAX);
        assert_eq!(builder.initial_mode, AcMode::Fan);
        assert_eq!(builder.connect_delay, Duration::from_millis(10));
        assert_eq!(builder.event_capacity, 8);
    }
}
