// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! This module provides types for tracking and updating the simulated air
//! conditioner's state. The [`DeviceStatus`] struct maintains the current
//! status, while [`StateChange`] represents individual transitions that can
//! be applied to it.
//!
//! # Examples
//!
//! ```
//! use acsim_lib::state::{DeviceStatus, StateChange};
//! use acsim_lib::types::PowerState;
//!
//! let mut status = DeviceStatus::new("Living Room AC");
//!
//! // Apply a power state change
//! let changed = status.apply(&StateChange::Power(PowerState::On));
//! assert!(changed);
//! assert!(status.power().is_on());
//! ```

mod connection;
mod device_status;
mod state_change;

pub use connection::ConnectionState;
pub use device_status::DeviceStatus;
pub use state_change::StateChange;
