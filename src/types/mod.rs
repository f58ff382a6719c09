// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the simulated air conditioner.
//!
//! This module provides type-safe representations of the values a remote
//! control can set. Each type ensures values are within their valid ranges
//! at construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of the air conditioner
//! - [`Temperature`] - Target temperature in whole degrees Celsius (16-30)
//! - [`AcMode`] - Operating mode (cool, heat, fan)

mod mode;
mod power;
mod temperature;

pub use mode::AcMode;
pub use power::PowerState;
pub use temperature::Temperature;
