// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode of the simulated air conditioner.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode of the air conditioner.
///
/// The wire strings (`COOL`, `HEAT`, `FAN`) match what a front-end
/// consuming serialized status snapshots expects to display.
///
/// # Examples
///
/// ```
/// use acsim_lib::types::AcMode;
///
/// assert_eq!(AcMode::Cool.as_str(), "COOL");
/// assert_eq!("heat".parse::<AcMode>().unwrap(), AcMode::Heat);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcMode {
    /// Cooling mode.
    #[default]
    Cool,
    /// Heating mode.
    Heat,
    /// Fan-only mode (no temperature regulation).
    Fan,
}

impl AcMode {
    /// All selectable modes, in the order a mode selector presents them.
    pub const ALL: [Self; 3] = [Self::Cool, Self::Heat, Self::Fan];

    /// Returns the display string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cool => "COOL",
            Self::Heat => "HEAT",
            Self::Fan => "FAN",
        }
    }
}

impl fmt::Display for AcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AcMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COOL" => Ok(Self::Cool),
            "HEAT" => Ok(Self::Heat),
            "FAN" => Ok(Self::Fan),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}
