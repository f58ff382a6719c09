// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `AcSim` Lib - A Rust library simulating a smart air-conditioner remote.
//!
//! This library provides the state core of a smart AC remote-control
//! widget: connection lifecycle, power, temperature setpoint, and
//! operating mode, plus the guarded request entry points a control surface
//! wires its buttons to. No real hardware is addressed — "connecting" is a
//! timer that completes after a fixed delay, and every other request is a
//! local state transition.
//!
//! # Request semantics
//!
//! A request whose preconditions do not hold is silently ignored rather
//! than rejected with an error, mirroring a control surface that disables
//! the corresponding buttons. The guards in the [`gateway`] module remain
//! the authoritative enforcement:
//!
//! - Connect/disconnect toggle: ignored while a connect is in flight.
//! - Power toggle: requires a connected remote.
//! - Temperature (16-30 °C, clamped) and mode: require a connected remote
//!   with the power on.
//!
//! # Quick Start
//!
//! ```no_run
//! use acsim_lib::{AcMode, AcRemote, Subscribable};
//!
//! #[tokio::main]
//! async fn main() {
//!     let remote = AcRemote::builder("Living Room AC").build();
//!
//!     // Re-render on every effective change
//!     remote.on_status_changed(|change| {
//!         println!("changed: {change:?}");
//!     });
//!
//!     // Begin the simulated connect; it completes two seconds later
//!     remote.request_connection_toggle();
//!     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
//!
//!     remote.request_power_toggle();
//!     remote.request_temperature(24);
//!     remote.request_mode(AcMode::Heat);
//! }
//! ```
//!
//! # Watching snapshots
//!
//! A render loop that prefers full snapshots over individual changes can
//! await the watch channel instead of registering callbacks:
//!
//! ```no_run
//! use acsim_lib::AcRemote;
//!
//! #[tokio::main]
//! async fn main() {
//!     let remote = AcRemote::builder("Living Room AC").build();
//!     let mut rx = remote.watch_status();
//!
//!     remote.request_connection_toggle();
//!     while rx.changed().await.is_ok() {
//!         let status = rx.borrow_and_update().clone();
//!         println!("{} is {}", status.name(), status.connection());
//!     }
//! }
//! ```

pub mod error;
pub mod event;
pub mod gateway;
mod remote;
pub mod state;
pub mod subscription;
pub mod types;

pub use error::{Error, Result, ValueError};
pub use event::{EventBus, RemoteEvent, RemoteId};
pub use remote::{AcRemote, AcRemoteBuilder, DEFAULT_CONNECT_DELAY};
pub use state::{ConnectionState, DeviceStatus, StateChange};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{AcMode, PowerState, Temperature};
