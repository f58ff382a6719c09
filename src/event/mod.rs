// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for status changes.
//!
//! This module provides a pub/sub event system for notifying subscribers
//! about status changes. The [`EventBus`] uses tokio's broadcast channel
//! so multiple subscribers can receive events; each event names the
//! originating remote via its [`RemoteId`], so several simulated remotes
//! can share one consumer.
//!
//! # Examples
//!
//! ```
//! use acsim_lib::event::{EventBus, RemoteEvent, RemoteId};
//! use acsim_lib::state::ConnectionState;
//!
//! let bus = EventBus::new();
//!
//! // Subscribe to events
//! let mut rx = bus.subscribe();
//!
//! // Publish an event
//! let remote_id = RemoteId::new();
//! bus.publish(RemoteEvent::connection_changed(
//!     remote_id,
//!     ConnectionState::Connecting,
//! ));
//! ```

mod event_bus;
mod remote_event;
mod remote_id;

pub use event_bus::EventBus;
pub use remote_event::RemoteEvent;
pub use remote_id::RemoteId;
