#![cfg_attr(not(feature = "std"), no_std)]

//! # mqtt-wire-codec
//!
//! A Sans-I/O wire-format codec for MQTT v3.1.1 (protocol level 4) and
//! MQTT v5.0 (protocol level 5) control packets.
//!
//! This crate performs no I/O and no dynamic allocation: decoded messages
//! borrow `&str`/`&[u8]` directly from the caller's buffer, and encoders
//! write into a caller-provided output slice sized by a prior validation
//! pass. It is suitable for use inside any transport, any async runtime,
//! or no runtime at all.
//!
//! ## Shape of the API
//!
//! - [`stream::Streaming`] peels fixed headers and packet bodies off a
//!   byte buffer one packet at a time, reporting [`error::MqttError::IncompleteBuffer`]
//!   rather than blocking when more bytes are needed.
//! - [`v3_11`] and [`v5`] each expose one module per message type, with a
//!   `decode(body) -> Result<Message, MqttError>` function and, for types
//!   that round-trip, `validate(msg) -> Result<EncodedSize, MqttError>` /
//!   `populate(msg, size, out) -> Result<usize, MqttError>` encoder pair.
//! - [`varint`], [`strings`], [`topic`], [`decode`], [`encode`] and
//!   [`header`] are the shared primitives both version modules build on.
//!
//! ## No-std support
//!
//! Disable the default `std` feature to build for `no_std` targets; the
//! codec never allocates, so no `alloc` dependency is required either way.
//! Enable the `tracing` feature to get diagnostic trace events from the
//! streaming splitter and property decoder; without it, those call sites
//! compile to nothing.

// MIT License
//
// Copyright (c) 2025 Takatoshi Kondo
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

pub mod common;
pub mod decode;
pub mod encode;
pub mod error;
pub mod header;
pub mod packet_id;
pub mod qos;
pub mod stream;
pub mod strings;
pub mod topic;
pub mod v3_11;
pub mod v5;
pub mod varint;

pub use error::MqttError;
pub use header::{FixedHeader, PacketType};
pub use packet_id::PacketId;
pub use qos::Qos;
pub use stream::Streaming;
