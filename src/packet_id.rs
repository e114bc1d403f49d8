/**
 * MIT License
 *
 * Copyright (c) 2025 Takatoshi Kondo
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Packet identifiers.
//!
//! A 16-bit non-zero id correlating QoS>0 PUBLISH/ACK exchanges. Zero is a
//! distinguished "absent" marker (used by QoS 0 PUBLISH) and is never put on
//! the wire; modeling the non-zero invariant as a type rather than a
//! convention rules out accidentally encoding it.

use crate::error::MqttError;
use core::num::NonZeroU16;

/// A non-zero MQTT packet id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PacketId(NonZeroU16);

impl PacketId {
    /// Wrap a raw 16-bit value, rejecting 0.
    pub fn new(value: u16) -> Result<Self, MqttError> {
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(MqttError::InvalidPacketId)
    }

    /// The raw 16-bit value.
    pub fn get(self) -> u16 {
        self.0.get()
    }
}

impl core::fmt::Display for PacketId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert_eq!(PacketId::new(0), Err(MqttError::InvalidPacketId));
    }

    #[test]
    fn roundtrips_nonzero() {
        assert_eq!(PacketId::new(42).unwrap().get(), 42);
    }
}
