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

//! Fixed-header codec (C5): the first byte (message type + flags) plus the
//! `uvar` remaining-length prefix.

use crate::error::MqttError;
use crate::varint::VariableByteInteger;
use core::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

/// The 4-bit message type occupying the upper nibble of the fixed header byte.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TryFromPrimitive,
)]
#[repr(u8)]
pub enum PacketType {
    Connect = 1,
    Connack = 2,
    Publish = 3,
    Puback = 4,
    Pubrec = 5,
    Pubrel = 6,
    Pubcomp = 7,
    Subscribe = 8,
    Suback = 9,
    Unsubscribe = 10,
    Unsuback = 11,
    Pingreq = 12,
    Pingresp = 13,
    Disconnect = 14,
    /// MQTT v5.0 only.
    Auth = 15,
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Connect => "CONNECT",
            Self::Connack => "CONNACK",
            Self::Publish => "PUBLISH",
            Self::Puback => "PUBACK",
            Self::Pubrec => "PUBREC",
            Self::Pubrel => "PUBREL",
            Self::Pubcomp => "PUBCOMP",
            Self::Subscribe => "SUBSCRIBE",
            Self::Suback => "SUBACK",
            Self::Unsubscribe => "UNSUBSCRIBE",
            Self::Unsuback => "UNSUBACK",
            Self::Pingreq => "PINGREQ",
            Self::Pingresp => "PINGRESP",
            Self::Disconnect => "DISCONNECT",
            Self::Auth => "AUTH",
        };
        f.write_str(s)
    }
}

/// The required fixed-header flag nibble for a message type, or `None` for
/// PUBLISH, whose flags (DUP, QoS, RETAIN) vary per message.
fn required_flags(pt: PacketType) -> Option<u8> {
    match pt {
        PacketType::Pubrel | PacketType::Subscribe | PacketType::Unsubscribe => Some(0b0010),
        PacketType::Publish => None,
        _ => Some(0b0000),
    }
}

/// A parsed fixed header: message type, raw flags nibble, and remaining length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeader {
    pub packet_type: PacketType,
    pub flags: u8,
    pub remaining_len: u32,
}

impl FixedHeader {
    /// DUP flag, valid only for PUBLISH.
    pub fn dup(&self) -> bool {
        self.flags & 0b1000 != 0
    }

    /// QoS bits, valid only for PUBLISH.
    pub fn qos_bits(&self) -> u8 {
        (self.flags >> 1) & 0b11
    }

    /// RETAIN flag, valid only for PUBLISH.
    pub fn retain(&self) -> bool {
        self.flags & 0b0001 != 0
    }
}

/// Decode the fixed header's first byte: type nibble + flags nibble.
///
/// Validates the message type is non-zero, the QoS bit pair (for PUBLISH)
/// is not `0b11`, and non-PUBLISH flags match their required pattern.
pub fn decode_type_and_flags(byte: u8) -> Result<(PacketType, u8), MqttError> {
    let type_nibble = byte >> 4;
    let flags = byte & 0x0F;

    if type_nibble == 0 {
        return Err(MqttError::InvalidMessageType);
    }
    let packet_type =
        PacketType::try_from_primitive(type_nibble).map_err(|_| MqttError::InvalidMessageType)?;

    if packet_type == PacketType::Publish {
        if (flags >> 1) & 0b11 == 0b11 {
            return Err(MqttError::InvalidQos);
        }
    } else if let Some(required) = required_flags(packet_type) {
        if flags != required {
            return Err(MqttError::InvalidFlags);
        }
    }

    Ok((packet_type, flags))
}

/// Encode the fixed header's first byte.
pub fn encode_type_and_flags(packet_type: PacketType, flags: u8) -> u8 {
    ((packet_type as u8) << 4) | (flags & 0x0F)
}

/// The canonical VBI encoding of `remaining_len`.
pub fn encode_remaining_length(remaining_len: u32) -> Result<VariableByteInteger, MqttError> {
    VariableByteInteger::encode(remaining_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_type_zero() {
        assert_eq!(
            decode_type_and_flags(0x00),
            Err(MqttError::InvalidMessageType)
        );
    }

    #[test]
    fn rejects_qos_0b11_on_publish() {
        assert_eq!(decode_type_and_flags(0x36), Err(MqttError::InvalidQos));
    }

    #[test]
    fn rejects_bad_flags_on_non_publish() {
        assert_eq!(decode_type_and_flags(0x11), Err(MqttError::InvalidFlags));
    }

    #[test]
    fn pubrel_requires_0b0010() {
        let (pt, flags) = decode_type_and_flags(0x62).unwrap();
        assert_eq!(pt, PacketType::Pubrel);
        assert_eq!(flags, 0b0010);
    }

    #[test]
    fn connect_header_roundtrip() {
        let (pt, flags) = decode_type_and_flags(0x10).unwrap();
        assert_eq!(pt, PacketType::Connect);
        assert_eq!(encode_type_and_flags(pt, flags), 0x10);
    }
}
