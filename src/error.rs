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

//! The codec's closed error taxonomy.
//!
//! Every decode or encode entry point in this crate returns one of these
//! kinds on failure. There is no wrapping of lower-layer errors: the whole
//! stack between a byte slice and a decoded packet is pure, so there is
//! nothing to wrap.

use core::fmt;

/// A single MQTT codec error kind.
///
/// `IncompleteBuffer` is not really an error — it is the signal a streaming
/// caller uses to know it must read more bytes before retrying. Every other
/// variant means the bytes seen so far are not a valid MQTT packet (or the
/// caller asked for something the packet doesn't contain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MqttError {
    /// More bytes are needed before a fixed header or packet body can be parsed.
    IncompleteBuffer,
    /// A bounded packet body under- or over-ran during decode.
    PacketLengthMismatch,
    /// Total encoded packet size would exceed the address-space limit (16-bit targets only).
    PacketTooLarge,
    /// Fixed header type nibble was 0.
    InvalidMessageType,
    /// Fixed header flags contradict the type's required pattern.
    InvalidFlags,
    /// QoS bit pair was `0b11`.
    InvalidQos,
    /// Variable Byte Integer was non-canonical or had no terminating byte within 4 bytes.
    InvalidUvar,
    /// A boolean byte was neither 0 nor 1.
    InvalidBool,
    /// String bytes were not valid UTF-8.
    InvalidUtf8,
    /// String bytes contained an embedded NUL (U+0000).
    InternalNull,
    /// Encoder-side: a string's byte length exceeds 65535.
    InvalidStringLength,
    /// Topic filter was empty.
    InvalidEmptyFilter,
    /// Topic contained a wildcard character.
    InvalidWildcard,
    /// Filter wildcard appeared somewhere other than as a whole level, or `#` was not last.
    InvalidWildcardPosition,
    /// CONNECT protocol name was not the 4 bytes `"MQTT"`.
    InvalidProtocolName,
    /// CONNECT protocol version byte was neither 4 nor 5.
    InvalidProtocolVersion,
    /// Packet id was 0 where a non-zero id is required.
    InvalidPacketId,
    /// Strict-mode client id rejected (length or alphabet).
    InvalidClientId,
    /// CONNECT flags byte violated a cross-field constraint.
    InvalidConnectFlags,
    /// CONNACK session-present/return-code combination is not legal.
    InvalidConnack,
    /// CONNACK return code outside `0..=5`.
    InvalidReturnCode,
    /// SUBACK return code outside `{0x00, 0x01, 0x02, 0x80}`.
    InvalidSubackCode,
    /// v5 property id not in the allowed subset for this packet type.
    InvalidProperty,
    /// v5 unique property appeared more than once.
    InvalidDuplicateProperty,
    /// v5 property payload failed its type-specific validation.
    InvalidPropertyPayload,
    /// Caller-requested assertion: decoded protocol version did not match the one expected.
    UnexpectedVersion,
    /// Caller-requested assertion: decoded message type did not match the one expected.
    UnexpectedMsgType,
    /// Caller-requested assertion: decoded length did not match the one expected.
    UnexpectedLength,
}

impl fmt::Display for MqttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::IncompleteBuffer => "more bytes needed before this packet can be parsed",
            Self::PacketLengthMismatch => "packet body over- or under-ran its declared length",
            Self::PacketTooLarge => "encoded packet size exceeds the address-space limit",
            Self::InvalidMessageType => "fixed header message type was 0",
            Self::InvalidFlags => "fixed header flags do not match the required pattern",
            Self::InvalidQos => "QoS bit pair 0b11 is not a valid QoS level",
            Self::InvalidUvar => "variable byte integer is non-canonical or unterminated",
            Self::InvalidBool => "boolean byte was neither 0 nor 1",
            Self::InvalidUtf8 => "string bytes are not valid UTF-8",
            Self::InternalNull => "string bytes contain an embedded NUL",
            Self::InvalidStringLength => "string byte length exceeds 65535",
            Self::InvalidEmptyFilter => "topic filter is empty",
            Self::InvalidWildcard => "topic name contains a wildcard character",
            Self::InvalidWildcardPosition => "wildcard is not alone in its level, or '#' is not last",
            Self::InvalidProtocolName => "CONNECT protocol name is not \"MQTT\"",
            Self::InvalidProtocolVersion => "CONNECT protocol version is neither 4 nor 5",
            Self::InvalidPacketId => "packet id is 0 where a non-zero id is required",
            Self::InvalidClientId => "client id rejected by strict-mode validation",
            Self::InvalidConnectFlags => "CONNECT flags byte violates a cross-field constraint",
            Self::InvalidConnack => "CONNACK session-present/return-code combination is illegal",
            Self::InvalidReturnCode => "CONNACK return code is outside 0..=5",
            Self::InvalidSubackCode => "SUBACK return code is not one of 0x00/0x01/0x02/0x80",
            Self::InvalidProperty => "property id is not allowed for this packet type",
            Self::InvalidDuplicateProperty => "unique property appeared more than once",
            Self::InvalidPropertyPayload => "property payload failed validation",
            Self::UnexpectedVersion => "decoded protocol version did not match the expected one",
            Self::UnexpectedMsgType => "decoded message type did not match the expected one",
            Self::UnexpectedLength => "decoded length did not match the expected one",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MqttError {}
