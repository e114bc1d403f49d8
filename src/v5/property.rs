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

//! MQTT v5.0 property codec (C9).
//!
//! A property section is itself a list of `(identifier, value)` pairs,
//! length-prefixed by a VBI byte count. [`decode`] runs a single validating
//! pass over the section — checking every id is in the caller's allowed set,
//! every non-repeatable id appears at most once, and every value matches its
//! id's wire type — then hands back a [`Properties`] that keeps only the
//! raw (already-validated) byte slice. Actual values are read out lazily
//! through [`Properties::iter`]; nothing is ever collected into a `Vec`.

use crate::decode::Decoder;
use crate::error::MqttError;

/// The wire payload shape a property identifier determines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropertyKind {
    Byte,
    TwoByteInt,
    FourByteInt,
    VarInt,
    Utf8String,
    BinaryData,
    Utf8StringPair,
}

/// Highest standard property identifier defined by MQTT v5.0, used to size
/// the stack-allocated "seen" set for uniqueness checking.
const MAX_PROPERTY_ID: usize = 42;

fn kind_of(id: u8) -> Option<PropertyKind> {
    use PropertyKind::*;
    Some(match id {
        1 => Byte,               // Payload Format Indicator
        2 => FourByteInt,        // Message Expiry Interval
        3 => Utf8String,         // Content Type
        8 => Utf8String,         // Response Topic
        9 => BinaryData,         // Correlation Data
        11 => VarInt,            // Subscription Identifier
        17 => FourByteInt,       // Session Expiry Interval
        18 => Utf8String,        // Assigned Client Identifier
        19 => TwoByteInt,        // Server Keep Alive
        21 => Utf8String,        // Authentication Method
        22 => BinaryData,        // Authentication Data
        23 => Byte,              // Request Problem Information
        24 => FourByteInt,       // Will Delay Interval
        25 => Byte,              // Request Response Information
        26 => Utf8String,        // Response Information
        28 => Utf8String,        // Server Reference
        31 => Utf8String,        // Reason String
        33 => TwoByteInt,        // Receive Maximum
        34 => TwoByteInt,        // Topic Alias Maximum
        35 => TwoByteInt,        // Topic Alias
        36 => Byte,              // Maximum QoS
        37 => Byte,              // Retain Available
        38 => Utf8StringPair,    // User Property
        39 => FourByteInt,       // Maximum Packet Size
        40 => Byte,              // Wildcard Subscription Available
        41 => Byte,              // Subscription Identifier Available
        42 => Byte,              // Shared Subscription Available
        _ => return None,
    })
}

/// Whether an identifier may appear more than once in one property section.
/// Only Subscription Identifier and User Property are repeatable.
fn is_repeatable(id: u8) -> bool {
    matches!(id, 11 | 38)
}

/// A decoded property value, still borrowing from the original buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue<'a> {
    Byte(u8),
    TwoByteInt(u16),
    FourByteInt(u32),
    VarInt(u32),
    Utf8(&'a str),
    Binary(&'a [u8]),
    StringPair(&'a str, &'a str),
}

/// One decoded `(identifier, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a> {
    pub id: u8,
    pub value: PropertyValue<'a>,
}

fn read_one<'a>(d: &mut Decoder<'a>) -> Result<Property<'a>, MqttError> {
    let raw_id = d.split_uvar()?;
    let id = u8::try_from(raw_id).map_err(|_| MqttError::InvalidProperty)?;
    let kind = kind_of(id).ok_or(MqttError::InvalidProperty)?;
    let value = match kind {
        PropertyKind::Byte => {
            let byte = d.split_u8()?;
            if id == 1 && byte > 1 {
                // Payload Format Indicator: only 0 (unspecified) or 1 (UTF-8) are legal.
                return Err(MqttError::InvalidPropertyPayload);
            }
            PropertyValue::Byte(byte)
        }
        PropertyKind::TwoByteInt => PropertyValue::TwoByteInt(d.split_u16()?),
        PropertyKind::FourByteInt => PropertyValue::FourByteInt(d.split_u32()?),
        PropertyKind::VarInt => {
            let value = d.split_uvar()?;
            if id == 11 && value == 0 {
                // Subscription Identifier: 0 is reserved and must never appear on the wire.
                return Err(MqttError::InvalidPropertyPayload);
            }
            PropertyValue::VarInt(value)
        }
        PropertyKind::Utf8String => PropertyValue::Utf8(d.split_utf8_string()?),
        PropertyKind::BinaryData => PropertyValue::Binary(d.split_byte_string()?),
        PropertyKind::Utf8StringPair => {
            let k = d.split_utf8_string()?;
            let v = d.split_utf8_string()?;
            PropertyValue::StringPair(k, v)
        }
    };
    Ok(Property { id, value })
}

/// An already-validated property section. Holds only the raw bytes; no
/// property is ever materialized until [`Properties::iter`] is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Properties<'a> {
    bytes: &'a [u8],
}

impl<'a> Properties<'a> {
    /// An empty property section (used by encoders with nothing to say).
    pub const EMPTY: Properties<'static> = Properties { bytes: &[] };

    /// Wrap an already wire-valid property section for re-encoding.
    ///
    /// Unlike [`decode`], this performs no validation — it exists so a
    /// caller that built (or is forwarding) a property section can hand it
    /// straight to a `populate` function. Constructing one from untrusted
    /// bytes and encoding it would emit an invalid packet.
    pub fn from_raw(bytes: &'a [u8]) -> Self {
        Properties { bytes }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte length of the property entries, not counting the length prefix.
    pub fn payload_len(&self) -> usize {
        self.bytes.len()
    }

    /// Write the VBI length prefix followed by the raw property bytes.
    pub(crate) fn write(&self, e: &mut crate::encode::Encoder<'_>) {
        let vbi = crate::varint::VariableByteInteger::encode(self.bytes.len() as u32)
            .expect("payload_len was already bounded when this Properties was built");
        e.put_uvar(&vbi);
        e.put_raw(self.bytes);
    }

    /// Re-walk the section, yielding each property in wire order.
    pub fn iter(&self) -> PropertyIter<'a> {
        PropertyIter {
            d: Decoder::new(self.bytes),
        }
    }

    /// First property matching `id`, if present.
    pub fn get(&self, id: u8) -> Option<PropertyValue<'a>> {
        self.iter()
            .filter_map(|r| r.ok())
            .find(|p| p.id == id)
            .map(|p| p.value)
    }
}

/// Lazy walk over a [`Properties`] section.
#[derive(Debug, Clone)]
pub struct PropertyIter<'a> {
    d: Decoder<'a>,
}

impl<'a> Iterator for PropertyIter<'a> {
    type Item = Result<Property<'a>, MqttError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.d.remaining() == 0 {
            return None;
        }
        Some(read_one(&mut self.d))
    }
}

/// Decode a length-prefixed property section, validating every entry
/// against `allowed` (the packet type's permitted identifier set) and
/// rejecting a second occurrence of any non-repeatable identifier.
pub fn decode<'a>(d: &mut Decoder<'a>, allowed: &[u8]) -> Result<Properties<'a>, MqttError> {
    let len = d.split_uvar()? as usize;
    let section = d.split_off(len)?;
    let bytes = section.remaining_slice();

    let mut seen = [false; MAX_PROPERTY_ID + 1];
    let mut cursor = Decoder::new(bytes);
    while cursor.remaining() > 0 {
        let prop = read_one(&mut cursor)?;
        if !allowed.contains(&prop.id) {
            return Err(MqttError::InvalidProperty);
        }
        if !is_repeatable(prop.id) {
            let slot = &mut seen[prop.id as usize];
            if *slot {
                return Err(MqttError::InvalidDuplicateProperty);
            }
            *slot = true;
        }
    }

    Ok(Properties { bytes })
}

/// Byte length the VBI-prefixed encoding of a property section with the
/// given raw entries occupies, given their already-summed payload length.
pub fn section_size(payload_len: usize) -> Result<usize, MqttError> {
    let vbi_len = u32::try_from(payload_len).map_err(|_| MqttError::PacketTooLarge)?;
    let prefix = crate::varint::VariableByteInteger::encode(vbi_len)?;
    Ok(prefix.size() + payload_len)
}

/// A caller-facing builder for encoding a property section: accumulates the
/// raw bytes of each property directly into the output buffer position
/// tracked by an [`crate::encode::Encoder`]'s caller, since this crate keeps
/// no owned property buffers. See individual v5 packet encoders, which
/// write properties with this module's `write_*` helpers directly against
/// an `Encoder`.
pub mod write {
    use crate::encode::Encoder;
    use crate::encode::byte_string_size;
    use crate::encode::string_size;
    use crate::error::MqttError;
    use crate::varint::VariableByteInteger;

    fn id_size(id: u8) -> usize {
        VariableByteInteger::encode(id as u32)
            .map(|v| v.size())
            .unwrap_or(1)
    }

    pub fn size_byte(id: u8) -> usize {
        id_size(id) + 1
    }

    pub fn size_two_byte_int(id: u8) -> usize {
        id_size(id) + 2
    }

    pub fn size_four_byte_int(id: u8) -> usize {
        id_size(id) + 4
    }

    pub fn size_varint(id: u8, value: u32) -> Result<usize, MqttError> {
        Ok(id_size(id) + VariableByteInteger::encode(value)?.size())
    }

    pub fn size_utf8(id: u8, s: &str) -> Result<usize, MqttError> {
        Ok(id_size(id) + string_size(s)?)
    }

    pub fn size_binary(id: u8, bytes: &[u8]) -> Result<usize, MqttError> {
        Ok(id_size(id) + byte_string_size(bytes)?)
    }

    pub fn size_string_pair(id: u8, k: &str, v: &str) -> Result<usize, MqttError> {
        Ok(id_size(id) + string_size(k)? + string_size(v)?)
    }

    fn put_id(e: &mut Encoder<'_>, id: u8) {
        let vbi = VariableByteInteger::encode(id as u32).expect("property ids fit in one byte");
        e.put_uvar(&vbi);
    }

    pub fn put_byte(e: &mut Encoder<'_>, id: u8, value: u8) {
        put_id(e, id);
        e.put_u8(value);
    }

    pub fn put_two_byte_int(e: &mut Encoder<'_>, id: u8, value: u16) {
        put_id(e, id);
        e.put_u16(value);
    }

    pub fn put_four_byte_int(e: &mut Encoder<'_>, id: u8, value: u32) {
        put_id(e, id);
        e.put_u32(value);
    }

    pub fn put_varint(e: &mut Encoder<'_>, id: u8, vbi: &VariableByteInteger) {
        put_id(e, id);
        e.put_uvar(vbi);
    }

    pub fn put_utf8(e: &mut Encoder<'_>, id: u8, s: &str) {
        put_id(e, id);
        e.put_utf8_string(s);
    }

    pub fn put_binary(e: &mut Encoder<'_>, id: u8, bytes: &[u8]) {
        put_id(e, id);
        e.put_byte_string(bytes);
    }

    pub fn put_string_pair(e: &mut Encoder<'_>, id: u8, k: &str, v: &str) {
        put_id(e, id);
        e.put_utf8_string(k);
        e.put_utf8_string(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNACK_ALLOWED: &[u8] = &[17, 18, 19, 21, 22, 26, 28, 31, 33, 34, 36, 37, 38, 39, 40, 41, 42];

    #[test]
    fn decodes_reason_string_and_user_property() {
        let mut body = vec![];
        // length placeholder, filled below
        let mut payload = vec![];
        payload.push(31); // ReasonString
        payload.extend_from_slice(&[0x00, 0x02, b'o', b'k']);
        payload.push(38); // UserProperty
        payload.extend_from_slice(&[0x00, 0x01, b'k', 0x00, 0x01, b'v']);
        body.push(payload.len() as u8);
        body.extend_from_slice(&payload);

        let mut d = Decoder::new(&body);
        let props = decode(&mut d, CONNACK_ALLOWED).unwrap();
        let items: Vec<_> = props.iter().map(|r| r.unwrap()).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 31);
        assert_eq!(items[0].value, PropertyValue::Utf8("ok"));
    }

    #[test]
    fn rejects_duplicate_nonrepeatable_property() {
        let mut payload = vec![];
        payload.push(31);
        payload.extend_from_slice(&[0x00, 0x01, b'a']);
        payload.push(31);
        payload.extend_from_slice(&[0x00, 0x01, b'b']);
        let mut body = vec![payload.len() as u8];
        body.extend_from_slice(&payload);

        let mut d = Decoder::new(&body);
        assert_eq!(
            decode(&mut d, CONNACK_ALLOWED),
            Err(MqttError::InvalidDuplicateProperty)
        );
    }

    #[test]
    fn allows_repeated_user_property() {
        let mut payload = vec![];
        for (k, v) in [("a", "1"), ("a", "2")] {
            payload.push(38);
            payload.extend_from_slice(&[0x00, k.len() as u8, k.as_bytes()[0]]);
            payload.extend_from_slice(&[0x00, v.len() as u8, v.as_bytes()[0]]);
        }
        let mut body = vec![payload.len() as u8];
        body.extend_from_slice(&payload);
        let mut d = Decoder::new(&body);
        let props = decode(&mut d, CONNACK_ALLOWED).unwrap();
        assert_eq!(props.iter().count(), 2);
    }

    #[test]
    fn rejects_property_outside_allowed_set() {
        // PayloadFormatIndicator (id 1) is not in CONNACK's allowed set.
        let body: &[u8] = &[0x02, 1, 0x01];
        let mut d = Decoder::new(body);
        assert_eq!(
            decode(&mut d, CONNACK_ALLOWED),
            Err(MqttError::InvalidProperty)
        );
    }

    #[test]
    fn empty_section_decodes_to_no_properties() {
        let body = [0x00u8];
        let mut d = Decoder::new(&body);
        let props = decode(&mut d, CONNACK_ALLOWED).unwrap();
        assert!(props.is_empty());
        assert_eq!(props.iter().count(), 0);
    }

    #[test]
    fn rejects_payload_format_indicator_above_one() {
        const PUBLISH_ALLOWED: &[u8] = &[1, 2, 3, 8, 9, 11, 35, 38];
        let body: &[u8] = &[0x02, 1, 0x02];
        let mut d = Decoder::new(body);
        assert_eq!(
            decode(&mut d, PUBLISH_ALLOWED),
            Err(MqttError::InvalidPropertyPayload)
        );
    }

    #[test]
    fn rejects_subscription_identifier_zero() {
        const SUBSCRIBE_ALLOWED: &[u8] = &[11, 38];
        let body: &[u8] = &[0x02, 11, 0x00];
        let mut d = Decoder::new(body);
        assert_eq!(
            decode(&mut d, SUBSCRIBE_ALLOWED),
            Err(MqttError::InvalidPropertyPayload)
        );
    }
}
