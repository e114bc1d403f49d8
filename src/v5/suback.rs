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

//! SUBACK (v5.0): packet id, properties, then one reason-code byte per
//! subscription requested.

use super::property::{self, Properties};
use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};
use crate::packet_id::PacketId;

const SUBACK_PROPERTIES: &[u8] = &[31, 38];

/// Reason codes defined for SUBACK (MQTT v5.0 §3.9.3).
const VALID_CODES: &[u8] = &[
    0x00, 0x01, 0x02, 0x80, 0x83, 0x87, 0x8F, 0x91, 0x97, 0x9E, 0xA1, 0xA2,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suback<'a> {
    pub packet_id: PacketId,
    pub properties: Properties<'a>,
    codes: &'a [u8],
}

fn validate_code(byte: u8) -> Result<(), MqttError> {
    if VALID_CODES.contains(&byte) {
        Ok(())
    } else {
        Err(MqttError::InvalidSubackCode)
    }
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Suback<'a>, MqttError> {
    let packet_id = d.split_packet_id()?;
    let properties = property::decode(&mut d, SUBACK_PROPERTIES)?;
    let codes = d.split_off_rest().remaining_slice();
    if codes.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }
    for &byte in codes {
        validate_code(byte)?;
    }
    Ok(Suback {
        packet_id,
        properties,
        codes,
    })
}

impl<'a> Suback<'a> {
    pub fn reason_codes(&self) -> &'a [u8] {
        self.codes
    }
}

pub fn validate(properties: &Properties<'_>, codes: &[u8]) -> Result<EncodedSize, MqttError> {
    if codes.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }
    for &byte in codes {
        validate_code(byte)?;
    }
    let len = 2 + property::section_size(properties.payload_len())? + codes.len();
    encode::compute_encoded_size(len)
}

pub fn populate(
    packet_id: PacketId,
    properties: &Properties<'_>,
    codes: &[u8],
    size: EncodedSize,
    out: &mut [u8],
) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Suback, 0));
    e.put_uvar(&size.remaining_length);
    e.put_packet_id(packet_id);
    properties.write(&mut e);
    let start = e.position();
    out[start..start + codes.len()].copy_from_slice(codes);
    Ok(start + codes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_reason_codes() {
        let body: &[u8] = &[0x00, 0x01, 0x00, 0x01, 0x80, 0xA2];
        let s = decode(Decoder::new(body)).unwrap();
        assert_eq!(s.reason_codes(), &[0x01, 0x80, 0xA2]);
    }

    #[test]
    fn rejects_unknown_code() {
        let body: &[u8] = &[0x00, 0x01, 0x00, 0x05];
        assert_eq!(decode(Decoder::new(body)), Err(MqttError::InvalidSubackCode));
    }
}
