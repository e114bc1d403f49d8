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

//! SUBACK (v3.1.1): packet id followed by one result-code byte per
//! subscription requested. A zero-length result list is rejected — a SUBACK
//! with nothing to acknowledge cannot correspond to a well-formed SUBSCRIBE.

use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};
use crate::packet_id::PacketId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suback<'a> {
    pub packet_id: PacketId,
    codes: &'a [u8],
}

fn validate_code(byte: u8) -> Result<(), MqttError> {
    match byte {
        0x00 | 0x01 | 0x02 | 0x80 => Ok(()),
        _ => Err(MqttError::InvalidSubackCode),
    }
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Suback<'a>, MqttError> {
    let packet_id = d.split_packet_id()?;
    let codes = d.split_off_rest().remaining_slice();
    if codes.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }
    for &byte in codes {
        validate_code(byte)?;
    }
    Ok(Suback { packet_id, codes })
}

impl<'a> Suback<'a> {
    pub fn return_codes(&self) -> &'a [u8] {
        self.codes
    }
}

pub fn validate(_packet_id: PacketId, codes: &[u8]) -> Result<EncodedSize, MqttError> {
    if codes.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }
    for &byte in codes {
        validate_code(byte)?;
    }
    encode::compute_encoded_size(2 + codes.len())
}

pub fn populate(
    packet_id: PacketId,
    codes: &[u8],
    size: EncodedSize,
    out: &mut [u8],
) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Suback, 0));
    e.put_uvar(&size.remaining_length);
    e.put_packet_id(packet_id);
    let start = e.position();
    out[start..start + codes.len()].copy_from_slice(codes);
    Ok(start + codes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_result_codes() {
        let s = decode(Decoder::new(&[0x00, 0x01, 0x01, 0x80, 0x02])).unwrap();
        assert_eq!(s.return_codes(), &[0x01, 0x80, 0x02]);
    }

    #[test]
    fn rejects_unknown_code() {
        assert_eq!(
            decode(Decoder::new(&[0x00, 0x01, 0x03])),
            Err(MqttError::InvalidSubackCode)
        );
    }

    #[test]
    fn rejects_empty_code_list() {
        assert_eq!(
            decode(Decoder::new(&[0x00, 0x01])),
            Err(MqttError::PacketLengthMismatch)
        );
    }
}
