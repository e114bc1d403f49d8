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

//! PUBREL (v5.0). Fixed-header flags must be `0b0010`, enforced on decode
//! by [`crate::header::decode_type_and_flags`].

use super::property::{self, Properties};
use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};
use crate::packet_id::PacketId;

const PUBREL_PROPERTIES: &[u8] = &[31, 38];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pubrel<'a> {
    pub packet_id: PacketId,
    pub reason_code: u8,
    pub properties: Properties<'a>,
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Pubrel<'a>, MqttError> {
    let packet_id = d.split_packet_id()?;
    let (reason_code, properties) = super::decode_reason_and_properties(&mut d, PUBREL_PROPERTIES)?;
    d.finalize()?;
    Ok(Pubrel {
        packet_id,
        reason_code,
        properties,
    })
}

fn body_len(msg: &Pubrel<'_>) -> Result<usize, MqttError> {
    Ok(2 + super::reason_and_properties_size(msg.reason_code, msg.properties.payload_len())?)
}

pub fn validate(msg: &Pubrel<'_>) -> Result<EncodedSize, MqttError> {
    encode::compute_encoded_size(body_len(msg)?)
}

pub fn populate(msg: &Pubrel<'_>, size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Pubrel, 0b0010));
    e.put_uvar(&size.remaining_length);
    e.put_packet_id(msg.packet_id);
    super::encode_reason_and_properties(
        &mut e,
        msg.reason_code,
        msg.properties.payload_len(),
        |e| msg.properties.write(e),
    );
    Ok(e.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_shortest_form() {
        let p = decode(Decoder::new(&[0x00, 0x07])).unwrap();
        let size = validate(&p).unwrap();
        let mut out = vec![0u8; size.total_len];
        populate(&p, size, &mut out).unwrap();
        assert_eq!(out, vec![0x62, 0x02, 0x00, 0x07]);
    }
}
