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

//! CONNACK (v5.0).

use super::property::{self, Properties};
use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};

const CONNACK_PROPERTIES: &[u8] = &[
    17, 18, 19, 21, 22, 26, 28, 31, 33, 34, 36, 37, 38, 39, 40, 41, 42,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connack<'a> {
    pub session_present: bool,
    pub reason_code: u8,
    pub properties: Properties<'a>,
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Connack<'a>, MqttError> {
    let session_present = d.split_bool()?;
    let reason_code = d.split_u8()?;
    let properties = property::decode(&mut d, CONNACK_PROPERTIES)?;
    d.finalize()?;
    Ok(Connack {
        session_present,
        reason_code,
        properties,
    })
}

fn body_len(msg: &Connack<'_>) -> Result<usize, MqttError> {
    Ok(2 + property::section_size(msg.properties.payload_len())?)
}

pub fn validate(msg: &Connack<'_>) -> Result<EncodedSize, MqttError> {
    encode::compute_encoded_size(body_len(msg)?)
}

pub fn populate(msg: &Connack<'_>, size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Connack, 0));
    e.put_uvar(&size.remaining_length);
    e.put_bool(msg.session_present);
    e.put_u8(msg.reason_code);
    msg.properties.write(&mut e);
    Ok(e.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_with_no_properties() {
        let c = decode(Decoder::new(&[0x00, 0x00, 0x00])).unwrap();
        assert!(!c.session_present);
        assert_eq!(c.reason_code, 0);
        assert!(c.properties.is_empty());
    }

    #[test]
    fn roundtrip_with_server_keep_alive() {
        let mut body = vec![0x00, 0x00];
        body.push(0x03); // properties length
        body.push(19); // ServerKeepAlive
        body.extend_from_slice(&[0x00, 0x3C]);

        let c = decode(Decoder::new(&body)).unwrap();
        let size = validate(&c).unwrap();
        let mut out = vec![0u8; size.total_len];
        populate(&c, size, &mut out).unwrap();
        assert_eq!(&out[2..], &body[..]);
    }
}
