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

//! DISCONNECT (v5.0): an optional reason code and property section, sent by
//! either peer to terminate the connection. Unlike the v3.1.1 DISCONNECT
//! (spec §4.8, always zero-length), v5.0 carries a reason code explaining
//! why — the full `(reason code, properties)` omission rule of
//! [`super::decode_reason_and_properties`] applies: a body of zero bytes
//! means "normal disconnection, nothing else to say".

use super::property::{self, Properties};
use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};

const DISCONNECT_PROPERTIES: &[u8] = &[17, 28, 31, 38];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disconnect<'a> {
    pub reason_code: u8,
    pub properties: Properties<'a>,
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Disconnect<'a>, MqttError> {
    let (reason_code, properties) =
        super::decode_reason_and_properties(&mut d, DISCONNECT_PROPERTIES)?;
    d.finalize()?;
    Ok(Disconnect {
        reason_code,
        properties,
    })
}

fn body_len(msg: &Disconnect<'_>) -> Result<usize, MqttError> {
    super::reason_and_properties_size(msg.reason_code, msg.properties.payload_len())
}

pub fn validate(msg: &Disconnect<'_>) -> Result<EncodedSize, MqttError> {
    encode::compute_encoded_size(body_len(msg)?)
}

pub fn populate(msg: &Disconnect<'_>, size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Disconnect, 0));
    e.put_uvar(&size.remaining_length);
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
    fn decodes_empty_body_as_normal_disconnect() {
        let d = decode(Decoder::new(&[])).unwrap();
        assert_eq!(d.reason_code, 0);
        assert!(d.properties.is_empty());
    }

    #[test]
    fn decodes_reason_only_form() {
        let d = decode(Decoder::new(&[0x8D])).unwrap();
        assert_eq!(d.reason_code, 0x8D);
        assert!(d.properties.is_empty());
    }

    #[test]
    fn roundtrip_empty() {
        let d = decode(Decoder::new(&[])).unwrap();
        let size = validate(&d).unwrap();
        let mut out = vec![0u8; size.total_len];
        populate(&d, size, &mut out).unwrap();
        assert_eq!(out, vec![0xE0, 0x00]);
    }

    #[test]
    fn roundtrip_with_server_reference() {
        let mut body = vec![0x9C]; // UseAnotherServer
        body.push(0x06);
        body.push(28); // ServerReference
        body.extend_from_slice(&[0x00, 0x03, b'a', b'l', b't']);
        let d = decode(Decoder::new(&body)).unwrap();
        let size = validate(&d).unwrap();
        let mut out = vec![0u8; size.total_len];
        populate(&d, size, &mut out).unwrap();
        assert_eq!(&out[2..], &body[..]);
    }
}
