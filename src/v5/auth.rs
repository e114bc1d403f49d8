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

//! AUTH (v5.0): the extended-authentication packet, introduced in v5.0 with
//! no v3.1.1 counterpart. Carries a reason code (success / continue /
//! reauthenticate) and a property section dominated by the two
//! authentication-exchange properties. Shares the same `(reason code,
//! properties)` omission rule as the PUBACK-family acks and DISCONNECT.

use super::property::{self, Properties};
use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};

const AUTH_PROPERTIES: &[u8] = &[21, 22, 31, 38];

/// Reason codes defined for AUTH (MQTT v5.0 §3.15.2.1).
const VALID_CODES: &[u8] = &[0x00, 0x18, 0x19];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth<'a> {
    pub reason_code: u8,
    pub properties: Properties<'a>,
}

fn validate_code(byte: u8) -> Result<(), MqttError> {
    if VALID_CODES.contains(&byte) {
        Ok(())
    } else {
        Err(MqttError::InvalidReturnCode)
    }
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Auth<'a>, MqttError> {
    let (reason_code, properties) = super::decode_reason_and_properties(&mut d, AUTH_PROPERTIES)?;
    validate_code(reason_code)?;
    d.finalize()?;
    Ok(Auth {
        reason_code,
        properties,
    })
}

fn body_len(msg: &Auth<'_>) -> Result<usize, MqttError> {
    super::reason_and_properties_size(msg.reason_code, msg.properties.payload_len())
}

pub fn validate(msg: &Auth<'_>) -> Result<EncodedSize, MqttError> {
    validate_code(msg.reason_code)?;
    encode::compute_encoded_size(body_len(msg)?)
}

pub fn populate(msg: &Auth<'_>, size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Auth, 0));
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
    fn decodes_success_with_empty_body() {
        let a = decode(Decoder::new(&[])).unwrap();
        assert_eq!(a.reason_code, 0x00);
        assert!(a.properties.is_empty());
    }

    #[test]
    fn rejects_unknown_reason_code() {
        assert_eq!(
            decode(Decoder::new(&[0x20])),
            Err(MqttError::InvalidReturnCode)
        );
    }

    #[test]
    fn roundtrip_continue_authentication_with_method() {
        let mut body = vec![0x18]; // ContinueAuthentication
        body.push(0x13); // properties length
        body.push(21); // AuthenticationMethod
        body.extend_from_slice(&[0x00, 0x0D]);
        body.extend_from_slice(b"SCRAM-SHA-256");
        body.push(22); // AuthenticationData
        body.extend_from_slice(&[0x00, 0x00]);
        let a = decode(Decoder::new(&body)).unwrap();
        let size = validate(&a).unwrap();
        let mut out = vec![0u8; size.total_len];
        populate(&a, size, &mut out).unwrap();
        assert_eq!(&out[2..], &body[..]);
    }
}
