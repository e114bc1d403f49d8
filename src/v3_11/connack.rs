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

//! CONNACK (v3.1.1).

use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connack {
    pub session_present: bool,
    pub return_code: u8,
}

/// Decode a CONNACK body: session-present bool, return-code byte in `0..=5`.
///
/// A session-present connection must carry return code 0 (accepted) — any
/// other combination is a protocol error.
pub fn decode(mut d: Decoder<'_>) -> Result<Connack, MqttError> {
    let session_present = d.split_bool()?;
    let return_code = d.split_u8()?;
    if return_code > 5 {
        return Err(MqttError::InvalidReturnCode);
    }
    if session_present && return_code != 0 {
        return Err(MqttError::InvalidConnack);
    }
    d.finalize()?;
    Ok(Connack {
        session_present,
        return_code,
    })
}

pub fn validate(_msg: &Connack) -> Result<EncodedSize, MqttError> {
    encode::compute_encoded_size(2)
}

pub fn populate(msg: &Connack, size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Connack, 0));
    e.put_uvar(&size.remaining_length);
    e.put_bool(msg.session_present);
    e.put_u8(msg.return_code);
    Ok(e.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_scenario_3() {
        let c = decode(Decoder::new(&[0x01, 0x00])).unwrap();
        assert!(c.session_present);
        assert_eq!(c.return_code, 0);
    }

    #[test]
    fn rejects_session_present_with_nonzero_code() {
        assert_eq!(
            decode(Decoder::new(&[0x01, 0x02])),
            Err(MqttError::InvalidConnack)
        );
    }

    #[test]
    fn rejects_return_code_above_5() {
        assert_eq!(
            decode(Decoder::new(&[0x00, 0x06])),
            Err(MqttError::InvalidReturnCode)
        );
    }

    #[test]
    fn reserved_bits_in_ack_flags_rejected() {
        assert_eq!(
            decode(Decoder::new(&[0x02, 0x00])),
            Err(MqttError::InvalidBool)
        );
    }
}
