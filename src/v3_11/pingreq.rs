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

//! PINGREQ (v3.1.1): zero-length body.

use crate::decode::Decoder;
use crate::encode::{self, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};

pub fn decode(d: Decoder<'_>) -> Result<(), MqttError> {
    d.finalize()
}

pub fn validate() -> Result<EncodedSize, MqttError> {
    encode::compute_encoded_size(0)
}

pub fn populate(size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Pingreq, 0));
    e.put_uvar(&size.remaining_length);
    Ok(e.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let size = validate().unwrap();
        let mut out = vec![0u8; size.total_len];
        populate(size, &mut out).unwrap();
        assert_eq!(out, vec![0xC0, 0x00]);
        decode(Decoder::new(&[])).unwrap();
    }
}
