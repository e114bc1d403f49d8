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

//! UTF-8 / MQTT string validation (C2).
//!
//! An MQTT string is a 2-byte big-endian length prefix followed by that many
//! bytes, which must be valid UTF-8 containing no U+0000 code point.

use crate::error::MqttError;

/// Maximum byte length of an MQTT string or byte string.
pub const MAX_LEN: usize = u16::MAX as usize;

/// Validate `bytes` as MQTT string content and return it as a borrowed `&str`.
///
/// Rejects: length > 65535, any embedded NUL byte, and anything that is not
/// valid UTF-8 (over-long encodings, surrogates, out-of-range code points,
/// truncated sequences — all rejected identically to a byte-wise reference
/// validator, since `core::str::from_utf8` already enforces exactly those
/// rules).
pub fn validate(bytes: &[u8]) -> Result<&str, MqttError> {
    if bytes.len() > MAX_LEN {
        return Err(MqttError::InvalidStringLength);
    }
    if !is_nul_free(bytes) {
        return Err(MqttError::InternalNull);
    }
    core::str::from_utf8(bytes).map_err(|_| MqttError::InvalidUtf8)
}

/// Scan for an embedded NUL byte, fast-pathing ASCII-clean runs 8 bytes at a
/// time. Must reach the same accept/reject decision as a plain byte loop.
fn is_nul_free(bytes: &[u8]) -> bool {
    let mut chunks = bytes.chunks_exact(8);
    for chunk in &mut chunks {
        let word = u64::from_ne_bytes(chunk.try_into().unwrap());
        if has_zero_byte(word) {
            return chunk.iter().all(|&b| b != 0);
        }
    }
    chunks.remainder().iter().all(|&b| b != 0)
}

/// Classic SWAR "has a zero byte" test.
fn has_zero_byte(word: u64) -> bool {
    const LO: u64 = 0x0101_0101_0101_0101;
    const HI: u64 = 0x8080_8080_8080_8080;
    (word.wrapping_sub(LO) & !word & HI) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_ascii() {
        assert_eq!(validate(b"hello world").unwrap(), "hello world");
    }

    #[test]
    fn accepts_multibyte_utf8() {
        assert_eq!(validate("héllo".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn rejects_embedded_nul_short() {
        assert_eq!(validate(b"a\0b"), Err(MqttError::InternalNull));
    }

    #[test]
    fn rejects_embedded_nul_long_run() {
        let mut s = vec![b'a'; 20];
        s[17] = 0;
        assert_eq!(validate(&s), Err(MqttError::InternalNull));
    }

    #[test]
    fn rejects_overlong_encoding() {
        // Overlong encoding of U+002F ('/') as two bytes.
        assert_eq!(validate(&[0xC0, 0xAF]), Err(MqttError::InvalidUtf8));
    }

    #[test]
    fn rejects_surrogate() {
        assert_eq!(validate(&[0xED, 0xA0, 0x80]), Err(MqttError::InvalidUtf8));
    }

    #[test]
    fn rejects_truncated_sequence() {
        assert_eq!(validate(&[0xE2, 0x82]), Err(MqttError::InvalidUtf8));
    }
}
