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

//! MQTT "Variable Byte Integer" codec (C1).
//!
//! 1-4 bytes, 7 data bits per byte, the top bit of each byte signals
//! continuation. Represents `0..=0x0FFF_FFFF`. `arrayvec`-backed, no heap
//! allocation.

use crate::error::MqttError;
use arrayvec::ArrayVec;

/// A variable byte integer, pre-encoded into its canonical 1-4 byte form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableByteInteger {
    encoded: ArrayVec<u8, 4>,
}

impl VariableByteInteger {
    /// Largest value representable: 2^28 - 1.
    pub const MAX: u32 = 0x0FFF_FFFF;

    /// Number of bytes `value`'s canonical encoding occupies.
    ///
    /// Caller must ensure `value <= MAX`; this function does not check it.
    pub fn encoded_bytes(value: u32) -> u8 {
        match value {
            0..=0x7F => 1,
            0x80..=0x3FFF => 2,
            0x4000..=0x1F_FFFF => 3,
            _ => 4,
        }
    }

    /// Encode `value` into its canonical form.
    pub fn encode(value: u32) -> Result<Self, MqttError> {
        if value > Self::MAX {
            return Err(MqttError::PacketTooLarge);
        }
        let mut encoded = ArrayVec::<u8, 4>::new();
        let mut v = value;
        loop {
            let mut byte = (v % 128) as u8;
            v /= 128;
            if v > 0 {
                byte |= 0x80;
            }
            encoded.push(byte);
            if v == 0 {
                break;
            }
        }
        Ok(Self { encoded })
    }

    /// The decoded value.
    pub fn value(&self) -> u32 {
        let mut multiplier = 1u32;
        let mut result = 0u32;
        for &b in &self.encoded {
            result += u32::from(b & 0x7F) * multiplier;
            multiplier *= 128;
        }
        result
    }

    /// Number of bytes in the encoding (1..=4).
    pub fn size(&self) -> usize {
        self.encoded.len()
    }

    /// The encoded bytes, in wire order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }
}

/// Result of attempting a streaming decode of a variable byte integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintOutcome {
    /// A full, canonical encoding was found.
    Complete { value: u32, consumed: usize },
    /// Fewer than 4 bytes were available and no terminating byte was seen yet.
    Incomplete,
    /// 4 bytes were examined with no terminator, or the encoding was non-canonical.
    Invalid,
}

/// Decode a variable byte integer from the start of `buf`.
///
/// Examines at most 4 bytes, per the MQTT spec's hard cap on VBI length.
pub fn decode(buf: &[u8]) -> VarintOutcome {
    let mut multiplier = 1u32;
    let mut value = 0u32;

    for (i, &b) in buf.iter().take(4).enumerate() {
        let payload = u32::from(b & 0x7F);
        value = match value.checked_add(payload * multiplier) {
            Some(v) => v,
            None => return VarintOutcome::Invalid,
        };

        if b & 0x80 == 0 {
            let consumed = i + 1;
            return if value <= VariableByteInteger::MAX
                && VariableByteInteger::encoded_bytes(value) as usize == consumed
            {
                VarintOutcome::Complete { value, consumed }
            } else {
                // e.g. `80 00`: decodes to 0 in 2 bytes, but 0's canonical form is 1 byte.
                VarintOutcome::Invalid
            };
        }
        multiplier *= 128;
    }

    if buf.len() < 4 {
        VarintOutcome::Incomplete
    } else {
        VarintOutcome::Invalid
    }
}
