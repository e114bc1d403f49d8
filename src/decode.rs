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

//! Byte decoder: a typed cursor over a borrowed byte slice (C4).
//!
//! A `Decoder<'a>` never copies; every multi-byte field it yields borrows
//! directly from the buffer it was constructed over. This is the one place
//! `packet-length-mismatch` is raised — a truncated read inside an already
//! length-bounded packet body is a hard protocol error, unlike a truncated
//! read at the outer streaming boundary (see [`crate::stream`]).

use crate::error::MqttError;
use crate::packet_id::PacketId;
use crate::strings;
use crate::varint::{self, VarintOutcome};

/// A cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Wrap `buf`, starting at offset 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], MqttError> {
        if self.remaining() < n {
            return Err(MqttError::PacketLengthMismatch);
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Consume 1 byte.
    pub fn split_u8(&mut self) -> Result<u8, MqttError> {
        Ok(self.take(1)?[0])
    }

    /// Consume 2 bytes, big-endian.
    pub fn split_u16(&mut self) -> Result<u16, MqttError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Consume 4 bytes, big-endian.
    pub fn split_u32(&mut self) -> Result<u32, MqttError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Consume a variable byte integer.
    ///
    /// A truncated VBI here is reported as `PacketLengthMismatch` rather
    /// than `IncompleteBuffer`: within a bounded packet body, running out
    /// of bytes mid-field is a framing error, not "await more data".
    pub fn split_uvar(&mut self) -> Result<u32, MqttError> {
        match varint::decode(&self.buf[self.pos..]) {
            VarintOutcome::Complete { value, consumed } => {
                self.pos += consumed;
                Ok(value)
            }
            VarintOutcome::Incomplete => Err(MqttError::PacketLengthMismatch),
            VarintOutcome::Invalid => Err(MqttError::InvalidUvar),
        }
    }

    /// Consume 1 byte as a strict boolean (0 or 1 only).
    pub fn split_bool(&mut self) -> Result<bool, MqttError> {
        match self.split_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(MqttError::InvalidBool),
        }
    }

    /// Consume a 16-bit length-prefixed opaque byte string.
    pub fn split_byte_string(&mut self) -> Result<&'a [u8], MqttError> {
        let len = self.split_u16()? as usize;
        self.take(len)
    }

    /// As [`Self::split_byte_string`], but require the length equal `expected`.
    pub fn split_byte_string_length(&mut self, expected: usize) -> Result<&'a [u8], MqttError> {
        let len = self.split_u16()? as usize;
        if len != expected {
            return Err(MqttError::UnexpectedLength);
        }
        self.take(len)
    }

    /// Consume a 16-bit length-prefixed UTF-8 string.
    pub fn split_utf8_string(&mut self) -> Result<&'a str, MqttError> {
        let bytes = self.split_byte_string()?;
        strings::validate(bytes)
    }

    /// Consume a 16-bit non-zero packet id.
    pub fn split_packet_id(&mut self) -> Result<PacketId, MqttError> {
        PacketId::new(self.split_u16()?)
    }

    /// Carve off the next `n` bytes as an independent sub-decoder.
    pub fn split_off(&mut self, n: usize) -> Result<Decoder<'a>, MqttError> {
        Ok(Decoder::new(self.take(n)?))
    }

    /// Carve off every remaining byte as an independent sub-decoder.
    pub fn split_off_rest(&mut self) -> Decoder<'a> {
        let rest = &self.buf[self.pos..];
        self.pos = self.buf.len();
        Decoder::new(rest)
    }

    /// Every remaining byte, without advancing the cursor.
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Assert the decoder is fully consumed.
    ///
    /// Must be called at the end of every packet body's decode — a
    /// well-formed packet leaves nothing unread.
    pub fn finalize(self) -> Result<(), MqttError> {
        if self.remaining() == 0 {
            Ok(())
        } else {
            Err(MqttError::PacketLengthMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_primitives_in_order() {
        let mut d = Decoder::new(&[0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03]);
        assert_eq!(d.split_u8().unwrap(), 1);
        assert_eq!(d.split_u16().unwrap(), 2);
        assert_eq!(d.split_u32().unwrap(), 3);
        d.finalize().unwrap();
    }

    #[test]
    fn finalize_fails_on_leftover_bytes() {
        let mut d = Decoder::new(&[1, 2, 3]);
        d.split_u8().unwrap();
        assert_eq!(d.finalize(), Err(MqttError::PacketLengthMismatch));
    }

    #[test]
    fn split_off_bounds_a_sub_decoder() {
        let mut d = Decoder::new(&[1, 2, 3, 4]);
        let mut sub = d.split_off(2).unwrap();
        assert_eq!(sub.split_u16().unwrap(), 0x0102);
        sub.finalize().unwrap();
        assert_eq!(d.split_u16().unwrap(), 0x0304);
    }

    #[test]
    fn byte_string_truncated_is_length_mismatch() {
        let mut d = Decoder::new(&[0x00, 0x05, b'a', b'b']);
        assert_eq!(
            d.split_byte_string(),
            Err(MqttError::PacketLengthMismatch)
        );
    }

    #[test]
    fn packet_id_zero_is_rejected() {
        let mut d = Decoder::new(&[0x00, 0x00]);
        assert_eq!(d.split_packet_id(), Err(MqttError::InvalidPacketId));
    }
}
