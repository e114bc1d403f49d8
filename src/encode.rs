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

//! Byte encoder: a write cursor over a caller-provided output buffer,
//! plus the checked-size pre-pass every packet encoder runs before writing.

use crate::error::MqttError;
use crate::packet_id::PacketId;
use crate::varint::VariableByteInteger;

/// The result of an encoder's validation/sizing pass.
///
/// `remaining_length` is the VBI-encoded byte count of the packet body;
/// `total_len` is the full on-wire size (1 fixed-header byte + the VBI's
/// own size + the body). Computed with checked arithmetic throughout so
/// that on 16-bit targets an overflow surfaces as [`MqttError::PacketTooLarge`]
/// instead of wrapping; on 32/64-bit targets `total_len` never approaches
/// `usize::MAX` for a real packet, so the checks compile down to nothing
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedSize {
    pub remaining_length: VariableByteInteger,
    pub total_len: usize,
}

/// Given a computed body length, produce the full size breakdown.
pub fn compute_encoded_size(body_len: usize) -> Result<EncodedSize, MqttError> {
    let body_len_u32 = u32::try_from(body_len).map_err(|_| MqttError::PacketTooLarge)?;
    let remaining_length = VariableByteInteger::encode(body_len_u32)?;
    let total_len = 1usize
        .checked_add(remaining_length.size())
        .and_then(|v| v.checked_add(body_len))
        .ok_or(MqttError::PacketTooLarge)?;
    Ok(EncodedSize {
        remaining_length,
        total_len,
    })
}

/// A cursor over a caller-owned `&mut [u8]`. Every `put_*` method advances
/// the cursor and panics if it would write past `buf`'s end — callers are
/// expected to size `buf` with [`compute_encoded_size`] first, so this is
/// an internal-consistency assertion, not a recoverable runtime condition.
pub struct Encoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Encoder<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    pub fn put_u8(&mut self, v: u8) {
        self.put_bytes(&[v]);
    }

    pub fn put_u16(&mut self, v: u16) {
        self.put_bytes(&v.to_be_bytes());
    }

    pub fn put_u32(&mut self, v: u32) {
        self.put_bytes(&v.to_be_bytes());
    }

    pub fn put_bool(&mut self, v: bool) {
        self.put_u8(v as u8);
    }

    pub fn put_uvar(&mut self, vbi: &VariableByteInteger) {
        self.put_bytes(vbi.as_bytes());
    }

    pub fn put_byte_string(&mut self, bytes: &[u8]) {
        self.put_u16(bytes.len() as u16);
        self.put_bytes(bytes);
    }

    pub fn put_utf8_string(&mut self, s: &str) {
        self.put_byte_string(s.as_bytes());
    }

    pub fn put_packet_id(&mut self, id: PacketId) {
        self.put_u16(id.get());
    }

    /// Write raw bytes verbatim. Used by the v5 property codec to re-emit
    /// an already-validated property section without re-parsing it.
    pub(crate) fn put_raw(&mut self, bytes: &[u8]) {
        self.put_bytes(bytes);
    }

    /// Consume the encoder, asserting every byte of `buf` was written.
    pub fn finalize(self) -> usize {
        debug_assert_eq!(self.pos, self.buf.len(), "encoder under-filled its buffer");
        self.pos
    }
}

/// Byte length an MQTT string's wire form occupies (2-byte prefix + content).
pub fn string_size(s: &str) -> Result<usize, MqttError> {
    if s.len() > crate::strings::MAX_LEN {
        return Err(MqttError::InvalidStringLength);
    }
    Ok(2 + s.len())
}

/// Byte length an opaque byte string's wire form occupies.
pub fn byte_string_size(bytes: &[u8]) -> Result<usize, MqttError> {
    if bytes.len() > crate::strings::MAX_LEN {
        return Err(MqttError::InvalidStringLength);
    }
    Ok(2 + bytes.len())
}
