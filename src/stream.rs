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

//! Streaming splitter (C6): peels complete packets off a growing buffer.
//!
//! [`Streaming`] is the only stateful piece of this crate, and its state
//! machine has exactly two positions: *awaiting-header* and *awaiting-body*
//! (spec §4.11). It never blocks and never allocates — it only advances its
//! cursor when a full packet (header + body) is available in the slice it
//! was constructed over.
//!
//! A caller driving a real socket keeps its own growable buffer, constructs
//! a fresh `Streaming` over the unconsumed tail on every read, and drains
//! complete packets with [`Streaming::next_packet`] until it sees
//! [`PacketOutcome::Incomplete`] — at which point [`Streaming::unconsumed`]
//! is what should be carried forward and prepended to the next read.

use crate::decode::Decoder;
use crate::error::MqttError;
use crate::header::{self, FixedHeader};
use crate::varint::{self, VarintOutcome};

/// Outcome of peeling a fixed header off the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
    Header(FixedHeader),
    /// Fewer bytes are available than the header needs; try again once more
    /// bytes have arrived. Not an error.
    Incomplete,
}

/// Outcome of carving a packet body off the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketOutcome<'a> {
    Body(Decoder<'a>),
    /// `header.remaining_len` bytes are not yet available. Not an error.
    Incomplete,
}

/// A cursor over a byte slice that yields complete `(header, body)` pairs.
pub struct Streaming<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Streaming<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes at and after the current position — carry these forward on
    /// the next read when a call returned `Incomplete`.
    pub fn unconsumed(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Peel one fixed header (type/flags byte + VBI remaining-length) off
    /// the current position.
    ///
    /// Commits the cursor past the header only on success; on
    /// `Incomplete`, the cursor does not move, so a caller can safely
    /// re-invoke this once more bytes are available.
    pub fn next_header(&mut self) -> Result<HeaderOutcome, MqttError> {
        let tail = &self.buf[self.pos..];
        if tail.is_empty() {
            return Ok(HeaderOutcome::Incomplete);
        }
        let (packet_type, flags) = header::decode_type_and_flags(tail[0])?;

        match varint::decode(&tail[1..]) {
            VarintOutcome::Complete {
                value: remaining_len,
                consumed,
            } => {
                self.pos += 1 + consumed;
                Ok(HeaderOutcome::Header(FixedHeader {
                    packet_type,
                    flags,
                    remaining_len,
                }))
            }
            VarintOutcome::Incomplete => Ok(HeaderOutcome::Incomplete),
            VarintOutcome::Invalid => Err(MqttError::InvalidUvar),
        }
    }

    /// Carve off `header.remaining_len` bytes as a bounded body decoder.
    ///
    /// Commits the cursor past the body only on success.
    pub fn next_packet(&mut self, header: &FixedHeader) -> PacketOutcome<'a> {
        let tail = &self.buf[self.pos..];
        let remaining_len = header.remaining_len as usize;
        if tail.len() < remaining_len {
            return PacketOutcome::Incomplete;
        }
        let body = &tail[..remaining_len];
        self.pos += remaining_len;
        #[cfg(feature = "tracing")]
        tracing::trace!(packet_type = %header.packet_type, remaining_len, "split packet");
        PacketOutcome::Body(Decoder::new(body))
    }

    /// Convenience wrapper combining [`Self::next_header`] and
    /// [`Self::next_packet`] into a single poll.
    pub fn next(&mut self) -> Result<Option<(FixedHeader, Decoder<'a>)>, MqttError> {
        let saved_pos = self.pos;
        let header = match self.next_header()? {
            HeaderOutcome::Header(h) => h,
            HeaderOutcome::Incomplete => return Ok(None),
        };
        match self.next_packet(&header) {
            PacketOutcome::Body(body) => Ok(Some((header, body))),
            PacketOutcome::Incomplete => {
                // Don't leave the header "half consumed" — a retry should
                // re-parse it once more bytes arrive.
                self.pos = saved_pos;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::PacketType;

    #[test]
    fn header_roundtrip() {
        let mut s = Streaming::new(&[0x10, 0x10]);
        let h = match s.next_header().unwrap() {
            HeaderOutcome::Header(h) => h,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(h.packet_type, PacketType::Connect);
        assert_eq!(h.flags, 0);
        assert_eq!(h.remaining_len, 16);
    }

    #[test]
    fn trailing_truncated_packet_yields_incomplete() {
        // PINGREQ (2 bytes) followed by a CONNECT header claiming far more
        // body than is actually present.
        let mut buf = vec![0xC0, 0x00];
        buf.extend_from_slice(&[0x10, 0x7F]);
        // only 3 of the claimed 127 body bytes are present
        buf.extend_from_slice(&[1, 2, 3]);

        let mut s = Streaming::new(&buf);
        let (h1, body1) = s.next().unwrap().expect("first packet ready");
        assert_eq!(h1.packet_type, PacketType::Pingreq);
        body1.finalize().unwrap();

        assert_eq!(s.next().unwrap(), None);
        // the second (incomplete) packet's bytes are still there to retry
        assert_eq!(s.unconsumed(), &[0x10, 0x7F, 1, 2, 3]);
    }

    #[test]
    fn empty_buffer_is_incomplete() {
        let mut s = Streaming::new(&[]);
        assert_eq!(s.next().unwrap(), None);
    }
}
