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

//! UNSUBSCRIBE (v3.1.1): packet id followed by a non-empty sequence of
//! topic filters.

use crate::decode::Decoder;
use crate::encode::{self, string_size, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};
use crate::packet_id::PacketId;
use crate::topic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsubscribe<'a> {
    pub packet_id: PacketId,
    body: &'a [u8],
}

/// Zero-allocation walk over an [`Unsubscribe`]'s filter list.
#[derive(Debug, Clone)]
pub struct FilterIter<'a> {
    d: Decoder<'a>,
}

impl<'a> Iterator for FilterIter<'a> {
    type Item = Result<&'a str, MqttError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.d.remaining() == 0 {
            return None;
        }
        Some((|| {
            let filter = self.d.split_utf8_string()?;
            topic::validate_filter(filter)?;
            Ok(filter)
        })())
    }
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Unsubscribe<'a>, MqttError> {
    let packet_id = d.split_packet_id()?;
    let body = d.split_off_rest().remaining_slice();
    if body.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }

    let mut count = 0usize;
    let mut check = FilterIter {
        d: Decoder::new(body),
    };
    for item in &mut check {
        item?;
        count += 1;
    }
    if count == 0 {
        return Err(MqttError::PacketLengthMismatch);
    }

    Ok(Unsubscribe { packet_id, body })
}

impl<'a> Unsubscribe<'a> {
    pub fn filters(&self) -> FilterIter<'a> {
        FilterIter {
            d: Decoder::new(self.body),
        }
    }
}

fn body_len(filters: &[&str]) -> Result<usize, MqttError> {
    let mut len = 2usize;
    for f in filters {
        len += string_size(f)?;
    }
    Ok(len)
}

pub fn validate(packet_id: PacketId, filters: &[&str]) -> Result<EncodedSize, MqttError> {
    let _ = packet_id;
    if filters.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }
    for f in filters {
        topic::validate_filter(f)?;
    }
    encode::compute_encoded_size(body_len(filters)?)
}

pub fn populate(
    packet_id: PacketId,
    filters: &[&str],
    size: EncodedSize,
    out: &mut [u8],
) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(
        PacketType::Unsubscribe,
        0b0010,
    ));
    e.put_uvar(&size.remaining_length);
    e.put_packet_id(packet_id);
    for f in filters {
        e.put_utf8_string(f);
    }
    Ok(e.finalize())
}
