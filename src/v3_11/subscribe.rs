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

//! SUBSCRIBE (v3.1.1): packet id followed by a non-empty sequence of
//! (topic-filter, requested QoS) pairs.
//!
//! The subscription list is never materialized into a `Vec` — [`Subscribe`]
//! keeps only the packet id and the raw body slice, and [`Subscribe::subscriptions`]
//! hands back a zero-allocation iterator over it.

use crate::decode::Decoder;
use crate::encode::{self, string_size, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};
use crate::packet_id::PacketId;
use crate::qos::Qos;
use crate::topic;
use num_enum::TryFromPrimitive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscribe<'a> {
    pub packet_id: PacketId,
    body: &'a [u8],
}

/// A single requested subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription<'a> {
    pub filter: &'a str,
    pub qos: Qos,
}

/// Zero-allocation walk over a [`Subscribe`]'s subscription list.
#[derive(Debug, Clone)]
pub struct SubscriptionIter<'a> {
    d: Decoder<'a>,
}

impl<'a> Iterator for SubscriptionIter<'a> {
    type Item = Result<Subscription<'a>, MqttError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.d.remaining() == 0 {
            return None;
        }
        Some((|| {
            let filter = self.d.split_utf8_string()?;
            topic::validate_filter(filter)?;
            let byte = self.d.split_u8()?;
            if byte & 0xFC != 0 {
                return Err(MqttError::InvalidQos);
            }
            let qos = Qos::try_from_primitive(byte).map_err(|_| MqttError::InvalidQos)?;
            Ok(Subscription { filter, qos })
        })())
    }
}

/// Decode a SUBSCRIBE body. Walks the full subscription list once to
/// validate it (at least one entry, every filter and QoS byte well-formed)
/// before handing back the still-unmaterialized list.
pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Subscribe<'a>, MqttError> {
    let packet_id = d.split_packet_id()?;
    let body = d.split_off_rest().remaining_slice();
    if body.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }

    let mut count = 0usize;
    let mut check = SubscriptionIter {
        d: Decoder::new(body),
    };
    for item in &mut check {
        item?;
        count += 1;
    }
    if count == 0 {
        return Err(MqttError::PacketLengthMismatch);
    }

    Ok(Subscribe { packet_id, body })
}

impl<'a> Subscribe<'a> {
    pub fn subscriptions(&self) -> SubscriptionIter<'a> {
        SubscriptionIter {
            d: Decoder::new(self.body),
        }
    }
}

fn body_len(packet_id: PacketId, subs: &[Subscription<'_>]) -> Result<usize, MqttError> {
    let _ = packet_id;
    let mut len = 2usize;
    for s in subs {
        len += string_size(s.filter)? + 1;
    }
    Ok(len)
}

pub fn validate(packet_id: PacketId, subs: &[Subscription<'_>]) -> Result<EncodedSize, MqttError> {
    if subs.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }
    for s in subs {
        topic::validate_filter(s.filter)?;
    }
    encode::compute_encoded_size(body_len(packet_id, subs)?)
}

pub fn populate(
    packet_id: PacketId,
    subs: &[Subscription<'_>],
    size: EncodedSize,
    out: &mut [u8],
) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Subscribe, 0b0010));
    e.put_uvar(&size.remaining_length);
    e.put_packet_id(packet_id);
    for s in subs {
        e.put_utf8_string(s.filter);
        e.put_u8(s.qos as u8);
    }
    Ok(e.finalize())
}
