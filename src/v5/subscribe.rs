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

//! SUBSCRIBE (v5.0): packet id, properties, then a non-empty sequence of
//! (topic filter, subscription options) pairs.

use super::property::{self, Properties};
use crate::decode::Decoder;
use crate::encode::{self, string_size, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};
use crate::packet_id::PacketId;
use crate::qos::Qos;
use crate::topic;
use num_enum::TryFromPrimitive;

const SUBSCRIBE_PROPERTIES: &[u8] = &[11, 38];

/// The per-subscription options byte: requested QoS, no-local, retain-as-
/// published, and retain handling. The top two bits are reserved and must
/// be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionOptions {
    pub qos: Qos,
    pub no_local: bool,
    pub retain_as_published: bool,
    pub retain_handling: u8,
}

fn decode_options(byte: u8) -> Result<SubscriptionOptions, MqttError> {
    if byte & 0xC0 != 0 {
        return Err(MqttError::InvalidFlags);
    }
    let qos_bits = byte & 0x03;
    if qos_bits == 0b11 {
        return Err(MqttError::InvalidQos);
    }
    let qos = Qos::try_from_primitive(qos_bits).map_err(|_| MqttError::InvalidQos)?;
    let retain_handling = (byte >> 4) & 0x03;
    if retain_handling == 0b11 {
        return Err(MqttError::InvalidFlags);
    }
    Ok(SubscriptionOptions {
        qos,
        no_local: byte & 0x04 != 0,
        retain_as_published: byte & 0x08 != 0,
        retain_handling,
    })
}

fn encode_options(o: SubscriptionOptions) -> u8 {
    (o.qos as u8) | (o.no_local as u8) << 2 | (o.retain_as_published as u8) << 3 | (o.retain_handling & 0x03) << 4
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription<'a> {
    pub filter: &'a str,
    pub options: SubscriptionOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscribe<'a> {
    pub packet_id: PacketId,
    pub properties: Properties<'a>,
    body: &'a [u8],
}

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
            let options = decode_options(self.d.split_u8()?)?;
            Ok(Subscription { filter, options })
        })())
    }
}

pub fn decode<'a>(mut d: Decoder<'a>) -> Result<Subscribe<'a>, MqttError> {
    let packet_id = d.split_packet_id()?;
    let properties = property::decode(&mut d, SUBSCRIBE_PROPERTIES)?;
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

    Ok(Subscribe {
        packet_id,
        properties,
        body,
    })
}

impl<'a> Subscribe<'a> {
    pub fn subscriptions(&self) -> SubscriptionIter<'a> {
        SubscriptionIter {
            d: Decoder::new(self.body),
        }
    }
}

fn body_len(properties: &Properties<'_>, subs: &[Subscription<'_>]) -> Result<usize, MqttError> {
    let mut len = 2 + property::section_size(properties.payload_len())?;
    for s in subs {
        len += string_size(s.filter)? + 1;
    }
    Ok(len)
}

pub fn validate(
    properties: &Properties<'_>,
    subs: &[Subscription<'_>],
) -> Result<EncodedSize, MqttError> {
    if subs.is_empty() {
        return Err(MqttError::PacketLengthMismatch);
    }
    for s in subs {
        topic::validate_filter(s.filter)?;
    }
    encode::compute_encoded_size(body_len(properties, subs)?)
}

pub fn populate(
    packet_id: PacketId,
    properties: &Properties<'_>,
    subs: &[Subscription<'_>],
    size: EncodedSize,
    out: &mut [u8],
) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Subscribe, 0b0010));
    e.put_uvar(&size.remaining_length);
    e.put_packet_id(packet_id);
    properties.write(&mut e);
    for s in subs {
        e.put_utf8_string(s.filter);
        e.put_u8(encode_options(s.options));
    }
    Ok(e.finalize())
}
