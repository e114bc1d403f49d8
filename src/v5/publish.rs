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

//! PUBLISH (v5.0).

use super::property::{self, Properties};
use crate::decode::Decoder;
use crate::encode::{self, string_size, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, FixedHeader, PacketType};
use crate::packet_id::PacketId;
use crate::topic;

const PUBLISH_PROPERTIES: &[u8] = &[1, 2, 3, 8, 9, 11, 35, 38];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publish<'a> {
    pub dup: bool,
    pub qos: u8,
    pub retain: bool,
    pub topic: &'a str,
    pub packet_id: Option<PacketId>,
    pub properties: Properties<'a>,
    pub payload: &'a [u8],
}

pub fn decode<'a>(header: &FixedHeader, mut d: Decoder<'a>) -> Result<Publish<'a>, MqttError> {
    let topic_name = d.split_utf8_string()?;
    topic::validate_topic(topic_name)?;

    let qos = header.qos_bits();
    let packet_id = if qos != 0 {
        Some(d.split_packet_id()?)
    } else {
        None
    };

    let properties = property::decode(&mut d, PUBLISH_PROPERTIES)?;
    let payload = d.split_off_rest().remaining_slice();
    Ok(Publish {
        dup: header.dup(),
        qos,
        retain: header.retain(),
        topic: topic_name,
        packet_id,
        properties,
        payload,
    })
}

fn body_len(msg: &Publish<'_>) -> Result<usize, MqttError> {
    let mut len = string_size(msg.topic)?;
    if msg.packet_id.is_some() {
        len += 2;
    }
    len += property::section_size(msg.properties.payload_len())?;
    len += msg.payload.len();
    Ok(len)
}

pub fn validate(msg: &Publish<'_>) -> Result<EncodedSize, MqttError> {
    if msg.qos == 0 && msg.packet_id.is_some() {
        return Err(MqttError::InvalidPacketId);
    }
    if msg.qos != 0 && msg.packet_id.is_none() {
        return Err(MqttError::InvalidPacketId);
    }
    topic::validate_topic(msg.topic)?;
    encode::compute_encoded_size(body_len(msg)?)
}

pub fn populate(msg: &Publish<'_>, size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let flags = ((msg.dup as u8) << 3) | ((msg.qos & 0x03) << 1) | (msg.retain as u8);
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Publish, flags));
    e.put_uvar(&size.remaining_length);
    e.put_utf8_string(msg.topic);
    if let Some(id) = msg.packet_id {
        e.put_packet_id(id);
    }
    msg.properties.write(&mut e);
    let start = e.position();
    out[start..start + msg.payload.len()].copy_from_slice(msg.payload);
    Ok(start + msg.payload.len())
}
