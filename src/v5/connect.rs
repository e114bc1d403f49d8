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

//! CONNECT (v5.0).

use super::property::{self, Properties};
use crate::common::{self, ConnectFlags, ProtocolVersion};
use crate::decode::Decoder;
use crate::encode::{self, byte_string_size, string_size, EncodedSize, Encoder};
use crate::error::MqttError;
use crate::header::{self, PacketType};

const CONNECT_PROPERTIES: &[u8] = &[17, 21, 22, 23, 25, 33, 34, 38, 39];
const WILL_PROPERTIES: &[u8] = &[1, 2, 3, 8, 9, 24, 38];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connect<'a> {
    pub flags: ConnectFlags,
    pub keep_alive: u16,
    pub properties: Properties<'a>,
    pub client_id: &'a str,
    pub will: Option<Will<'a>>,
    pub username: Option<&'a str>,
    pub password: Option<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Will<'a> {
    pub properties: Properties<'a>,
    pub topic: &'a str,
    pub payload: &'a [u8],
}

pub fn decode<'a>(mut d: Decoder<'a>, strict: bool) -> Result<Connect<'a>, MqttError> {
    let version = common::connect_version(&mut d)?;
    if version != ProtocolVersion::V5_0 {
        return Err(MqttError::UnexpectedVersion);
    }

    let flags = common::connect_flags(d.split_u8()?)?;
    let keep_alive = d.split_u16()?;
    let properties = property::decode(&mut d, CONNECT_PROPERTIES)?;
    let client_id = d.split_utf8_string()?;
    common::validate_client_id(client_id, strict)?;

    let will = if flags.will {
        let will_properties = property::decode(&mut d, WILL_PROPERTIES)?;
        let topic = d.split_utf8_string()?;
        crate::topic::validate_topic(topic)?;
        let payload = d.split_byte_string()?;
        Some(Will {
            properties: will_properties,
            topic,
            payload,
        })
    } else {
        None
    };

    let username = if flags.username {
        Some(d.split_utf8_string()?)
    } else {
        None
    };
    let password = if flags.password {
        Some(d.split_byte_string()?)
    } else {
        None
    };

    d.finalize()?;
    Ok(Connect {
        flags,
        keep_alive,
        properties,
        client_id,
        will,
        username,
        password,
    })
}

fn body_len(msg: &Connect<'_>) -> Result<usize, MqttError> {
    let mut len = 2 + 4 + 1 + 2; // "MQTT" + version + flags + keepalive
    len += property::section_size(msg.properties.payload_len())?;
    len += string_size(msg.client_id)?;
    if let Some(w) = &msg.will {
        len += property::section_size(w.properties.payload_len())?;
        len += string_size(w.topic)? + byte_string_size(w.payload)?;
    }
    if let Some(u) = msg.username {
        len += string_size(u)?;
    }
    if let Some(p) = msg.password {
        len += byte_string_size(p)?;
    }
    Ok(len)
}

pub fn validate(msg: &Connect<'_>) -> Result<EncodedSize, MqttError> {
    encode::compute_encoded_size(body_len(msg)?)
}

pub fn populate(msg: &Connect<'_>, size: EncodedSize, out: &mut [u8]) -> Result<usize, MqttError> {
    let mut e = Encoder::new(out);
    e.put_u8(header::encode_type_and_flags(PacketType::Connect, 0));
    e.put_uvar(&size.remaining_length);
    e.put_utf8_string("MQTT");
    e.put_u8(5);
    e.put_u8(common::encode_connect_flags(&msg.flags));
    e.put_u16(msg.keep_alive);
    msg.properties.write(&mut e);
    e.put_utf8_string(msg.client_id);
    if let Some(w) = &msg.will {
        w.properties.write(&mut e);
        e.put_utf8_string(w.topic);
        e.put_byte_string(w.payload);
    }
    if let Some(u) = msg.username {
        e.put_utf8_string(u);
    }
    if let Some(p) = msg.password {
        e.put_byte_string(p);
    }
    Ok(e.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        let mut b = vec![0x00, 0x04, b'M', b'Q', b'T', b'T', 0x05, 0x02, 0x00, 0x3C];
        b.push(0x00); // empty properties
        b.extend_from_slice(&[0x00, 0x04, b'D', b'I', b'G', b'I']);
        b
    }

    #[test]
    fn decodes_minimal_v5_connect() {
        let body = sample();
        let c = decode(Decoder::new(&body), true).unwrap();
        assert!(c.flags.clean_start);
        assert_eq!(c.keep_alive, 60);
        assert_eq!(c.client_id, "DIGI");
        assert!(c.properties.is_empty());
        assert!(c.will.is_none());
    }

    #[test]
    fn decodes_session_expiry_property() {
        let mut b = vec![0x00, 0x04, b'M', b'Q', b'T', b'T', 0x05, 0x02, 0x00, 0x3C];
        b.push(0x05); // properties length
        b.push(17); // SessionExpiryInterval
        b.extend_from_slice(&[0x00, 0x00, 0x00, 0x1E]);
        b.extend_from_slice(&[0x00, 0x02, b'i', b'd']);
        let c = decode(Decoder::new(&b), false).unwrap();
        let value = c.properties.get(17).unwrap();
        assert_eq!(
            value,
            property::PropertyValue::FourByteInt(30)
        );
    }

    #[test]
    fn roundtrips_through_encode() {
        let body = sample();
        let c = decode(Decoder::new(&body), true).unwrap();
        let size = validate(&c).unwrap();
        let mut out = vec![0u8; size.total_len];
        populate(&c, size, &mut out).unwrap();
        assert_eq!(&out[2..], &body[..]);
    }
}
