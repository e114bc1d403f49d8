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

//! MQTT v5.0 property codec and per-type packet codecs (C9, C10).

pub mod property;

pub mod auth;
pub mod connack;
pub mod connect;
pub mod disconnect;
pub mod pingreq;
pub mod pingresp;
pub mod puback;
pub mod pubcomp;
pub mod publish;
pub mod pubrec;
pub mod pubrel;
pub mod suback;
pub mod subscribe;
pub mod unsuback;
pub mod unsubscribe;

pub use auth::Auth;
pub use connack::Connack;
pub use connect::{Connect, Will};
pub use disconnect::Disconnect;
pub use property::{Properties, Property, PropertyValue};
pub use puback::Puback;
pub use pubcomp::Pubcomp;
pub use publish::Publish;
pub use pubrec::Pubrec;
pub use pubrel::Pubrel;
pub use suback::Suback;
pub use subscribe::{Subscribe, SubscriptionOptions};
pub use unsuback::Unsuback;
pub use unsubscribe::Unsubscribe;

use crate::decode::Decoder;
use crate::error::MqttError;

/// Decode the optional `(reason code, properties)` tail shared by the
/// single-reason-code acknowledgement packets (PUBACK/PUBREC/PUBREL/PUBCOMP,
/// DISCONNECT, AUTH).
///
/// Per MQTT v5.0: when the reason code is Success/Normal (0) and there are
/// no properties, both fields may be omitted entirely; when there are no
/// properties but the reason code is non-zero, the property length (0) may
/// still be omitted. Every other combination carries both fields in full.
pub(crate) fn decode_reason_and_properties<'a>(
    d: &mut Decoder<'a>,
    allowed: &[u8],
) -> Result<(u8, property::Properties<'a>), MqttError> {
    if d.remaining() == 0 {
        return Ok((0, property::Properties::EMPTY));
    }
    let reason_code = d.split_u8()?;
    if d.remaining() == 0 {
        return Ok((reason_code, property::Properties::EMPTY));
    }
    let properties = property::decode(d, allowed)?;
    Ok((reason_code, properties))
}

/// Byte length `(reason code, properties)` occupies on the wire, applying
/// the same omission rule [`decode_reason_and_properties`] parses.
pub(crate) fn reason_and_properties_size(
    reason_code: u8,
    properties_payload_len: usize,
) -> Result<usize, MqttError> {
    if reason_code == 0 && properties_payload_len == 0 {
        return Ok(0);
    }
    Ok(1 + property::section_size(properties_payload_len)?)
}

/// Write the `(reason code, properties)` tail using the same omission rule.
pub(crate) fn encode_reason_and_properties(
    e: &mut crate::encode::Encoder<'_>,
    reason_code: u8,
    properties_payload_len: usize,
    write_properties: impl FnOnce(&mut crate::encode::Encoder<'_>),
) {
    if reason_code == 0 && properties_payload_len == 0 {
        return;
    }
    e.put_u8(reason_code);
    let vbi = crate::varint::VariableByteInteger::encode(properties_payload_len as u32)
        .expect("caller already validated this fits");
    e.put_uvar(&vbi);
    write_properties(e);
}
