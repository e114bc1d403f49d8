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

//! Generic message helpers shared by both protocol versions (C7).

use crate::decode::Decoder;
use crate::error::MqttError;
use crate::packet_id::PacketId;

/// Protocol level carried by a CONNECT packet's version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolVersion {
    V3_11 = 4,
    V5_0 = 5,
}

/// Read the protocol name (`"MQTT"`) and version byte common to both
/// CONNECT encodings, leaving the decoder positioned at the CONNECT flags
/// byte.
pub fn connect_version(d: &mut Decoder<'_>) -> Result<ProtocolVersion, MqttError> {
    let name = d.split_byte_string()?;
    if name != b"MQTT" {
        return Err(MqttError::InvalidProtocolName);
    }
    match d.split_u8()? {
        4 => Ok(ProtocolVersion::V3_11),
        5 => Ok(ProtocolVersion::V5_0),
        _ => Err(MqttError::InvalidProtocolVersion),
    }
}

/// Decoded CONNECT flags byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectFlags {
    pub username: bool,
    pub password: bool,
    pub will_retain: bool,
    pub will_qos: u8,
    pub will: bool,
    pub clean_start: bool,
}

/// Decode and cross-validate a CONNECT flags byte.
///
/// Bit 0 (reserved) must be 0. If the will flag is clear, will-QoS and
/// will-retain must also be clear. If the password flag is set, the
/// username flag must also be set.
pub fn connect_flags(byte: u8) -> Result<ConnectFlags, MqttError> {
    if byte & 0x01 != 0 {
        return Err(MqttError::InvalidConnectFlags);
    }
    let clean_start = byte & 0x02 != 0;
    let will = byte & 0x04 != 0;
    let will_qos = (byte >> 3) & 0x03;
    let will_retain = byte & 0x20 != 0;
    let password = byte & 0x40 != 0;
    let username = byte & 0x80 != 0;

    if will_qos == 0b11 {
        return Err(MqttError::InvalidQos);
    }
    if !will && (will_qos != 0 || will_retain) {
        return Err(MqttError::InvalidConnectFlags);
    }
    if password && !username {
        return Err(MqttError::InvalidConnectFlags);
    }

    Ok(ConnectFlags {
        username,
        password,
        will_retain,
        will_qos,
        will,
        clean_start,
    })
}

/// Encode a CONNECT flags byte from its decoded fields.
pub fn encode_connect_flags(f: &ConnectFlags) -> u8 {
    (f.username as u8) << 7
        | (f.password as u8) << 6
        | (f.will_retain as u8) << 5
        | (f.will_qos & 0x03) << 3
        | (f.will as u8) << 2
        | (f.clean_start as u8) << 1
}

/// Validate a CONNECT client identifier.
///
/// In strict mode (the v3.1.1 "Server MAY" baseline): 1-23 characters, all
/// from `[0-9A-Za-z]`. In lax mode, any valid UTF-8 string (already
/// guaranteed by the caller via [`Decoder::split_utf8_string`]) is accepted,
/// including the empty string.
pub fn validate_client_id(s: &str, strict: bool) -> Result<(), MqttError> {
    if !strict {
        return Ok(());
    }
    if s.is_empty() || s.len() > 23 {
        return Err(MqttError::InvalidClientId);
    }
    if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(MqttError::InvalidClientId);
    }
    Ok(())
}

/// Decode a body consisting of exactly one packet id, used by
/// PUBACK/PUBREC/PUBREL/PUBCOMP/UNSUBACK under v3.1.1.
pub fn numbered(mut d: Decoder<'_>) -> Result<PacketId, MqttError> {
    let id = d.split_packet_id()?;
    d.finalize()?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_version_reads_mqtt_name() {
        let bytes = [0x00, 0x04, b'M', b'Q', b'T', b'T', 0x04];
        let mut d = Decoder::new(&bytes);
        assert_eq!(connect_version(&mut d).unwrap(), ProtocolVersion::V3_11);
    }

    #[test]
    fn connect_version_rejects_bad_name() {
        let bytes = [0x00, 0x03, b'M', b'Q', b'X', 0x04];
        let mut d = Decoder::new(&bytes);
        assert_eq!(
            connect_version(&mut d),
            Err(MqttError::InvalidProtocolName)
        );
    }

    #[test]
    fn reserved_bit_rejected() {
        assert_eq!(connect_flags(0x01), Err(MqttError::InvalidConnectFlags));
    }

    #[test]
    fn will_clear_forbids_will_qos_and_retain() {
        // will=0, will_qos=1
        assert_eq!(connect_flags(0b0000_1000), Err(MqttError::InvalidConnectFlags));
        // will=0, will_retain=1
        assert_eq!(connect_flags(0b0010_0000), Err(MqttError::InvalidConnectFlags));
    }

    #[test]
    fn password_requires_username() {
        assert_eq!(connect_flags(0b0100_0000), Err(MqttError::InvalidConnectFlags));
    }

    #[test]
    fn roundtrips() {
        let byte = 0b1100_1110u8; // username, password, will_retain, will_qos=1, will, clean_start
        let flags = connect_flags(byte).unwrap();
        assert_eq!(encode_connect_flags(&flags), byte);
    }
}
