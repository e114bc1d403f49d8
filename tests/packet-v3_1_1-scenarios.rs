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

//! End-to-end streaming + decode exercises over whole packets on the wire.

use mqtt_wire_codec::header::PacketType;
use mqtt_wire_codec::v3_11;
use mqtt_wire_codec::Streaming;

#[test]
fn header_roundtrip_for_connect() {
    let mut s = Streaming::new(&[0x10, 0x10]);
    let (header, body) = s.next().unwrap().expect("one packet");
    assert_eq!(header.packet_type, PacketType::Connect);
    assert_eq!(header.flags, 0);
    assert_eq!(header.remaining_len, 16);
    assert_eq!(body.remaining(), 0);
}

#[test]
fn connect_decode() {
    let bytes: &[u8] = &[
        0x10, 0x10, 0x00, 0x04, b'M', b'Q', b'T', b'T', 0x04, 0x02, 0x00, 0x3C, 0x00, 0x04, b'D',
        b'I', b'G', b'I',
    ];
    let mut s = Streaming::new(bytes);
    let (header, body) = s.next().unwrap().expect("one packet");
    assert_eq!(header.packet_type, PacketType::Connect);

    let connect = v3_11::connect::decode(body, true).unwrap();
    assert!(connect.flags.clean_start);
    assert_eq!(connect.keep_alive, 60);
    assert_eq!(connect.client_id, "DIGI");
    assert!(connect.will.is_none());
    assert!(connect.username.is_none());
    assert!(connect.password.is_none());
}

#[test]
fn connack_decode() {
    let bytes: &[u8] = &[0x20, 0x02, 0x01, 0x00];
    let mut s = Streaming::new(bytes);
    let (_, body) = s.next().unwrap().expect("one packet");
    let connack = v3_11::connack::decode(body).unwrap();
    assert!(connack.session_present);
    assert_eq!(connack.return_code, 0);
}

#[test]
fn publish_qos0_decode() {
    let bytes: &[u8] = &[
        0x30, 0x0A, 0x00, 0x04, b't', b'e', b's', b't', b't', b'e', b's', b't',
    ];
    let mut s = Streaming::new(bytes);
    let (header, body) = s.next().unwrap().expect("one packet");
    let publish = v3_11::publish::decode(&header, body).unwrap();
    assert_eq!(publish.qos, 0);
    assert_eq!(publish.topic, "test");
    assert!(publish.packet_id.is_none());
    assert_eq!(publish.payload, b"test");
}

#[test]
fn publish_qos2_decode() {
    let bytes: &[u8] = &[
        0x34, 0x14, 0x00, 0x05, b'a', b'/', b'b', b'/', b'c', 0x00, 0x01, b'h', b'e', b'l', b'l',
        b'o', b' ', b'w', b'o', b'r', b'l', b'd',
    ];
    let mut s = Streaming::new(bytes);
    let (header, body) = s.next().unwrap().expect("one packet");
    let publish = v3_11::publish::decode(&header, body).unwrap();
    assert_eq!(publish.qos, 2);
    assert_eq!(publish.topic, "a/b/c");
    assert_eq!(publish.packet_id.unwrap().get(), 1);
    assert_eq!(publish.payload, b"hello world");
}

#[test]
fn subscribe_body_decode() {
    use mqtt_wire_codec::decode::Decoder;
    use mqtt_wire_codec::qos::Qos;

    let body: &[u8] = &[0x00, 0x01, 0x00, 0x04, b'M', b'Q', b'T', b'T', 0x02];
    let sub = v3_11::subscribe::decode(Decoder::new(body)).unwrap();
    let subs: Vec<_> = sub.subscriptions().collect::<Result<_, _>>().unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].filter, "MQTT");
    assert_eq!(subs[0].qos, Qos::ExactlyOnce);
}

#[test]
fn streaming_with_trailing_truncated_packet_yields_first_then_incomplete() {
    // PINGREQ followed by a CONNECT header claiming more body than present.
    let mut buf = vec![0xC0, 0x00];
    buf.extend_from_slice(&[0x10, 0x7F]);
    buf.extend_from_slice(&[1, 2, 3]);

    let mut s = Streaming::new(&buf);
    let (h1, body1) = s.next().unwrap().expect("first packet ready");
    assert_eq!(h1.packet_type, PacketType::Pingreq);
    body1.finalize().unwrap();

    assert_eq!(s.next().unwrap(), None);
    assert_eq!(s.unconsumed(), &[0x10, 0x7F, 1, 2, 3]);
}
