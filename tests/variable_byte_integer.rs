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
use mqtt_wire_codec::varint::{decode, VarintOutcome, VariableByteInteger};

fn roundtrip(value: u32, expected_bytes: usize) {
    let v = VariableByteInteger::encode(value).unwrap();
    assert_eq!(v.encoded_bytes(), expected_bytes);
    match decode(v.as_bytes()) {
        VarintOutcome::Complete { value: got, consumed } => {
            assert_eq!(got, value);
            assert_eq!(consumed, expected_bytes);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn boundary_values_roundtrip() {
    roundtrip(0, 1);
    roundtrip(0x7F, 1);
    roundtrip(0x80, 2);
    roundtrip(0x3FFF, 2);
    roundtrip(0x4000, 3);
    roundtrip(0x1FFFFF, 3);
    roundtrip(0x200000, 4);
    roundtrip(0x0FFF_FFFF, 4);
}

#[test]
fn decode_321_is_two_bytes() {
    // spec scenario 7
    match decode(&[0xC1, 0x02]) {
        VarintOutcome::Complete { value, consumed } => {
            assert_eq!(value, 321);
            assert_eq!(consumed, 2);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn non_canonical_encoding_is_invalid() {
    // 0x00 with a needless continuation byte
    assert_eq!(decode(&[0x80, 0x00]), VarintOutcome::Invalid);
}

#[test]
fn four_bytes_all_continuation_has_no_terminator() {
    assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0xFF]), VarintOutcome::Invalid);
}

#[test]
fn truncated_encoding_is_incomplete() {
    assert_eq!(decode(&[0xFF]), VarintOutcome::Incomplete);
    assert_eq!(decode(&[]), VarintOutcome::Incomplete);
}
