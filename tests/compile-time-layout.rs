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

//! Compile-time guarantees about the wire-facing types: every decoded
//! message and every error must stay `Send + Sync`, since callers are
//! expected to pass them across thread boundaries freely even though this
//! crate itself never spawns one (spec §5).

use static_assertions::assert_impl_all;

use mqtt_wire_codec::header::{FixedHeader, PacketType};
use mqtt_wire_codec::packet_id::PacketId;
use mqtt_wire_codec::qos::Qos;
use mqtt_wire_codec::v3_11;
use mqtt_wire_codec::v5;
use mqtt_wire_codec::MqttError;

#[test]
fn wire_types_are_send_sync() {
    assert_impl_all!(MqttError: Send, Sync, Copy);
    assert_impl_all!(PacketId: Send, Sync, Copy);
    assert_impl_all!(PacketType: Send, Sync, Copy);
    assert_impl_all!(FixedHeader: Send, Sync, Copy);
    assert_impl_all!(Qos: Send, Sync, Copy);

    assert_impl_all!(v3_11::Connect<'static>: Send, Sync);
    assert_impl_all!(v3_11::Publish<'static>: Send, Sync);
    assert_impl_all!(v5::Connect<'static>: Send, Sync);
    assert_impl_all!(v5::Publish<'static>: Send, Sync);
}
