mod common;

use common::decode_vlq;
use pretty_assertions::assert_eq;
use smf_track_writer::{ArgumentError, Vlq};

fn assert_round_trip(value: u32) {
    let vlq = Vlq::new(value).unwrap();
    let bytes = vlq.as_bytes();

    let (decoded, read) = decode_vlq(bytes);
    assert_eq!(decoded, value, "round trip of {value:#X} via {bytes:02X?}");
    assert_eq!(read, bytes.len());

    for byte in &bytes[..bytes.len() - 1] {
        assert_ne!(byte & 0x80, 0, "missing continuation bit in {bytes:02X?}");
    }
}

#[test]
fn documented_encodings() {
    assert_eq!(Vlq::new(0).unwrap().as_bytes(), &[0x00]);
    assert_eq!(Vlq::new(127).unwrap().as_bytes(), &[0x7F]);
    assert_eq!(Vlq::new(128).unwrap().as_bytes(), &[0x81, 0x00]);
    assert_eq!(Vlq::ZERO.as_bytes(), &[0x00]);
}

#[test]
fn every_two_byte_value_round_trips() {
    for value in 0..=0x3FFF {
        assert_round_trip(value);
    }
}

#[test]
fn sampled_values_across_the_range_round_trip() {
    let mut value = 0u32;
    while value <= Vlq::MAX {
        assert_round_trip(value);
        value += 4093;
    }

    for shift in 0..28 {
        let power = 1u32 << shift;
        assert_round_trip(power);
        assert_round_trip(power - 1);
        assert_round_trip(power + 1);
    }
    assert_round_trip(Vlq::MAX);
}

#[test]
fn shortest_encoding_is_used() {
    for (value, len) in [(0, 1), (0x7F, 1), (0x80, 2), (0x3FFF, 2), (0x4000, 3), (0x20_0000, 4)] {
        assert_eq!(Vlq::new(value).unwrap().len(), len, "length of {value:#X}");
    }
}

#[test]
fn values_past_28_bits_are_rejected() {
    assert_eq!(
        Vlq::new(Vlq::MAX + 1),
        Err(ArgumentError::VlqOutOfRange(Vlq::MAX + 1))
    );
}
