use crate::ArgumentError;

#[doc = r#"
A MIDI variable-length quantity.

Delta-times (and meta event lengths) are written 7 bits per byte, most
significant group first. Every byte but the last has its leading bit set
to mark that another byte follows.

MIDI caps these at four bytes, so the largest encodable value is
`0x0FFF_FFFF`.

# Example
```rust
# use smf_track_writer::Vlq;
assert_eq!(Vlq::new(0).unwrap().as_bytes(), &[0x00]);
assert_eq!(Vlq::new(127).unwrap().as_bytes(), &[0x7F]);
assert_eq!(Vlq::new(128).unwrap().as_bytes(), &[0x81, 0x00]);
assert_eq!(Vlq::new(0x0FFF_FFFF).unwrap().as_bytes(), &[0xFF, 0xFF, 0xFF, 0x7F]);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vlq {
    bytes: [u8; 4],
    start: u8,
}

impl Vlq {
    /// The largest value MIDI can express as a variable-length quantity
    pub const MAX: u32 = 0x0FFF_FFFF;

    /// A zero delta, still one byte long.
    pub const ZERO: Self = Self::encode(0);

    /// Encode a value, failing if it is above [`Vlq::MAX`].
    pub const fn new(value: u32) -> Result<Self, ArgumentError> {
        if value > Self::MAX {
            return Err(ArgumentError::VlqOutOfRange(value));
        }
        Ok(Self::encode(value))
    }

    /// Callers guarantee `value <= Vlq::MAX`.
    pub(crate) const fn encode(value: u32) -> Self {
        let mut bytes = [0; 4];
        let mut start = 3;
        bytes[3] = (value & 0x7F) as u8;

        let mut rest = value >> 7;
        while rest > 0 {
            start -= 1;
            bytes[start] = 0x80 | (rest & 0x7F) as u8;
            rest >>= 7;
        }

        Self {
            bytes,
            start: start as u8,
        }
    }

    /// The encoded bytes, most significant first
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start as usize..]
    }

    /// Number of bytes in the encoding (1-4)
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        4 - self.start as usize
    }

    /// The value this quantity encodes
    pub const fn value(&self) -> u32 {
        let mut value = 0;
        let mut i = self.start as usize;
        while i < 4 {
            value = (value << 7) | (self.bytes[i] & 0x7F) as u32;
            i += 1;
        }
        value
    }
}

impl TryFrom<u32> for Vlq {
    type Error = ArgumentError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[test]
fn boundaries_between_lengths() {
    use pretty_assertions::assert_eq;

    let cases: [(u32, &[u8]); 8] = [
        (0x7F, &[0x7F]),
        (0x80, &[0x81, 0x00]),
        (0x2000, &[0xC0, 0x00]),
        (0x3FFF, &[0xFF, 0x7F]),
        (0x4000, &[0x81, 0x80, 0x00]),
        (0x1F_FFFF, &[0xFF, 0xFF, 0x7F]),
        (0x20_0000, &[0x81, 0x80, 0x80, 0x00]),
        (0x0800_0000, &[0xC0, 0x80, 0x80, 0x00]),
    ];

    for (value, expected) in cases {
        let vlq = Vlq::new(value).unwrap();
        assert_eq!(vlq.as_bytes(), expected, "encoding {value:#X}");
        assert_eq!(vlq.len(), expected.len());
        assert_eq!(vlq.value(), value);
    }
}

#[test]
fn rejects_values_past_four_bytes() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        Vlq::new(0x1000_0000).unwrap_err(),
        ArgumentError::VlqOutOfRange(0x1000_0000)
    );
    assert_eq!(
        Vlq::try_from(u32::MAX).unwrap_err(),
        ArgumentError::VlqOutOfRange(u32::MAX)
    );
}
