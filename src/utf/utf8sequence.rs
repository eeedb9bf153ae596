use crate::utf::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Utf8Type {
    Ascii(u8),
    Western([u8; 2]),
    Bmp([u8; 3]),
    Other([u8; 4]),
}

/// One encoded code point, 1 to 4 bytes long.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Utf8Sequence {
    utf8_type: Utf8Type,
}

impl Utf for Utf8Sequence {
    /// Decodes by the standard bit layout without any range checks, so
    /// overlong forms yield the value they carry.
    #[inline]
    fn get_codepoint(&self) -> u32 {
        let bytes = self.as_bytes();
        let lead = match self.utf8_type {
            Utf8Type::Ascii(value) => return value as u32,
            Utf8Type::Western(_) => bytes[0] & 0b0001_1111,
            Utf8Type::Bmp(_) => bytes[0] & 0b0000_1111,
            Utf8Type::Other(_) => bytes[0] & 0b0000_0111,
        };
        bytes[1..].iter().fold(lead as u32, |codepoint, byte| {
            (codepoint << 6) | (byte & 0b0011_1111) as u32
        })
    }

    /// True only for the canonical, minimal-length encoding of a scalar value.
    #[inline]
    fn is_valid(&self) -> bool {
        let codepoint = self.get_codepoint();
        if !self.has_marker() || !is_valid_codepoint(codepoint) {
            return false;
        }
        match self.utf8_type {
            Utf8Type::Ascii(_) => (..=0x7F).contains(&codepoint),
            Utf8Type::Western(_) => (0x80..=0x7FF).contains(&codepoint),
            Utf8Type::Bmp(_) => (0x800..=0xFFFF).contains(&codepoint),
            Utf8Type::Other(_) => (0x10000..=0x10FFFF).contains(&codepoint),
        }
    }
}

impl Utf8Sequence {
    /// Packs `code_point` into the byte count `mode` asks for.
    ///
    /// `Standard` picks the minimal length. `Overlong` always emits exactly
    /// that many bytes. Leading bytes are `marker | (value >> shift)` cut to
    /// eight bits: a width too small for the value lets the high bits spill
    /// into the marker and get dropped, giving a malformed sequence that no
    /// longer decodes to `code_point`. See [`Utf8Sequence::round_trips`].
    pub fn encode(code_point: char, mode: EncodingMode) -> Self {
        let value = code_point as u32;
        let length = mode.width().map_or(code_point.len_utf8(), Width::byte_count);
        let utf8_type = match length {
            1 => Utf8Type::Ascii(value as u8),
            2 => Utf8Type::Western([leading(0b1100_0000, value, 6), continuation(value, 0)]),
            3 => Utf8Type::Bmp([
                leading(0b1110_0000, value, 12),
                continuation(value, 6),
                continuation(value, 0),
            ]),
            _ => Utf8Type::Other([
                leading(0b1111_0000, value, 18),
                continuation(value, 12),
                continuation(value, 6),
                continuation(value, 0),
            ]),
        };
        Self { utf8_type }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self.utf8_type {
            Utf8Type::Ascii(ref value) => std::slice::from_ref(value),
            Utf8Type::Western(ref bytes) => bytes,
            Utf8Type::Bmp(ref bytes) => bytes,
            Utf8Type::Other(ref bytes) => bytes,
        }
    }

    pub const fn full_len(&self) -> usize {
        match self.utf8_type {
            Utf8Type::Ascii(_) => 1,
            Utf8Type::Western(v) => v.len(),
            Utf8Type::Bmp(v) => v.len(),
            Utf8Type::Other(v) => v.len(),
        }
    }

    /// Decodes to a scalar value using more bytes than it needs.
    pub fn is_overlong(&self) -> bool {
        self.has_marker() && is_valid_codepoint(self.get_codepoint()) && !self.is_valid()
    }

    /// Decodes back to `code_point`.
    pub fn round_trips(&self, code_point: char) -> bool {
        self.has_marker() && self.get_codepoint() == code_point as u32
    }

    // The leading byte still announces the sequence length.
    const fn has_marker(&self) -> bool {
        match self.utf8_type {
            Utf8Type::Ascii(value) => value.leading_ones() == 0,
            Utf8Type::Western(bytes) => bytes[0].leading_ones() == 2,
            Utf8Type::Bmp(bytes) => bytes[0].leading_ones() == 3,
            Utf8Type::Other(bytes) => bytes[0].leading_ones() == 4,
        }
    }
}

#[inline]
const fn leading(marker: u8, value: u32, shift: u32) -> u8 {
    (marker as u32 | (value >> shift)) as u8
}

#[inline]
const fn continuation(value: u32, shift: u32) -> u8 {
    0b10_000000 | ((value >> shift) & 0b0011_1111) as u8
}
