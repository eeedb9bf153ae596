pub(crate) mod utf8sequence;

use std::fmt;

pub trait Utf {
    fn get_codepoint(&self) -> u32;
    fn is_valid(&self) -> bool {
        is_valid_codepoint(self.get_codepoint())
    }
}

pub(crate) const fn is_valid_codepoint(codepoint: u32) -> bool {
    char::from_u32(codepoint).is_some()
}

/// Number of bytes a forced-width encoding emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Width {
    pub const fn byte_count(self) -> usize {
        self as usize
    }

    /// Largest value whose bits fit in the payload of a sequence this wide.
    pub const fn capacity(self) -> u32 {
        match self {
            Width::Two => 0x7FF,
            Width::Three => 0xFFFF,
            Width::Four => 0x1F_FFFF,
        }
    }
}

/// How each code point is laid out in bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Minimal-length UTF-8.
    #[default]
    Standard,
    /// Exactly this many bytes, whatever the code point needs.
    Overlong(Width),
}

impl EncodingMode {
    /// Forced-width mode for `n` bytes, if `n` is one of 2, 3 or 4.
    pub const fn overlong(n: usize) -> Option<Self> {
        match n {
            2 => Some(Self::Overlong(Width::Two)),
            3 => Some(Self::Overlong(Width::Three)),
            4 => Some(Self::Overlong(Width::Four)),
            _ => None,
        }
    }

    pub const fn width(self) -> Option<Width> {
        match self {
            Self::Standard => None,
            Self::Overlong(width) => Some(width),
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("normal"),
            Self::Overlong(width) => write!(f, "{}", width.byte_count()),
        }
    }
}
