use serde::{Deserialize, Serialize};

use crate::RegisterError;

/// The storage size of a register.
///
/// Widths are ordered by storage size, so `Width::Byte < Width::Quad`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// 8 bits.
    Byte,

    /// 16 bits.
    Word,

    /// 32 bits.
    Long,

    /// 64 bits.
    Quad,
}

impl Width {
    /// All widths, in increasing order.
    pub const ALL: [Width; 4] = [Width::Byte, Width::Word, Width::Long, Width::Quad];

    /// Returns the number of bits.
    pub const fn bits(self) -> u16 {
        match self {
            Width::Byte => 8,
            Width::Word => 16,
            Width::Long => 32,
            Width::Quad => 64,
        }
    }

    /// Returns the number of bytes.
    pub const fn bytes(self) -> u8 {
        (self.bits() / 8) as u8
    }

    /// Returns the width with the given number of bits, if any.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            8 => Some(Width::Byte),
            16 => Some(Width::Word),
            32 => Some(Width::Long),
            64 => Some(Width::Quad),
            _ => None,
        }
    }

    /// Returns the single-character operand-size suffix used by AT&T
    /// assembly syntax (`movb`, `movw`, `movl`, `movq`).
    pub const fn suffix(self) -> char {
        match self {
            Width::Byte => 'b',
            Width::Word => 'w',
            Width::Long => 'l',
            Width::Quad => 'q',
        }
    }

    /// Parses an operand-size suffix.
    ///
    /// This is the inverse of [`Width::suffix`].
    pub fn from_suffix(suffix: char) -> Result<Self, RegisterError> {
        match suffix {
            'b' => Ok(Width::Byte),
            'w' => Ok(Width::Word),
            'l' => Ok(Width::Long),
            'q' => Ok(Width::Quad),
            _ => Err(RegisterError::UnknownSuffix(suffix)),
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Returns the operand-size suffix of the given width.
///
/// Shorthand for [`Width::suffix`].
pub const fn suffix(width: Width) -> char {
    width.suffix()
}

bitflags::bitflags! {
    /// A set of register widths.
    ///
    /// Describes the widths at which a register family can be accessed.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct WidthSet: u8 {
        /// 8 bits.
        const BYTE = 1 << 0;

        /// 16 bits.
        const WORD = 1 << 1;

        /// 32 bits.
        const LONG = 1 << 2;

        /// 64 bits.
        const QUAD = 1 << 3;
    }
}

impl WidthSet {
    /// Checks if the set contains the given width.
    pub fn contains_width(self, width: Width) -> bool {
        self.contains(Self::from(width))
    }

    /// Returns an iterator over the widths in the set, in increasing order.
    pub fn widths(self) -> impl Iterator<Item = Width> {
        Width::ALL
            .into_iter()
            .filter(move |&width| self.contains_width(width))
    }
}

impl From<Width> for WidthSet {
    fn from(value: Width) -> Self {
        match value {
            Width::Byte => Self::BYTE,
            Width::Word => Self::WORD,
            Width::Long => Self::LONG,
            Width::Quad => Self::QUAD,
        }
    }
}

impl FromIterator<Width> for WidthSet {
    fn from_iter<T: IntoIterator<Item = Width>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, width| set | Self::from(width))
    }
}

#[cfg(test)]
#[path = "width_tests.rs"]
mod tests;
