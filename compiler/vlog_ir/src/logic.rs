//! Four-valued logic values.
//!
//! Hardware literals carry bits with four states: `0`, `1`, unknown (`x`),
//! and high-impedance (`z`). [`LogicBit`] is one such bit; [`LogicVector`]
//! is a fixed-width value built from them. The lexer's vector builder
//! produces these; expression evaluation consumes them later.

use std::fmt;

/// One four-valued bit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicBit {
    Zero,
    One,
    /// Unknown value (`x`).
    X,
    /// High impedance (`z`).
    Z,
}

impl LogicBit {
    /// Create from a boolean.
    #[inline]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            LogicBit::One
        } else {
            LogicBit::Zero
        }
    }

    /// Returns `true` for `x` or `z`.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, LogicBit::X | LogicBit::Z)
    }

    /// The numeric value of a known bit, or `None` for `x`/`z`.
    #[inline]
    pub const fn value(self) -> Option<u8> {
        match self {
            LogicBit::Zero => Some(0),
            LogicBit::One => Some(1),
            LogicBit::X | LogicBit::Z => None,
        }
    }
}

impl fmt::Display for LogicBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            LogicBit::Zero => '0',
            LogicBit::One => '1',
            LogicBit::X => 'x',
            LogicBit::Z => 'z',
        };
        write!(f, "{c}")
    }
}

/// A fixed-width four-valued integer value.
///
/// Bits are stored most-significant-first. The declared width can exceed
/// the stored bits: at most [`MAX_MATERIALIZED_BITS`] are kept, and the
/// missing high bits repeat the leading stored bit when it is unknown,
/// else zero.
///
/// [`MAX_MATERIALIZED_BITS`]: Self::MAX_MATERIALIZED_BITS
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LogicVector {
    width: u32,
    signed: bool,
    bits: Vec<LogicBit>,
}

impl LogicVector {
    /// Most bits stored per value. Declared widths go up to `u32::MAX`;
    /// beyond this many bits the width is carried as metadata only.
    pub const MAX_MATERIALIZED_BITS: u32 = 1 << 16;

    /// Create from most-significant-first bits.
    ///
    /// The declared width is taken from `bits.len()`.
    pub fn from_bits(bits: Vec<LogicBit>, signed: bool) -> Self {
        let width = u32::try_from(bits.len()).unwrap_or(u32::MAX);
        Self::with_width(width, bits, signed)
    }

    /// Create with an explicit declared width. `bits` are the stored low
    /// bits and must not outnumber the width.
    pub fn with_width(width: u32, bits: Vec<LogicBit>, signed: bool) -> Self {
        debug_assert!(bits.len() <= width as usize);
        LogicVector {
            width,
            signed,
            bits,
        }
    }

    /// An all-zero value of the given width.
    pub fn zero(width: u32) -> Self {
        let stored = width.min(Self::MAX_MATERIALIZED_BITS) as usize;
        Self::with_width(width, vec![LogicBit::Zero; stored], false)
    }

    /// Declared bit width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether the literal was marked signed (`'s`).
    #[inline]
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Bits, most-significant-first.
    #[inline]
    pub fn bits(&self) -> &[LogicBit] {
        &self.bits
    }

    /// Returns `true` if any bit is `x` or `z`.
    pub fn has_unknown(&self) -> bool {
        self.bits.iter().any(|b| b.is_unknown())
    }

    /// Interpret as an unsigned integer, if every bit is known and the
    /// width is at most 64.
    pub fn as_u64(&self) -> Option<u64> {
        if self.width > 64 {
            return None;
        }
        let mut value = 0u64;
        for bit in &self.bits {
            value = (value << 1) | u64::from(bit.value()?);
        }
        Some(value)
    }
}

impl fmt::Display for LogicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}b", self.width, if self.signed { "s" } else { "" })?;
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
