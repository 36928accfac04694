//! Four-valued vector literal accumulation.
//!
//! The numeric sub-lexer feeds digits here in most-significant-first order
//! and calls [`VectorBuilder::finish`] once to get the final fixed-width
//! value. Binary, octal, and hex digits expand to 1/3/4 bits apiece; decimal
//! digit runs multiply-accumulate into a 64-bit magnitude first and render
//! as binary at the end.

use smallvec::SmallVec;
use vlog_ir::{LogicBit, LogicVector};

/// Width used for unsized literals (`'hFF`) and for size-error fallbacks.
pub(crate) const UNSIZED_WIDTH: u32 = 32;

/// Radix of a based literal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum NumericBase {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl NumericBase {
    /// Bits contributed per digit, for the power-of-two bases.
    fn bits_per_digit(self) -> u32 {
        match self {
            NumericBase::Binary => 1,
            NumericBase::Octal => 3,
            NumericBase::Decimal => 0,
            NumericBase::Hex => 4,
        }
    }
}

/// One scanned digit: a numeric value in range for the base, or a
/// don't-care marker.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum VectorDigit {
    Value(u8),
    X,
    Z,
}

/// Incremental builder for one vector literal scan.
///
/// Lives only for the duration of the scan; [`finish`](Self::finish)
/// consumes it and produces the final [`LogicVector`] truncated or
/// extended to the declared width.
pub(crate) struct VectorBuilder {
    width: u32,
    signed: bool,
    base: NumericBase,
    digits: SmallVec<[VectorDigit; 16]>,
}

impl VectorBuilder {
    /// Builder for a literal with a declared size, already range-checked
    /// by the caller.
    pub(crate) fn sized(width: u32, signed: bool, base: NumericBase) -> Self {
        VectorBuilder {
            width,
            signed,
            base,
            digits: SmallVec::new(),
        }
    }

    /// Builder for an unsized based literal (`'hFF`); width defaults to 32.
    pub(crate) fn unsized_default(signed: bool, base: NumericBase) -> Self {
        Self::sized(UNSIZED_WIDTH, signed, base)
    }

    /// Append the next most-significant digit.
    pub(crate) fn add_digit(&mut self, digit: VectorDigit) {
        self.digits.push(digit);
    }

    /// Produce the final value at the declared width.
    ///
    /// Widths beyond [`LogicVector::MAX_MATERIALIZED_BITS`] are carried as
    /// metadata; the stored bits stop at the cap and the remaining high
    /// bits are implicit extension fill.
    pub(crate) fn finish(self) -> LogicVector {
        let bits = match self.base {
            NumericBase::Decimal => self.decimal_bits(),
            _ => self.power_of_two_bits(),
        };
        let stored = stored_len(bits.len(), self.width);
        LogicVector::with_width(self.width, fit_to_width(bits, stored), self.signed)
    }

    /// Expand binary/octal/hex digits into bits, most-significant-first.
    fn power_of_two_bits(&self) -> Vec<LogicBit> {
        let per_digit = self.base.bits_per_digit();
        let mut bits = Vec::with_capacity(self.digits.len() * per_digit as usize);
        for &digit in &self.digits {
            match digit {
                VectorDigit::Value(v) => {
                    for shift in (0..per_digit).rev() {
                        bits.push(LogicBit::from_bool((v >> shift) & 1 != 0));
                    }
                }
                VectorDigit::X => {
                    bits.extend(std::iter::repeat(LogicBit::X).take(per_digit as usize));
                }
                VectorDigit::Z => {
                    bits.extend(std::iter::repeat(LogicBit::Z).take(per_digit as usize));
                }
            }
        }
        bits
    }

    /// Decimal digits multiply-accumulate into a 64-bit magnitude.
    ///
    /// A run containing any don't-care digit has no numeric value: the
    /// whole literal becomes all-X (or all-Z when the run is a single `z`),
    /// via a single unknown bit that the extension fill repeats.
    fn decimal_bits(&self) -> Vec<LogicBit> {
        let mut value = 0u64;
        let mut unknown = None;
        for &digit in &self.digits {
            match digit {
                VectorDigit::Value(v) => {
                    value = value
                        .saturating_mul(10)
                        .saturating_add(u64::from(v));
                }
                VectorDigit::X => unknown = Some(LogicBit::X),
                VectorDigit::Z if self.digits.len() == 1 => unknown = Some(LogicBit::Z),
                VectorDigit::Z => unknown = Some(LogicBit::X),
            }
        }
        if let Some(fill) = unknown {
            return vec![fill];
        }

        let mut bits = Vec::with_capacity(64);
        for shift in (0..64).rev() {
            bits.push(LogicBit::from_bool((value >> shift) & 1 != 0));
        }
        bits
    }
}

/// Stored-bit count for a declared width: the full width when the digit
/// bits cover it, otherwise extension stops at the materialization cap.
fn stored_len(bits_len: usize, width: u32) -> usize {
    let width = width as usize;
    if bits_len >= width {
        width
    } else {
        width.min(bits_len.max(LogicVector::MAX_MATERIALIZED_BITS as usize))
    }
}

/// Truncate or extend most-significant-first bits to exactly `target`.
///
/// Truncation drops high bits. Extension repeats the leading bit when it
/// is X or Z (so `3'bx1` is `xx1`), otherwise zero-extends.
fn fit_to_width(bits: Vec<LogicBit>, target: usize) -> Vec<LogicBit> {
    if bits.len() >= target {
        return bits[bits.len() - target..].to_vec();
    }

    let fill = match bits.first() {
        Some(&bit) if bit.is_unknown() => bit,
        _ => LogicBit::Zero,
    };
    let mut out = vec![fill; target - bits.len()];
    out.extend_from_slice(&bits);
    out
}
