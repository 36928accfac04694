//! Numeric literal scanning: plain integers, reals, and four-valued
//! sized/unsized vector literals.

use crate::char_info;
use crate::vector_builder::{NumericBase, UNSIZED_WIDTH, VectorBuilder, VectorDigit};
use vlog_diagnostic::DiagCode;
use vlog_ir::{LogicBit, LogicVector, NumericValue, TokenKind, TokenPayload};

/// Decimal digits beyond this cannot affect a 64-bit magnitude or a double
/// mantissa; they are consumed but not accumulated.
const MAX_MANTISSA_DIGITS: u32 = 18;

/// Largest power-of-ten magnitude applied during real composition.
const MAX_EXPONENT: u32 = 511;

/// Powers of ten for repeated-squaring composition, indexed by exponent bit.
const POWERS_OF_TEN: [f64; 9] = [10.0, 100.0, 1e4, 1e8, 1e16, 1e32, 1e64, 1e128, 1e256];

/// Combine a decimal mantissa with a power-of-ten exponent.
///
/// Walks the binary digits of the exponent magnitude (capped at 511)
/// against the squaring table, then multiplies or divides. Returns the
/// value and whether it stayed finite.
#[allow(clippy::cast_precision_loss)] // 18-digit mantissa fits a double
fn compose_double(mantissa: u64, exponent: i64) -> (f64, bool) {
    let negative = exponent < 0;
    let mut magnitude = exponent.unsigned_abs().min(u64::from(MAX_EXPONENT));
    let mut scale = 1.0f64;
    let mut index = 0;
    while magnitude != 0 {
        if magnitude & 1 != 0 {
            scale *= POWERS_OF_TEN[index];
        }
        magnitude >>= 1;
        index += 1;
    }

    let result = if negative {
        mantissa as f64 / scale
    } else {
        mantissa as f64 * scale
    };
    (result, result.is_finite())
}

impl crate::Lexer<'_> {
    /// Lex a literal starting with a decimal digit: a plain integer, a
    /// real, or the size prefix of a based vector literal.
    pub(crate) fn lex_numeric_literal(&mut self) -> (TokenKind, Option<TokenPayload>) {
        let (value, digits) = self.scan_unsigned_number();

        // Whitespace between the size digits and the base apostrophe is
        // tolerated and becomes part of the literal's lexeme.
        let ws = self.cursor.horizontal_whitespace_run(0);
        if self.cursor.peek_n(ws) == b'\'' {
            self.cursor.advance_n(ws + 1);
            return self.lex_vector_literal(value, digits);
        }

        match self.cursor.current() {
            b'.' => self.lex_real_literal(value, digits, true),
            b'e' | b'E' => self.lex_real_literal(value, digits, false),
            _ => {
                let clamped = match i32::try_from(value) {
                    Ok(v) if digits <= MAX_MANTISSA_DIGITS => v,
                    _ => {
                        self.diagnose(DiagCode::SignedLiteralTooLarge, self.lexeme_span());
                        i32::MAX
                    }
                };
                (
                    TokenKind::IntegerLiteral,
                    Some(TokenPayload::Num(NumericValue::Integer(clamped))),
                )
            }
        }
    }

    /// Scan a run of decimal digits with `_` separators. Leading zeros are
    /// skipped without counting; accumulation is capped at 18 significant
    /// digits while the count keeps going.
    fn scan_unsigned_number(&mut self) -> (u64, u32) {
        while matches!(self.cursor.current(), b'0' | b'_') {
            self.cursor.advance();
        }

        let mut value = 0u64;
        let mut digits = 0u32;
        self.scan_digits_into(&mut value, &mut digits);
        (value, digits)
    }

    /// Continue accumulating digits without a leading-zero skip.
    fn scan_digits_into(&mut self, value: &mut u64, digits: &mut u32) {
        loop {
            let c = self.cursor.current();
            if c == b'_' {
                self.cursor.advance();
            } else if char_info::is_decimal_digit(c) {
                if *digits < MAX_MANTISSA_DIGITS {
                    *value = *value * 10 + u64::from(char_info::decimal_digit_value(c));
                }
                *digits += 1;
                self.cursor.advance();
            } else {
                return;
            }
        }
    }

    /// Real literal, entered at the `.` or the exponent marker.
    ///
    /// The decimal point position is the (uncapped) integer digit count;
    /// fraction digits keep extending the same mantissa. The effective
    /// power of ten is then `decPoint - cappedDigits` adjusted by the
    /// written exponent.
    fn lex_real_literal(
        &mut self,
        mut value: u64,
        mut digits: u32,
        has_fraction: bool,
    ) -> (TokenKind, Option<TokenPayload>) {
        let dec_point = digits;
        if has_fraction {
            self.cursor.advance();
            if !char_info::is_decimal_digit(self.cursor.current()) {
                self.diagnose_here(DiagCode::MissingFractionalDigits);
            }
            // Fractional leading zeros are significant and must count.
            self.scan_digits_into(&mut value, &mut digits);
        }

        let mut exp_value = 0u64;
        let mut exp_negative = false;
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            match self.cursor.current() {
                b'+' => self.cursor.advance(),
                b'-' => {
                    exp_negative = true;
                    self.cursor.advance();
                }
                _ => {}
            }
            if char_info::is_decimal_digit(self.cursor.current()) {
                let (v, _) = self.scan_unsigned_number();
                exp_value = v;
            } else {
                self.diagnose_here(DiagCode::MissingExponentDigits);
            }
        }

        let frac_exp = i64::from(dec_point) - i64::from(digits.min(MAX_MANTISSA_DIGITS));
        let written_exp = i64::try_from(exp_value).unwrap_or(i64::MAX);
        let exponent = if exp_negative {
            frac_exp.saturating_sub(written_exp)
        } else {
            frac_exp.saturating_add(written_exp)
        };

        let (result, finite) = compose_double(value, exponent);
        if !finite {
            self.diagnose(DiagCode::RealExponentTooLarge, self.lexeme_span());
        }
        (
            TokenKind::RealLiteral,
            Some(TokenPayload::Num(NumericValue::real(result))),
        )
    }

    /// Sized vector literal; the cursor sits just past the apostrophe and
    /// `size`/`size_digits` hold the already-scanned width prefix.
    fn lex_vector_literal(
        &mut self,
        size: u64,
        size_digits: u32,
    ) -> (TokenKind, Option<TokenPayload>) {
        let width = if size == 0 {
            self.diagnose(DiagCode::IntegerSizeZero, self.lexeme_span());
            UNSIZED_WIDTH
        } else {
            match u32::try_from(size) {
                Ok(w) if size_digits <= MAX_MANTISSA_DIGITS => w,
                _ => {
                    self.diagnose(DiagCode::IntegerSizeTooLarge, self.lexeme_span());
                    u32::MAX
                }
            }
        };

        let signed = self.consume_sign_flag();
        let Some(base) = self.consume_base_letter() else {
            self.diagnose_here(DiagCode::MissingVectorBase);
            return (
                TokenKind::IntegerLiteral,
                Some(TokenPayload::Num(NumericValue::Vector(LogicVector::zero(
                    width,
                )))),
            );
        };

        let mut builder = VectorBuilder::sized(width, signed, base);
        self.lex_vector_digits(base, &mut builder);
        (
            TokenKind::IntegerLiteral,
            Some(TokenPayload::Num(NumericValue::Vector(builder.finish()))),
        )
    }

    /// Apostrophe with no size prefix: `'{` was already ruled out by the
    /// classifier, so this is an unsized literal or an error.
    pub(crate) fn lex_apostrophe(&mut self) -> (TokenKind, Option<TokenPayload>) {
        debug_assert!(self.cursor.current() == b'\'');
        self.cursor.advance();

        let signed = self.consume_sign_flag();
        if let Some(base) = self.consume_base_letter() {
            let mut builder = VectorBuilder::unsized_default(signed, base);
            self.lex_vector_digits(base, &mut builder);
            return (
                TokenKind::IntegerLiteral,
                Some(TokenPayload::Num(NumericValue::Vector(builder.finish()))),
            );
        }
        if signed {
            self.diagnose_here(DiagCode::MissingVectorBase);
            return (
                TokenKind::IntegerLiteral,
                Some(TokenPayload::Num(NumericValue::Vector(LogicVector::zero(
                    UNSIZED_WIDTH,
                )))),
            );
        }

        // Single-bit shorthand: '0, '1, 'x, 'z.
        let c = self.cursor.current();
        let bit = match c {
            b'0' => Some(LogicBit::Zero),
            b'1' => Some(LogicBit::One),
            b'x' | b'X' if !char_info::is_ident_char(self.cursor.peek()) => Some(LogicBit::X),
            b'z' | b'Z' if !char_info::is_ident_char(self.cursor.peek()) => Some(LogicBit::Z),
            _ => None,
        };
        match bit {
            Some(bit) => {
                self.cursor.advance();
                (
                    TokenKind::IntegerLiteral,
                    Some(TokenPayload::Num(NumericValue::Bit(bit))),
                )
            }
            None => {
                self.diagnose(DiagCode::InvalidUnsizedLiteral, self.lexeme_span());
                (TokenKind::Unknown, None)
            }
        }
    }

    fn consume_sign_flag(&mut self) -> bool {
        if matches!(self.cursor.current(), b's' | b'S') {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    fn consume_base_letter(&mut self) -> Option<NumericBase> {
        let base = match self.cursor.current() {
            b'd' | b'D' => NumericBase::Decimal,
            b'o' | b'O' => NumericBase::Octal,
            b'h' | b'H' => NumericBase::Hex,
            b'b' | b'B' => NumericBase::Binary,
            _ => return None,
        };
        self.cursor.advance();
        Some(base)
    }

    /// Feed base digits to the builder. Whitespace between the base letter
    /// and the first digit is tolerated, but only consumed when a digit
    /// actually follows.
    fn lex_vector_digits(&mut self, base: NumericBase, builder: &mut VectorBuilder) {
        let ws = self.cursor.horizontal_whitespace_run(0);
        if vector_digit(base, self.cursor.peek_n(ws)).is_none() {
            self.diagnose_here(DiagCode::MissingVectorDigits);
            return;
        }
        self.cursor.advance_n(ws);

        loop {
            let c = self.cursor.current();
            if c == b'_' {
                self.cursor.advance();
                continue;
            }
            let Some(digit) = vector_digit(base, c) else {
                return;
            };
            builder.add_digit(digit);
            self.cursor.advance();
        }
    }
}

/// Map a byte to a vector digit for the base, or reject it.
fn vector_digit(base: NumericBase, c: u8) -> Option<VectorDigit> {
    match c {
        b'x' | b'X' => Some(VectorDigit::X),
        b'z' | b'Z' | b'?' => Some(VectorDigit::Z),
        _ => {
            let in_range = match base {
                NumericBase::Binary => char_info::is_binary_digit(c),
                NumericBase::Octal => char_info::is_octal_digit(c),
                NumericBase::Decimal => char_info::is_decimal_digit(c),
                NumericBase::Hex => char_info::is_hex_digit(c),
            };
            in_range.then(|| VectorDigit::Value(char_info::hex_digit_value(c)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::lex_all;
    use pretty_assertions::assert_eq;

    fn single_numeric(source: &str) -> (NumericValue, Vec<DiagCode>) {
        let (tokens, diags) = lex_all(source);
        assert_eq!(tokens.len(), 2, "expected one token plus EOF for {source:?}");
        let value = tokens[0]
            .numeric()
            .cloned()
            .map_or(NumericValue::Integer(-1), |v| v);
        (value, diags.codes())
    }

    #[test]
    fn plain_integer() {
        let (value, diags) = single_numeric("42");
        assert_eq!(value, NumericValue::Integer(42));
        assert!(diags.is_empty());
    }

    #[test]
    fn underscores_and_leading_zeros() {
        let (value, diags) = single_numeric("0_012_3");
        assert_eq!(value, NumericValue::Integer(123));
        assert!(diags.is_empty());
    }

    #[test]
    fn integer_overflow_clamps() {
        let (value, diags) = single_numeric("99999999999");
        assert_eq!(value, NumericValue::Integer(i32::MAX));
        assert_eq!(diags, vec![DiagCode::SignedLiteralTooLarge]);
    }

    #[test]
    fn sized_decimal_vector() {
        let (value, diags) = single_numeric("4'd15");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert_eq!(v.width(), 4);
        assert_eq!(v.as_u64(), Some(15));
        assert!(diags.is_empty());
    }

    #[test]
    fn binary_vector_with_unknowns() {
        let (value, diags) = single_numeric("3'bx1z");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert_eq!(v.bits(), &[LogicBit::X, LogicBit::One, LogicBit::Z]);
        assert!(diags.is_empty());
    }

    #[test]
    fn whitespace_before_apostrophe_is_tolerated() {
        let (value, diags) = single_numeric("8   'hFF");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert_eq!(v.width(), 8);
        assert_eq!(v.as_u64(), Some(0xFF));
        assert!(diags.is_empty());
    }

    #[test]
    fn whitespace_after_base_letter_is_tolerated() {
        let (value, diags) = single_numeric("4'h  A");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert_eq!(v.as_u64(), Some(0xA));
        assert!(diags.is_empty());
    }

    #[test]
    fn signed_vector() {
        let (value, diags) = single_numeric("4'sb11");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert!(v.is_signed());
        assert_eq!(v.as_u64(), Some(3));
        assert!(diags.is_empty());
    }

    #[test]
    fn zero_size_is_diagnosed_with_fallback() {
        let (value, diags) = single_numeric("0'd1");
        assert!(matches!(value, NumericValue::Vector(_)));
        assert_eq!(diags, vec![DiagCode::IntegerSizeZero]);
    }

    #[test]
    fn large_width_is_valid_up_to_u32() {
        let (value, diags) = single_numeric("20000000'b0");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert_eq!(v.width(), 20_000_000);
        assert!(diags.is_empty());
    }

    #[test]
    fn width_beyond_u32_is_clamped() {
        let (value, diags) = single_numeric("9999999999'b1");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert_eq!(v.width(), u32::MAX);
        assert_eq!(diags, vec![DiagCode::IntegerSizeTooLarge]);
    }

    #[test]
    fn sized_apostrophe_before_brace_takes_vector_path() {
        let (tokens, diags) = lex_all("8'{");
        assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(tokens[1].kind, TokenKind::OpenBrace);
        assert_eq!(diags.codes(), vec![DiagCode::MissingVectorBase]);
    }

    #[test]
    fn missing_base_letter() {
        let (tokens, diags) = lex_all("4'q");
        assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(diags.codes(), vec![DiagCode::MissingVectorBase]);
    }

    #[test]
    fn missing_vector_digits() {
        let (tokens, diags) = lex_all("4'b;");
        assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
        assert_eq!(diags.codes(), vec![DiagCode::MissingVectorDigits]);
    }

    #[test]
    fn unsized_based_literal() {
        let (value, diags) = single_numeric("'hFF");
        let NumericValue::Vector(v) = value else {
            panic!("expected vector")
        };
        assert_eq!(v.width(), 32);
        assert_eq!(v.as_u64(), Some(0xFF));
        assert!(diags.is_empty());
    }

    #[test]
    fn single_bit_shorthand() {
        for (source, bit) in [
            ("'0", LogicBit::Zero),
            ("'1", LogicBit::One),
            ("'x", LogicBit::X),
            ("'Z", LogicBit::Z),
        ] {
            let (value, diags) = single_numeric(source);
            assert_eq!(value, NumericValue::Bit(bit), "for {source:?}");
            assert!(diags.is_empty());
        }
    }

    #[test]
    fn invalid_unsized_literal() {
        let (tokens, diags) = lex_all("' ");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(diags.codes(), vec![DiagCode::InvalidUnsizedLiteral]);
    }

    #[test]
    fn real_literal_with_exponent() {
        let (value, diags) = single_numeric("1.5e2");
        assert_eq!(value.as_real(), Some(150.0));
        assert!(diags.is_empty());
    }

    #[test]
    fn real_fraction_only() {
        let (value, diags) = single_numeric("0.25");
        assert_eq!(value.as_real(), Some(0.25));
        assert!(diags.is_empty());
    }

    #[test]
    fn real_exponent_without_fraction() {
        let (value, diags) = single_numeric("3e2");
        assert_eq!(value.as_real(), Some(300.0));
        assert!(diags.is_empty());
    }

    #[test]
    fn negative_exponent() {
        let (value, diags) = single_numeric("25e-2");
        assert_eq!(value.as_real(), Some(0.25));
        assert!(diags.is_empty());
    }

    #[test]
    fn fractional_leading_zeros_are_significant() {
        let (value, diags) = single_numeric("1.05");
        assert_eq!(value.as_real(), Some(1.05));
        assert!(diags.is_empty());
    }

    #[test]
    fn missing_fractional_digits() {
        let (tokens, diags) = lex_all("3.;");
        assert_eq!(tokens[0].kind, TokenKind::RealLiteral);
        assert_eq!(diags.codes(), vec![DiagCode::MissingFractionalDigits]);
    }

    #[test]
    fn missing_exponent_digits() {
        let (tokens, diags) = lex_all("3e;");
        assert_eq!(tokens[0].kind, TokenKind::RealLiteral);
        assert_eq!(diags.codes(), vec![DiagCode::MissingExponentDigits]);
    }

    #[test]
    fn huge_exponent_is_diagnosed() {
        let (tokens, diags) = lex_all("1e999");
        assert_eq!(tokens[0].kind, TokenKind::RealLiteral);
        assert_eq!(diags.codes(), vec![DiagCode::RealExponentTooLarge]);
    }

    #[test]
    fn compose_double_round_trips_common_values() {
        assert_eq!(compose_double(15, 1), (150.0, true));
        assert_eq!(compose_double(105, -2), (1.05, true));
        assert_eq!(compose_double(25, -2), (0.25, true));
        assert_eq!(compose_double(0, 100), (0.0, true));
    }

    #[test]
    fn compose_double_overflow_is_reported() {
        let (value, finite) = compose_double(1, 400);
        assert!(!finite);
        assert!(value.is_infinite());
    }

    #[test]
    fn compose_double_underflow_is_finite() {
        let (value, finite) = compose_double(1, -400);
        assert!(finite);
        assert_eq!(value, 0.0);
    }
}
