//! Underlying representations and their text codecs.
//!
//! Every representation decodes from a shared [`Cursor`] and encodes into any
//! [`fmt::Write`] sink, so the same code serves parsing, buffer formatting,
//! allocation and hashing.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::cursor::{Cursor, DecodeError};
use crate::errors::FormatErrorKind;
use crate::format::Format;
use crate::intern;
use crate::locale::Locale;

/// A type usable as the underlying representation of a restricted value.
pub trait Representation:
    Clone + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// The all-zero representation produced by default initialization.
    fn zero() -> Self;
}

/// Text codec for a representation.
pub trait TextRepr: Representation {
    /// Decodes a representation starting at the cursor.
    fn decode(cursor: &mut Cursor<'_>, locale: &Locale) -> Result<Self, DecodeError>;

    /// Writes the representation in the requested format.
    fn encode(&self, out: &mut dyn fmt::Write, format: Format<'_>, locale: &Locale) -> fmt::Result;

    /// Whether `format` is recognised.
    fn supports_format(format: Format<'_>) -> bool {
        format.is_standard()
    }
}

/// Additive arithmetic for interval-level values.
pub trait IntervalRepr: Representation {
    /// `self + rhs`, `None` on overflow.
    fn checked_add(&self, rhs: &Self) -> Option<Self>;
    /// `self - rhs`, `None` on overflow.
    fn checked_sub(&self, rhs: &Self) -> Option<Self>;
    /// `-self`, `None` when not representable.
    fn checked_neg(&self) -> Option<Self>;
    /// Unit step used by increment and decrement.
    fn one() -> Self;
}

/// Multiplicative arithmetic for ratio-level values.
pub trait RatioRepr: IntervalRepr {
    /// `self * rhs`, `None` on overflow.
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;
    /// `self / rhs`, `None` on overflow or division by zero.
    fn checked_div(&self, rhs: &Self) -> Option<Self>;
    /// `self % rhs`, `None` on division by zero.
    fn checked_rem(&self, rhs: &Self) -> Option<Self>;
}

/// Fixed-length ASCII code such as `CA` or `USD`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsciiChars<const N: usize>([u8; N]);

impl<const N: usize> AsciiChars<N> {
    /// Accepts exactly `N` visible ASCII characters.
    pub fn from_text(text: &str) -> Option<Self> {
        let bytes: [u8; N] = text.as_bytes().try_into().ok()?;
        if bytes.iter().all(u8::is_ascii_graphic) {
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Text form.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Upper-case copy.
    pub fn to_ascii_uppercase(&self) -> Self {
        Self(self.0.map(|b| b.to_ascii_uppercase()))
    }

    /// Lower-case copy.
    pub fn to_ascii_lowercase(&self) -> Self {
        Self(self.0.map(|b| b.to_ascii_lowercase()))
    }
}

impl<const N: usize> fmt::Debug for AsciiChars<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> Representation for AsciiChars<N> {
    fn zero() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> TextRepr for AsciiChars<N> {
    fn decode(cursor: &mut Cursor<'_>, _locale: &Locale) -> Result<Self, DecodeError> {
        let start = cursor.position();
        let run = cursor.take_while(|c| c.is_ascii_graphic());
        if let Some(c) = cursor.peek() {
            return Err(cursor.error(FormatErrorKind::UnexpectedChar(c)));
        }
        if run.is_empty() {
            return Err(DecodeError::new(start, FormatErrorKind::Empty));
        }
        Self::from_text(run).ok_or(DecodeError::new(
            start,
            FormatErrorKind::WrongLength {
                expected: N,
                actual: run.len(),
            },
        ))
    }

    fn encode(
        &self,
        out: &mut dyn fmt::Write,
        format: Format<'_>,
        _locale: &Locale,
    ) -> fmt::Result {
        match format {
            Format::Lower => out.write_str(self.to_ascii_lowercase().as_str()),
            Format::Upper => out.write_str(self.to_ascii_uppercase().as_str()),
            _ => out.write_str(self.as_str()),
        }
    }
}

/// Variable-length printable ASCII text, interned in the shared pool.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsciiText(Arc<str>);

fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~')
}

impl AsciiText {
    /// Accepts printable ASCII (`0x20..=0x7E`), including the empty string.
    pub fn new(text: &str) -> Option<Self> {
        if text.chars().all(is_printable) {
            Some(Self(intern::shared().intern(text)))
        } else {
            None
        }
    }

    /// Text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (equal to bytes).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lower-case copy; shares storage when already lower case.
    pub fn to_ascii_lowercase(&self) -> Self {
        if self.0.bytes().any(|b| b.is_ascii_uppercase()) {
            Self(intern::shared().intern(&self.0.to_ascii_lowercase()))
        } else {
            self.clone()
        }
    }

    /// Upper-case copy; shares storage when already upper case.
    pub fn to_ascii_uppercase(&self) -> Self {
        if self.0.bytes().any(|b| b.is_ascii_lowercase()) {
            Self(intern::shared().intern(&self.0.to_ascii_uppercase()))
        } else {
            self.clone()
        }
    }
}

impl fmt::Debug for AsciiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl Representation for AsciiText {
    fn zero() -> Self {
        Self(intern::shared().intern(""))
    }
}

impl TextRepr for AsciiText {
    fn decode(cursor: &mut Cursor<'_>, _locale: &Locale) -> Result<Self, DecodeError> {
        let run = cursor.take_while(is_printable);
        cursor.expect_end()?;
        Ok(Self(intern::shared().intern(run)))
    }

    fn encode(
        &self,
        out: &mut dyn fmt::Write,
        format: Format<'_>,
        _locale: &Locale,
    ) -> fmt::Result {
        match format {
            Format::Lower => self
                .0
                .chars()
                .try_for_each(|c| out.write_char(c.to_ascii_lowercase())),
            Format::Upper => self
                .0
                .chars()
                .try_for_each(|c| out.write_char(c.to_ascii_uppercase())),
            _ => out.write_str(&self.0),
        }
    }
}

fn digits_error(cursor: &Cursor<'_>) -> DecodeError {
    match cursor.peek() {
        Some(c) => cursor.error(FormatErrorKind::UnexpectedChar(c)),
        None if cursor.input().is_empty() => cursor.error(FormatErrorKind::Empty),
        None => cursor.error(FormatErrorKind::UnexpectedEnd),
    }
}

fn accumulate(digits: &str) -> Option<i128> {
    digits.bytes().try_fold(0i128, |acc, d| {
        acc.checked_mul(10)?.checked_add(i128::from(d - b'0'))
    })
}

/// Decodes an optionally signed decimal integer.
pub fn decode_integer(cursor: &mut Cursor<'_>, signed: bool) -> Result<i128, DecodeError> {
    let start = cursor.position();
    let negative = signed && cursor.eat('-');
    let digits = cursor.take_while(|c| c.is_ascii_digit());
    if digits.is_empty() {
        return Err(digits_error(cursor));
    }
    let magnitude =
        accumulate(digits).ok_or(DecodeError::new(start, FormatErrorKind::NumberOutOfRange))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Decodes a decimal number into a mantissa at `scale` fractional digits.
///
/// Trailing zeros beyond `scale` are accepted; other excess digits are an
/// [`FormatErrorKind::ExcessPrecision`] error rather than being rounded.
pub fn decode_decimal(
    cursor: &mut Cursor<'_>,
    scale: u32,
    separator: char,
) -> Result<i128, DecodeError> {
    let start = cursor.position();
    let out_of_range = DecodeError::new(start, FormatErrorKind::NumberOutOfRange);
    let negative = cursor.eat('-');
    let integer = cursor.take_while(|c| c.is_ascii_digit());
    if integer.is_empty() {
        return Err(digits_error(cursor));
    }
    let factor = 10i128.checked_pow(scale).ok_or(out_of_range)?;
    let mut raw = accumulate(integer)
        .and_then(|v| v.checked_mul(factor))
        .ok_or(out_of_range)?;
    if cursor.eat(separator) {
        let fraction_start = cursor.position();
        let fraction = cursor.take_while(|c| c.is_ascii_digit());
        if fraction.is_empty() {
            return Err(digits_error(cursor));
        }
        let significant = fraction.trim_end_matches('0');
        let places = significant.len() as u32;
        if places > scale {
            return Err(DecodeError::new(
                fraction_start + scale as usize,
                FormatErrorKind::ExcessPrecision {
                    max_fraction_digits: scale,
                },
            ));
        }
        let fraction_raw = accumulate(significant)
            .and_then(|v| v.checked_mul(10i128.pow(scale - places)))
            .ok_or(out_of_range)?;
        raw = raw.checked_add(fraction_raw).ok_or(out_of_range)?;
    }
    Ok(if negative { -raw } else { raw })
}

/// Writes `raw / 10^scale` in minimal decimal form (no trailing fractional zeros).
pub fn write_decimal(
    out: &mut dyn fmt::Write,
    raw: i128,
    scale: u32,
    separator: char,
) -> fmt::Result {
    let factor = 10u128.pow(scale);
    let magnitude = raw.unsigned_abs();
    if raw < 0 {
        out.write_char('-')?;
    }
    write!(out, "{}", magnitude / factor)?;
    let mut fraction = magnitude % factor;
    if fraction != 0 {
        let mut width = scale as usize;
        while fraction % 10 == 0 {
            fraction /= 10;
            width -= 1;
        }
        out.write_char(separator)?;
        write!(out, "{:0width$}", fraction, width = width)?;
    }
    Ok(())
}

macro_rules! integer_repr {
    ($($t:ty => $signed:expr),* $(,)?) => {$(
        impl Representation for $t {
            fn zero() -> Self {
                0
            }
        }

        impl TextRepr for $t {
            fn decode(cursor: &mut Cursor<'_>, _locale: &Locale) -> Result<Self, DecodeError> {
                let start = cursor.position();
                let value = decode_integer(cursor, $signed)?;
                <$t>::try_from(value)
                    .map_err(|_| DecodeError::new(start, FormatErrorKind::NumberOutOfRange))
            }

            fn encode(
                &self,
                out: &mut dyn fmt::Write,
                _format: Format<'_>,
                _locale: &Locale,
            ) -> fmt::Result {
                write!(out, "{}", self)
            }
        }

        impl IntervalRepr for $t {
            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_add(*self, *rhs)
            }

            fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_sub(*self, *rhs)
            }

            fn checked_neg(&self) -> Option<Self> {
                <$t>::checked_neg(*self)
            }

            fn one() -> Self {
                1
            }
        }

        impl RatioRepr for $t {
            fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_mul(*self, *rhs)
            }

            fn checked_div(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_div(*self, *rhs)
            }

            fn checked_rem(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_rem(*self, *rhs)
            }
        }
    )*};
}

integer_repr!(u8 => false, u32 => false, u64 => false, i64 => true);

/// Exact signed decimal with `SCALE` fractional digits, stored as an `i64` mantissa.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPoint<const SCALE: u32>(i64);

impl<const SCALE: u32> FixedPoint<SCALE> {
    /// `10^SCALE`, the mantissa of one whole unit.
    pub const FACTOR: i64 = 10i64.pow(SCALE);

    /// Wraps a mantissa.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Mantissa.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Whole units, `None` on overflow.
    pub fn from_integer(value: i64) -> Option<Self> {
        value.checked_mul(Self::FACTOR).map(Self)
    }

    /// Returns `true` below zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl<const SCALE: u32> fmt::Debug for FixedPoint<SCALE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<const SCALE: u32> fmt::Display for FixedPoint<SCALE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, i128::from(self.0), SCALE, '.')
    }
}

impl<const SCALE: u32> Representation for FixedPoint<SCALE> {
    fn zero() -> Self {
        Self(0)
    }
}

impl<const SCALE: u32> TextRepr for FixedPoint<SCALE> {
    fn decode(cursor: &mut Cursor<'_>, locale: &Locale) -> Result<Self, DecodeError> {
        let start = cursor.position();
        let raw = decode_decimal(cursor, SCALE, locale.decimal_separator())?;
        i64::try_from(raw)
            .map(Self)
            .map_err(|_| DecodeError::new(start, FormatErrorKind::NumberOutOfRange))
    }

    fn encode(
        &self,
        out: &mut dyn fmt::Write,
        _format: Format<'_>,
        locale: &Locale,
    ) -> fmt::Result {
        write_decimal(out, i128::from(self.0), SCALE, locale.decimal_separator())
    }
}

impl<const SCALE: u32> IntervalRepr for FixedPoint<SCALE> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        i64::checked_add(self.0, rhs.0).map(Self)
    }

    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        i64::checked_sub(self.0, rhs.0).map(Self)
    }

    fn checked_neg(&self) -> Option<Self> {
        i64::checked_neg(self.0).map(Self)
    }

    fn one() -> Self {
        Self(Self::FACTOR)
    }
}

/// Products and quotients truncate toward zero at `SCALE` digits.
impl<const SCALE: u32> RatioRepr for FixedPoint<SCALE> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let product = i128::from(self.0) * i128::from(rhs.0) / i128::from(Self::FACTOR);
        i64::try_from(product).ok().map(Self)
    }

    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        let quotient = i128::from(self.0) * i128::from(Self::FACTOR) / i128::from(rhs.0);
        i64::try_from(quotient).ok().map(Self)
    }

    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        i64::checked_rem(self.0, rhs.0).map(Self)
    }
}
