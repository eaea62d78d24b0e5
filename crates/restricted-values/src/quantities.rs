//! Physical quantities stored exactly in a base unit.
//!
//! Text form is `"<amount> <unit>"`. Formatting defaults to the base unit;
//! a custom format selector naming a unit symbol (`"km"`) renders in that
//! unit. Parsing accepts any known unit and converts exactly, rejecting
//! amounts finer than the base resolution.

use std::fmt;

use restricted_core::repr::{decode_decimal, write_decimal};
use restricted_core::{
    restricted_value, Cursor, DecodeError, FixedPoint, Format, FormatErrorKind, Locale,
    RestrictedValue, SpanCodec, ValueError,
};

use crate::units::{Unit, UnitOfLength, UnitOfMass};

/// Fractional digits of a millimetre kept by [`Length`] (nanometre resolution).
pub const LENGTH_SCALE: u32 = 6;
/// Fractional digits of a gram kept by [`Mass`] (milligram resolution).
pub const MASS_SCALE: u32 = 3;

fn unit_scale<U: Unit>(unit: U, scale: u32) -> Option<u32> {
    u32::try_from(scale as i32 + unit.exponent()).ok()
}

fn decode_quantity<U: Unit>(
    cursor: &mut Cursor<'_>,
    locale: &Locale,
    scale: u32,
) -> Result<i64, DecodeError> {
    let amount = cursor.take_while(|c| c != ' ');
    if amount.is_empty() {
        return Err(match cursor.peek() {
            Some(c) => cursor.error(FormatErrorKind::UnexpectedChar(c)),
            None => cursor.error(FormatErrorKind::Empty),
        });
    }
    if !cursor.eat(' ') {
        return Err(cursor.error(FormatErrorKind::UnexpectedEnd));
    }
    let unit_start = cursor.position();
    let symbol = cursor.take_while(|c| c.is_ascii_alphabetic());
    let unit = U::from_abbreviation(symbol)
        .ok_or(DecodeError::new(unit_start, FormatErrorKind::UnknownUnit))?;
    let out_of_range = DecodeError::new(0, FormatErrorKind::NumberOutOfRange);
    let unit_scale = unit_scale(unit, scale).ok_or(out_of_range)?;

    // The amount starts the input, so its positions need no offset.
    let mut amount_cursor = Cursor::new(amount);
    let raw = decode_decimal(&mut amount_cursor, unit_scale, locale.decimal_separator())?;
    amount_cursor.expect_end()?;
    i64::try_from(raw).map_err(|_| out_of_range)
}

fn encode_quantity<U: Unit>(
    raw: i64,
    scale: u32,
    out: &mut dyn fmt::Write,
    format: Format<'_>,
    locale: &Locale,
) -> fmt::Result {
    let unit = match format {
        Format::Custom(symbol) => U::from_abbreviation(symbol).ok_or(fmt::Error)?,
        _ => U::BASE,
    };
    let unit_scale = unit_scale(unit, scale).ok_or(fmt::Error)?;
    write_decimal(out, i128::from(raw), unit_scale, locale.decimal_separator())?;
    out.write_char(' ')?;
    out.write_str(unit.abbreviation())
}

fn supports_unit<U: Unit>(format: Format<'_>) -> bool {
    match format {
        Format::Custom(symbol) => U::from_abbreviation(symbol).is_some(),
        _ => true,
    }
}

fn from_units<T, U, const SCALE: u32>(amount: i64, unit: U) -> Result<T, ValueError>
where
    T: RestrictedValue<Repr = FixedPoint<SCALE>>,
    U: Unit,
{
    let overflow = ValueError::Arithmetic {
        type_name: T::NAME,
        operation: "convert",
    };
    let factor = unit_scale(unit, SCALE)
        .and_then(|exp| 10i64.checked_pow(exp))
        .ok_or(overflow.clone())?;
    let raw = amount.checked_mul(factor).ok_or(overflow)?;
    Ok(T::from_value(FixedPoint::from_raw(raw))?)
}

fn is_non_negative<const SCALE: u32>(value: &FixedPoint<SCALE>) -> bool {
    !value.is_negative()
}

restricted_value! {
    /// Non-negative length stored exactly in millimetres.
    ///
    /// `Length::from_metres(1)` and `Length::from_millimetres(1000)` are equal.
    #[derive(Copy)]
    pub struct Length(FixedPoint<LENGTH_SCALE>);
    level = ratio;
    zero_valid = true;
    validate = is_non_negative;
    normalize = ::core::convert::identity;
}

impl SpanCodec for Length {
    const MAX_TEXT_LENGTH: usize = 40;
    const MAX_BYTE_LENGTH: usize = 40;

    fn decode(
        cursor: &mut Cursor<'_>,
        locale: &Locale,
    ) -> Result<FixedPoint<LENGTH_SCALE>, DecodeError> {
        decode_quantity::<UnitOfLength>(cursor, locale, LENGTH_SCALE).map(FixedPoint::from_raw)
    }

    fn encode(
        value: &FixedPoint<LENGTH_SCALE>,
        out: &mut dyn fmt::Write,
        format: Format<'_>,
        locale: &Locale,
    ) -> fmt::Result {
        encode_quantity::<UnitOfLength>(value.raw(), LENGTH_SCALE, out, format, locale)
    }

    fn supports_format(format: Format<'_>) -> bool {
        supports_unit::<UnitOfLength>(format)
    }
}

impl Length {
    /// Whole `amount` of `unit`.
    pub fn from_units(amount: i64, unit: UnitOfLength) -> Result<Self, ValueError> {
        from_units::<Self, UnitOfLength, LENGTH_SCALE>(amount, unit)
    }

    /// Whole millimetres.
    pub fn from_millimetres(amount: i64) -> Result<Self, ValueError> {
        Self::from_units(amount, UnitOfLength::Millimetre)
    }

    /// Whole centimetres.
    pub fn from_centimetres(amount: i64) -> Result<Self, ValueError> {
        Self::from_units(amount, UnitOfLength::Centimetre)
    }

    /// Whole metres.
    pub fn from_metres(amount: i64) -> Result<Self, ValueError> {
        Self::from_units(amount, UnitOfLength::Metre)
    }

    /// Whole kilometres.
    pub fn from_kilometres(amount: i64) -> Result<Self, ValueError> {
        Self::from_units(amount, UnitOfLength::Kilometre)
    }
}

restricted_value! {
    /// Non-negative mass stored exactly in grams, to the milligram.
    #[derive(Copy)]
    pub struct Mass(FixedPoint<MASS_SCALE>);
    level = ratio;
    zero_valid = true;
    validate = is_non_negative;
    normalize = ::core::convert::identity;
}

impl SpanCodec for Mass {
    const MAX_TEXT_LENGTH: usize = 40;
    const MAX_BYTE_LENGTH: usize = 40;

    fn decode(
        cursor: &mut Cursor<'_>,
        locale: &Locale,
    ) -> Result<FixedPoint<MASS_SCALE>, DecodeError> {
        decode_quantity::<UnitOfMass>(cursor, locale, MASS_SCALE).map(FixedPoint::from_raw)
    }

    fn encode(
        value: &FixedPoint<MASS_SCALE>,
        out: &mut dyn fmt::Write,
        format: Format<'_>,
        locale: &Locale,
    ) -> fmt::Result {
        encode_quantity::<UnitOfMass>(value.raw(), MASS_SCALE, out, format, locale)
    }

    fn supports_format(format: Format<'_>) -> bool {
        supports_unit::<UnitOfMass>(format)
    }
}

impl Mass {
    /// Whole `amount` of `unit`.
    pub fn from_units(amount: i64, unit: UnitOfMass) -> Result<Self, ValueError> {
        from_units::<Self, UnitOfMass, MASS_SCALE>(amount, unit)
    }

    /// Whole grams.
    pub fn from_grams(amount: i64) -> Result<Self, ValueError> {
        Self::from_units(amount, UnitOfMass::Gram)
    }

    /// Whole kilograms.
    pub fn from_kilograms(amount: i64) -> Result<Self, ValueError> {
        Self::from_units(amount, UnitOfMass::Kilogram)
    }
}
