//! Name lookup for the declared value types.

use restricted_core::{MeasurementLevel, Nominal, RestrictedValue, SpanCodec};
use restricted_values::{
    AlphaNumericCode, AsciiToken, CelsiusTemperature, Count, CountryCode, Identifier, Length,
    LikertScore, Mass, Tag,
};
use serde::Serialize;
use thiserror::Error;

/// Static description of a declared type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeInfo {
    pub name: &'static str,
    pub level: MeasurementLevel,
    pub max_text_length: usize,
    pub max_byte_length: usize,
    pub zero_is_valid: bool,
}

#[derive(Debug, Error)]
#[error("unknown type '{0}' (run `restricted types` for the list)")]
pub struct UnknownType(String);

/// An operation that is generic over the value type.
pub trait TypeVisitor {
    type Output;

    fn visit<T: Nominal + SpanCodec>(self) -> Self::Output;
}

fn info<T: Nominal + SpanCodec>() -> TypeInfo {
    TypeInfo {
        name: T::NAME,
        level: T::LEVEL,
        max_text_length: T::MAX_TEXT_LENGTH,
        max_byte_length: T::MAX_BYTE_LENGTH,
        zero_is_valid: T::ZERO_IS_VALID,
    }
}

macro_rules! declared_types {
    ($($ty:ty),* $(,)?) => {
        /// Every declared type, in listing order.
        pub fn all() -> Vec<TypeInfo> {
            vec![$(info::<$ty>()),*]
        }

        /// Runs `visitor` against the type called `name`, ignoring ASCII case.
        pub fn dispatch<V: TypeVisitor>(name: &str, visitor: V) -> Result<V::Output, UnknownType> {
            $(
                if name.eq_ignore_ascii_case(<$ty as RestrictedValue>::NAME) {
                    return Ok(visitor.visit::<$ty>());
                }
            )*
            Err(UnknownType(name.to_string()))
        }
    };
}

declared_types!(
    CountryCode,
    AlphaNumericCode,
    AsciiToken,
    Tag,
    Identifier,
    Count,
    LikertScore,
    CelsiusTemperature,
    Length,
    Mass,
);
