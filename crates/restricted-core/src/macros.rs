/// Declares a restricted value type.
///
/// ```rust
/// use restricted_core::{restricted_value, AsciiChars, RestrictedValue};
///
/// fn is_currency(code: &AsciiChars<3>) -> bool {
///     matches!(code.as_str(), "CAD" | "EUR" | "USD")
/// }
///
/// fn upper(code: AsciiChars<3>) -> AsciiChars<3> {
///     code.to_ascii_uppercase()
/// }
///
/// restricted_value! {
///     /// ISO 4217 currency code.
///     #[derive(Copy)]
///     pub struct CurrencyCode(AsciiChars<3>);
///     level = nominal;
///     zero_valid = false;
///     validate = is_currency;
///     normalize = upper;
///     codec(max_text = 3, max_bytes = 3);
/// }
///
/// let cad: CurrencyCode = "cad".parse()?;
/// assert_eq!(cad.to_string(), "CAD");
/// assert!(!CurrencyCode::default().is_initialized());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// `level` is one of `nominal`, `ordinal`, `interval` or `ratio`; each emits
/// the traits of its level and every level below it. `zero_valid = true`
/// makes `Default` an initialized zero instead of the sentinel. The `codec`
/// clause derives [`SpanCodec`](crate::SpanCodec) from the representation's
/// [`TextRepr`](crate::TextRepr); without it the type must implement
/// `SpanCodec` by hand.
#[macro_export]
macro_rules! restricted_value {
    (@nominal $name:ident, $level:ident) => {
        impl $crate::Nominal for $name {
            const LEVEL: $crate::MeasurementLevel = $crate::MeasurementLevel::$level;
        }
    };

    (@ordinal $name:ident) => {
        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.slot, &other.slot)
            }
        }

        impl $crate::Ordinal for $name {}
    };

    (@interval $name:ident) => {
        impl $crate::Interval for $name {
            fn checked_add(&self, rhs: &Self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::add(self, rhs)
            }

            fn checked_sub(&self, rhs: &Self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::sub(self, rhs)
            }

            fn checked_neg(&self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::neg(self)
            }

            fn plus(&self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::plus(self)
            }

            fn increment(&self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::increment(self)
            }

            fn decrement(&self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::decrement(self)
            }
        }

        impl ::core::ops::Add for $name {
            type Output = ::core::result::Result<Self, $crate::ValueError>;

            fn add(self, rhs: Self) -> Self::Output {
                $crate::level::add(&self, &rhs)
            }
        }

        impl ::core::ops::Sub for $name {
            type Output = ::core::result::Result<Self, $crate::ValueError>;

            fn sub(self, rhs: Self) -> Self::Output {
                $crate::level::sub(&self, &rhs)
            }
        }

        impl ::core::ops::Neg for $name {
            type Output = ::core::result::Result<Self, $crate::ValueError>;

            fn neg(self) -> Self::Output {
                $crate::level::neg(&self)
            }
        }
    };

    (@ratio $name:ident) => {
        impl $crate::Ratio for $name {
            fn checked_mul(&self, rhs: &Self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::mul(self, rhs)
            }

            fn checked_div(&self, rhs: &Self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::div(self, rhs)
            }

            fn checked_rem(&self, rhs: &Self) -> ::core::result::Result<Self, $crate::ValueError> {
                $crate::level::rem(self, rhs)
            }
        }

        impl ::core::ops::Mul for $name {
            type Output = ::core::result::Result<Self, $crate::ValueError>;

            fn mul(self, rhs: Self) -> Self::Output {
                $crate::level::mul(&self, &rhs)
            }
        }

        impl ::core::ops::Div for $name {
            type Output = ::core::result::Result<Self, $crate::ValueError>;

            fn div(self, rhs: Self) -> Self::Output {
                $crate::level::div(&self, &rhs)
            }
        }

        impl ::core::ops::Rem for $name {
            type Output = ::core::result::Result<Self, $crate::ValueError>;

            fn rem(self, rhs: Self) -> Self::Output {
                $crate::level::rem(&self, &rhs)
            }
        }
    };

    (@level nominal $name:ident) => {
        $crate::restricted_value!(@nominal $name, Nominal);
    };

    (@level ordinal $name:ident) => {
        $crate::restricted_value!(@nominal $name, Ordinal);
        $crate::restricted_value!(@ordinal $name);
    };

    (@level interval $name:ident) => {
        $crate::restricted_value!(@nominal $name, Interval);
        $crate::restricted_value!(@ordinal $name);
        $crate::restricted_value!(@interval $name);
    };

    (@level ratio $name:ident) => {
        $crate::restricted_value!(@nominal $name, Ratio);
        $crate::restricted_value!(@ordinal $name);
        $crate::restricted_value!(@interval $name);
        $crate::restricted_value!(@ratio $name);
    };

    (@codec $name:ident, $repr:ty, $max_text:expr, $max_bytes:expr) => {
        impl $crate::SpanCodec for $name {
            const MAX_TEXT_LENGTH: usize = $max_text;
            const MAX_BYTE_LENGTH: usize = $max_bytes;

            fn decode(
                cursor: &mut $crate::Cursor<'_>,
                locale: &$crate::Locale,
            ) -> ::core::result::Result<$repr, $crate::DecodeError> {
                <$repr as $crate::TextRepr>::decode(cursor, locale)
            }

            fn encode(
                value: &$repr,
                out: &mut dyn ::core::fmt::Write,
                format: $crate::Format<'_>,
                locale: &$crate::Locale,
            ) -> ::core::fmt::Result {
                <$repr as $crate::TextRepr>::encode(value, out, format, locale)
            }

            fn supports_format(format: $crate::Format<'_>) -> bool {
                <$repr as $crate::TextRepr>::supports_format(format)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty);
        level = $level:ident;
        zero_valid = $zero:literal;
        validate = $validate:path;
        normalize = $normalize:path;
        $(codec(max_text = $max_text:expr, max_bytes = $max_bytes:expr);)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        $vis struct $name {
            slot: $crate::Slot<$repr>,
        }

        impl $crate::RestrictedValue for $name {
            type Repr = $repr;
            const NAME: &'static str = ::core::stringify!($name);
            const ZERO_IS_VALID: bool = $zero;

            fn is_valid_value(value: &$repr) -> bool {
                $validate(value)
            }

            fn normalize(value: $repr) -> $repr {
                $normalize(value)
            }

            fn from_validated(value: $crate::Validated<$repr>) -> Self {
                Self {
                    slot: $crate::Slot::Initialized(value.into_inner()),
                }
            }

            fn slot(&self) -> &$crate::Slot<$repr> {
                &self.slot
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                if $zero {
                    Self {
                        slot: $crate::Slot::Initialized(<$repr as $crate::Representation>::zero()),
                    }
                } else {
                    Self {
                        slot: $crate::Slot::Uninitialized,
                    }
                }
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match &self.slot {
                    $crate::Slot::Initialized(value) => f
                        .debug_tuple(::core::stringify!($name))
                        .field(value)
                        .finish(),
                    $crate::Slot::Uninitialized => {
                        ::core::write!(f, "{}(<uninitialized>)", ::core::stringify!($name))
                    }
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match &self.slot {
                    $crate::Slot::Initialized(value) => <Self as $crate::SpanCodec>::encode(
                        value,
                        f,
                        $crate::Format::Default,
                        &$crate::Locale::INVARIANT,
                    ),
                    // The typed error is reported by `write_text` and `to_text`.
                    $crate::Slot::Uninitialized => f.write_str("<uninitialized>"),
                }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::SpanCodec>::parse(s, &$crate::Locale::INVARIANT)
            }
        }

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = $crate::ValidationError;

            fn try_from(value: $repr) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::RestrictedValue>::from_value(value)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                let mut buffer = [0u8; <$name as $crate::SpanCodec>::MAX_BYTE_LENGTH];
                $crate::adapters::serialize_with_buffer(self, &mut buffer, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::adapters::deserialize(deserializer)
            }
        }

        $crate::restricted_value!(@level $level $name);
        $( $crate::restricted_value!(@codec $name, $repr, $max_text, $max_bytes); )?
    };
}
