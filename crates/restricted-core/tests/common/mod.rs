#![allow(dead_code)]

use restricted_core::{restricted_value, AsciiChars, FixedPoint};

fn is_grade(value: &u8) -> bool {
    (1..=5).contains(value)
}

fn is_code(value: &AsciiChars<2>) -> bool {
    value.as_bytes().iter().all(u8::is_ascii_uppercase)
}

fn upper(value: AsciiChars<2>) -> AsciiChars<2> {
    value.to_ascii_uppercase()
}

fn is_offset(value: &FixedPoint<1>) -> bool {
    value.raw().abs() <= 1_000
}

fn is_stock(value: &u32) -> bool {
    *value <= 10_000
}

restricted_value! {
    /// Ordinal grade 1..=5; zero is not a grade.
    #[derive(Copy)]
    pub struct Grade(u8);
    level = ordinal;
    zero_valid = false;
    validate = is_grade;
    normalize = ::core::convert::identity;
    codec(max_text = 1, max_bytes = 1);
}

restricted_value! {
    /// Two upper-case letters.
    #[derive(Copy)]
    pub struct Code(AsciiChars<2>);
    level = nominal;
    zero_valid = false;
    validate = is_code;
    normalize = upper;
    codec(max_text = 2, max_bytes = 2);
}

restricted_value! {
    /// Signed offset within ±100.0.
    #[derive(Copy)]
    pub struct Offset(FixedPoint<1>);
    level = interval;
    zero_valid = true;
    validate = is_offset;
    normalize = ::core::convert::identity;
    codec(max_text = 6, max_bytes = 6);
}

restricted_value! {
    /// Stock count up to 10 000.
    #[derive(Copy)]
    pub struct Stock(u32);
    level = ratio;
    zero_valid = true;
    validate = is_stock;
    normalize = ::core::convert::identity;
    codec(max_text = 5, max_bytes = 5);
}
