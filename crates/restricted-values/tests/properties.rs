//! Property tests for construction, text round-trips, ordering and hashing.

use proptest::prelude::*;

use restricted_core::{
    repeatable_hash_str, AsciiChars, FixedPoint, Format, Locale, Ordinal, RepeatableHash,
    RestrictedValue, SpanCodec,
};
use restricted_values::{
    AlphaNumericCode, AsciiToken, CelsiusTemperature, Count, CountryCode, Length, LikertScore,
    Mass, Tag, COUNT_MAX,
};

fn locale() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::all().to_vec())
}

/// Parses what `format_into` wrote into a buffer of exactly `MAX_BYTE_LENGTH`.
fn round_trip<T: SpanCodec>(value: &T, format: Format<'_>, locale: &Locale) -> T {
    let mut buffer = vec![0u8; T::MAX_BYTE_LENGTH];
    let written = value.format_into(&mut buffer, format, locale).unwrap();
    let mut chars = vec!['\0'; T::MAX_TEXT_LENGTH];
    let char_count = value.format_into_chars(&mut chars, format, locale).unwrap();
    let text: String = chars[..char_count].iter().collect();
    assert_eq!(text.as_bytes(), &buffer[..written]);

    let from_bytes = T::parse_utf8(&buffer[..written], locale).unwrap();
    let from_text = T::parse(&text, locale).unwrap();
    assert_eq!(from_bytes, from_text);
    from_text
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_counts_construct_and_convert_back(raw in 0u64..=COUNT_MAX) {
        let count = Count::from_value(raw).unwrap();
        prop_assert_eq!(*count.value().unwrap(), raw);
    }

    #[test]
    fn invalid_likert_scores_are_rejected(raw in prop_oneof![Just(0u8), 6u8..=u8::MAX]) {
        prop_assert!(LikertScore::from_value(raw).is_err());
        prop_assert!(LikertScore::try_from_value(raw).is_none());
    }

    #[test]
    fn assigned_country_codes_construct_from_either_case(
        index in 0usize..CountryCode::ASSIGNED_COUNT,
        lower in any::<bool>(),
    ) {
        let code = CountryCode::all().nth(index).unwrap();
        let text = if lower { code.to_string().to_ascii_lowercase() } else { code.to_string() };
        let constructed = CountryCode::from_value(AsciiChars::from_text(&text).unwrap()).unwrap();
        prop_assert_eq!(constructed, code);
        prop_assert_eq!(constructed.value().unwrap().as_str(), code.to_string());
    }

    #[test]
    fn counts_round_trip(raw in 0u64..=COUNT_MAX, locale in locale()) {
        let count = Count::from_value(raw).unwrap();
        prop_assert_eq!(round_trip(&count, Format::Default, &locale), count);
    }

    #[test]
    fn temperatures_round_trip(raw in -27_315i64..=100_000_000, locale in locale()) {
        let temperature = CelsiusTemperature::from_value(FixedPoint::from_raw(raw)).unwrap();
        prop_assert_eq!(round_trip(&temperature, Format::Default, &locale), temperature);
    }

    #[test]
    fn lengths_round_trip_in_every_unit(
        raw in 0i64..=i64::MAX,
        unit in prop::sample::select(vec!["mm", "cm", "m", "km"]),
        locale in locale(),
    ) {
        let length = Length::from_value(FixedPoint::from_raw(raw)).unwrap();
        prop_assert_eq!(round_trip(&length, Format::Custom(unit), &locale), length);
    }

    #[test]
    fn masses_round_trip_in_every_unit(
        raw in 0i64..=i64::MAX,
        unit in prop::sample::select(vec!["mg", "g", "kg"]),
    ) {
        let mass = Mass::from_value(FixedPoint::from_raw(raw)).unwrap();
        prop_assert_eq!(round_trip(&mass, Format::Custom(unit), &Locale::INVARIANT), mass);
    }

    #[test]
    fn tokens_round_trip(text in "[!-~]{1,200}") {
        let token = AsciiToken::parse_invariant(&text).unwrap();
        prop_assert_eq!(round_trip(&token, Format::Default, &Locale::INVARIANT), token);
    }

    #[test]
    fn tags_round_trip_after_normalization(
        text in "[A-Za-z0-9][A-Za-z0-9:/()-]{0,100}[A-Za-z0-9]",
    ) {
        let tag = Tag::parse_invariant(&text).unwrap();
        prop_assert_eq!(tag.to_string(), text.to_ascii_lowercase());
        prop_assert_eq!(round_trip(&tag, Format::Default, &Locale::INVARIANT), tag.clone());
        prop_assert_eq!(Tag::parse_invariant(&tag.to_string()).unwrap(), tag);
    }

    #[test]
    fn equality_matches_compare(a in "[A-Za-z0-9]{1,4}", b in "[A-Za-z0-9]{1,4}") {
        let a = AlphaNumericCode::parse_invariant(&a).unwrap();
        let b = AlphaNumericCode::parse_invariant(&b).unwrap();
        prop_assert_eq!(a == b, a.compare(&b).unwrap() == std::cmp::Ordering::Equal);
        prop_assert_eq!(a.compare(&b).unwrap(), b.compare(&a).unwrap().reverse());
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn likert_equality_matches_compare(a in 1u8..=5, b in 1u8..=5) {
        let a = LikertScore::from_value(a).unwrap();
        let b = LikertScore::from_value(b).unwrap();
        prop_assert_eq!(a == b, a.compare(&b).unwrap() == std::cmp::Ordering::Equal);
    }

    #[test]
    fn repeatable_hash_is_the_hash_of_canonical_text(raw in 0u64..=COUNT_MAX) {
        let count = Count::from_value(raw).unwrap();
        let reparsed: Count = count.to_string().parse().unwrap();
        prop_assert_eq!(count.repeatable_hash().unwrap(), reparsed.repeatable_hash().unwrap());
        prop_assert_eq!(count.repeatable_hash().unwrap(), repeatable_hash_str(&raw.to_string()));
    }
}
