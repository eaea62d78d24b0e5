use restricted_core::{
    AsciiChars, Format, FormatErrorKind, FormatIntoError, Interval, Locale, Ordinal, ParseError,
    Ratio, RepeatableHash, RestrictedValue, SpanCodec, ValueError,
};
use restricted_values::{
    AlphaNumericCode, AsciiToken, CelsiusTemperature, Count, CountryCode, Identifier, Length,
    LikertScore, Mass, Tag, UnitOfLength, COUNT_MAX,
};

fn format_kind(result: Result<impl std::fmt::Debug, ParseError>) -> FormatErrorKind {
    match result {
        Err(ParseError::Format(err)) => err.kind,
        other => panic!("expected a format error, got {:?}", other),
    }
}

#[test]
fn country_code_is_case_normalized_and_checked_against_assigned_set() {
    let ca = CountryCode::from_value(AsciiChars::from_text("ca").unwrap()).unwrap();
    assert_eq!(ca.to_string(), "CA");
    assert_eq!(ca, "CA".parse().unwrap());

    let err = CountryCode::from_value(AsciiChars::from_text("zz").unwrap()).unwrap_err();
    assert_eq!(err.type_name, "CountryCode");
    assert!(matches!(
        "zz".parse::<CountryCode>(),
        Err(ParseError::Validation(_))
    ));
    assert_eq!(CountryCode::all().count(), CountryCode::ASSIGNED_COUNT);
}

#[test]
fn length_is_exact_across_units() {
    let from_base = Length::from_millimetres(1000).unwrap();
    let from_metre = Length::from_metres(1).unwrap();

    assert_eq!(from_base, from_metre);
    assert_eq!(from_base.to_string(), "1000 mm");
    assert_eq!(
        from_metre
            .to_text(Format::Custom("km"), &Locale::INVARIANT)
            .unwrap(),
        "0.001 km"
    );
    assert_eq!(
        Length::parse_invariant("0.001 km").unwrap(),
        Length::parse_invariant("100 cm").unwrap()
    );
    assert_eq!(Length::parse_invariant("0.5 cm").unwrap().to_string(), "5 mm");
    assert_eq!(
        Length::from_units(3, UnitOfLength::Kilometre).unwrap().to_string(),
        "3000000 mm"
    );
}

#[test]
fn length_text_errors_are_lexical() {
    assert_eq!(
        format_kind(Length::parse_invariant("5 ft")),
        FormatErrorKind::UnknownUnit
    );
    assert_eq!(
        format_kind(Length::parse_invariant("5")),
        FormatErrorKind::UnexpectedEnd
    );
    assert_eq!(
        format_kind(Length::parse_invariant("0.0000001 mm")),
        FormatErrorKind::ExcessPrecision {
            max_fraction_digits: 6
        }
    );
    assert!(matches!(
        Length::parse_invariant("-1 mm"),
        Err(ParseError::Validation(_))
    ));
    assert!(matches!(
        Length::from_metres(1).unwrap().to_text(Format::Custom("ft"), &Locale::INVARIANT),
        Err(FormatIntoError::UnsupportedFormat { .. })
    ));
}

#[test]
fn length_follows_locale() {
    let fr = Locale::from_tag("fr-FR").unwrap();
    let length = Length::parse("1,5 m", &fr).unwrap();
    assert_eq!(length.to_string(), "1500 mm");
    assert_eq!(
        length.to_text(Format::Custom("m"), &fr).unwrap(),
        "1,5 m"
    );
}

#[test]
fn length_ratio_arithmetic() {
    let metre = Length::from_metres(1).unwrap();
    let half = Length::parse_invariant("500 mm").unwrap();

    assert_eq!((metre + half).unwrap().to_string(), "1500 mm");
    assert_eq!((metre - half).unwrap(), half);
    assert!(matches!(half - metre, Err(ValueError::Validation(_))));
    assert_eq!(metre.checked_div(&half).unwrap().to_string(), "2 mm");
    assert!(metre.checked_div(&Length::default()).is_err());
}

#[test]
fn mass_converts_between_units() {
    let mass = Mass::parse_invariant("1.5 kg").unwrap();
    assert_eq!(mass.to_string(), "1500 g");
    assert_eq!(
        mass.to_text(Format::Custom("mg"), &Locale::INVARIANT).unwrap(),
        "1500000 mg"
    );
    assert_eq!(mass, Mass::parse_invariant("1500000 mg").unwrap());
    assert_eq!(Mass::from_kilograms(2).unwrap(), Mass::from_grams(2000).unwrap());
    assert_eq!(
        format_kind(Mass::parse_invariant("0.5 mg")),
        FormatErrorKind::ExcessPrecision {
            max_fraction_digits: 0
        }
    );
}

#[test]
fn ascii_token_length_boundary() {
    let too_long = "a".repeat(AsciiToken::MAX_TEXT_LENGTH + 1);
    assert_eq!(
        format_kind(AsciiToken::parse_invariant(&too_long)),
        FormatErrorKind::TooLong {
            max: 4096,
            actual: 4097
        }
    );

    let exact = "x".repeat(AsciiToken::MAX_TEXT_LENGTH);
    let token = AsciiToken::parse_invariant(&exact).unwrap();
    let mut buffer = vec![0u8; AsciiToken::MAX_BYTE_LENGTH];
    let written = token
        .format_into(&mut buffer, Format::Default, &Locale::INVARIANT)
        .unwrap();
    assert_eq!(written, 4096);
    assert_eq!(&buffer[..written], exact.as_bytes());

    let mut short = vec![0u8; 4095];
    assert!(matches!(
        token.format_into(&mut short, Format::Default, &Locale::INVARIANT),
        Err(FormatIntoError::InsufficientBuffer {
            required: 4096,
            available: 4095
        })
    ));
    assert!(short.iter().all(|b| *b == 0));
}

#[test]
fn ascii_token_rejects_spaces_as_invalid() {
    assert!(matches!(
        AsciiToken::parse_invariant("two words"),
        Err(ParseError::Validation(_))
    ));
    assert_eq!(
        format_kind(AsciiToken::parse_invariant("tab\there")),
        FormatErrorKind::UnexpectedChar('\t')
    );
}

#[test]
fn try_parse_of_empty_input_returns_none() {
    assert!(AsciiToken::try_parse("", &Locale::INVARIANT).is_none());
    assert!(CountryCode::try_parse("", &Locale::INVARIANT).is_none());
    assert!(Tag::try_parse("", &Locale::INVARIANT).is_none());
    assert!(AlphaNumericCode::try_parse("", &Locale::INVARIANT).is_none());
    assert!(LikertScore::try_parse("", &Locale::INVARIANT).is_none());
    assert!(Length::try_parse("", &Locale::INVARIANT).is_none());
    assert!(Count::try_parse_utf8(b"", &Locale::INVARIANT).is_none());
    assert_eq!(
        AsciiToken::try_parse("", &Locale::INVARIANT).unwrap_or_default(),
        AsciiToken::default()
    );
}

fn assert_sentinel<T>()
where
    T: SpanCodec + RepeatableHash + std::fmt::Display,
{
    let a = T::default();
    let b = T::default();
    assert_eq!(a.to_string(), "<uninitialized>");
    assert_eq!(a, b);
    assert_eq!(a, a.clone());
    assert!(!a.is_initialized());
    assert!(a.value().is_err());
    assert!(a.repeatable_hash().is_err());
    assert!(matches!(
        a.to_text(Format::Default, &Locale::INVARIANT),
        Err(FormatIntoError::Uninitialized(_))
    ));
    assert!(matches!(
        a.format_into(&mut [0u8; 64], Format::Default, &Locale::INVARIANT),
        Err(FormatIntoError::Uninitialized(_))
    ));
    assert!(T::zero_declaration_is_consistent());
}

fn assert_initialized_zero<T>()
where
    T: SpanCodec + RepeatableHash + ToString,
{
    let zero = T::default();
    assert!(zero.is_initialized());
    assert!(zero.value().is_ok());
    assert!(zero.repeatable_hash().is_ok());
    assert!(T::zero_declaration_is_consistent());
    assert_eq!(T::parse_invariant(&zero.to_string()).unwrap(), zero);
}

#[test]
fn uninitialized_instances_compare_equal_and_guard_everything_else() {
    assert_sentinel::<CountryCode>();
    assert_sentinel::<AlphaNumericCode>();
    assert_sentinel::<AsciiToken>();
    assert_sentinel::<Tag>();
    assert_sentinel::<Identifier>();
    assert_sentinel::<LikertScore>();
}

#[test]
fn zero_valid_types_need_no_guard() {
    assert_initialized_zero::<Count>();
    assert_initialized_zero::<CelsiusTemperature>();
    assert_initialized_zero::<Length>();
    assert_initialized_zero::<Mass>();
    assert_eq!(Count::default(), Count::ZERO);
    assert_eq!(Length::default().to_string(), "0 mm");
}

#[test]
fn sentinel_sorts_first_but_refuses_compare() {
    let unset = LikertScore::default();
    let lowest = LikertScore::from_value(1).unwrap();

    let mut scores = vec![lowest, unset];
    scores.sort();
    assert_eq!(scores, vec![unset, lowest]);

    assert_eq!(unset.compare(&lowest).unwrap_err().type_name, "LikertScore");
    assert!(lowest.compare(&unset).is_err());
    assert!(unset.compare(&LikertScore::default()).is_err());
}

#[test]
fn count_bounds_and_arithmetic() {
    let max = Count::from_value(COUNT_MAX).unwrap();
    assert_eq!(max.to_string().len(), Count::MAX_TEXT_LENGTH);
    assert!(Count::from_value(COUNT_MAX + 1).is_err());
    assert!(matches!(
        max.increment(),
        Err(ValueError::Validation(_))
    ));
    let seven = Count::from_value(7).unwrap();
    let two = Count::from_value(2).unwrap();
    assert_eq!(*(seven / two).unwrap().value().unwrap(), 3);
    assert_eq!(*(seven % two).unwrap().value().unwrap(), 1);
    assert_eq!(*seven.checked_mul(&two).unwrap().value().unwrap(), 14);
    assert!(matches!(
        "12a".parse::<Count>(),
        Err(ParseError::Format(_))
    ));
}

#[test]
fn likert_scores_are_ordered() {
    let mut scores: Vec<LikertScore> = ["4", "1", "5", "2"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    scores.sort();
    let text: Vec<String> = scores.iter().map(ToString::to_string).collect();
    assert_eq!(text, ["1", "2", "4", "5"]);
    assert!(LikertScore::from_value(0).is_err());
    assert!(LikertScore::from_value(6).is_err());
}

#[test]
fn celsius_temperature_is_bounded_by_absolute_zero() {
    let zero = CelsiusTemperature::ABSOLUTE_ZERO;
    assert_eq!(zero.to_string(), "-273.15");
    assert_eq!(zero, "-273.15".parse().unwrap());
    assert!(matches!(
        "-273.16".parse::<CelsiusTemperature>(),
        Err(ParseError::Validation(_))
    ));
    assert!(zero.decrement().is_err());

    let room: CelsiusTemperature = "21.5".parse().unwrap();
    let warmer: CelsiusTemperature = "3".parse().unwrap();
    assert_eq!((room + warmer).unwrap().to_string(), "24.5");
    assert_eq!((-warmer).unwrap().to_string(), "-3");
    assert_eq!(room.increment().unwrap().to_string(), "22.5");

    let de = Locale::from_tag("de").unwrap();
    assert_eq!(room.to_text(Format::Default, &de).unwrap(), "21,5");
}

#[test]
fn tag_is_folded_to_lower_case() {
    let tag: Tag = "Reading-Age".parse().unwrap();
    assert_eq!(tag.to_string(), "reading-age");
    assert_eq!(tag.as_str(), Some("reading-age"));
    assert_eq!(
        tag.to_text(Format::Upper, &Locale::INVARIANT).unwrap(),
        "READING-AGE"
    );
    assert_eq!(
        tag.repeatable_hash().unwrap(),
        "reading-age".parse::<Tag>().unwrap().repeatable_hash().unwrap()
    );
    assert!("cohort(2024):pilot".parse::<Tag>().is_ok());
    assert!("-leading".parse::<Tag>().is_err());
    assert!("a".parse::<Tag>().is_err());
    assert!("with space".parse::<Tag>().is_err());
}

#[test]
fn alphanumeric_codes_keep_case_and_order_ordinally() {
    let upper: AlphaNumericCode = "ABC".parse().unwrap();
    let lower: AlphaNumericCode = "abc".parse().unwrap();
    assert_ne!(upper, lower);
    assert!(upper < lower);
    assert_eq!(upper.as_str(), Some("ABC"));
    assert!("ab-c".parse::<AlphaNumericCode>().is_err());
    assert!("a".repeat(33).parse::<AlphaNumericCode>().is_err());
}

#[test]
fn identifier_splits_on_last_delimiter() {
    let customer: Identifier = "cus_MBvF2uhJkOAcKF".parse().unwrap();
    assert_eq!(customer.parts(), Some((Some("cus"), "MBvF2uhJkOAcKF")));
    assert_eq!(customer.to_string(), "cus_MBvF2uhJkOAcKF");

    let nested: Identifier = "org_team_0123456789ab".parse().unwrap();
    assert_eq!(nested.parts(), Some((Some("org_team"), "0123456789ab")));

    let bare: Identifier = "0123456789ab".parse().unwrap();
    assert_eq!(bare.parts(), Some((None, "0123456789ab")));
    assert_eq!(Identifier::default().parts(), None);
}

#[test]
fn identifier_is_case_sensitive_and_validated() {
    let upper: Identifier = "cus_ABCDEFGHIJKL".parse().unwrap();
    let lower: Identifier = "cus_abcdefghijkl".parse().unwrap();
    assert_ne!(upper, lower);
    assert_ne!(upper.repeatable_hash().unwrap(), lower.repeatable_hash().unwrap());

    assert!(matches!(
        "cus_short".parse::<Identifier>(),
        Err(ParseError::Validation(_))
    ));
    assert!(matches!(
        "c_0123456789ab".parse::<Identifier>(),
        Err(ParseError::Validation(_))
    ));
    let too_long = "x".repeat(Identifier::MAX_TEXT_LENGTH + 1);
    assert!(matches!(
        format_kind(too_long.parse::<Identifier>()),
        FormatErrorKind::TooLong { max: 279, .. }
    ));
}
