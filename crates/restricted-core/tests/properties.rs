use proptest::prelude::*;
use restricted_core::{
    FixedPoint, Format, FormatIntoError, Interval, Locale, Ratio, RestrictedValue, SpanCodec,
    ValueError,
};

mod common;
use common::{Offset, Stock};

fn offset(raw: i64) -> Offset {
    Offset::from_value(FixedPoint::from_raw(raw)).unwrap()
}

fn stock(count: u32) -> Stock {
    Stock::from_value(count).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn construction_follows_predicate(raw in -5_000i64..=5_000) {
        let result = Offset::from_value(FixedPoint::from_raw(raw));
        prop_assert_eq!(result.is_ok(), raw.abs() <= 1_000);
    }

    #[test]
    fn interval_sum_is_valid_or_rejected(a in -1_000i64..=1_000, b in -1_000i64..=1_000) {
        match offset(a).checked_add(&offset(b)) {
            Ok(sum) => prop_assert_eq!(sum.value().unwrap().raw(), a + b),
            Err(e) => {
                prop_assert!((a + b).abs() > 1_000);
                prop_assert!(matches!(e, ValueError::Validation(_)), "unexpected error: {:?}", e);
            }
        }
    }

    #[test]
    fn negation_round_trips(a in -1_000i64..=1_000) {
        let negated = offset(a).checked_neg().unwrap();
        prop_assert_eq!(negated.checked_neg().unwrap(), offset(a));
    }

    #[test]
    fn ratio_division_matches_integers(a in 0u32..=10_000, b in 0u32..=10_000) {
        let quotient = stock(a).checked_div(&stock(b));
        if b == 0 {
            let is_arithmetic = matches!(quotient, Err(ValueError::Arithmetic { .. }));
            prop_assert!(is_arithmetic);
        } else {
            prop_assert_eq!(*quotient.unwrap().value().unwrap(), a / b);
            prop_assert_eq!(*stock(a).checked_rem(&stock(b)).unwrap().value().unwrap(), a % b);
        }
    }

    #[test]
    fn short_buffer_is_never_written(raw in -1_000i64..=1_000, len in 0usize..6) {
        let value = offset(raw);
        let required = value.measure(Format::Default, &Locale::INVARIANT).unwrap().bytes;
        let mut buffer = [b'#'; 6];

        match value.format_into(&mut buffer[..len], Format::Default, &Locale::INVARIANT) {
            Ok(written) => {
                prop_assert!(required <= len);
                prop_assert_eq!(written, required);
            }
            Err(FormatIntoError::InsufficientBuffer { required: reported, available }) => {
                prop_assert_eq!(reported, required);
                prop_assert_eq!(available, len);
                prop_assert!(buffer.iter().all(|&b| b == b'#'));
            }
            Err(e) => prop_assert!(false, "unexpected error: {:?}", e),
        }
    }
}
