//! Temperatures on the Celsius scale.

use restricted_core::{restricted_value, FixedPoint, Slot};

/// Hundredths of a degree.
pub type Centidegrees = FixedPoint<2>;

const ABSOLUTE_ZERO_RAW: i64 = -27_315;
const CEILING_RAW: i64 = 100_000_000;

fn is_physical(value: &Centidegrees) -> bool {
    (ABSOLUTE_ZERO_RAW..=CEILING_RAW).contains(&value.raw())
}

restricted_value! {
    /// Celsius temperature to 0.01 °C, from absolute zero to one million degrees.
    ///
    /// Interval scale: differences are meaningful, ratios are not, so the type
    /// offers addition and subtraction only.
    #[derive(Copy)]
    pub struct CelsiusTemperature(Centidegrees);
    level = interval;
    zero_valid = true;
    validate = is_physical;
    normalize = ::core::convert::identity;
    codec(max_text = 12, max_bytes = 12);
}

impl CelsiusTemperature {
    /// −273.15 °C.
    pub const ABSOLUTE_ZERO: CelsiusTemperature = CelsiusTemperature {
        slot: Slot::Initialized(FixedPoint::from_raw(ABSOLUTE_ZERO_RAW)),
    };
}
