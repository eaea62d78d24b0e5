//! Counts and ordinal scores.

use restricted_core::{restricted_value, Slot};

/// Largest [`Count`].
pub const COUNT_MAX: u64 = 999_999_999_999_999;

fn is_count(value: &u64) -> bool {
    *value <= COUNT_MAX
}

fn is_likert(value: &u8) -> bool {
    (1..=5).contains(value)
}

restricted_value! {
    /// Non-negative count of up to 15 digits. Zero is a valid count.
    #[derive(Copy)]
    pub struct Count(u64);
    level = ratio;
    zero_valid = true;
    validate = is_count;
    normalize = ::core::convert::identity;
    codec(max_text = 15, max_bytes = 15);
}

impl Count {
    /// The zero count.
    pub const ZERO: Count = Count {
        slot: Slot::Initialized(0),
    };
}

restricted_value! {
    /// Five-point Likert response, 1 (strongly disagree) to 5 (strongly agree).
    #[derive(Copy)]
    pub struct LikertScore(u8);
    level = ordinal;
    zero_valid = false;
    validate = is_likert;
    normalize = ::core::convert::identity;
    codec(max_text = 1, max_bytes = 1);
}
