//! Concrete restricted value types.
//!
//! Each type is declared with [`restricted_core::restricted_value!`] and
//! states its representation, measurement level, validity predicate and
//! whether its zero representation is valid:
//!
//! | Type | Level | Zero valid |
//! |------|-------|-----------|
//! | [`CountryCode`] | nominal | no |
//! | [`AlphaNumericCode`] | ordinal | no |
//! | [`AsciiToken`] | nominal | no |
//! | [`Tag`] | nominal | no |
//! | [`Identifier`] | nominal | no |
//! | [`Count`] | ratio | yes |
//! | [`LikertScore`] | ordinal | no |
//! | [`CelsiusTemperature`] | interval | yes |
//! | [`Length`] | ratio | yes |
//! | [`Mass`] | ratio | yes |
//!
#![deny(missing_docs)]

/// Codes, tokens and tags over ASCII text.
pub mod codes;
/// ISO 3166-1 country codes.
pub mod country;
/// Counts and Likert scores.
pub mod counts;
/// Prefixed opaque identifiers.
pub mod identifier;
/// Physical quantities with units.
pub mod quantities;
/// Celsius temperatures.
pub mod temperature;
/// Units of measure.
pub mod units;

pub use codes::{AlphaNumericCode, AsciiToken, Tag};
pub use country::CountryCode;
pub use counts::{Count, LikertScore, COUNT_MAX};
pub use identifier::Identifier;
pub use quantities::{Length, Mass};
pub use temperature::CelsiusTemperature;
pub use units::{Unit, UnitOfLength, UnitOfMass};
