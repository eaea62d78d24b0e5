//! Units of measure for the physical quantity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit related to its quantity's base unit by a power of ten.
pub trait Unit: Copy + fmt::Debug + 'static {
    /// Base unit in which values are stored.
    const BASE: Self;

    /// Every unit, smallest first.
    fn all() -> &'static [Self];

    /// Symbol used in text (`mm`, `kg`).
    fn abbreviation(self) -> &'static str;

    /// Singular English name.
    fn name(self) -> &'static str;

    /// Power of ten converting one of this unit into base units.
    fn exponent(self) -> i32;

    /// Resolves a symbol; case-sensitive.
    fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|unit| unit.abbreviation() == abbreviation)
    }
}

/// Units of length; the base unit is the millimetre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfLength {
    /// 1 mm.
    #[serde(rename = "mm")]
    Millimetre,
    /// 10 mm.
    #[serde(rename = "cm")]
    Centimetre,
    /// 1 000 mm.
    #[serde(rename = "m")]
    Metre,
    /// 1 000 000 mm.
    #[serde(rename = "km")]
    Kilometre,
}

impl Unit for UnitOfLength {
    const BASE: Self = UnitOfLength::Millimetre;

    fn all() -> &'static [Self] {
        &[
            UnitOfLength::Millimetre,
            UnitOfLength::Centimetre,
            UnitOfLength::Metre,
            UnitOfLength::Kilometre,
        ]
    }

    fn abbreviation(self) -> &'static str {
        match self {
            UnitOfLength::Millimetre => "mm",
            UnitOfLength::Centimetre => "cm",
            UnitOfLength::Metre => "m",
            UnitOfLength::Kilometre => "km",
        }
    }

    fn name(self) -> &'static str {
        match self {
            UnitOfLength::Millimetre => "millimetre",
            UnitOfLength::Centimetre => "centimetre",
            UnitOfLength::Metre => "metre",
            UnitOfLength::Kilometre => "kilometre",
        }
    }

    fn exponent(self) -> i32 {
        match self {
            UnitOfLength::Millimetre => 0,
            UnitOfLength::Centimetre => 1,
            UnitOfLength::Metre => 3,
            UnitOfLength::Kilometre => 6,
        }
    }
}

/// Units of mass; the base unit is the gram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMass {
    /// 0.001 g.
    #[serde(rename = "mg")]
    Milligram,
    /// 1 g.
    #[serde(rename = "g")]
    Gram,
    /// 1 000 g.
    #[serde(rename = "kg")]
    Kilogram,
}

impl Unit for UnitOfMass {
    const BASE: Self = UnitOfMass::Gram;

    fn all() -> &'static [Self] {
        &[UnitOfMass::Milligram, UnitOfMass::Gram, UnitOfMass::Kilogram]
    }

    fn abbreviation(self) -> &'static str {
        match self {
            UnitOfMass::Milligram => "mg",
            UnitOfMass::Gram => "g",
            UnitOfMass::Kilogram => "kg",
        }
    }

    fn name(self) -> &'static str {
        match self {
            UnitOfMass::Milligram => "milligram",
            UnitOfMass::Gram => "gram",
            UnitOfMass::Kilogram => "kilogram",
        }
    }

    fn exponent(self) -> i32 {
        match self {
            UnitOfMass::Milligram => -3,
            UnitOfMass::Gram => 0,
            UnitOfMass::Kilogram => 3,
        }
    }
}

impl fmt::Display for UnitOfLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl fmt::Display for UnitOfMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
