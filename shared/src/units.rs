//! Unit conversion and normalization module
//!
//! Onboarding collects height and weight in whatever unit the user picked.
//! Everything downstream (BMR, macro distribution) works in centimeters and
//! kilograms, so values are normalized here before any math happens.
//!
//! The imperial height tag is `"ft"`, but the value that travels with it is
//! *total inches*. Collapsing a feet/inches picker into inches is the caller's
//! job (see [`FeetInchesHeight`]); [`height_to_cm`] never decomposes feet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit tag sent by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
        }
    }

    /// Get the unit tag
    pub fn tag(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(WeightUnit::Kg),
            "lbs" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Height unit tag sent by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    /// Imperial height; the accompanying value is total inches
    Ft,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Ft => value * CM_PER_INCH,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Ft => cm / CM_PER_INCH,
        }
    }

    /// Get the unit tag
    pub fn tag(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Ft => "ft",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(HeightUnit::Cm),
            "ft" => Ok(HeightUnit::Ft),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

/// Normalize a height value to centimeters
pub fn height_to_cm(value: f64, unit: HeightUnit) -> f64 {
    unit.to_cm(value)
}

/// Normalize a weight value to kilograms
pub fn weight_to_kg(value: f64, unit: WeightUnit) -> f64 {
    unit.to_kg(value)
}

// ============================================================================
// Height Picker Helper
// ============================================================================

/// Height as entered on a feet/inches picker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Create from total inches
    pub fn from_total_inches(total_inches: f64) -> Self {
        let feet = (total_inches / 12.0).floor() as i32;
        let inches = total_inches - feet as f64 * 12.0;
        Self { feet, inches }
    }

    /// Collapse into the total-inches value expected alongside [`HeightUnit::Ft`]
    pub fn to_total_inches(&self) -> f64 {
        (self.feet as f64 * 12.0) + self.inches
    }

    /// Create from centimeters
    pub fn from_cm(cm: f64) -> Self {
        Self::from_total_inches(cm / CM_PER_INCH)
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        height_to_cm(self.to_total_inches(), HeightUnit::Ft)
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}
