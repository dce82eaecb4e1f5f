//! Energy expenditure calculations
//!
//! Basal metabolic rate (Mifflin-St Jeor) and total daily energy expenditure
//! (BMR scaled by an activity multiplier).
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no side effects, no rounding at this stage
//! 2. **Closed Inputs**: every categorical input is an enum, never a string

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Sex
// ============================================================================

/// Sex as collected during onboarding
///
/// Only `Male` gets the male Mifflin-St Jeor offset. `Female`, `Other` and
/// `Unspecified` all use the female offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
    /// Onboarding left the field blank (`""`)
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl Sex {
    /// Additive Mifflin-St Jeor constant for this sex
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female | Sex::Other | Sex::Unspecified => -161.0,
        }
    }

    /// Get the client tag
    pub fn tag(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
            Sex::Unspecified => "",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            "other" => Ok(Sex::Other),
            "" => Ok(Sex::Unspecified),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Lightly,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Very,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Lightly => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Very => 1.725,
        }
    }

    /// Get the client tag
    pub fn tag(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Lightly => "lightly",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Very => "very",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly" => Ok(ActivityLevel::Lightly),
            "moderate" => Ok(ActivityLevel::Moderate),
            "very" => Ok(ActivityLevel::Very),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + offset,
/// where offset is +5 for male and -161 otherwise.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64 + sex.bmr_offset()
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// BMR/TDEE result with breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
}

/// Estimate BMR and TDEE from normalized biometrics
pub fn estimate_energy(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
    activity_level: ActivityLevel,
) -> EnergyEstimate {
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, sex);
    EnergyEstimate {
        bmr,
        activity_multiplier: activity_level.multiplier(),
        tdee: calculate_tdee(bmr, activity_level),
    }
}
