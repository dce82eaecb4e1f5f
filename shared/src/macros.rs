//! Macronutrient distribution
//!
//! Splits a calorie target into protein, fat and carbohydrate grams, and the
//! inverse used by manual macro entry. The rounding order here is part of the
//! contract: targets already stored for existing users were produced with it,
//! so `protein*4 + carbs*4 + fats*9` may drift a couple of kcal from
//! `calories`.

use serde::{Deserialize, Serialize};

/// Energy per gram of protein (kcal)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy per gram of carbohydrate (kcal)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy per gram of fat (kcal)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Protein allowance per kilogram of body weight (g/kg)
pub const PROTEIN_GRAMS_PER_KG: f64 = 2.0;

/// Share of calories allocated to fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Round half-way cases toward positive infinity
///
/// Matches the rounding the mobile client has always used (`-2.5` rounds to
/// `-2`, `2.5` to `3`), which differs from [`f64::round`] for negative halves.
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Daily calories (kcal)
    pub calories: i32,
    /// Protein (g)
    pub protein: i32,
    /// Carbohydrates (g)
    pub carbs: i32,
    /// Fat (g)
    pub fats: i32,
    /// Maintenance calories before the goal adjustment, for display
    #[serde(rename = "baseTDEE", default, skip_serializing_if = "Option::is_none")]
    pub base_tdee: Option<i32>,
}

impl MacroTargets {
    /// Calories implied by the gram split
    pub fn calories_from_split(&self) -> i32 {
        calculate_calories_from_macros(self.protein as f64, self.carbs as f64, self.fats as f64)
    }

    /// Difference between the split's calories and the stored target
    ///
    /// Widened to `i64` so extreme hand-entered values cannot overflow.
    pub fn rounding_drift(&self) -> i64 {
        i64::from(self.calories_from_split()) - i64::from(self.calories)
    }
}

/// Gram split for a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
    /// True when protein and fat alone exceeded the target and carbs were
    /// clamped to zero
    pub carbs_clamped: bool,
}

/// Distribute a calorie target across protein, fat and carbs
///
/// Protein is 2 g per kg of body weight, fat is a quarter of the calories,
/// and carbs take whatever remains (never below zero).
pub fn distribute_macros(calories: i32, weight_kg: f64) -> MacroSplit {
    let protein = round_half_up(weight_kg * PROTEIN_GRAMS_PER_KG);
    let fat_calories = round_half_up(calories as f64 * FAT_CALORIE_SHARE);
    let fats = round_half_up(fat_calories as f64 / KCAL_PER_GRAM_FAT);

    let remaining = calories as f64
        - protein as f64 * KCAL_PER_GRAM_PROTEIN
        - fats as f64 * KCAL_PER_GRAM_FAT;
    let carbs = round_half_up(remaining / KCAL_PER_GRAM_CARBS);

    MacroSplit {
        protein,
        carbs: carbs.max(0),
        fats,
        carbs_clamped: carbs < 0,
    }
}

/// Calories for a gram split: `round(4p + 4c + 9f)`
pub fn calculate_calories_from_macros(protein: f64, carbs: f64, fats: f64) -> i32 {
    round_half_up(
        protein * KCAL_PER_GRAM_PROTEIN + carbs * KCAL_PER_GRAM_CARBS + fats * KCAL_PER_GRAM_FAT,
    )
}

/// Macro grams entered by hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManualMacros {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Build targets from hand-entered grams, deriving calories
///
/// Calories are computed from the grams as entered; the grams themselves are
/// rounded to whole numbers for the returned targets.
pub fn generate_manual_macros(manual: &ManualMacros) -> MacroTargets {
    MacroTargets {
        calories: calculate_calories_from_macros(manual.protein, manual.carbs, manual.fats),
        protein: round_half_up(manual.protein),
        carbs: round_half_up(manual.carbs),
        fats: round_half_up(manual.fats),
        base_tdee: None,
    }
}
