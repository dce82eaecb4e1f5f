//! Macrotrack WASM Module
//!
//! WebAssembly bindings so the browser client can compute targets offline
//! with the same rules as the backend. Categorical inputs are raw string
//! tags resolved with the lenient policy; structured results come back as
//! JSON strings.

use chrono::NaiveDate;
use macrotrack_shared::types::{MacrosFromAgeRequest, OnboardingRequest};
use macrotrack_shared::validation::resolve_tag_or_default;
use macrotrack_shared::{
    calculate_macro_breakdown, FeetInchesHeight, HeightUnit, ManualMacros, TagPolicy, WeightUnit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    Ok(serde_json::to_string(value)?)
}

/// Calories for a macro split in grams
#[wasm_bindgen]
pub fn calculate_calories_from_macros(protein: f64, carbs: f64, fats: f64) -> i32 {
    macrotrack_shared::calculate_calories_from_macros(protein, carbs, fats)
}

/// Targets from hand-entered grams, as JSON
#[wasm_bindgen]
pub fn generate_manual_macros(protein: f64, carbs: f64, fats: f64) -> Result<String, JsError> {
    let targets = macrotrack_shared::generate_manual_macros(&ManualMacros {
        protein,
        carbs,
        fats,
    });
    to_json(&targets)
}

/// Targets for a known age
///
/// `request` is a JSON `MacrosFromAgeRequest` (camelCase keys).
#[wasm_bindgen]
pub fn generate_daily_macros_from_age(request: &str) -> Result<String, JsError> {
    let req: MacrosFromAgeRequest = serde_json::from_str(request)?;
    let input = req.resolve(TagPolicy::Lenient)?;
    to_json(&macrotrack_shared::plan_daily_macros(&input))
}

/// Targets with every intermediate value, as JSON
#[wasm_bindgen]
pub fn macro_breakdown(request: &str) -> Result<String, JsError> {
    let req: MacrosFromAgeRequest = serde_json::from_str(request)?;
    let input = req.resolve(TagPolicy::Lenient)?;
    to_json(&calculate_macro_breakdown(&input))
}

/// Targets from onboarding answers
///
/// `today` is an ISO date (`YYYY-MM-DD`) so the caller's local calendar
/// decides the age.
#[wasm_bindgen]
pub fn generate_daily_macros(request: &str, today: &str) -> Result<String, JsError> {
    let req: OnboardingRequest = serde_json::from_str(request)?;
    let today: NaiveDate = today.parse()?;
    let data = req.resolve(TagPolicy::Lenient)?;
    to_json(&macrotrack_shared::generate_daily_macros(&data, today))
}

/// Height in centimeters; unknown units are treated as `cm`
#[wasm_bindgen]
pub fn height_to_cm(value: f64, unit: &str) -> f64 {
    let unit: HeightUnit =
        resolve_tag_or_default("height_unit", Some(unit), TagPolicy::Lenient).unwrap_or_default();
    macrotrack_shared::height_to_cm(value, unit)
}

/// Weight in kilograms; unknown units are treated as `kg`
#[wasm_bindgen]
pub fn weight_to_kg(value: f64, unit: &str) -> f64 {
    let unit: WeightUnit =
        resolve_tag_or_default("weight_unit", Some(unit), TagPolicy::Lenient).unwrap_or_default();
    macrotrack_shared::weight_to_kg(value, unit)
}

/// Total inches for a feet + inches height picker
#[wasm_bindgen]
pub fn feet_inches_to_inches(feet: i32, inches: f64) -> f64 {
    FeetInchesHeight { feet, inches }.to_total_inches()
}
