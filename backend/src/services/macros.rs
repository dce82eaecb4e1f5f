//! Macro service - business logic for daily target planning

use crate::error::ApiError;
use macrotrack_shared::types::{MacrosFromAgeRequest, OnboardingRequest};
use macrotrack_shared::{
    calculate_calories_from_macros, calculate_macro_breakdown, generate_daily_macros_today,
    generate_manual_macros, MacroBreakdown, MacroTargets, ManualMacros, TagPolicy,
};
use tracing::{debug, info};

/// Macro planning service
pub struct MacroService;

impl MacroService {
    /// Plan targets from onboarding answers
    ///
    /// Age is taken from `birthDate` as of the current UTC date.
    pub fn generate_daily(
        req: &OnboardingRequest,
        policy: TagPolicy,
    ) -> Result<MacroTargets, ApiError> {
        let data = req.resolve(policy)?;
        let targets = generate_daily_macros_today(&data);

        info!(
            calories = targets.calories,
            base_tdee = ?targets.base_tdee,
            goal = ?data.goal,
            "Generated daily macros from onboarding"
        );
        Ok(targets)
    }

    /// Plan targets when the age is already known
    pub fn generate_from_age(
        req: &MacrosFromAgeRequest,
        policy: TagPolicy,
    ) -> Result<MacroTargets, ApiError> {
        Ok(Self::breakdown(req, policy)?.targets)
    }

    /// Plan targets and keep every intermediate value
    pub fn breakdown(
        req: &MacrosFromAgeRequest,
        policy: TagPolicy,
    ) -> Result<MacroBreakdown, ApiError> {
        let input = req.resolve(policy)?;
        let breakdown = calculate_macro_breakdown(&input);

        debug!(
            bmr = breakdown.bmr,
            tdee = breakdown.tdee,
            target_calories = breakdown.target_calories,
            "Calculated macro breakdown"
        );
        if breakdown.floor_applied {
            info!(
                calories = breakdown.target_calories,
                "Weight-loss target raised to calorie floor"
            );
        }
        if breakdown.carbs_clamped {
            info!(
                calories = breakdown.target_calories,
                protein = breakdown.targets.protein,
                fats = breakdown.targets.fats,
                "Protein and fat exceed target calories, carbs clamped to zero"
            );
        }
        Ok(breakdown)
    }

    /// Targets from hand-entered macro grams
    pub fn manual(manual: &ManualMacros) -> MacroTargets {
        let targets = generate_manual_macros(manual);
        debug!(calories = targets.calories, "Generated manual macros");
        targets
    }

    /// Calories for a macro split
    pub fn calories(manual: &ManualMacros) -> i32 {
        calculate_calories_from_macros(manual.protein, manual.carbs, manual.fats)
    }
}
