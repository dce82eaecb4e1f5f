//! Daily macro plan orchestration
//!
//! Composes unit normalization, BMR/TDEE, the goal adjustment and the macro
//! distribution into the entry points the onboarding and results screens
//! call. Every function here is a single pure pass over its arguments.

use crate::energy::{estimate_energy, ActivityLevel, Sex};
use crate::goals::{adjust_for_goal, Goal, GoalIntensity};
use crate::macros::{distribute_macros, round_half_up, MacroTargets};
use crate::units::{height_to_cm, weight_to_kg, HeightUnit, WeightUnit};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Height, weight, age and sex as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricInput {
    pub height_value: f64,
    pub height_unit: HeightUnit,
    pub weight_value: f64,
    pub weight_unit: WeightUnit,
    pub age: i32,
    pub sex: Sex,
}

/// Everything needed to plan daily targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPlanInput {
    pub biometrics: BiometricInput,
    pub activity_level: ActivityLevel,
    /// `None` plans for maintenance
    pub goal: Option<Goal>,
    /// `None` plans for maintenance
    pub goal_intensity: Option<GoalIntensity>,
}

/// Onboarding answers, with a birth date instead of an age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub height: f64,
    pub height_unit: HeightUnit,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub activity_level: ActivityLevel,
    pub goal: Option<Goal>,
    pub goal_intensity: Option<GoalIntensity>,
}

/// Every intermediate value of a plan, for display and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroBreakdown {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub tdee: f64,
    pub target_calories: i32,
    pub floor_applied: bool,
    pub carbs_clamped: bool,
    pub targets: MacroTargets,
}

/// Age in whole years on `today`
///
/// One year is subtracted when this year's birthday has not happened yet.
/// A birth date after `today` gives a negative age.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Run the full pipeline and keep every intermediate value
pub fn calculate_macro_breakdown(input: &MacroPlanInput) -> MacroBreakdown {
    let bio = &input.biometrics;
    let height_cm = height_to_cm(bio.height_value, bio.height_unit);
    let weight_kg = weight_to_kg(bio.weight_value, bio.weight_unit);

    let energy = estimate_energy(weight_kg, height_cm, bio.age, bio.sex, input.activity_level);
    let goal_target = adjust_for_goal(energy.tdee, input.goal, input.goal_intensity, bio.sex);
    let split = distribute_macros(goal_target.calories, weight_kg);

    MacroBreakdown {
        height_cm,
        weight_kg,
        bmr: energy.bmr,
        activity_multiplier: energy.activity_multiplier,
        tdee: energy.tdee,
        target_calories: goal_target.calories,
        floor_applied: goal_target.floor_applied,
        carbs_clamped: split.carbs_clamped,
        targets: MacroTargets {
            calories: goal_target.calories,
            protein: split.protein,
            carbs: split.carbs,
            fats: split.fats,
            base_tdee: Some(round_half_up(energy.tdee)),
        },
    }
}

/// Plan daily targets from a plan input
pub fn plan_daily_macros(input: &MacroPlanInput) -> MacroTargets {
    calculate_macro_breakdown(input).targets
}

/// Plan daily targets when the age is already known
#[allow(clippy::too_many_arguments)]
pub fn generate_daily_macros_from_age(
    age: i32,
    sex: Sex,
    height: f64,
    height_unit: HeightUnit,
    weight: f64,
    weight_unit: WeightUnit,
    activity_level: ActivityLevel,
    goal: Option<Goal>,
    goal_intensity: Option<GoalIntensity>,
) -> MacroTargets {
    plan_daily_macros(&MacroPlanInput {
        biometrics: BiometricInput {
            height_value: height,
            height_unit,
            weight_value: weight,
            weight_unit,
            age,
            sex,
        },
        activity_level,
        goal,
        goal_intensity,
    })
}

impl OnboardingData {
    /// Convert to a plan input using the age on `today`
    pub fn to_plan_input(&self, today: NaiveDate) -> MacroPlanInput {
        MacroPlanInput {
            biometrics: BiometricInput {
                height_value: self.height,
                height_unit: self.height_unit,
                weight_value: self.weight,
                weight_unit: self.weight_unit,
                age: age_on(self.birth_date, today),
                sex: self.sex,
            },
            activity_level: self.activity_level,
            goal: self.goal,
            goal_intensity: self.goal_intensity,
        }
    }
}

/// Plan daily targets from onboarding answers, computing age as of `today`
pub fn generate_daily_macros(data: &OnboardingData, today: NaiveDate) -> MacroTargets {
    plan_daily_macros(&data.to_plan_input(today))
}

/// [`generate_daily_macros`] against the current UTC date
pub fn generate_daily_macros_today(data: &OnboardingData) -> MacroTargets {
    generate_daily_macros(data, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference_input(goal: Goal, intensity: GoalIntensity) -> MacroPlanInput {
        MacroPlanInput {
            biometrics: BiometricInput {
                height_value: 180.0,
                height_unit: HeightUnit::Cm,
                weight_value: 80.0,
                weight_unit: WeightUnit::Kg,
                age: 30,
                sex: Sex::Male,
            },
            activity_level: ActivityLevel::Moderate,
            goal: Some(goal),
            goal_intensity: Some(intensity),
        }
    }

    #[test]
    fn test_reference_lose_moderate() {
        let breakdown = calculate_macro_breakdown(&reference_input(Goal::Lose, GoalIntensity::Moderate));
        assert!((breakdown.bmr - 1780.0).abs() < 1e-9);
        assert!((breakdown.tdee - 2759.0).abs() < 1e-6);
        assert!(!breakdown.floor_applied);
        assert_eq!(
            breakdown.targets,
            MacroTargets {
                calories: 2207,
                protein: 160,
                carbs: 255,
                fats: 61,
                base_tdee: Some(2759),
            }
        );
    }

    #[test]
    fn test_reference_build_aggressive() {
        let targets = plan_daily_macros(&reference_input(Goal::Build, GoalIntensity::Aggressive));
        assert_eq!(
            targets,
            MacroTargets {
                calories: 3259,
                protein: 160,
                carbs: 450,
                fats: 91,
                base_tdee: Some(2759),
            }
        );
    }

    #[test]
    fn test_from_age_matches_plan() {
        let targets = generate_daily_macros_from_age(
            30,
            Sex::Male,
            180.0,
            HeightUnit::Cm,
            80.0,
            WeightUnit::Kg,
            ActivityLevel::Moderate,
            Some(Goal::Lose),
            Some(GoalIntensity::Moderate),
        );
        assert_eq!(targets.calories, 2207);
        assert_eq!(targets.carbs, 255);
    }

    #[test]
    fn test_imperial_inputs_normalize() {
        let metric = generate_daily_macros_from_age(
            40,
            Sex::Female,
            177.8,
            HeightUnit::Cm,
            45.3592,
            WeightUnit::Kg,
            ActivityLevel::Lightly,
            Some(Goal::Maintain),
            Some(GoalIntensity::Mild),
        );
        let imperial = generate_daily_macros_from_age(
            40,
            Sex::Female,
            70.0,
            HeightUnit::Ft,
            100.0,
            WeightUnit::Lbs,
            ActivityLevel::Lightly,
            Some(Goal::Maintain),
            Some(GoalIntensity::Mild),
        );
        assert_eq!(metric, imperial);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(1994, 6, 15);
        assert_eq!(age_on(birth, date(2024, 6, 14)), 29);
        assert_eq!(age_on(birth, date(2024, 6, 15)), 30);
        assert_eq!(age_on(birth, date(2024, 12, 1)), 30);
        assert_eq!(age_on(birth, date(2024, 1, 20)), 29);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let birth = date(2000, 2, 29);
        assert_eq!(age_on(birth, date(2023, 2, 28)), 22);
        assert_eq!(age_on(birth, date(2023, 3, 1)), 23);
    }

    #[test]
    fn test_onboarding_uses_birth_date() {
        let data = OnboardingData {
            birth_date: date(1994, 6, 15),
            sex: Sex::Male,
            height: 180.0,
            height_unit: HeightUnit::Cm,
            weight: 80.0,
            weight_unit: WeightUnit::Kg,
            activity_level: ActivityLevel::Moderate,
            goal: Some(Goal::Lose),
            goal_intensity: Some(GoalIntensity::Moderate),
        };
        // Turned 30 that day
        let on_birthday = generate_daily_macros(&data, date(2024, 6, 15));
        assert_eq!(on_birthday.calories, 2207);

        // Still 29 the day before: BMR is 5 kcal higher
        let day_before = calculate_macro_breakdown(&data.to_plan_input(date(2024, 6, 14)));
        assert!((day_before.bmr - 1785.0).abs() < 1e-9);
    }

    #[test]
    fn test_today_helper_matches_explicit_date() {
        let data = OnboardingData {
            birth_date: date(1990, 1, 1),
            sex: Sex::Female,
            height: 165.0,
            height_unit: HeightUnit::Cm,
            weight: 60.0,
            weight_unit: WeightUnit::Kg,
            activity_level: ActivityLevel::Lightly,
            goal: Some(Goal::Build),
            goal_intensity: Some(GoalIntensity::Moderate),
        };
        let before = Utc::now().date_naive();
        let targets = generate_daily_macros_today(&data);
        let after = Utc::now().date_naive();
        // Tolerates the clock crossing midnight between the calls
        assert!(
            targets == generate_daily_macros(&data, before)
                || targets == generate_daily_macros(&data, after)
        );
    }

    #[test]
    fn test_missing_goal_plans_maintenance() {
        let mut input = reference_input(Goal::Lose, GoalIntensity::Mild);
        input.goal = None;
        let targets = plan_daily_macros(&input);
        assert_eq!(targets.calories, 2759);
        assert_eq!(targets.base_tdee, Some(2759));
    }

    #[test]
    fn test_floor_and_clamp_reported() {
        let input = MacroPlanInput {
            biometrics: BiometricInput {
                height_value: 150.0,
                height_unit: HeightUnit::Cm,
                weight_value: 200.0,
                weight_unit: WeightUnit::Kg,
                age: 90,
                sex: Sex::Other,
            },
            activity_level: ActivityLevel::Sedentary,
            goal: Some(Goal::Lose),
            goal_intensity: Some(GoalIntensity::Aggressive),
        };
        let breakdown = calculate_macro_breakdown(&input);
        // BMR 2000 + 937.5 - 450 - 161 = 2326.5, TDEE 2791.8, x0.75 = 2093.85
        assert_eq!(breakdown.target_calories, 2094);
        assert!(!breakdown.floor_applied);
        // 400 g protein is 1600 kcal and 58 g fat another 522 -> carbs clamp
        assert_eq!(breakdown.targets.protein, 400);
        assert_eq!(breakdown.targets.fats, 58);
        assert_eq!(breakdown.targets.carbs, 0);
        assert!(breakdown.carbs_clamped);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: auto-distributed targets recompute to their calories
        /// within 2 kcal unless carbs were clamped
        #[test]
        fn prop_targets_consistent(
            weight in 45.0f64..130.0,
            height in 150.0f64..200.0,
            age in 18i32..70,
        ) {
            let input = MacroPlanInput {
                biometrics: BiometricInput {
                    height_value: height,
                    height_unit: HeightUnit::Cm,
                    weight_value: weight,
                    weight_unit: WeightUnit::Kg,
                    age,
                    sex: Sex::Female,
                },
                activity_level: ActivityLevel::Very,
                goal: Some(Goal::Build),
                goal_intensity: Some(GoalIntensity::Mild),
            };
            let breakdown = calculate_macro_breakdown(&input);
            prop_assume!(!breakdown.carbs_clamped);
            let t = breakdown.targets;
            prop_assert!(t.rounding_drift().abs() <= 2);
            prop_assert!(t.carbs >= 0);
        }
    }
}
