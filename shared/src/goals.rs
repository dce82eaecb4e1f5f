//! Goal-specific calorie targets
//!
//! Turns maintenance calories (TDEE) into a daily target for the user's goal
//! and intensity, then applies the weight-loss safety floor.

use crate::energy::Sex;
use crate::macros::round_half_up;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest weight-loss target for male users (kcal)
pub const MALE_CALORIE_FLOOR: i32 = 1500;

/// Lowest weight-loss target for everyone else (kcal)
pub const DEFAULT_CALORIE_FLOOR: i32 = 1200;

/// Body-weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Build,
}

/// How far from maintenance the target moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalIntensity {
    Mild,
    Moderate,
    Aggressive,
}

/// Transform applied to TDEE for a goal/intensity pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalorieAdjustment {
    /// Keep maintenance calories
    Identity,
    /// Multiply TDEE by a factor
    Scale(f64),
    /// Add a fixed surplus in kcal
    Surplus(f64),
}

impl CalorieAdjustment {
    /// Apply the transform to an unrounded TDEE
    pub fn apply(&self, tdee: f64) -> f64 {
        match self {
            CalorieAdjustment::Identity => tdee,
            CalorieAdjustment::Scale(factor) => tdee * factor,
            CalorieAdjustment::Surplus(kcal) => tdee + kcal,
        }
    }
}

impl Goal {
    /// Look up the adjustment for this goal at the given intensity
    pub fn adjustment(&self, intensity: GoalIntensity) -> CalorieAdjustment {
        match (self, intensity) {
            (Goal::Lose, GoalIntensity::Mild) => CalorieAdjustment::Scale(0.90),
            (Goal::Lose, GoalIntensity::Moderate) => CalorieAdjustment::Scale(0.80),
            (Goal::Lose, GoalIntensity::Aggressive) => CalorieAdjustment::Scale(0.75),
            (Goal::Maintain, _) => CalorieAdjustment::Identity,
            (Goal::Build, GoalIntensity::Mild) => CalorieAdjustment::Surplus(200.0),
            (Goal::Build, GoalIntensity::Moderate) => CalorieAdjustment::Surplus(350.0),
            (Goal::Build, GoalIntensity::Aggressive) => CalorieAdjustment::Surplus(500.0),
        }
    }

    /// Get the client tag
    pub fn tag(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Build => "build",
        }
    }
}

impl GoalIntensity {
    /// Get the client tag
    pub fn tag(&self) -> &'static str {
        match self {
            GoalIntensity::Mild => "mild",
            GoalIntensity::Moderate => "moderate",
            GoalIntensity::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl fmt::Display for GoalIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "build" => Ok(Goal::Build),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

impl std::str::FromStr for GoalIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(GoalIntensity::Mild),
            "moderate" => Ok(GoalIntensity::Moderate),
            "aggressive" => Ok(GoalIntensity::Aggressive),
            _ => Err(format!("Unknown goal intensity: {}", s)),
        }
    }
}

/// Minimum daily calories allowed for a weight-loss goal
pub fn calorie_floor(sex: Sex) -> i32 {
    match sex {
        Sex::Male => MALE_CALORIE_FLOOR,
        Sex::Female | Sex::Other | Sex::Unspecified => DEFAULT_CALORIE_FLOOR,
    }
}

/// Goal-adjusted calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTarget {
    /// Daily calorie target (kcal)
    pub calories: i32,
    /// True when the weight-loss floor raised the target
    pub floor_applied: bool,
}

/// Adjust TDEE for a goal and intensity
///
/// A missing goal or intensity yields `round(TDEE)`. The weight-loss floor
/// is keyed on the goal alone, so `Lose` without an intensity is still
/// floored.
pub fn adjust_for_goal(
    tdee: f64,
    goal: Option<Goal>,
    intensity: Option<GoalIntensity>,
    sex: Sex,
) -> GoalTarget {
    let adjustment = match (goal, intensity) {
        (Some(goal), Some(intensity)) => goal.adjustment(intensity),
        _ => CalorieAdjustment::Identity,
    };
    let calories = round_half_up(adjustment.apply(tdee));

    if goal == Some(Goal::Lose) {
        let floor = calorie_floor(sex);
        if calories < floor {
            return GoalTarget {
                calories: floor,
                floor_applied: true,
            };
        }
    }

    GoalTarget {
        calories,
        floor_applied: false,
    }
}

/// Daily calorie target for a goal and intensity
pub fn target_calories(
    tdee: f64,
    goal: Option<Goal>,
    intensity: Option<GoalIntensity>,
    sex: Sex,
) -> i32 {
    adjust_for_goal(tdee, goal, intensity, sex).calories
}
