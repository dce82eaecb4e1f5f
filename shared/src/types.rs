//! API request and response types
//!
//! Categorical fields arrive as raw string tags and are resolved into the
//! calculator's enums with a [`TagPolicy`].

use crate::daily_log::{DailyLog, DailyProgress, FoodEntry, LogOperation};
use crate::energy::{ActivityLevel, Sex};
use crate::errors::ValidationError;
use crate::goals::{Goal, GoalIntensity};
use crate::macros::MacroTargets;
use crate::planner::{BiometricInput, MacroPlanInput, OnboardingData};
use crate::units::{HeightUnit, WeightUnit};
use crate::validation::{resolve_tag, resolve_tag_or_default, TagPolicy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Macro Planning Requests
// ============================================================================

/// Raw tags shared by both planning requests
struct RawTags<'a> {
    sex: Option<&'a str>,
    height_unit: Option<&'a str>,
    weight_unit: Option<&'a str>,
    activity_level: Option<&'a str>,
    goal: Option<&'a str>,
    goal_intensity: Option<&'a str>,
}

/// Resolved categorical inputs
struct ResolvedTags {
    sex: Sex,
    height_unit: HeightUnit,
    weight_unit: WeightUnit,
    activity_level: ActivityLevel,
    goal: Option<Goal>,
    goal_intensity: Option<GoalIntensity>,
}

impl RawTags<'_> {
    fn resolve(&self, policy: TagPolicy) -> Result<ResolvedTags, ValidationError> {
        let sex = resolve_tag_or_default("sex", self.sex, policy)?;
        let height_unit = resolve_tag_or_default("height_unit", self.height_unit, policy)?;
        let weight_unit = resolve_tag_or_default("weight_unit", self.weight_unit, policy)?;
        let activity_level = resolve_tag_or_default("activity_level", self.activity_level, policy)?;
        let goal = resolve_tag("goal", self.goal, policy)?;

        // Only lose and build read the intensity
        let intensity_policy = match goal {
            Some(Goal::Lose | Goal::Build) => policy,
            Some(Goal::Maintain) | None => TagPolicy::Lenient,
        };
        let goal_intensity = resolve_tag("goal_intensity", self.goal_intensity, intensity_policy)?;

        Ok(ResolvedTags {
            sex,
            height_unit,
            weight_unit,
            activity_level,
            goal,
            goal_intensity,
        })
    }
}

/// Onboarding answers as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub sex: Option<String>,
    /// Height in `height_unit`; total inches when the unit is `ft`
    pub height: f64,
    #[serde(default)]
    pub height_unit: Option<String>,
    pub weight: f64,
    #[serde(default)]
    pub weight_unit: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub goal_intensity: Option<String>,
}

impl OnboardingRequest {
    fn raw_tags(&self) -> RawTags<'_> {
        RawTags {
            sex: self.sex.as_deref(),
            height_unit: self.height_unit.as_deref(),
            weight_unit: self.weight_unit.as_deref(),
            activity_level: self.activity_level.as_deref(),
            goal: self.goal.as_deref(),
            goal_intensity: self.goal_intensity.as_deref(),
        }
    }

    /// Resolve tags into typed onboarding data
    pub fn resolve(&self, policy: TagPolicy) -> Result<OnboardingData, ValidationError> {
        let tags = self.raw_tags().resolve(policy)?;
        Ok(OnboardingData {
            birth_date: self.birth_date,
            sex: tags.sex,
            height: self.height,
            height_unit: tags.height_unit,
            weight: self.weight,
            weight_unit: tags.weight_unit,
            activity_level: tags.activity_level,
            goal: tags.goal,
            goal_intensity: tags.goal_intensity,
        })
    }
}

/// Planning request when the age is already known
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacrosFromAgeRequest {
    pub age: i32,
    #[serde(default)]
    pub sex: Option<String>,
    /// Height in `height_unit`; total inches when the unit is `ft`
    pub height: f64,
    #[serde(default)]
    pub height_unit: Option<String>,
    pub weight: f64,
    #[serde(default)]
    pub weight_unit: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub goal_intensity: Option<String>,
}

impl MacrosFromAgeRequest {
    fn raw_tags(&self) -> RawTags<'_> {
        RawTags {
            sex: self.sex.as_deref(),
            height_unit: self.height_unit.as_deref(),
            weight_unit: self.weight_unit.as_deref(),
            activity_level: self.activity_level.as_deref(),
            goal: self.goal.as_deref(),
            goal_intensity: self.goal_intensity.as_deref(),
        }
    }

    /// Resolve tags into a plan input
    pub fn resolve(&self, policy: TagPolicy) -> Result<MacroPlanInput, ValidationError> {
        let tags = self.raw_tags().resolve(policy)?;
        Ok(MacroPlanInput {
            biometrics: BiometricInput {
                height_value: self.height,
                height_unit: tags.height_unit,
                weight_value: self.weight,
                weight_unit: tags.weight_unit,
                age: self.age,
                sex: tags.sex,
            },
            activity_level: tags.activity_level,
            goal: tags.goal,
            goal_intensity: tags.goal_intensity,
        })
    }
}

/// Calories derived from a macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaloriesResponse {
    pub calories: i32,
}

// ============================================================================
// Daily Log Types
// ============================================================================

/// Add or remove one food entry from a day's totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogUpdateRequest {
    /// Current totals; a fresh log is started when absent
    #[serde(default)]
    pub log: Option<DailyLog>,
    /// Day to start a fresh log for when `log` is absent
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub entry: FoodEntry,
    pub operation: LogOperation,
    /// Targets to report progress against
    #[serde(default)]
    pub targets: Option<MacroTargets>,
}

/// Updated totals and, when targets were sent, progress toward them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogResponse {
    pub log: DailyLog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<DailyProgress>,
}
