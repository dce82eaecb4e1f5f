//! Categorical input resolution
//!
//! Clients send units, sex, activity level and goal as string tags. The
//! calculator itself only accepts closed enums, so every tag passes through
//! here first. Under the default lenient policy an unknown or missing tag
//! falls back to its documented default (metric, sedentary, maintenance,
//! unspecified sex) and the fallback is logged. The strict policy rejects
//! the same input instead.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// How unknown or missing tags are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Fall back to the default value
    #[default]
    Lenient,
    /// Reject with a [`ValidationError`]
    Strict,
}

impl TagPolicy {
    /// Select the policy from a strictness flag
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            TagPolicy::Strict
        } else {
            TagPolicy::Lenient
        }
    }
}

/// Resolve an optional tag
///
/// Returns `Ok(None)` when a lenient fallback was taken. An empty string
/// counts as missing unless the target type accepts it.
pub fn resolve_tag<T: FromStr>(
    field: &'static str,
    raw: Option<&str>,
    policy: TagPolicy,
) -> Result<Option<T>, ValidationError> {
    let Some(raw) = raw else {
        return missing(field, policy);
    };

    match raw.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) if raw.is_empty() => missing(field, policy),
        Err(_) => match policy {
            TagPolicy::Strict => Err(ValidationError::UnknownTag {
                field,
                value: raw.to_string(),
            }),
            TagPolicy::Lenient => {
                debug!(field, value = raw, "Unknown tag, falling back to default");
                Ok(None)
            }
        },
    }
}

/// Resolve a tag, substituting the type's default on a lenient fallback
pub fn resolve_tag_or_default<T: FromStr + Default>(
    field: &'static str,
    raw: Option<&str>,
    policy: TagPolicy,
) -> Result<T, ValidationError> {
    resolve_tag(field, raw, policy).map(Option::unwrap_or_default)
}

fn missing<T>(field: &'static str, policy: TagPolicy) -> Result<Option<T>, ValidationError> {
    match policy {
        TagPolicy::Strict => Err(ValidationError::MissingField(field)),
        TagPolicy::Lenient => {
            debug!(field, "Missing tag, falling back to default");
            Ok(None)
        }
    }
}

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "sex" => "Sex",
        "height_unit" => "Height Unit",
        "weight_unit" => "Weight Unit",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "goal_intensity" => "Goal Intensity",
        "birth_date" => "Birth Date",
        _ => field_name,
    }
}
