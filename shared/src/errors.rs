//! Error types for the macro planner

use crate::validation::get_field_display_label;
use thiserror::Error;

/// Rejected calculator input
///
/// Only produced under [`TagPolicy::Strict`](crate::validation::TagPolicy);
/// the lenient policy falls back to defaults instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}: unknown value '{}'", get_field_display_label(.field), .value)]
    UnknownTag { field: &'static str, value: String },

    #[error("{} is required", get_field_display_label(.0))]
    MissingField(&'static str),
}

impl ValidationError {
    /// Technical name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::UnknownTag { field, .. } => field,
            ValidationError::MissingField(field) => field,
        }
    }
}
