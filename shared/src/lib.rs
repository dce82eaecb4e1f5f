//! Macrotrack Shared Library
//!
//! Daily calorie and macro target calculation shared by the backend and
//! the WASM module: unit normalization, BMR/TDEE, goal adjustment, macro
//! distribution, plus the request types and daily log totals built on them.

pub mod daily_log;
pub mod energy;
pub mod errors;
pub mod goals;
pub mod macros;
pub mod planner;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use daily_log::{DailyLog, DailyProgress, FoodEntry, LogOperation, MacroProgress};
pub use energy::*;
pub use errors::*;
pub use goals::*;
pub use macros::*;
pub use planner::*;
pub use units::*;
pub use validation::TagPolicy;
