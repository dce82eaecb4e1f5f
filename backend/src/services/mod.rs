//! Business logic services
//!
//! Services resolve request inputs and coordinate calls into the shared
//! calculator.

pub mod daily_log;
pub mod macros;

pub use daily_log::DailyLogService;
pub use macros::MacroService;
