//! Daily log service - running food log totals

use crate::error::ApiError;
use macrotrack_shared::types::{DailyLogResponse, DailyLogUpdateRequest};
use macrotrack_shared::DailyLog;
use tracing::debug;

/// Daily log service
pub struct DailyLogService;

impl DailyLogService {
    /// Apply one add/remove to the day's totals
    ///
    /// Starts a fresh log when the request carries none, which requires a
    /// date.
    pub fn apply(req: DailyLogUpdateRequest) -> Result<DailyLogResponse, ApiError> {
        let mut log = match (req.log, req.date) {
            (Some(log), _) => log,
            (None, Some(date)) => DailyLog::new(date),
            (None, None) => {
                return Err(ApiError::BadRequest(
                    "Either an existing log or a date is required".to_string(),
                ))
            }
        };

        log.apply(req.operation, &req.entry);
        debug!(
            date = %log.date,
            operation = ?req.operation,
            calories = log.calories,
            "Updated daily log"
        );

        let progress = req.targets.map(|targets| log.progress(&targets));
        Ok(DailyLogResponse { log, progress })
    }
}
