//! Running daily food log totals
//!
//! Logging a food entry increments the day's totals and deleting it
//! decrements them again. Totals are kept as they arrive (no rounding) and
//! never drop below zero.

use crate::macros::MacroTargets;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nutrition of one logged food entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FoodEntry {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Whether an entry is being added to or removed from the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOperation {
    Add,
    Remove,
}

/// Consumed totals for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl DailyLog {
    /// Empty log for a day
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    }

    /// Add an entry to the totals, stopping at zero
    ///
    /// Entries with negative values and logs that arrive negative are both
    /// clamped.
    pub fn add_entry(&mut self, entry: &FoodEntry) {
        self.accumulate(entry, 1.0);
    }

    /// Remove an entry from the totals, stopping at zero
    pub fn remove_entry(&mut self, entry: &FoodEntry) {
        self.accumulate(entry, -1.0);
    }

    fn accumulate(&mut self, entry: &FoodEntry, sign: f64) {
        self.calories = (self.calories + sign * entry.calories).max(0.0);
        self.protein = (self.protein + sign * entry.protein).max(0.0);
        self.carbs = (self.carbs + sign * entry.carbs).max(0.0);
        self.fats = (self.fats + sign * entry.fats).max(0.0);
    }

    /// Apply an add or remove
    pub fn apply(&mut self, operation: LogOperation, entry: &FoodEntry) {
        match operation {
            LogOperation::Add => self.add_entry(entry),
            LogOperation::Remove => self.remove_entry(entry),
        }
    }

    /// Compare the totals against daily targets
    pub fn progress(&self, targets: &MacroTargets) -> DailyProgress {
        DailyProgress {
            calories: MacroProgress::new(self.calories, targets.calories),
            protein: MacroProgress::new(self.protein, targets.protein),
            carbs: MacroProgress::new(self.carbs, targets.carbs),
            fats: MacroProgress::new(self.fats, targets.fats),
        }
    }
}

/// Progress toward a single target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub consumed: f64,
    pub target: i32,
    /// Negative once the target is exceeded
    pub remaining: f64,
    /// Share of the target consumed; 0 when the target is 0
    pub percent: f64,
}

impl MacroProgress {
    fn new(consumed: f64, target: i32) -> Self {
        let percent = if target > 0 {
            consumed / target as f64 * 100.0
        } else {
            0.0
        };
        Self {
            consumed,
            target,
            remaining: target as f64 - consumed,
            percent,
        }
    }
}

/// Progress toward every daily target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fats: MacroProgress,
}
