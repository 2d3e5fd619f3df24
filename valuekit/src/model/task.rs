//! Tasks with a clamped priority.

use serde::Serialize;

use crate::core::bounded::BoundedProperty;
use crate::core::error::RangeError;

pub const MIN_PRIORITY: i64 = 1;
pub const MAX_PRIORITY: i64 = 5;
pub const DEFAULT_PRIORITY: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    name: String,
    priority: BoundedProperty<i64>,
}

impl Task {
    /// Task with priority clamped into `[MIN_PRIORITY, MAX_PRIORITY]`.
    pub fn new(name: &str, priority: i64) -> Result<Self, RangeError> {
        Self::with_bounds(name, MIN_PRIORITY, MAX_PRIORITY, priority)
    }

    /// Task at `DEFAULT_PRIORITY`.
    pub fn with_default_priority(name: &str) -> Result<Self, RangeError> {
        Self::new(name, DEFAULT_PRIORITY)
    }

    /// Task whose priority range comes from configuration.
    pub fn with_bounds(name: &str, min: i64, max: i64, priority: i64) -> Result<Self, RangeError> {
        Ok(Self {
            name: name.to_string(),
            priority: BoundedProperty::new(min, max, priority)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i64 {
        *self.priority.read()
    }

    /// Returns the priority actually stored after clamping.
    pub fn set_priority(&mut self, priority: i64) -> i64 {
        self.priority.write(priority)
    }

    pub fn priority_bounds(&self) -> (i64, i64) {
        (*self.priority.min(), *self.priority.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_priority_is_three() {
        let task = Task::with_default_priority("write docs").expect("task");
        assert_eq!(task.priority(), DEFAULT_PRIORITY);
    }

    #[test]
    fn construction_clamps_priority() {
        assert_eq!(Task::new("urgent", 9).expect("task").priority(), MAX_PRIORITY);
        assert_eq!(Task::new("someday", 0).expect("task").priority(), MIN_PRIORITY);
    }

    #[test]
    fn set_priority_clamps_and_reports_stored_value() {
        let mut task = Task::with_default_priority("triage").expect("task");
        assert_eq!(task.set_priority(10), 5);
        assert_eq!(task.set_priority(-2), 1);
        assert_eq!(task.set_priority(3), 3);
        assert_eq!(task.priority(), 3);
    }

    #[test]
    fn configured_bounds_are_respected() {
        let mut task = Task::with_bounds("ops", 0, 10, 7).expect("task");
        assert_eq!(task.priority_bounds(), (0, 10));
        assert_eq!(task.set_priority(11), 10);
    }

    #[test]
    fn inverted_configured_bounds_fail() {
        assert!(Task::with_bounds("ops", 10, 0, 5).is_err());
    }
}
