// File: src/model.rs
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_uid() -> String {
    Uuid::new_v4().to_string()
}

/// A single tracked goal: a name, a free-form deadline, and a done flag.
///
/// Goals carry a stable `uid` assigned at creation. All mutation paths
/// address goals by uid; list positions are derived only at the rendering
/// boundary and never survive a structural change.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default = "default_uid")]
    pub uid: String,
    pub name: String,
    /// Display text for the deadline. Not validated; `deadline_date()` is a
    /// best-effort parse used only for overdue highlighting.
    pub deadline: String,
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    pub fn new(name: &str, deadline: &str) -> Self {
        Self {
            uid: default_uid(),
            name: name.to_string(),
            deadline: deadline.to_string(),
            completed: false,
        }
    }

    /// Parses the deadline as `YYYY-MM-DD` if possible.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d").ok()
    }

    /// A goal is overdue when it is still pending and its deadline parses
    /// to a date strictly before today. Unparseable deadlines are never
    /// considered overdue.
    pub fn is_overdue(&self) -> bool {
        if self.completed {
            return false;
        }
        match self.deadline_date() {
            Some(d) => d < Local::now().date_naive(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_goal_starts_pending_with_fresh_uid() {
        let a = Goal::new("Learn Go", "2025-12-31");
        let b = Goal::new("Learn Go", "2025-12-31");
        assert!(!a.completed);
        assert_eq!(a.name, "Learn Go");
        assert_eq!(a.deadline, "2025-12-31");
        assert_ne!(a.uid, b.uid);
    }

    #[test]
    fn deadline_parse_is_best_effort() {
        assert!(Goal::new("g", "2025-12-31").deadline_date().is_some());
        assert!(Goal::new("g", " 2025-12-31 ").deadline_date().is_some());
        assert!(Goal::new("g", "next friday").deadline_date().is_none());
        assert!(Goal::new("g", "").deadline_date().is_none());
    }

    #[test]
    fn completed_goals_are_never_overdue() {
        let mut g = Goal::new("g", "1999-01-01");
        assert!(g.is_overdue());
        g.completed = true;
        assert!(!g.is_overdue());
    }

    #[test]
    fn unparseable_deadlines_are_not_overdue() {
        let g = Goal::new("g", "someday");
        assert!(!g.is_overdue());
    }
}
