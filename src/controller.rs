// File: src/controller.rs
//! Central logic controller for goal operations.
//! This is the single source of truth for the form-submission and row-action
//! workflows. The UI layer delegates here so that validation and persistence
//! behave identically no matter which surface triggered them.
use crate::model::Goal;
use crate::store::GoalStore;
use anyhow::Result;

/// Outcome of a row action addressed by goal uid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The goal was found and mutated; holds its updated (or removed) state.
    Applied(Goal),
    /// No goal with that uid exists. Never a fault: stale references after a
    /// structural change degrade to an explicit no-op.
    NotFound,
}

/// Orchestrates store mutations triggered by the UI.
#[derive(Debug)]
pub struct GoalController {
    pub store: GoalStore,
}

impl GoalController {
    pub fn new(store: GoalStore) -> Self {
        Self { store }
    }

    /// Handles a form submission.
    ///
    /// Presence check only, on trimmed input: if either field is empty the
    /// submission is silently ignored (`Ok(None)`) and the list is left
    /// unchanged. Otherwise a pending goal is created, appended, and
    /// persisted.
    pub fn submit(&mut self, name: &str, deadline: &str) -> Result<Option<Goal>> {
        let name = name.trim();
        let deadline = deadline.trim();
        if name.is_empty() || deadline.is_empty() {
            return Ok(None);
        }

        let goal = Goal::new(name, deadline);
        self.store.add_goal(goal.clone())?;
        log::info!("Added goal '{}' (due {})", goal.name, goal.deadline);
        Ok(Some(goal))
    }

    /// Flips the completion flag of the goal with the given uid.
    pub fn toggle(&mut self, uid: &str) -> Result<ActionOutcome> {
        match self.store.toggle_goal(uid)? {
            Some(goal) => Ok(ActionOutcome::Applied(goal)),
            None => Ok(ActionOutcome::NotFound),
        }
    }

    /// Deletes the goal with the given uid.
    pub fn remove(&mut self, uid: &str) -> Result<ActionOutcome> {
        match self.store.remove_goal(uid)? {
            Some(goal) => {
                log::info!("Removed goal '{}'", goal.name);
                Ok(ActionOutcome::Applied(goal))
            }
            None => Ok(ActionOutcome::NotFound),
        }
    }
}
