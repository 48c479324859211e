// File: src/store.rs
use crate::context::SharedContext;
use crate::model::Goal;
use crate::storage::LocalStorage;
use anyhow::Result;

/// Sole owner of the in-memory goal list and sole writer to disk.
///
/// Every mutating operation persists the entire list synchronously before
/// returning, so the file and the in-memory state never drift. Goals are
/// addressed by their stable uid; `position_of` provides the uid→position
/// mapping for the rendering boundary.
#[derive(Debug, Clone)]
pub struct GoalStore {
    ctx: SharedContext,
    goals: Vec<Goal>,
}

impl GoalStore {
    /// Loads the persisted list (empty if the file is absent or was set
    /// aside as corrupt by the storage layer).
    pub fn load(ctx: SharedContext) -> Result<Self> {
        let goals = LocalStorage::load(ctx.as_ref())?;
        Ok(Self { ctx, goals })
    }

    /// Read-only snapshot of the list, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn get(&self, uid: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.uid == uid)
    }

    pub fn position_of(&self, uid: &str) -> Option<usize> {
        self.goals.iter().position(|g| g.uid == uid)
    }

    /// Appends a goal and persists. Callers are responsible for presence
    /// checks on name/deadline; the store accepts anything.
    pub fn add_goal(&mut self, goal: Goal) -> Result<()> {
        self.goals.push(goal);
        self.persist()
    }

    /// Removes the goal with the given uid and persists. Returns the
    /// removed goal, or `Ok(None)` (no write) when the uid is unknown.
    pub fn remove_goal(&mut self, uid: &str) -> Result<Option<Goal>> {
        let Some(idx) = self.position_of(uid) else {
            return Ok(None);
        };
        let goal = self.goals.remove(idx);
        self.persist()?;
        Ok(Some(goal))
    }

    /// Flips `completed` on the goal with the given uid and persists.
    /// Returns the updated goal, or `Ok(None)` (no write) when the uid is
    /// unknown.
    pub fn toggle_goal(&mut self, uid: &str) -> Result<Option<Goal>> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.uid == uid) else {
            return Ok(None);
        };
        goal.completed = !goal.completed;
        let updated = goal.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    fn persist(&self) -> Result<()> {
        LocalStorage::save(self.ctx.as_ref(), &self.goals)
    }
}
