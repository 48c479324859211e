// File: src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::Config;
use crate::context::SharedContext;
use crate::controller::GoalController;
use crate::model::Goal;
use crate::store::GoalStore;
use anyhow::Result;
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    /// Form open, typing into the name field.
    EnteringName,
    /// Form open, typing into the deadline field.
    EnteringDeadline,
}

pub struct AppState {
    // Data
    pub ctx: SharedContext,
    pub controller: GoalController,

    // UI State
    pub list_state: ListState,
    pub mode: InputMode,
    pub message: String,
    pub show_full_help: bool,

    // Display settings (seeded from Config)
    pub hide_completed: bool,
    pub strikethrough_completed: bool,

    // Form buffers
    pub name_buffer: String,
    pub deadline_buffer: String,
    pub cursor_position: usize,
}

impl AppState {
    /// Creates a new AppState with an explicit context, loading whatever the
    /// store finds on disk.
    pub fn new_with_ctx(ctx: SharedContext) -> Result<Self> {
        let store = GoalStore::load(ctx.clone())?;
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Ok(Self {
            ctx,
            controller: GoalController::new(store),
            list_state,
            mode: InputMode::Normal,
            message: "Ready.".to_string(),
            show_full_help: false,
            hide_completed: false,
            strikethrough_completed: true,
            name_buffer: String::new(),
            deadline_buffer: String::new(),
            cursor_position: 0,
        })
    }

    pub fn apply_config(&mut self, cfg: &Config) {
        self.hide_completed = cfg.hide_completed;
        self.strikethrough_completed = cfg.strikethrough_completed;
    }

    /// The goals currently on screen, in list order.
    pub fn visible_goals(&self) -> Vec<&Goal> {
        self.controller
            .store
            .goals()
            .iter()
            .filter(|g| !(self.hide_completed && g.completed))
            .collect()
    }

    /// Maps the selected row back to a goal uid. This is the only place the
    /// UI derives identity from a position, and it is recomputed on every
    /// access so structural changes can never leave a stale index behind.
    pub fn selected_uid(&self) -> Option<String> {
        let idx = self.list_state.selected()?;
        self.visible_goals().get(idx).map(|g| g.uid.clone())
    }

    /// Moves the selection onto the row showing the given uid, if visible.
    pub fn select_uid(&mut self, uid: &str) {
        if let Some(idx) = self.visible_goals().iter().position(|g| g.uid == uid) {
            self.list_state.select(Some(idx));
        }
    }

    /// Keeps the selection inside the visible range after a mutation.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_goals().len();
        if len == 0 {
            self.list_state.select(Some(0));
        } else if self.list_state.selected().unwrap_or(0) >= len {
            self.list_state.select(Some(len - 1));
        }
    }

    pub fn next(&mut self) {
        let len = self.visible_goals().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => len - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(i));
    }

    /// Resets both form fields and the cursor.
    pub fn clear_form(&mut self) {
        self.name_buffer.clear();
        self.deadline_buffer.clear();
        self.cursor_position = 0;
    }

    /// The buffer the cursor currently edits (meaningless in Normal mode,
    /// where the name buffer is returned as a harmless default).
    pub fn active_buffer_mut(&mut self) -> &mut String {
        match self.mode {
            InputMode::EnteringDeadline => &mut self.deadline_buffer,
            _ => &mut self.name_buffer,
        }
    }

    pub fn active_buffer(&self) -> &str {
        match self.mode {
            InputMode::EnteringDeadline => &self.deadline_buffer,
            _ => &self.name_buffer,
        }
    }
}
