// File: src/tui/handlers.rs
// Handles keyboard input for the TUI.
use crate::controller::ActionOutcome;
use crate::tui::action::Action;
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Translates the char-based cursor into a byte offset for string edits.
fn byte_index(buffer: &str, char_pos: usize) -> usize {
    buffer
        .char_indices()
        .map(|(i, _)| i)
        .nth(char_pos)
        .unwrap_or(buffer.len())
}

/// Shared cursor/edit keys for both form fields. Returns true when the key
/// was consumed.
fn handle_edit_key(key: KeyCode, state: &mut AppState) -> bool {
    let cursor = state.cursor_position;
    match key {
        KeyCode::Char(c) => {
            let buf = state.active_buffer_mut();
            let idx = byte_index(buf, cursor);
            buf.insert(idx, c);
            state.cursor_position += 1;
            true
        }
        KeyCode::Backspace => {
            if cursor > 0 {
                let buf = state.active_buffer_mut();
                let idx = byte_index(buf, cursor - 1);
                buf.remove(idx);
                state.cursor_position -= 1;
            }
            true
        }
        KeyCode::Delete => {
            let buf = state.active_buffer_mut();
            if cursor < buf.chars().count() {
                let idx = byte_index(buf, cursor);
                buf.remove(idx);
            }
            true
        }
        KeyCode::Left => {
            state.cursor_position = cursor.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            let len = state.active_buffer().chars().count();
            if cursor < len {
                state.cursor_position = cursor + 1;
            }
            true
        }
        KeyCode::Home => {
            state.cursor_position = 0;
            true
        }
        KeyCode::End => {
            state.cursor_position = state.active_buffer().chars().count();
            true
        }
        _ => false,
    }
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.mode {
        InputMode::Normal => handle_normal_key(key, state),
        InputMode::EnteringName => {
            handle_name_key(key, state);
            None
        }
        InputMode::EnteringDeadline => {
            handle_deadline_key(key, state);
            None
        }
    }
}

fn handle_normal_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,
        KeyCode::Char('a') => {
            state.clear_form();
            state.mode = InputMode::EnteringName;
        }
        KeyCode::Char('j') | KeyCode::Down => state.next(),
        KeyCode::Char('k') | KeyCode::Up => state.previous(),
        KeyCode::Char('g') => state.list_state.select(Some(0)),
        KeyCode::Char('G') => {
            let len = state.visible_goals().len();
            if len > 0 {
                state.list_state.select(Some(len - 1));
            }
        }
        KeyCode::Char('H') => {
            state.hide_completed = !state.hide_completed;
            state.clamp_selection();
        }
        KeyCode::Char(' ') => {
            if let Some(uid) = state.selected_uid() {
                match state.controller.toggle(&uid) {
                    Ok(ActionOutcome::Applied(goal)) => {
                        state.message = if goal.completed {
                            format!("Completed '{}'", goal.name)
                        } else {
                            format!("Reopened '{}'", goal.name)
                        };
                        // Hiding completed goals can shrink the list under us.
                        state.clamp_selection();
                    }
                    Ok(ActionOutcome::NotFound) => {
                        state.message = "Goal no longer exists.".to_string();
                        state.clamp_selection();
                    }
                    Err(e) => state.message = format!("Error: {}", e),
                }
            }
        }
        KeyCode::Char('d') => {
            if let Some(uid) = state.selected_uid() {
                match state.controller.remove(&uid) {
                    Ok(ActionOutcome::Applied(goal)) => {
                        state.message = format!("Deleted '{}'", goal.name);
                        state.clamp_selection();
                    }
                    Ok(ActionOutcome::NotFound) => {
                        state.clamp_selection();
                    }
                    Err(e) => state.message = format!("Error: {}", e),
                }
            }
        }
        _ => {}
    }
    None
}

fn handle_name_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.clear_form();
            state.mode = InputMode::Normal;
        }
        KeyCode::Enter | KeyCode::Tab => {
            state.mode = InputMode::EnteringDeadline;
            state.cursor_position = state.deadline_buffer.chars().count();
        }
        code => {
            handle_edit_key(code, state);
        }
    }
}

fn handle_deadline_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.clear_form();
            state.mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.mode = InputMode::EnteringName;
            state.cursor_position = state.name_buffer.chars().count();
        }
        KeyCode::Enter => {
            let name = state.name_buffer.clone();
            let deadline = state.deadline_buffer.clone();
            match state.controller.submit(&name, &deadline) {
                Ok(Some(goal)) => {
                    state.clear_form();
                    state.mode = InputMode::Normal;
                    state.message = format!("Added '{}' (due {})", goal.name, goal.deadline);
                    state.select_uid(&goal.uid);
                }
                // Presence check failed: ignore the submit, keep the form
                // open so the user can fill in the missing field.
                Ok(None) => {}
                Err(e) => state.message = format!("Error: {}", e),
            }
        }
        code => {
            handle_edit_key(code, state);
        }
    }
}
