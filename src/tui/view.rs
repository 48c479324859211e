// File: src/tui/view.rs
use crate::model::Goal;
use crate::tui::state::{AppState, InputMode};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Up/Down  g/G:Top/Bottom"),
        ]),
        Line::from(vec![
            Span::styled(
                " GOALS ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" a:Add  Space:Toggle Done  d:Delete  H:Hide Completed"),
        ]),
        Line::from(vec![
            Span::styled(
                " FORM ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Tab:Switch Field  Enter:Next/Submit  Esc:Cancel"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height])
        .split(f.area());

    draw_goal_list(f, state, v_chunks[0]);

    // --- Footer: form, full help, or status line ---
    if matches!(
        state.mode,
        InputMode::EnteringName | InputMode::EnteringDeadline
    ) {
        draw_form(f, state, v_chunks[1]);
    } else if state.show_full_help {
        let help = Paragraph::new(full_help_text).block(Block::default().borders(Borders::ALL));
        f.render_widget(help, v_chunks[1]);
    } else {
        let status = Paragraph::new(state.message.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" a:Add  Space:Done  d:Delete  ?:Help  q:Quit "),
        );
        f.render_widget(status, v_chunks[1]);
    }
}

fn goal_row<'a>(goal: &Goal, strikethrough: bool) -> ListItem<'a> {
    let checkbox = if goal.completed { "[x] " } else { "[ ] " };

    let mut name_style = Style::default();
    if goal.completed {
        name_style = name_style.add_modifier(Modifier::DIM);
        if strikethrough {
            name_style = name_style.add_modifier(Modifier::CROSSED_OUT);
        }
    } else if goal.is_overdue() {
        name_style = name_style.fg(Color::Red).add_modifier(Modifier::BOLD);
    }

    let deadline_style = if goal.completed {
        Style::default().add_modifier(Modifier::DIM)
    } else if goal.is_overdue() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    ListItem::new(Line::from(vec![
        Span::raw(checkbox),
        Span::styled(goal.name.clone(), name_style),
        Span::styled(format!("  (due {})", goal.deadline), deadline_style),
    ]))
}

fn draw_goal_list(f: &mut Frame, state: &mut AppState, area: Rect) {
    let visible = state.visible_goals();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|g| goal_row(g, state.strikethrough_completed))
        .collect();

    let total = state.controller.store.len();
    let title = if state.hide_completed && visible.len() < total {
        format!(" Goals ({} of {}) ", visible.len(), total)
    } else {
        format!(" Goals ({}) ", total)
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn draw_form(f: &mut Frame, state: &AppState, area: Rect) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let active_style = Style::default().fg(Color::Cyan);
    let idle_style = Style::default().fg(Color::DarkGray);
    let name_active = state.mode == InputMode::EnteringName;

    let name_input = Paragraph::new(state.name_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Goal name ")
            .border_style(if name_active { active_style } else { idle_style }),
    );
    f.render_widget(name_input, fields[0]);

    let deadline_input = Paragraph::new(state.deadline_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Deadline (YYYY-MM-DD) ")
            .border_style(if name_active { idle_style } else { active_style }),
    );
    f.render_widget(deadline_input, fields[1]);

    // Place the terminal cursor inside the active field, accounting for
    // wide characters.
    let (field_area, buffer) = if name_active {
        (fields[0], state.name_buffer.as_str())
    } else {
        (fields[1], state.deadline_buffer.as_str())
    };
    let prefix: String = buffer.chars().take(state.cursor_position).collect();
    let x = field_area.x + 1 + prefix.width() as u16;
    f.set_cursor_position(Position::new(
        x.min(field_area.x + field_area.width.saturating_sub(2)),
        field_area.y + 1,
    ));
}
