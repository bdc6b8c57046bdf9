//! Rendering for the create and edit forms.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Field;
use crate::ui::popup::{progress_line, render_popup};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};

use super::state::{FormSnapshot, FormState};

const LABEL_WIDTH: usize = 16;

pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState, tick: u8) {
    match state {
        FormState::Loading => {
            let lines = vec![Line::from(""), progress_line("Loading...", tick)];
            frame.render_widget(Paragraph::new(lines), area);
        }
        FormState::Failed { error } => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", error),
                    Style::default().fg(STATUS_ERROR),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  Esc: Back to list",
                    Style::default().fg(HEADER_SEPARATOR),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        FormState::Editing(snapshot) => render_snapshot(frame, area, snapshot, tick),
    }
}

fn render_snapshot(frame: &mut Frame, area: Rect, snapshot: &FormSnapshot, tick: u8) {
    let mut lines = vec![Line::from("")];
    for field in Field::ALL {
        lines.push(field_line(snapshot, field));
        if let Some(message) = snapshot.error(field) {
            lines.push(Line::from(Span::styled(
                format!("  {:w$}  {}", "", message, w = LABEL_WIDTH),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    lines.push(Line::from(""));
    if snapshot.submitting {
        let message = if snapshot.is_edit() {
            "Updating..."
        } else {
            "Adding..."
        };
        lines.push(progress_line(message, tick));
    } else {
        let action = if snapshot.is_edit() {
            "  [ Update Book ]"
        } else {
            "  [ Add Book ]"
        };
        lines.push(Line::from(Span::styled(
            action,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);

    if let Some(notice) = &snapshot.notice {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", notice),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Enter/Esc: Dismiss",
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ];
        render_popup(frame, area, "Error", lines);
    }
}

fn field_line(snapshot: &FormSnapshot, field: Field) -> Line<'static> {
    let focused = field == snapshot.focused;
    let marker = if field.is_required() { "*" } else { " " };
    let label = format!("  {:<w$}{} ", field.label(), marker, w = LABEL_WIDTH - 1);
    let value = snapshot.draft.get(field);
    let value = if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };

    let label_style = if snapshot.error(field).is_some() {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(HEADER_SEPARATOR)
    };
    let line = Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ]);
    if focused {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}
