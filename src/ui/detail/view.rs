use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::{Book, Field};
use crate::ui::popup::progress_line;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::DetailState;

const LABEL_WIDTH: usize = 16;

pub fn render_detail(frame: &mut Frame, area: Rect, state: &DetailState, tick: u8) {
    let lines = match state {
        DetailState::Loading => vec![Line::from(""), progress_line("Loading...", tick)],
        DetailState::Failed { error } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  r: Retry   Esc: Back to list",
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ],
        DetailState::Ready { book } => book_lines(book),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn book_lines(book: &Book) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", book.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  by {}", book.author),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        entry(Field::Email, book.email.clone()),
        entry(
            Field::Age,
            book.age.map(|age| age.to_string()).unwrap_or_else(|| "-".into()),
        ),
    ];
    if let Some(price) = book.price {
        lines.push(Line::from(vec![
            label(Field::Price),
            Span::styled(format!("₹{}", price), Style::default().fg(STATUS_OK)),
        ]));
    }
    if let Some(category) = &book.category {
        lines.push(entry(Field::Category, category.clone()));
    }
    if let Some(year) = book.published_year {
        lines.push(entry(Field::PublishedYear, year.to_string()));
    }
    if let Some(description) = &book.description {
        lines.push(Line::from(""));
        lines.push(Line::from(label(Field::Description)));
        lines.push(Line::from(Span::styled(
            format!("  {}", description),
            Style::default().fg(HEADER_TEXT),
        )));
    }
    lines
}

fn label(field: Field) -> Span<'static> {
    Span::styled(
        format!("  {:<w$}", field.label(), w = LABEL_WIDTH),
        Style::default().fg(HEADER_SEPARATOR),
    )
}

fn entry(field: Field, value: String) -> Line<'static> {
    Line::from(vec![
        label(field),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}
