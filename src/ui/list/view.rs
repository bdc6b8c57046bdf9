//! Rendering for the list screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Book;
use crate::ui::popup::{progress_line, render_popup, truncate};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::{ListSnapshot, ListViewState};

const TITLE_WIDTH: usize = 28;
const AUTHOR_WIDTH: usize = 20;
const EMAIL_WIDTH: usize = 26;

pub fn render_list(frame: &mut Frame, area: Rect, state: &ListViewState, tick: u8) {
    match state {
        ListViewState::Loading => {
            let lines = vec![Line::from(""), progress_line("Loading books...", tick)];
            frame.render_widget(Paragraph::new(lines), area);
        }
        ListViewState::Failed { error } => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", error),
                    Style::default().fg(STATUS_ERROR),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  Press Ctrl+R to retry",
                    Style::default().fg(HEADER_SEPARATOR),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        ListViewState::Ready(snapshot) => render_snapshot(frame, area, snapshot, tick),
    }
}

fn render_snapshot(frame: &mut Frame, area: Rect, snapshot: &ListSnapshot, tick: u8) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let search = Line::from(vec![
        Span::styled("  🔍 Search by title: ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(
            format!("{}▏", snapshot.filter),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);
    let counts = Line::from(Span::styled(
        format!(
            "  Total Books: {}   Showing: {}",
            snapshot.collection.len(),
            snapshot.filtered().len()
        ),
        Style::default().fg(HEADER_SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(vec![search, counts]), rows[0]);

    frame.render_widget(Paragraph::new(table_lines(snapshot)), rows[1]);

    // Paging is hidden when nothing matches
    let mut status = Vec::new();
    if !snapshot.visible().is_empty() {
        status.push(Span::styled(
            format!("  Page {} of {}", snapshot.page, snapshot.total_pages()),
            Style::default().fg(HEADER_SEPARATOR),
        ));
    }
    if snapshot.deleting.is_some() {
        status.extend(progress_line("Deleting...", tick).spans);
    }
    frame.render_widget(Paragraph::new(Line::from(status)), rows[2]);

    if let Some(book) = snapshot.confirm_target() {
        let lines = vec![
            Line::from(""),
            Line::from(format!(
                "  Delete \"{}\"?",
                truncate(&book.title, TITLE_WIDTH)
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  y/Enter: Delete   n/Esc: Keep",
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ];
        render_popup(frame, area, "Delete Book", lines);
    } else if let Some(notice) = &snapshot.notice {
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

fn table_lines(snapshot: &ListSnapshot) -> Vec<Line<'static>> {
    let visible = snapshot.visible();
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "  {:<tw$}  {:<aw$}  {:<ew$}  {:>4}",
            "Title",
            "Author",
            "Email",
            "Age",
            tw = TITLE_WIDTH,
            aw = AUTHOR_WIDTH,
            ew = EMAIL_WIDTH,
        ),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];

    if visible.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No books found",
            Style::default().fg(HEADER_SEPARATOR),
        )));
        return lines;
    }

    for (index, book) in visible.iter().enumerate() {
        let selected = index == snapshot.selected;
        let mut line = book_row(book, snapshot.deleting.as_ref() == Some(&book.id));
        if selected {
            line = line.style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );
        }
        lines.push(line);
    }
    lines
}

fn book_row(book: &Book, deleting: bool) -> Line<'static> {
    let style = if deleting {
        Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        Span::styled(
            format!(
                "  {:<tw$}  {:<aw$}  {:<ew$}  ",
                truncate(&book.title, TITLE_WIDTH),
                truncate(&book.author, AUTHOR_WIDTH),
                truncate(&book.email, EMAIL_WIDTH),
                tw = TITLE_WIDTH,
                aw = AUTHOR_WIDTH,
                ew = EMAIL_WIDTH,
            ),
            style,
        ),
        Span::styled(
            format!(
                "{:>4}",
                book.age.map(|age| age.to_string()).unwrap_or_else(|| "-".into())
            ),
            Style::default().fg(STATUS_OK),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::list::{ListIntent, ListReducer};
    use crate::ui::mvi::Reducer;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::json;

    fn screen_text(state: &ListViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 14)).unwrap();
        terminal
            .draw(|frame| render_list(frame, frame.area(), state, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn ready_list_shows_rows_and_page() {
        let books = vec![serde_json::from_value(json!({
            "id": 1, "title": "Dune", "author": "Frank Herbert",
            "email": "f@h.com", "age": 65
        }))
        .unwrap()];
        let state = ListReducer::reduce(ListViewState::Loading, ListIntent::Loaded { books });
        let text = screen_text(&state);
        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("Total Books: 1"));
        assert!(text.contains("Showing: 1"));
    }

    #[test]
    fn counts_follow_the_filter() {
        let books = ["Dune", "Emma", "Dune Messiah"]
            .iter()
            .enumerate()
            .map(|(index, title)| {
                serde_json::from_value(json!({
                    "id": index, "title": title, "author": "A",
                    "email": "a@b.c", "age": 30
                }))
                .unwrap()
            })
            .collect();
        let mut state = ListReducer::reduce(ListViewState::Loading, ListIntent::Loaded { books });
        for ch in "dune".chars() {
            state = ListReducer::reduce(state, ListIntent::FilterInput { ch });
        }
        let text = screen_text(&state);
        assert!(text.contains("Total Books: 3"));
        assert!(text.contains("Showing: 2"));
        assert!(!text.contains("Emma"));

        let state = ListReducer::reduce(state, ListIntent::FilterInput { ch: 'z' });
        let text = screen_text(&state);
        assert!(text.contains("Total Books: 3"));
        assert!(text.contains("Showing: 0"));
        assert!(text.contains("No books found"));
        assert!(!text.contains("Page"));
    }

    #[test]
    fn empty_list_says_so() {
        let state = ListReducer::reduce(
            ListViewState::Loading,
            ListIntent::Loaded { books: Vec::new() },
        );
        let text = screen_text(&state);
        assert!(text.contains("No books found"));
        assert!(text.contains("Total Books: 0"));
        assert!(!text.contains("Page"));
    }

    #[test]
    fn failure_offers_retry() {
        let text = screen_text(&ListViewState::Failed {
            error: "Failed to fetch books".into(),
        });
        assert!(text.contains("Failed to fetch books"));
        assert!(text.contains("Ctrl+R"));
    }
}
