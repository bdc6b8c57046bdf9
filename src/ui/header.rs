use crate::ui::popup::spinner;
use crate::ui::route::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: app name, current screen and an activity spinner.
pub struct Header<'a> {
    route: &'a Route,
    busy: bool,
    tick: u8,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, busy: bool, tick: u8) -> Self {
        Self { route, busy, tick }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "📚 Bookshelf",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.path(), separator_style),
        ];
        if self.busy {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                spinner(self.tick),
                Style::default().fg(STATUS_OK),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
