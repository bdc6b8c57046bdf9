use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the active screen plus the version.
pub struct Footer<'a> {
    route: &'a Route,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    pub fn hints(&self) -> &'static str {
        match self.route {
            Route::List => {
                " Type: Search │ ↑↓: Select │ ←→: Page │ Enter: View │ Ctrl+N: Add │ Ctrl+E: Edit │ Ctrl+D: Delete │ Ctrl+R: Refresh │ Ctrl+Q: Quit"
            }
            Route::Create | Route::Edit(_) => {
                " Tab/↑↓: Field │ Enter: Save │ Esc: Cancel │ Ctrl+Q: Quit"
            }
            Route::Detail(_) => " e: Edit │ r: Reload │ Esc: Back │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
