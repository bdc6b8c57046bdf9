//! Overlay helpers shared by the screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_OK};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// `"  ⠋ message"` line used by every loading placeholder.
pub fn progress_line(message: &str, tick: u8) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {} ", spinner(tick)), Style::default().fg(STATUS_OK)),
        Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
    ])
}

/// Draw a bordered dialog sized to `lines`, centered in `area`.
pub fn render_popup(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let title_width = title.chars().count() as u16;
    let width = content_width.max(title_width).saturating_add(4).max(40);
    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect(width, height, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

/// Cut `text` to at most `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner(0), "⠋");
        assert_eq!(spinner(10), "⠋");
        assert_eq!(spinner(255), SPINNER_FRAMES[255 % SPINNER_FRAMES.len()]);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a very long title", 15), "this is a ve...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
