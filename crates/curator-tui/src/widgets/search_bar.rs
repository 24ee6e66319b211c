use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

/// One-line user-id search box above the listing.
pub struct SearchBarWidget<'a> {
    pub term: &'a str,
    /// Whether the box currently takes keystrokes.
    pub active: bool,
}

impl<'a> SearchBarWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_color = if self.active { theme::ACCENT } else { theme::BORDER_COLOR };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search ")
            .title_style(Style::default().fg(theme::ACCENT));

        let mut spans = Vec::new();
        if self.term.is_empty() && !self.active {
            spans.push(Span::styled("user id, Enter to search", Style::default().fg(theme::TEXT_DIM)));
        } else {
            spans.push(Span::styled(self.term, Style::default().fg(theme::HEADER_FG)));
            if self.active {
                spans.push(Span::styled("_", Style::default().fg(theme::ACCENT)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(term: &str, active: bool) -> String {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| SearchBarWidget { term, active }.render(frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn empty_inactive_shows_placeholder() {
        let content = render("", false);
        assert!(content.contains("user id"));
    }

    #[test]
    fn active_box_shows_term_and_cursor() {
        let content = render("42", true);
        assert!(content.contains("42_"));
    }

    #[test]
    fn inactive_box_keeps_typed_term_without_cursor() {
        let content = render("42", false);
        assert!(content.contains("42"));
        assert!(!content.contains("42_"));
    }
}
