use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme;

/// Overlay listing the most recent log lines, newest at the bottom.
pub struct ActivityWidget<'a> {
    pub lines: &'a [String],
}

impl<'a> ActivityWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let width = (area.width * 4 / 5).max(40).min(area.width.saturating_sub(2));
        let height = (area.height * 4 / 5).max(8).min(area.height.saturating_sub(2));
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Activity ")
            .title_style(Style::default().fg(theme::ACCENT).bold())
            .title_bottom(Line::from(" [Esc] Close ").right_aligned().style(Style::default().fg(theme::TEXT_DIM)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR))
            .style(Style::default().bg(theme::OVERLAY_BG));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let visible = inner.height as usize;
        let skip = self.lines.len().saturating_sub(visible);
        let text: Vec<Line> = self.lines.iter().skip(skip).map(|l| Line::from(l.as_str())).collect();

        if text.is_empty() {
            frame.render_widget(
                Paragraph::new("Nothing logged yet").style(Style::default().fg(theme::TEXT_DIM)),
                inner,
            );
            return;
        }

        frame.render_widget(Paragraph::new(text).style(Style::default().fg(theme::STATUS_FG)), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(lines: &[String]) -> String {
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| ActivityWidget { lines }.render(frame, frame.area())).unwrap();
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
    fn shows_recent_lines() {
        let lines = vec!["deleted post id=3".to_string(), "fetched post page".to_string()];
        let content = render(&lines);
        assert!(content.contains("Activity"));
        assert!(content.contains("deleted post id=3"));
        assert!(content.contains("fetched post page"));
    }

    #[test]
    fn empty_buffer_has_placeholder() {
        let content = render(&[]);
        assert!(content.contains("Nothing logged yet"));
    }

    #[test]
    fn overflowing_lines_keep_the_newest() {
        let lines: Vec<String> = (0..100).map(|i| format!("line-{i}")).collect();
        let content = render(&lines);
        assert!(content.contains("line-99"));
        assert!(!content.contains("line-0 "));
    }
}
