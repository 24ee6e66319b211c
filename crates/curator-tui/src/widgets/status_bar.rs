use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme;

pub struct StatusBarWidget<'a> {
    pub mode: &'a str,
    pub hints: &'a [(&'a str, &'a str)],
    pub host: &'a str,
    pub loaded: usize,
    pub page: u32,
}

impl<'a> StatusBarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        spans.push(Span::styled(
            format!(" {} ", self.mode.to_uppercase()),
            Style::default().fg(theme::HEADER_BG).bg(theme::ACCENT).add_modifier(Modifier::BOLD),
        ));

        for (key, desc) in self.hints {
            spans.push(Span::styled(" │ ", Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG)));
            spans.push(Span::styled(format!("<{key}>"), Style::default().fg(theme::ACCENT).bg(theme::STATUS_BG)));
            spans.push(Span::styled(format!(" {desc}"), Style::default().fg(theme::STATUS_FG).bg(theme::STATUS_BG)));
        }

        let right_text = format!("{} · {} posts · p{} ", self.host, self.loaded, self.page);
        let right_width = right_text.chars().count() as u16;
        let left_used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        let fill = area.width.saturating_sub(left_used + right_width);

        if fill > 0 {
            spans.push(Span::styled(" ".repeat(fill as usize), Style::default().bg(theme::STATUS_BG)));
        }

        spans.push(Span::styled(
            right_text,
            Style::default().fg(theme::STATUS_FG).bg(theme::STATUS_BG).add_modifier(Modifier::DIM),
        ));

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::STATUS_BG));
        frame.render_widget(bar, area);
    }
}
