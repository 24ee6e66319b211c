use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme;

/// Centered modal asking the user to confirm an irreversible deletion.
pub struct ConfirmDialogWidget<'a> {
    pub message: &'a str,
}

impl<'a> ConfirmDialogWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let longest = self.message.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let max_width = area.width.saturating_sub(4);
        let width = (longest as u16 + 8).clamp(44.min(max_width), max_width);
        let height = (self.message.lines().count() as u16 + 5).min(area.height.saturating_sub(2));

        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Delete posts ")
            .title_style(Style::default().fg(theme::STATUS_FAILED).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::STATUS_FAILED))
            .style(Style::default().bg(theme::OVERLAY_BG));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [text_area, _, button_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let message =
            Paragraph::new(self.message).style(Style::default().fg(theme::HEADER_FG)).alignment(Alignment::Center);
        frame.render_widget(message, text_area);

        let buttons = Paragraph::new(Line::from(vec![
            Span::styled("[y]", Style::default().fg(theme::STATUS_FAILED).bold()),
            Span::styled(" Delete   ", Style::default().fg(theme::STATUS_FG)),
            Span::styled("[n/Esc]", Style::default().fg(theme::STATUS_OK).bold()),
            Span::styled(" Keep", Style::default().fg(theme::STATUS_FG)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(buttons, button_area);
    }
}
