use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table};

use crate::theme;

/// One rendered line of the listing, already formatted by the caller.
#[derive(Debug, Clone)]
pub struct PostRow {
    pub checked: bool,
    pub id: String,
    pub author: String,
    pub date: String,
    pub place: String,
    pub likes: String,
    pub comments: String,
}

pub struct PostListWidget<'a> {
    pub rows: &'a [PostRow],
    pub selected: Option<usize>,
    pub loading: bool,
    pub error: Option<&'a str>,
    /// Author id whose lookup results are displayed, if any.
    pub lookup_user: Option<&'a str>,
    pub last_page: bool,
    pub checked_count: usize,
}

impl<'a> PostListWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let title = match self.lookup_user {
            Some(user) => format!(" Posts by user {user} "),
            None => " Certification Posts ".to_string(),
        };

        let mut footer = format!(" {} loaded", self.rows.len());
        if self.checked_count > 0 {
            footer.push_str(&format!(" · {} checked", self.checked_count));
        }
        if self.loading {
            footer.push_str(" · fetching…");
        } else if self.last_page && self.lookup_user.is_none() {
            footer.push_str(" · end");
        }
        footer.push(' ');

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR))
            .title(title)
            .title_style(Style::default().fg(theme::ACCENT).bold())
            .title_bottom(Line::from(footer).right_aligned().style(Style::default().fg(theme::TEXT_DIM)));

        if self.loading && self.rows.is_empty() {
            let msg = Paragraph::new("Loading…").style(Style::default().fg(theme::TEXT_DIM)).block(block);
            frame.render_widget(msg, area);
            return;
        }

        if let Some(err) = self.error {
            let msg =
                Paragraph::new(format!("Error: {err}")).style(Style::default().fg(theme::STATUS_FAILED)).block(block);
            frame.render_widget(msg, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.rows.is_empty() {
            let text = if self.lookup_user.is_some() { "No posts by that user" } else { "No posts" };
            frame.render_widget(Paragraph::new(text).style(Style::default().fg(theme::TEXT_DIM)), inner);
            return;
        }

        let header = Row::new(
            ["", "ID", "USER", "DATE", "PLACE", "LIKES", "CMTS"]
                .into_iter()
                .map(|h| Cell::from(h).style(Style::default().fg(theme::TABLE_HEADER_FG).bold())),
        )
        .height(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                let mark = if row.checked { "[x]" } else { "[ ]" };
                let mark_style = if row.checked {
                    Style::default().fg(theme::STATUS_WARN).bold()
                } else {
                    Style::default().fg(theme::TEXT_DIM)
                };
                Row::new(vec![
                    Cell::from(mark).style(mark_style),
                    Cell::from(row.id.as_str()),
                    Cell::from(row.author.as_str()),
                    Cell::from(row.date.as_str()).style(Style::default().fg(theme::TEXT_DIM)),
                    Cell::from(row.place.as_str()),
                    Cell::from(row.likes.as_str()),
                    Cell::from(row.comments.as_str()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Min(18),
            Constraint::Length(6),
            Constraint::Length(5),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().bg(theme::SELECTION_BG))
            .highlight_symbol("▶ ");

        let mut table_state = ratatui::widgets::TableState::default().with_selected(self.selected);
        frame.render_stateful_widget(table, inner, &mut table_state);

        if self.rows.len() > inner.height.saturating_sub(1) as usize {
            let mut scrollbar_state = ScrollbarState::new(self.rows.len()).position(self.selected.unwrap_or(0));
            let scrollbar =
                Scrollbar::new(ScrollbarOrientation::VerticalRight).style(Style::default().fg(theme::BORDER_COLOR));
            frame.render_stateful_widget(
                scrollbar,
                inner.inner(Margin { vertical: 1, horizontal: 0 }),
                &mut scrollbar_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn row(id: i64, checked: bool) -> PostRow {
        PostRow {
            checked,
            id: id.to_string(),
            author: "7".into(),
            date: "2023.05.01".into(),
            place: format!("place-{id}"),
            likes: "3".into(),
            comments: "1".into(),
        }
    }

    fn render(widget: PostListWidget) -> String {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| widget.render(frame, frame.area())).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn buffer_to_string(buf: &Buffer) -> String {
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
    fn renders_rows_with_check_marks() {
        let rows = vec![row(1, false), row(2, true)];
        let content = render(PostListWidget {
            rows: &rows,
            selected: Some(0),
            loading: false,
            error: None,
            lookup_user: None,
            last_page: false,
            checked_count: 1,
        });
        assert!(content.contains("place-1"));
        assert!(content.contains("[x]"));
        assert!(content.contains("[ ]"));
        assert!(content.contains("1 checked"));
    }

    #[test]
    fn empty_loading_list_shows_loading() {
        let content = render(PostListWidget {
            rows: &[],
            selected: None,
            loading: true,
            error: None,
            lookup_user: None,
            last_page: false,
            checked_count: 0,
        });
        assert!(content.contains("Loading"));
    }

    #[test]
    fn loading_more_keeps_rows_and_marks_footer() {
        let rows = vec![row(1, false)];
        let content = render(PostListWidget {
            rows: &rows,
            selected: Some(0),
            loading: true,
            error: None,
            lookup_user: None,
            last_page: false,
            checked_count: 0,
        });
        assert!(content.contains("place-1"));
        assert!(content.contains("fetching"));
    }

    #[test]
    fn error_replaces_table() {
        let content = render(PostListWidget {
            rows: &[],
            selected: None,
            loading: false,
            error: Some("Transport failure: timed out"),
            lookup_user: None,
            last_page: false,
            checked_count: 0,
        });
        assert!(content.contains("Error: Transport failure"));
    }

    #[test]
    fn end_marker_appears_on_terminal_page() {
        let rows = vec![row(1, false)];
        let content = render(PostListWidget {
            rows: &rows,
            selected: None,
            loading: false,
            error: None,
            lookup_user: None,
            last_page: true,
            checked_count: 0,
        });
        assert!(content.contains("end"));
    }

    #[test]
    fn lookup_title_names_the_user() {
        let content = render(PostListWidget {
            rows: &[],
            selected: None,
            loading: false,
            error: None,
            lookup_user: Some("42"),
            last_page: false,
            checked_count: 0,
        });
        assert!(content.contains("Posts by user 42"));
        assert!(content.contains("No posts by that user"));
    }
}
