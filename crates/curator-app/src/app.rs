use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use curator_config::Config;
use curator_core::{
    delete_batch, AdminClient, BatchOutcome, FetchTicket, GatewayError, Post, PostFeed, PostGateway, PostPage,
    SearchSubmit,
};
use curator_tui::widgets::activity::ActivityWidget;
use curator_tui::widgets::confirm_dialog::ConfirmDialogWidget;
use curator_tui::widgets::post_list::{PostListWidget, PostRow};
use curator_tui::widgets::search_bar::SearchBarWidget;
use curator_tui::widgets::status_bar::StatusBarWidget;
use curator_tui::widgets::toast::{ToastMessage, ToastWidget};

use crate::app_log;
use crate::command::{map_key_to_command, Command, InputMode};
use crate::event::{AppEvent, EventHandler};

pub struct App {
    running: bool,
    tick_rate: Duration,
    prefetch_rows: usize,
    mode: InputMode,
    feed: PostFeed,
    client: AdminClient,
    selected: Option<usize>,
    toasts: Vec<ToastMessage>,
    /// Author id whose lookup results are on screen.
    lookup_user: Option<i64>,
    /// Error shown in place of the table when nothing is loaded.
    load_error: Option<String>,
    events_tx: Option<UnboundedSender<AppEvent>>,
}

impl App {
    pub fn new(client: AdminClient, config: &Config) -> Self {
        Self {
            running: true,
            tick_rate: Duration::from_millis(config.tick_rate_ms()),
            prefetch_rows: config.prefetch_rows(),
            mode: InputMode::Normal,
            feed: PostFeed::new(),
            client,
            selected: None,
            toasts: Vec::new(),
            lookup_user: None,
            load_error: None,
            events_tx: None,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.tick_rate);
        self.events_tx = Some(events.sender());
        self.reload();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            match events.next().await? {
                AppEvent::Key(key) => self.handle_key(key),
                AppEvent::Tick => self.toasts.retain(|t| !t.is_expired()),
                AppEvent::Resize(_, _) => {}
                AppEvent::PageLoaded { ticket, result } => self.on_page_loaded(ticket, result),
                AppEvent::LookupLoaded { generation, user_id, result } => {
                    self.on_lookup_loaded(generation, user_id, result)
                }
                AppEvent::BatchDone(outcome) => self.on_batch_done(outcome),
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(cmd) = map_key_to_command(key, self.mode) {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.running = false,
            Command::SelectNext => self.select_next(),
            Command::SelectPrev => self.select_prev(),
            Command::JumpTop => {
                if !self.feed.items().is_empty() {
                    self.selected = Some(0);
                }
            }
            Command::JumpBottom => {
                let len = self.feed.items().len();
                if len > 0 {
                    self.selected = Some(len - 1);
                    self.maybe_fetch_more();
                }
            }
            Command::ToggleChecked => self.toggle_selected(),
            Command::EnterSearch => self.mode = InputMode::Search,
            Command::DeleteChecked => {
                // With nothing checked this stays a silent no-op.
                if self.feed.request_delete() {
                    self.mode = InputMode::ConfirmDelete;
                }
            }
            Command::Reload => self.reload(),
            Command::ShowActivity => self.mode = InputMode::Activity,
            Command::CloseActivity => self.mode = InputMode::Normal,
            Command::SearchInput(c) => {
                let mut term = self.feed.search_term().to_string();
                term.push(c);
                self.feed.set_search_term(term);
            }
            Command::SearchBackspace => {
                let mut term = self.feed.search_term().to_string();
                term.pop();
                self.feed.set_search_term(term);
            }
            Command::SubmitSearch => self.submit_search(),
            Command::LeaveSearch => self.mode = InputMode::Normal,
            Command::ConfirmYes => {
                self.mode = InputMode::Normal;
                let ids = self.feed.confirm_delete();
                if !ids.is_empty() {
                    self.spawn_batch_delete(ids);
                }
            }
            Command::ConfirmNo => {
                self.feed.cancel_delete();
                self.mode = InputMode::Normal;
            }
        }
    }

    fn select_next(&mut self) {
        let len = self.feed.items().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        });
        self.maybe_fetch_more();
    }

    fn select_prev(&mut self) {
        if self.feed.items().is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        });
    }

    /// The scroll-reached-bottom intent: once the selection is within
    /// `prefetch_rows` of the end, ask for the next page. The feed decides
    /// whether one is actually due.
    fn maybe_fetch_more(&mut self) {
        let len = self.feed.items().len();
        let Some(selected) = self.selected else { return };
        if len.saturating_sub(selected) <= self.prefetch_rows + 1 {
            if let Some(ticket) = self.feed.request_next_page() {
                self.spawn_page_fetch(ticket);
            }
        }
    }

    fn toggle_selected(&mut self) {
        let Some(selected) = self.selected else { return };
        let Some(post) = self.feed.items().get(selected) else { return };
        let id = post.id;
        if self.feed.toggle_checked(id).is_none() {
            self.toasts.push(ToastMessage::info("Selection works on the full listing only"));
        }
    }

    fn submit_search(&mut self) {
        match self.feed.submit_search() {
            SearchSubmit::Lookup { user_id, generation } => {
                self.mode = InputMode::Normal;
                self.lookup_user = Some(user_id);
                self.selected = None;
                self.load_error = None;
                self.spawn_lookup(user_id, generation);
            }
            SearchSubmit::Reset(ticket) => {
                self.mode = InputMode::Normal;
                self.lookup_user = None;
                self.selected = None;
                self.load_error = None;
                self.spawn_page_fetch(ticket);
            }
            SearchSubmit::Invalid => {
                let err = GatewayError::InvalidQuery(self.feed.search_term().to_string());
                warn!(%err, "rejected search input");
                self.toasts.push(ToastMessage::error(err.to_string()));
            }
        }
    }

    /// Reset to the initial state and replay the first page load.
    fn reload(&mut self) {
        self.lookup_user = None;
        self.selected = None;
        self.load_error = None;
        let ticket = self.feed.reset();
        self.spawn_page_fetch(ticket);
    }

    fn on_page_loaded(&mut self, ticket: FetchTicket, result: Result<PostPage, GatewayError>) {
        match result {
            Ok(page) => {
                self.feed.apply_page(ticket, page);
                self.load_error = None;
                self.sync_selection();
            }
            Err(err) => {
                warn!(%err, cursor = ticket.cursor, "page fetch failed");
                self.feed.page_failed(ticket);
                if self.feed.items().is_empty() {
                    self.load_error = Some(err.to_string());
                }
                self.toasts.push(ToastMessage::error(format!("Fetch failed: {err}")));
            }
        }
    }

    fn on_lookup_loaded(&mut self, generation: u64, user_id: i64, result: Result<Vec<Post>, GatewayError>) {
        match result {
            Ok(posts) => {
                self.feed.apply_search_results(generation, posts);
                self.load_error = None;
                self.sync_selection();
            }
            Err(err) => {
                warn!(%err, user_id, "user lookup failed");
                self.feed.search_failed(generation);
                self.toasts.push(ToastMessage::error(format!("Lookup failed: {err}")));
            }
        }
    }

    fn on_batch_done(&mut self, outcome: BatchOutcome) {
        if outcome.all_ok() {
            self.toasts.push(ToastMessage::success(format!("Deleted {} posts", outcome.deleted)));
        } else {
            self.toasts
                .push(ToastMessage::error(format!("Deleted {}, {} failed", outcome.deleted, outcome.failed)));
        }
        self.reload();
    }

    fn sync_selection(&mut self) {
        let len = self.feed.items().len();
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (Some(i), _) if i >= len => Some(len - 1),
            (Some(i), _) => Some(i),
            (None, _) => Some(0),
        };
    }

    fn spawn_page_fetch(&self, ticket: FetchTicket) {
        let Some(tx) = self.events_tx.clone() else { return };
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client.list_posts(ticket.cursor).await;
            let _ = tx.send(AppEvent::PageLoaded { ticket, result });
        });
    }

    fn spawn_lookup(&self, user_id: i64, generation: u64) {
        let Some(tx) = self.events_tx.clone() else { return };
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client.posts_by_user(user_id).await;
            let _ = tx.send(AppEvent::LookupLoaded { generation, user_id, result });
        });
    }

    fn spawn_batch_delete(&self, ids: Vec<i64>) {
        let Some(tx) = self.events_tx.clone() else { return };
        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome = delete_batch(&client, &ids).await;
            let _ = tx.send(AppEvent::BatchDone(outcome));
        });
    }

    fn render(&self, frame: &mut Frame) {
        let [search_area, list_area, status_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        SearchBarWidget { term: self.feed.search_term(), active: self.mode == InputMode::Search }
            .render(frame, search_area);

        let rows: Vec<PostRow> =
            self.feed.items().iter().map(|p| post_row(p, self.feed.is_checked(p.id))).collect();
        let lookup = self.lookup_user.filter(|_| self.feed.is_search_active()).map(|u| u.to_string());
        PostListWidget {
            rows: &rows,
            selected: self.selected,
            loading: self.feed.is_loading(),
            error: self.load_error.as_deref(),
            lookup_user: lookup.as_deref(),
            last_page: self.feed.is_last_page(),
            checked_count: self.feed.checked().len(),
        }
        .render(frame, list_area);

        StatusBarWidget {
            mode: mode_label(self.mode),
            hints: mode_hints(self.mode),
            host: self.client.host(),
            loaded: self.feed.items().len(),
            page: self.feed.cursor(),
        }
        .render(frame, status_area);

        match self.mode {
            InputMode::ConfirmDelete => {
                let count = self.feed.checked().len();
                let message = format!(
                    "Deleting cannot be undone.\nDelete {count} selected post{}?",
                    if count == 1 { "" } else { "s" }
                );
                ConfirmDialogWidget { message: &message }.render(frame, frame.area());
            }
            InputMode::Activity => {
                let lines = app_log::recent_lines(200);
                ActivityWidget { lines: &lines }.render(frame, frame.area());
            }
            _ => {}
        }

        ToastWidget { toasts: &self.toasts }.render(frame, frame.area());
    }
}

fn post_row(post: &Post, checked: bool) -> PostRow {
    PostRow {
        checked,
        id: post.id.to_string(),
        author: post.user_id.to_string(),
        date: post.short_date().to_string(),
        place: post.place_name.clone(),
        likes: post.like_count.to_string(),
        comments: post.comment_count.to_string(),
    }
}

fn mode_label(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Normal => "normal",
        InputMode::Search => "search",
        InputMode::ConfirmDelete => "confirm",
        InputMode::Activity => "activity",
    }
}

fn mode_hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Normal => &[
            ("space", "Check"),
            ("/", "Search"),
            ("d", "Delete"),
            ("r", "Reload"),
            ("L", "Activity"),
            ("q", "Quit"),
        ],
        InputMode::Search => &[("Enter", "Submit"), ("Esc", "Back")],
        InputMode::ConfirmDelete => &[("y", "Delete"), ("n", "Keep")],
        InputMode::Activity => &[("Esc", "Close")],
    }
}
