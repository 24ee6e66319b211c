use tracing::{debug, warn};

use crate::post::{Post, PostPage};

/// Identifies the fetch a page response belongs to. Minted when the feed
/// decides to load; a completion whose ticket no longer matches the live
/// state is dropped instead of overwriting newer intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub cursor: u32,
}

/// Outcome of submitting the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSubmit {
    /// Non-empty numeric term: look the author up, pagination frozen.
    Lookup { user_id: i64, generation: u64 },
    /// Empty term: back to the paginated listing from the first page.
    Reset(FetchTicket),
    /// Non-empty but not an integer. No call is made.
    Invalid,
}

/// State of the incremental post listing: accumulated items, page cursor,
/// search term, checked ids and the pending-confirmation flag. All mutation
/// goes through the transition methods below; the owner performs the gateway
/// calls the returned tickets describe and feeds results back in.
pub struct PostFeed {
    items: Vec<Post>,
    cursor: u32,
    generation: u64,
    loading: bool,
    last_page: bool,
    search_term: String,
    search_active: bool,
    checked: Vec<i64>,
    confirming: bool,
}

impl PostFeed {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            generation: 0,
            loading: false,
            last_page: false,
            search_term: String::new(),
            search_active: false,
            checked: Vec::new(),
            confirming: false,
        }
    }

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_last_page(&self) -> bool {
        self.last_page
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn checked(&self) -> &[i64] {
        &self.checked
    }

    pub fn is_checked(&self, id: i64) -> bool {
        self.checked.contains(&id)
    }

    fn ticket(&self) -> FetchTicket {
        FetchTicket { generation: self.generation, cursor: self.cursor }
    }

    /// Back to the initial state, minting the ticket for a fresh first page.
    /// Covers startup, the empty-search reset and the reload after a delete
    /// batch.
    pub fn reset(&mut self) -> FetchTicket {
        self.generation += 1;
        self.cursor = 0;
        self.items.clear();
        self.checked.clear();
        self.search_term.clear();
        self.search_active = false;
        self.last_page = false;
        self.loading = true;
        self.ticket()
    }

    /// The sole pagination trigger: advance the cursor when the viewport
    /// bottoms out. Suppressed past the terminal page, while a fetch is in
    /// flight, while lookup results are displayed, and whenever the search
    /// box is non-empty.
    pub fn request_next_page(&mut self) -> Option<FetchTicket> {
        if self.last_page || self.loading || self.search_active || !self.search_term.is_empty() {
            return None;
        }
        self.cursor += 1;
        self.loading = true;
        Some(self.ticket())
    }

    /// Folds a fetched page in, preserving arrival order. Ids already present
    /// are skipped, keeping the accumulated list duplicate-free even against
    /// a backend that re-serves an item across pages.
    pub fn apply_page(&mut self, ticket: FetchTicket, page: PostPage) {
        if !self.accepts(&ticket) {
            debug!(?ticket, generation = self.generation, cursor = self.cursor, "discarding stale page");
            return;
        }
        self.loading = false;
        self.last_page = page.last;
        for post in page.items {
            if self.items.iter().any(|p| p.id == post.id) {
                warn!(id = post.id, "backend re-served a post across pages, skipping");
                continue;
            }
            self.items.push(post);
        }
    }

    /// A page fetch failed. The list stays as it was; the cursor rolls back
    /// to its pre-increment value so the next scroll retries the same page
    /// instead of skipping it.
    pub fn page_failed(&mut self, ticket: FetchTicket) {
        if !self.accepts(&ticket) {
            return;
        }
        self.loading = false;
        self.cursor = ticket.cursor.saturating_sub(1);
    }

    fn accepts(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && ticket.cursor == self.cursor
    }

    /// Search submission. An empty term resets to the paginated listing; a
    /// numeric term freezes pagination and asks for a lookup; anything else
    /// is rejected without touching the list. Entering search mode drops the
    /// checked ids, since they point into the list being replaced.
    pub fn submit_search(&mut self) -> SearchSubmit {
        let term = self.search_term.trim();
        if term.is_empty() {
            return SearchSubmit::Reset(self.reset());
        }
        match term.parse::<i64>() {
            Ok(user_id) => {
                self.generation += 1;
                self.search_active = true;
                self.loading = true;
                self.checked.clear();
                SearchSubmit::Lookup { user_id, generation: self.generation }
            }
            Err(_) => SearchSubmit::Invalid,
        }
    }

    /// Replaces the list with a lookup result. An empty result clears the
    /// display, which is how "no posts by that user" reads.
    pub fn apply_search_results(&mut self, generation: u64, posts: Vec<Post>) {
        if generation != self.generation || !self.search_active {
            debug!(generation, current = self.generation, "discarding stale lookup");
            return;
        }
        self.loading = false;
        self.items = posts;
    }

    pub fn search_failed(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
    }

    /// Checkbox toggle. Returns the new checked state of `id`. Rejected while
    /// search results are displayed, where deletion is undefined.
    pub fn toggle_checked(&mut self, id: i64) -> Option<bool> {
        if self.search_active {
            return None;
        }
        if let Some(pos) = self.checked.iter().position(|&c| c == id) {
            self.checked.remove(pos);
            Some(false)
        } else {
            self.checked.push(id);
            Some(true)
        }
    }

    /// Asks for the confirmation prompt. With nothing checked this is a
    /// no-op and no prompt is shown.
    pub fn request_delete(&mut self) -> bool {
        if self.checked.is_empty() {
            return false;
        }
        self.confirming = true;
        true
    }

    /// Confirmation dismissed: list and checked ids stay untouched.
    pub fn cancel_delete(&mut self) {
        self.confirming = false;
    }

    /// Confirmation accepted: hands back the ids to delete, in the order they
    /// were checked. The checked list itself is cleared by the reload that
    /// follows the batch.
    pub fn confirm_delete(&mut self) -> Vec<i64> {
        if !self.confirming {
            return Vec::new();
        }
        self.confirming = false;
        self.checked.clone()
    }
}

impl Default for PostFeed {
    fn default() -> Self {
        Self::new()
    }
}
