use std::sync::mpsc::Sender;

use tracing::debug;

use crate::api::ImageRecord;
use crate::fetch::{Debouncer, FetchCompletion, FetchCoordinator, FetchDecision, FetchOutcome};
use crate::store::gallery::GalleryIntent;
use crate::store::{AppIntent, Store};
use crate::ui::events::AppEvent;
use crate::ui::sort::{sorted_by, SortField};

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Grid,
    Search,
    SortPanel,
}

/// Aggregate of the store, the fetch coordinator, and the view-local
/// state (search buffer, sort choice, selection, modal, signals).
///
/// All mutation happens on the single UI thread; fetch tasks only talk
/// back through [`AppEvent::Fetch`].
pub struct App {
    store: Store,
    coordinator: FetchCoordinator,
    debouncer: Debouncer,
    events_tx: Sender<AppEvent>,
    page_size: usize,
    should_quit: bool,
    focus: Focus,
    search_input: String,
    sort_field: SortField,
    sort_cursor: usize,
    selected_card: usize,
    modal: Option<ImageRecord>,
    loading: bool,
    exhausted: bool,
    tick: u64,
}

impl App {
    pub fn new(
        store: Store,
        coordinator: FetchCoordinator,
        debouncer: Debouncer,
        events_tx: Sender<AppEvent>,
        page_size: usize,
    ) -> Self {
        let search_input = store.state().gallery.category.clone();
        Self {
            store,
            coordinator,
            debouncer,
            events_tx,
            page_size,
            should_quit: false,
            focus: Focus::Grid,
            search_input,
            sort_field: SortField::default(),
            sort_cursor: 0,
            selected_card: 0,
            modal: None,
            loading: false,
            exhausted: false,
            tick: 0,
        }
    }

    /// Kick off the fetch for the rehydrated or default key.
    pub fn start(&mut self) {
        self.ensure_current_page();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Spinner frame counter.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// True when the current page returned no further results (or the
    /// last fetch for it failed).
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn category(&self) -> String {
        self.store.state().gallery.category
    }

    pub fn page(&self) -> u32 {
        self.store.state().gallery.page
    }

    /// Current page records in the selected sort order.
    pub fn sorted_records(&self) -> Vec<ImageRecord> {
        let gallery = self.store.state().gallery;
        let records = gallery.current_records().unwrap_or(&[]);
        sorted_by(records, self.sort_field)
    }

    // ---- fetch coordination -------------------------------------------

    /// Consult the cache for the current key and fetch on a miss.
    fn ensure_current_page(&mut self) {
        let gallery = self.store.state().gallery;
        match self.coordinator.ensure_current_page(&gallery) {
            FetchDecision::Started => {
                self.loading = true;
            }
            FetchDecision::CacheHit => {
                self.loading = false;
                // An empty cached page is a remembered "no more results".
                self.exhausted = gallery
                    .current_records()
                    .is_some_and(<[ImageRecord]>::is_empty);
            }
        }
        self.clamp_selection();
    }

    /// Apply a fetch completion. The cache was already updated by the
    /// fetch task; only the signals for the current view are decided
    /// here. Stale completions (key no longer current) change nothing.
    pub fn on_fetch_complete(&mut self, completion: FetchCompletion) {
        let gallery = self.store.state().gallery;
        if completion.category != gallery.category || completion.page != gallery.page {
            debug!(
                category = %completion.category,
                page = completion.page,
                "stale fetch completion, cache updated but view unchanged"
            );
            return;
        }

        self.loading = false;
        self.exhausted = !matches!(completion.outcome, FetchOutcome::Results(_));
        self.clamp_selection();
    }

    // ---- pagination ---------------------------------------------------

    pub fn can_prev(&self) -> bool {
        self.page() > 1
    }

    /// Next is allowed only when the current page is full; a short page
    /// means the result set ends here.
    pub fn can_next(&self) -> bool {
        let gallery = self.store.state().gallery;
        gallery
            .current_records()
            .is_some_and(|records| records.len() >= self.page_size)
    }

    pub fn prev_page(&mut self) {
        if !self.can_prev() {
            return;
        }
        let page = self.page() - 1;
        self.store
            .dispatch(AppIntent::Gallery(GalleryIntent::SetPage(page)));
        self.ensure_current_page();
    }

    pub fn next_page(&mut self) {
        if !self.can_next() {
            return;
        }
        let page = self.page() + 1;
        self.store
            .dispatch(AppIntent::Gallery(GalleryIntent::SetPage(page)));
        self.ensure_current_page();
    }

    // ---- category search ----------------------------------------------

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn on_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
        self.schedule_commit();
    }

    pub fn on_search_backspace(&mut self) {
        self.search_input.pop();
        self.schedule_commit();
    }

    /// Restart the quiet period with the current buffer; a following
    /// keystroke cancels this commit.
    fn schedule_commit(&mut self) {
        let value = self.search_input.clone();
        let tx = self.events_tx.clone();
        self.debouncer.schedule(move || {
            let _ = tx.send(AppEvent::CategoryCommitted(value));
        });
    }

    /// Commit the buffer immediately, skipping the quiet period.
    pub fn commit_search_now(&mut self) {
        self.debouncer.cancel();
        self.on_category_committed(self.search_input.clone());
    }

    pub fn on_category_committed(&mut self, category: String) {
        if category.trim().is_empty() {
            return;
        }
        self.store
            .dispatch(AppIntent::Gallery(GalleryIntent::SetCategory(category)));
        self.selected_card = 0;
        self.ensure_current_page();
    }

    /// CLI override applied before the event loop starts.
    pub fn override_category(&mut self, category: String) {
        self.search_input = category.clone();
        self.store
            .dispatch(AppIntent::Gallery(GalleryIntent::SetCategory(category)));
    }

    // ---- grid selection and modal -------------------------------------

    pub fn selected_card(&self) -> usize {
        self.selected_card
    }

    pub fn move_selection(&mut self, dx: i64, dy: i64) {
        let len = self.sorted_records().len();
        if len == 0 {
            return;
        }
        let target = self.selected_card as i64 + dx + dy * GRID_COLUMNS as i64;
        self.selected_card = target.clamp(0, len as i64 - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.sorted_records().len();
        self.selected_card = self.selected_card.min(len.saturating_sub(1));
    }

    pub fn open_modal(&mut self) {
        if let Some(record) = self.sorted_records().get(self.selected_card) {
            self.modal = Some(record.clone());
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn modal(&self) -> Option<&ImageRecord> {
        self.modal.as_ref()
    }

    // ---- sort panel ----------------------------------------------------

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_cursor(&self) -> usize {
        self.sort_cursor
    }

    /// Open the panel with the cursor on the active field.
    pub fn open_sort_panel(&mut self) {
        self.sort_cursor = SortField::all()
            .iter()
            .position(|field| *field == self.sort_field)
            .unwrap_or(0);
        self.focus = Focus::SortPanel;
    }

    pub fn move_sort_cursor(&mut self, delta: i64) {
        let len = SortField::all().len() as i64;
        let target = (self.sort_cursor as i64 + delta).rem_euclid(len);
        self.sort_cursor = target as usize;
    }

    pub fn apply_sort_selection(&mut self) {
        self.sort_field = SortField::all()[self.sort_cursor];
        self.clamp_selection();
    }
}
