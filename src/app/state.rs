use crate::api::client::{ApiError, DashboardSource};
use crate::api::models::{Category, Place};
use crate::app::hit::{HitMap, Target};
use crate::app::loader::{LoadEvent, Loader};
use crate::app::router::{History, Navigator, Route};
use crate::app::search::SearchState;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLayout {
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Places,
}

pub trait Keyed {
    fn key(&self) -> u64;
}

impl Keyed for Category {
    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for Place {
    fn key(&self) -> u64 {
        self.id
    }
}

/// One fetched collection plus an id -> row index over it.
#[derive(Debug)]
pub struct Slice<T> {
    items: Vec<T>,
    state: SliceState,
    rows: IndexMap<u64, usize>,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: SliceState::Pending,
            rows: IndexMap::new(),
        }
    }
}

impl<T: Keyed> Slice<T> {
    fn reset(&mut self) {
        self.items.clear();
        self.rows.clear();
        self.state = SliceState::Pending;
    }

    /// Stores a fetch result. On failure the previous items are kept.
    fn settle(&mut self, result: Result<Vec<T>, ApiError>, what: &str) {
        match result {
            Ok(items) => {
                log::info!("loaded {} {what}", items.len());
                self.rows = IndexMap::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    self.rows.entry(item.key()).or_insert(i);
                }
                self.items = items;
                self.state = SliceState::Loaded;
            }
            Err(e) => {
                log::error!("Error fetching {what}: {e}");
                self.state = SliceState::Failed;
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> SliceState {
        self.state
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.position(id).and_then(|i| self.items.get(i))
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.rows.get(&id).copied()
    }

    fn first_id(&self) -> Option<u64> {
        self.items.first().map(Keyed::key)
    }

    /// Id of the item `delta` rows away from `from`, clamped to the ends.
    fn step(&self, from: Option<u64>, delta: isize) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len() as isize;
        let cur = from.and_then(|id| self.position(id)).unwrap_or(0) as isize;
        let idx = (cur + delta).clamp(0, len - 1) as usize;
        self.items.get(idx).map(Keyed::key)
    }
}

#[derive(Debug)]
pub struct App {
    pub status: String,
    pub history: History,
    pub categories: Slice<Category>,
    pub places: Slice<Place>,
    pub layout: CategoryLayout,
    pub focus: Focus,
    pub selected_category: Option<u64>,
    pub selected_place: Option<u64>,
    pub search: SearchState,
    pub hits: HitMap,
    pub spinner_frame: usize,
    generation: u64,
    loader: Option<Loader>,
    load_tx: Option<mpsc::UnboundedSender<LoadEvent>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            status: "Starting".into(),
            history: History::default(),
            categories: Slice::default(),
            places: Slice::default(),
            layout: CategoryLayout::Collapsed,
            focus: Focus::Places,
            selected_category: None,
            selected_place: None,
            search: SearchState::default(),
            hits: HitMap::default(),
            spinner_frame: 0,
            generation: 0,
            loader: None,
            load_tx: None,
        }
    }

    pub fn set_load_sender(&mut self, tx: mpsc::UnboundedSender<LoadEvent>) {
        self.load_tx = Some(tx);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // --- Mount / load lifecycle ---

    /// Starts a fresh load cycle. Results of earlier mounts are ignored from now on.
    pub fn mount<S: DashboardSource>(&mut self, source: Arc<S>) {
        self.unmount();
        self.generation += 1;
        self.categories.reset();
        self.places.reset();
        self.layout = CategoryLayout::Collapsed;
        self.selected_category = None;
        self.selected_place = None;
        self.search.refresh(self.places.items());
        self.status = "Loading…".into();

        match &self.load_tx {
            Some(tx) => {
                self.loader = Some(Loader::mount(source, self.generation, tx.clone()));
            }
            None => log::warn!("mount without a load channel; nothing will be fetched"),
        }
    }

    /// Cancels in-flight fetches of the current mount.
    pub fn unmount(&mut self) {
        if let Some(mut loader) = self.loader.take() {
            if !loader.is_finished() {
                log::debug!("cancelling in-flight fetches of mount {}", self.generation);
            }
            loader.cancel();
        }
    }

    /// Spinner in the category region is shown while this is true.
    pub fn loading(&self) -> bool {
        self.categories.state() == SliceState::Pending || self.places.state() == SliceState::Pending
    }

    pub fn apply(&mut self, event: LoadEvent) {
        if event.generation() != self.generation() {
            log::debug!(
                "discarding result of stale mount {} (current {})",
                event.generation(),
                self.generation()
            );
            return;
        }

        match event {
            LoadEvent::Categories { result, .. } => {
                self.categories.settle(result, "categories");
                self.selected_category = self.keep_or_first(self.selected_category, Focus::Categories);
            }
            LoadEvent::Places { result, .. } => {
                self.places.settle(result, "places");
                self.selected_place = self.keep_or_first(self.selected_place, Focus::Places);
                self.search.refresh(self.places.items());
            }
        }

        if !self.loading() {
            self.loader = None;
            self.status = "Ready".into();
        }
    }

    fn keep_or_first(&self, current: Option<u64>, which: Focus) -> Option<u64> {
        match which {
            Focus::Categories => current
                .filter(|id| self.categories.position(*id).is_some())
                .or_else(|| self.categories.first_id()),
            Focus::Places => current
                .filter(|id| self.places.position(*id).is_some())
                .or_else(|| self.places.first_id()),
        }
    }

    // --- Category view ---

    pub fn toggle_show_all(&mut self) {
        self.layout = match self.layout {
            CategoryLayout::Collapsed => CategoryLayout::Expanded,
            CategoryLayout::Expanded => CategoryLayout::Collapsed,
        };
    }

    pub fn show_all_label(&self) -> &'static str {
        match self.layout {
            CategoryLayout::Collapsed => "Show all",
            CategoryLayout::Expanded => "Show less",
        }
    }

    // --- Selection ---

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Categories => Focus::Places,
            Focus::Places => Focus::Categories,
        };
    }

    /// Moves within the focused collection. Vertical moves in the grid jump a whole row.
    pub fn move_selection(&mut self, delta: isize, vertical: bool) {
        match self.focus {
            Focus::Categories => {
                let step = match (vertical, self.layout) {
                    (true, CategoryLayout::Expanded) => delta * GRID_COLUMNS as isize,
                    (true, CategoryLayout::Collapsed) => return,
                    (false, _) => delta,
                };
                self.selected_category = self.categories.step(self.selected_category, step);
            }
            Focus::Places => {
                if vertical {
                    self.selected_place = self.places.step(self.selected_place, delta);
                }
            }
        }
    }

    pub fn selected_category_index(&self) -> Option<usize> {
        self.selected_category.and_then(|id| self.categories.position(id))
    }

    pub fn selected_place_index(&self) -> Option<usize> {
        self.selected_place.and_then(|id| self.places.position(id))
    }

    // --- Navigation ---

    pub fn route(&self) -> Route {
        self.history.current()
    }

    pub fn navigate(&mut self, route: Route) {
        if route == Route::Search {
            self.search.reset(self.places.items());
        }
        self.history.push(route);
    }

    /// Returns `false` when there is nowhere to go back to.
    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    pub fn activate(&mut self, target: Target) {
        match target {
            Target::SearchBar => self.navigate(Route::Search),
            Target::Help => self.navigate(Route::Contact),
            Target::ShowAllToggle => self.toggle_show_all(),
            Target::CategoryCard(id) => {
                self.selected_category = Some(id);
                self.navigate(Route::CategoryDetail(id));
            }
            Target::PlaceRow(id) => {
                self.selected_place = Some(id);
                self.navigate(Route::PlaceDetail(id));
            }
            Target::PlaceGallery(id) => {
                self.selected_place = Some(id);
                self.navigate(Route::PhotoGallery(id));
            }
            Target::Back => {
                self.back();
            }
        }
    }

    /// Dispatches a click to the innermost target under the pointer.
    pub fn click(&mut self, x: u16, y: u16) -> bool {
        match self.hits.target_at(x, y) {
            Some(target) => {
                self.activate(target);
                true
            }
            None => false,
        }
    }

    pub fn activate_focused(&mut self) {
        let target = match self.focus {
            Focus::Categories => self.selected_category.map(Target::CategoryCard),
            Focus::Places => self.selected_place.map(Target::PlaceRow),
        };
        if let Some(t) = target {
            self.activate(t);
        }
    }

    pub fn open_gallery(&mut self) {
        if let Some(id) = self.selected_place {
            self.activate(Target::PlaceGallery(id));
        }
    }

    pub fn open_search_result(&mut self) {
        if let Some(id) = self.search.selected() {
            // The modal closes in favour of the detail screen.
            self.history.back();
            self.selected_place = Some(id);
            self.navigate(Route::PlaceDetail(id));
        }
    }

    pub fn tick(&mut self) {
        if self.loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
