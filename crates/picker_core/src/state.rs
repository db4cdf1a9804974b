use crate::bridge::ThumbnailBridge;
use crate::deck::{Deck, DeckEvent, DeckState, Point};
use crate::effect::HIGHLIGHT_DURATION_MS;
use crate::selection::{AddOutcome, SelectionSet};
use crate::view_model::{AppViewModel, CardView, DeckPhase, DeckView, ThumbnailView};
use crate::{
    parse_catalog, BindingId, Catalog, Decision, Effect, Filter, Record, RecordId,
    SelectionChange, ThumbnailId, TransitionToken,
};

pub const DEFAULT_CATALOG_SOURCE: &str = "restaurants.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Fetching,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    source: String,
    load: LoadState,
    catalog: Catalog,
    filter: Filter,
    selection: SelectionSet,
    deck: Deck,
    thumbnails: ThumbnailBridge,
    dropped_rows: usize,
    status: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_source(DEFAULT_CATALOG_SOURCE)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            load: LoadState::NotStarted,
            catalog: Catalog::new(),
            filter: Filter::All,
            selection: SelectionSet::new(),
            deck: Deck::new(),
            thumbnails: ThumbnailBridge::new(),
            dropped_rows: 0,
            status: None,
            dirty: false,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn thumbnails(&self) -> &ThumbnailBridge {
        &self.thumbnails
    }

    /// Rows the parser discarded on the last load.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn view(&self) -> AppViewModel {
        let card = self.active_record_id().and_then(|record_id| {
            self.catalog.record(record_id).map(|record| CardView {
                record_id,
                name: record.name.clone(),
                photo: record.photo_1.clone(),
                meta: record.meta_line(),
                description: record.description_short.clone(),
                selected: self.selection.contains(&record.name),
            })
        });

        let (phase, drag) = match self.deck.state() {
            DeckState::Idle => (DeckPhase::Idle, None),
            DeckState::Displaying { .. } => (DeckPhase::Displaying, None),
            DeckState::Dragging { displacement, .. } => (DeckPhase::Dragging, Some(displacement)),
            DeckState::Deciding { .. } | DeckState::Advancing { .. } => (DeckPhase::Deciding, None),
        };

        AppViewModel {
            load: self.load,
            filter: self.filter.clone(),
            categories: self.catalog.categories(),
            deck: DeckView {
                phase,
                position: self.deck.active_position(),
                total: self.deck.len(),
                binding: self.deck.binding(),
                card,
                drag,
            },
            thumbnails: self
                .thumbnails
                .thumbnails()
                .iter()
                .map(|t| ThumbnailView {
                    thumb: t.id,
                    record_id: t.record_id,
                    name: t.name.clone(),
                    photo: t.photo.clone(),
                })
                .collect(),
            selection_count: self.selection.len(),
            capacity: self.selection.capacity(),
            confirm_visible: !self.selection.is_empty(),
            status: self.status.clone(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin(&mut self) -> Vec<Effect> {
        if self.load != LoadState::NotStarted {
            return Vec::new();
        }
        self.load = LoadState::Fetching;
        self.status = Some("Loading restaurants...".to_string());
        self.mark_dirty();
        vec![Effect::FetchCatalog {
            source: self.source.clone(),
        }]
    }

    pub(crate) fn catalog_fetched(&mut self, text: &str) -> Vec<Effect> {
        let parsed = parse_catalog(text);
        self.dropped_rows = parsed.dropped_rows;
        self.status = None;
        self.load_records(parsed.records)
    }

    pub(crate) fn catalog_fetch_failed(&mut self, message: String) -> Vec<Effect> {
        let mut effects = vec![Effect::FetchFailed { message }];
        effects.extend(self.load_records(Vec::new()));
        self.load = LoadState::Failed;
        self.status = Some("Could not load restaurants.".to_string());
        effects
    }

    /// Replace the catalog and reset filter, selection and deck.
    pub fn load_records(&mut self, records: Vec<Record>) -> Vec<Effect> {
        self.catalog.load(records);
        self.load = LoadState::Loaded;
        self.filter = Filter::All;
        self.mark_dirty();
        let mut effects = self.clear_selection();
        let events = self.deck.reset(self.catalog.filtered_len());
        self.push_deck_events(events, &mut effects);
        effects
    }

    /// Refilter the catalog. In-progress choices are discarded.
    pub fn apply_filter(&mut self, filter: Filter) -> Vec<Effect> {
        if self.load != LoadState::Loaded {
            return Vec::new();
        }
        self.catalog.apply_filter(|record| filter.matches(record));
        self.filter = filter;
        self.status = None;
        self.mark_dirty();
        let mut effects = self.clear_selection();
        let events = self.deck.reset(self.catalog.filtered_len());
        self.push_deck_events(events, &mut effects);
        effects
    }

    pub(crate) fn pointer_down(&mut self, binding: BindingId, at: Point) -> Vec<Effect> {
        if self.deck.press(binding, at) {
            self.mark_dirty();
        }
        Vec::new()
    }

    pub(crate) fn pointer_moved(&mut self, binding: BindingId, to: Point) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(event) = self.deck.drag(binding, to) {
            self.push_deck_events(vec![event], &mut effects);
        }
        effects
    }

    pub(crate) fn pointer_up(&mut self, binding: BindingId) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(event) = self.deck.release(binding) {
            self.push_deck_events(vec![event], &mut effects);
        }
        effects
    }

    pub(crate) fn pointer_cancelled(&mut self, binding: BindingId) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(event) = self.deck.cancel(binding) {
            self.push_deck_events(vec![event], &mut effects);
        }
        effects
    }

    pub(crate) fn exit_animation_finished(&mut self, token: TransitionToken) -> Vec<Effect> {
        let mut effects = Vec::new();
        let events = self.deck.finish_exit(token);
        self.push_deck_events(events, &mut effects);
        effects
    }

    /// Click variant: toggle the card on screen in the selection.
    pub(crate) fn toggle_active(&mut self) -> Vec<Effect> {
        let DeckState::Displaying { .. } = self.deck.state() else {
            return Vec::new();
        };
        let Some(record_id) = self.active_record_id() else {
            return Vec::new();
        };
        let Some(name) = self.catalog.record(record_id).map(|r| r.name.clone()) else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        if self.selection.contains(&name) {
            self.remove_selected(&name, &mut effects);
        } else {
            self.select(record_id, &mut effects);
        }
        effects
    }

    /// Thumbnail click: re-activate its record in the deck.
    pub(crate) fn jump_to_thumbnail(&mut self, thumb: ThumbnailId) -> Vec<Effect> {
        let Some(name) = self.thumbnails.get(thumb).map(|t| t.name.clone()) else {
            return Vec::new();
        };
        self.jump_to(&name)
    }

    /// Activate the record called `name`. No-op if it is not in the filtered set.
    pub fn jump_to(&mut self, name: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Some(position) = self.catalog.filtered_position(name) else {
            return effects;
        };
        let events = self.deck.jump_to(position);
        self.push_deck_events(events, &mut effects);
        if let Some(record_id) = self.catalog.filtered_id(position) {
            effects.push(Effect::HighlightCard {
                record_id,
                duration_ms: HIGHLIGHT_DURATION_MS,
            });
        }
        effects
    }

    pub(crate) fn remove_thumbnail(&mut self, thumb: ThumbnailId) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(name) = self.thumbnails.get(thumb).map(|t| t.name.clone()) {
            self.remove_selected(&name, &mut effects);
        }
        effects
    }

    /// Remove a record from the selection by name. No-op if absent.
    pub fn remove(&mut self, name: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.remove_selected(name, &mut effects);
        effects
    }

    pub(crate) fn confirm(&mut self) -> Vec<Effect> {
        self.mark_dirty();
        match self.selection.confirm() {
            Ok(names) => {
                self.status = Some(format!("You selected: {names}"));
                vec![Effect::SelectionConfirmed { names }]
            }
            Err(err) => {
                let message = err.to_string();
                self.status = Some(message.clone());
                vec![Effect::ValidationFailed { message }]
            }
        }
    }

    fn active_record_id(&self) -> Option<RecordId> {
        self.deck
            .active_position()
            .and_then(|position| self.catalog.filtered_id(position))
    }

    fn select(&mut self, record_id: RecordId, effects: &mut Vec<Effect>) {
        let Some(record) = self.catalog.record(record_id).cloned() else {
            return;
        };
        let name = record.name.clone();
        let thumb_source = record.clone();
        match self.selection.add(record) {
            Ok(AddOutcome::Added) => {
                self.mark_dirty();
                let thumb = self.thumbnails.create(record_id, &thumb_source);
                effects.push(Effect::SelectionChanged(SelectionChange::Added {
                    record_id,
                    name,
                }));
                effects.push(Effect::CreateThumbnail { thumb, record_id });
            }
            Ok(AddOutcome::AlreadyPresent) => {}
            Err(err) => {
                let message = err.to_string();
                self.status = Some(message.clone());
                self.mark_dirty();
                effects.push(Effect::CapacityExceeded {
                    max: self.selection.capacity(),
                    message,
                });
            }
        }
    }

    fn remove_selected(&mut self, name: &str, effects: &mut Vec<Effect>) {
        if self.selection.remove(name).is_none() {
            return;
        }
        self.mark_dirty();
        effects.push(Effect::SelectionChanged(SelectionChange::Removed {
            name: name.to_string(),
        }));
        if let Some(thumb) = self.thumbnails.destroy(name) {
            effects.push(Effect::DestroyThumbnail { thumb });
        }
    }

    fn clear_selection(&mut self) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self
            .selection
            .clear()
            .into_iter()
            .map(|record| Effect::SelectionChanged(SelectionChange::Removed { name: record.name }))
            .collect();
        effects.extend(
            self.thumbnails
                .clear()
                .into_iter()
                .map(|thumb| Effect::DestroyThumbnail { thumb }),
        );
        effects
    }

    fn push_deck_events(&mut self, events: Vec<DeckEvent>, effects: &mut Vec<Effect>) {
        for event in events {
            self.mark_dirty();
            match event {
                DeckEvent::Entered { position, binding } => {
                    self.status = None;
                    effects.push(Effect::BindGestures { binding });
                    if let Some(record_id) = self.catalog.filtered_id(position) {
                        effects.push(Effect::CardEntered {
                            record_id,
                            position,
                        });
                    }
                }
                DeckEvent::Left { binding, .. } => {
                    effects.push(Effect::UnbindGestures { binding });
                }
                DeckEvent::Moved {
                    position,
                    displacement,
                } => {
                    if let Some(record_id) = self.catalog.filtered_id(position) {
                        effects.push(Effect::CardTransform {
                            record_id,
                            dx: displacement.dx,
                            dy: displacement.dy,
                        });
                    }
                }
                DeckEvent::Released {
                    position,
                    decision,
                    direction,
                    token,
                } => {
                    let Some(record_id) = self.catalog.filtered_id(position) else {
                        continue;
                    };
                    effects.push(Effect::CardExited {
                        record_id,
                        decision,
                    });
                    match (direction, token) {
                        (Some(direction), Some(token)) => effects.push(Effect::AnimateExit {
                            record_id,
                            direction,
                            token,
                        }),
                        _ => effects.push(Effect::CardReset { record_id }),
                    }
                    // The swipe is committed before capacity is checked.
                    if decision == Decision::Select {
                        self.select(record_id, effects);
                    }
                }
                DeckEvent::Exhausted => {
                    effects.push(Effect::DeckExhausted);
                    self.status = Some("No more restaurants.".to_string());
                }
            }
        }
    }
}
