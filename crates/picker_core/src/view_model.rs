use crate::{BindingId, Displacement, Filter, LoadState, RecordId, ThumbnailId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckPhase {
    #[default]
    Idle,
    Displaying,
    Dragging,
    /// Exit animation in flight.
    Deciding,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub load: LoadState,
    pub filter: Filter,
    pub categories: Vec<String>,
    pub deck: DeckView,
    pub thumbnails: Vec<ThumbnailView>,
    pub selection_count: usize,
    pub capacity: usize,
    pub confirm_visible: bool,
    pub status: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckView {
    pub phase: DeckPhase,
    pub position: Option<usize>,
    pub total: usize,
    pub binding: Option<BindingId>,
    pub card: Option<CardView>,
    pub drag: Option<Displacement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub record_id: RecordId,
    pub name: String,
    pub photo: String,
    pub meta: String,
    pub description: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub thumb: ThumbnailId,
    pub record_id: RecordId,
    pub name: String,
    pub photo: String,
}
