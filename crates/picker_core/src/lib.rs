//! Picker core: record parsing and the pure swipe/selection state machine.
mod bridge;
mod catalog;
pub mod deck;
mod effect;
mod msg;
mod parse;
mod record;
mod selection;
mod state;
mod update;
mod view_model;

pub use bridge::{Thumbnail, ThumbnailBridge, ThumbnailId};
pub use catalog::{Catalog, Filter};
pub use deck::{
    BindingId, Deck, DeckEvent, DeckState, Decision, Direction, Displacement, Point,
    TransitionToken, DECISION_THRESHOLD,
};
pub use effect::{Effect, SelectionChange, HIGHLIGHT_DURATION_MS};
pub use msg::Msg;
pub use parse::{
    parse_catalog, parse_catalog_with, split_fields, ParseOptions, ParsedCatalog, MIN_FIELDS,
};
pub use record::{Record, RecordId};
pub use selection::{AddOutcome, ConfirmError, SelectionError, SelectionSet, MAX_SELECTION};
pub use state::{AppState, LoadState, DEFAULT_CATALOG_SOURCE};
pub use update::update;
pub use view_model::{AppViewModel, CardView, DeckPhase, DeckView, ThumbnailView};
