use crate::{BindingId, Decision, Direction, RecordId, ThumbnailId, TransitionToken};

/// How long a jumped-to card stays highlighted.
pub const HIGHLIGHT_DURATION_MS: u64 = 1000;

/// Work and signals for the platform layer, in the order they must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the delimited-text catalog resource.
    FetchCatalog { source: String },
    /// The catalog could not be fetched; report on the operator channel.
    FetchFailed { message: String },
    BindGestures { binding: BindingId },
    UnbindGestures { binding: BindingId },
    CardEntered { record_id: RecordId, position: usize },
    /// Live drag feedback; rotation comes from `deck::rotation_degrees(dx)`.
    CardTransform { record_id: RecordId, dx: i32, dy: i32 },
    /// Drag released under the threshold; return the card to rest.
    CardReset { record_id: RecordId },
    CardExited { record_id: RecordId, decision: Decision },
    /// Play the exit animation, then send `Msg::ExitAnimationFinished { token }`.
    AnimateExit {
        record_id: RecordId,
        direction: Direction,
        token: TransitionToken,
    },
    SelectionChanged(SelectionChange),
    CreateThumbnail { thumb: ThumbnailId, record_id: RecordId },
    DestroyThumbnail { thumb: ThumbnailId },
    /// Bring the card into view and highlight it briefly.
    HighlightCard { record_id: RecordId, duration_ms: u64 },
    DeckExhausted,
    CapacityExceeded { max: usize, message: String },
    SelectionConfirmed { names: String },
    ValidationFailed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Added { record_id: RecordId, name: String },
    Removed { name: String },
}
