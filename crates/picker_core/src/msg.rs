#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked to start browsing. Only the first request fetches.
    BeginClicked,
    /// Catalog text arrived.
    CatalogFetched { text: String },
    /// Catalog fetch failed.
    CatalogFetchFailed { message: String },
    /// User applied a filter from the filter panel.
    FilterApplied(crate::Filter),
    FilterCleared,
    /// Press or touch start on the active card.
    PointerDown {
        binding: crate::BindingId,
        x: i32,
        y: i32,
    },
    PointerMoved {
        binding: crate::BindingId,
        x: i32,
        y: i32,
    },
    PointerUp { binding: crate::BindingId },
    /// Platform aborted the gesture (touch cancel, pointer capture lost).
    PointerCancelled { binding: crate::BindingId },
    /// Exit animation completion signal.
    ExitAnimationFinished { token: crate::TransitionToken },
    /// Click on the active card toggles its selection.
    CardClicked,
    /// Click on a thumbnail jumps the deck back to that record.
    ThumbnailClicked { thumb: crate::ThumbnailId },
    /// Remove control on a thumbnail.
    ThumbnailRemoveClicked { thumb: crate::ThumbnailId },
    ConfirmClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
