use crate::deck::Point;
use crate::{AppState, Effect, Filter, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::BeginClicked => state.begin(),
        Msg::CatalogFetched { text } => state.catalog_fetched(&text),
        Msg::CatalogFetchFailed { message } => state.catalog_fetch_failed(message),
        Msg::FilterApplied(filter) => state.apply_filter(filter),
        Msg::FilterCleared => state.apply_filter(Filter::All),
        Msg::PointerDown { binding, x, y } => state.pointer_down(binding, Point::new(x, y)),
        Msg::PointerMoved { binding, x, y } => state.pointer_moved(binding, Point::new(x, y)),
        Msg::PointerUp { binding } => state.pointer_up(binding),
        Msg::PointerCancelled { binding } => state.pointer_cancelled(binding),
        Msg::ExitAnimationFinished { token } => state.exit_animation_finished(token),
        Msg::CardClicked => state.toggle_active(),
        Msg::ThumbnailClicked { thumb } => state.jump_to_thumbnail(thumb),
        Msg::ThumbnailRemoveClicked { thumb } => state.remove_thumbnail(thumb),
        Msg::ConfirmClicked => state.confirm(),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
