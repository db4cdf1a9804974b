use picker_core::deck::rotation_degrees;
use picker_core::{AppViewModel, DeckPhase, Decision, Direction, Effect, Filter, LoadState, SelectionChange};

/// Text frame for the current view.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let filter = match &view.filter {
        Filter::All => "All Categories".to_string(),
        Filter::Category(category) => category.clone(),
    };
    let load = match view.load {
        LoadState::NotStarted => "press `begin` to start",
        LoadState::Fetching => "loading",
        LoadState::Loaded => "ready",
        LoadState::Failed => "unavailable",
    };
    lines.push(format!(
        "== Restaurants [{filter}] ({load}) selected {}/{}",
        view.selection_count, view.capacity
    ));

    match (&view.deck.card, view.deck.position) {
        (Some(card), Some(position)) => {
            let mark = if card.selected { " *" } else { "" };
            lines.push(format!(
                "  card {}/{}: {}{mark}",
                position + 1,
                view.deck.total,
                card.name
            ));
            lines.push(format!("    {}", card.meta));
            if !card.description.is_empty() {
                lines.push(format!("    {}", card.description));
            }
            match (view.deck.phase, view.deck.drag) {
                (DeckPhase::Dragging, Some(drag)) => lines.push(format!(
                    "    dragging dx={} dy={} rotate={:.1}deg",
                    drag.dx,
                    drag.dy,
                    rotation_degrees(drag.dx)
                )),
                (DeckPhase::Deciding, _) => lines.push("    (leaving...)".to_string()),
                _ => {}
            }
        }
        _ if view.load == LoadState::Loaded || view.load == LoadState::Failed => {
            lines.push("  (no more cards)".to_string());
        }
        _ => {}
    }

    if !view.thumbnails.is_empty() {
        let thumbs: Vec<String> = view
            .thumbnails
            .iter()
            .enumerate()
            .map(|(index, t)| format!("[{}] {}", index + 1, t.name))
            .collect();
        lines.push(format!("  thumbnails: {}", thumbs.join("  ")));
    }
    if view.confirm_visible {
        lines.push("  (type `confirm` to send your picks)".to_string());
    }
    if let Some(status) = &view.status {
        lines.push(format!("  > {status}"));
    }

    lines
}

/// One-line description of a signal worth showing to the user.
pub fn describe_effect(effect: &Effect) -> Option<String> {
    match effect {
        Effect::AnimateExit { direction, .. } => Some(match direction {
            Direction::Right => "  -> swiped right".to_string(),
            Direction::Left => "  <- swiped left".to_string(),
        }),
        Effect::CardExited {
            decision: Decision::Cancel,
            ..
        } => Some("  (card snaps back)".to_string()),
        Effect::SelectionChanged(SelectionChange::Added { name, .. }) => {
            Some(format!("  + {name}"))
        }
        Effect::SelectionChanged(SelectionChange::Removed { name }) => Some(format!("  - {name}")),
        Effect::HighlightCard { duration_ms, .. } => {
            Some(format!("  (highlighted for {duration_ms}ms)"))
        }
        Effect::CapacityExceeded { message, .. } | Effect::ValidationFailed { message } => {
            Some(format!("  ! {message}"))
        }
        Effect::SelectionConfirmed { names } => Some(format!("  You selected: {names}")),
        Effect::FetchFailed { .. } => Some("  ! Could not load restaurants.".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::{update, AppState, Msg};

    const CSV: &str = "h\nPho King,p.jpg,,Soup,Uptown,Blog,,,,Vietnamese\nTaco Haus,t.jpg,,Tacos,Downtown,Paper,,,,Mexican\n";

    #[test]
    fn renders_active_card_and_selection() {
        let (state, _) = update(AppState::new(), Msg::CatalogFetched { text: CSV.to_string() });
        let (state, _) = update(state, Msg::CardClicked);
        let lines = render(&state.view());

        assert_eq!(lines[0], "== Restaurants [All Categories] (ready) selected 1/4");
        assert_eq!(lines[1], "  card 1/2: Pho King *");
        assert_eq!(lines[2], "    Vietnamese | Uptown | Blog");
        assert!(lines.contains(&"  thumbnails: [1] Pho King".to_string()));
        assert!(lines.contains(&"  (type `confirm` to send your picks)".to_string()));
    }

    #[test]
    fn renders_exhausted_deck() {
        let (state, _) = update(
            AppState::new(),
            Msg::FilterApplied(Filter::Category("Thai".to_string())),
        );
        // Filtering before load is ignored.
        assert!(render(&state.view()).len() == 1);

        let (state, _) = update(state, Msg::CatalogFetched { text: CSV.to_string() });
        let (state, _) = update(state, Msg::FilterApplied(Filter::Category("Thai".to_string())));
        let lines = render(&state.view());
        assert!(lines.contains(&"  (no more cards)".to_string()));
        assert!(lines.contains(&"  > No more restaurants.".to_string()));
    }

    #[test]
    fn describes_user_visible_signals_only() {
        assert_eq!(
            describe_effect(&Effect::SelectionConfirmed {
                names: "A, B".to_string()
            }),
            Some("  You selected: A, B".to_string())
        );
        assert_eq!(describe_effect(&Effect::DeckExhausted), None);
    }
}
