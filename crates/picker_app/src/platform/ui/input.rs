//! Text commands standing in for pointer, touch and button events.

use picker_core::{AppViewModel, BindingId, Filter, Msg};

/// Horizontal travel of a scripted `swipe`.
pub const SWIPE_DISTANCE: i32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msgs(Vec<Msg>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("no card is active")]
    NoActiveCard,
    #[error("no thumbnail #{0}")]
    NoThumbnail(usize),
}

pub const HELP: &str = "\
begin                 load the catalog
press X Y | move X Y | release | cancel
swipe left|right      full gesture on the active card
click                 toggle the active card's selection
filter [CATEGORY]     filter by category; no argument clears
thumb N | unthumb N   jump to / remove the Nth thumbnail
confirm | help | quit";

/// Whether `line` asks to leave. Honoured even while other input is held.
pub fn is_quit(line: &str) -> bool {
    matches!(line.split_whitespace().next(), Some("quit" | "exit"))
}

/// Translate one input line against the current view.
pub fn parse_command(line: &str, view: &AppViewModel) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Msgs(Vec::new()));
    };
    let rest: Vec<&str> = words.collect();

    let msgs = match verb {
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "begin" => vec![Msg::BeginClicked],
        "press" => {
            let (x, y) = coords(&rest, "press X Y")?;
            vec![Msg::PointerDown {
                binding: active(view)?,
                x,
                y,
            }]
        }
        "move" => {
            let (x, y) = coords(&rest, "move X Y")?;
            vec![Msg::PointerMoved {
                binding: active(view)?,
                x,
                y,
            }]
        }
        "release" => vec![Msg::PointerUp {
            binding: active(view)?,
        }],
        "cancel" => vec![Msg::PointerCancelled {
            binding: active(view)?,
        }],
        "swipe" => {
            let dx = match rest.as_slice() {
                ["right"] => SWIPE_DISTANCE,
                ["left"] => -SWIPE_DISTANCE,
                _ => return Err(InputError::Usage("swipe left|right")),
            };
            let binding = active(view)?;
            vec![
                Msg::PointerDown { binding, x: 0, y: 0 },
                Msg::PointerMoved { binding, x: dx, y: 0 },
                Msg::PointerUp { binding },
            ]
        }
        "click" => vec![Msg::CardClicked],
        "filter" if rest.is_empty() => vec![Msg::FilterCleared],
        "filter" => vec![Msg::FilterApplied(Filter::Category(rest.join(" ")))],
        "thumb" => vec![Msg::ThumbnailClicked {
            thumb: thumbnail(view, &rest, "thumb N")?,
        }],
        "unthumb" => vec![Msg::ThumbnailRemoveClicked {
            thumb: thumbnail(view, &rest, "unthumb N")?,
        }],
        "confirm" => vec![Msg::ConfirmClicked],
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Command::Msgs(msgs))
}

fn active(view: &AppViewModel) -> Result<BindingId, InputError> {
    view.deck.binding.ok_or(InputError::NoActiveCard)
}

fn coords(args: &[&str], usage: &'static str) -> Result<(i32, i32), InputError> {
    match args {
        [x, y] => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Ok((x, y)),
            _ => Err(InputError::Usage(usage)),
        },
        _ => Err(InputError::Usage(usage)),
    }
}

fn thumbnail(
    view: &AppViewModel,
    args: &[&str],
    usage: &'static str,
) -> Result<picker_core::ThumbnailId, InputError> {
    let [n] = args else {
        return Err(InputError::Usage(usage));
    };
    let n: usize = n.parse().map_err(|_| InputError::Usage(usage))?;
    n.checked_sub(1)
        .and_then(|index| view.thumbnails.get(index))
        .map(|t| t.thumb)
        .ok_or(InputError::NoThumbnail(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::{DeckView, ThumbnailId, ThumbnailView, RecordId};

    fn view_with_binding() -> AppViewModel {
        AppViewModel {
            deck: DeckView {
                binding: Some(BindingId(3)),
                ..DeckView::default()
            },
            thumbnails: vec![ThumbnailView {
                thumb: ThumbnailId(9),
                record_id: RecordId(0),
                name: "A".to_string(),
                photo: "a.jpg".to_string(),
            }],
            ..AppViewModel::default()
        }
    }

    #[test]
    fn swipe_expands_to_full_gesture() {
        let binding = BindingId(3);
        assert_eq!(
            parse_command("swipe right", &view_with_binding()),
            Ok(Command::Msgs(vec![
                Msg::PointerDown { binding, x: 0, y: 0 },
                Msg::PointerMoved {
                    binding,
                    x: SWIPE_DISTANCE,
                    y: 0
                },
                Msg::PointerUp { binding },
            ]))
        );
    }

    #[test]
    fn quit_is_recognised_without_a_view() {
        assert!(is_quit("quit"));
        assert!(is_quit("  exit now"));
        assert!(!is_quit("swipe left"));
        assert!(!is_quit(""));
    }

    #[test]
    fn gestures_need_an_active_card() {
        assert_eq!(
            parse_command("press 1 2", &AppViewModel::default()),
            Err(InputError::NoActiveCard)
        );
    }

    #[test]
    fn filter_joins_words_and_clears_without_argument() {
        let view = AppViewModel::default();
        assert_eq!(
            parse_command("filter Dim Sum", &view),
            Ok(Command::Msgs(vec![Msg::FilterApplied(Filter::Category(
                "Dim Sum".to_string()
            ))]))
        );
        assert_eq!(
            parse_command("filter", &view),
            Ok(Command::Msgs(vec![Msg::FilterCleared]))
        );
    }

    #[test]
    fn thumbnails_are_one_based() {
        let view = view_with_binding();
        assert_eq!(
            parse_command("thumb 1", &view),
            Ok(Command::Msgs(vec![Msg::ThumbnailClicked {
                thumb: ThumbnailId(9)
            }]))
        );
        assert_eq!(parse_command("thumb 0", &view), Err(InputError::NoThumbnail(0)));
        assert_eq!(parse_command("unthumb 2", &view), Err(InputError::NoThumbnail(2)));
    }

    #[test]
    fn bad_input_is_reported() {
        let view = view_with_binding();
        assert_eq!(
            parse_command("dance", &view),
            Err(InputError::Unknown("dance".to_string()))
        );
        assert_eq!(
            parse_command("move 1", &view),
            Err(InputError::Usage("move X Y"))
        );
        assert_eq!(parse_command("   ", &view), Ok(Command::Msgs(Vec::new())));
    }
}
