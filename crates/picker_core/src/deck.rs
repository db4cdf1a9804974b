//! Swipe deck: one active card at a time, driven by pointer gestures.
//!
//! The deck only knows positions into the filtered sequence and its length.
//! It reports what happened as [`DeckEvent`]s; mapping those onto records and
//! selection is the caller's job.

/// Horizontal displacement a release must strictly exceed to count as a decision.
pub const DECISION_THRESHOLD: i32 = 100;

/// Degrees of card rotation per unit of horizontal displacement.
pub const ROTATION_DEG_PER_UNIT: f64 = 0.05;

/// Cosmetic rotation for a drag displacement. Has no effect on decisions.
pub fn rotation_degrees(dx: i32) -> f64 {
    f64::from(dx) * ROTATION_DEG_PER_UNIT
}

/// Identifies one activation of a card. Gesture input tagged with any other
/// binding is stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub u64);

/// Identifies one exit animation. Its completion is honoured at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Select,
    Skip,
    Cancel,
}

impl Direction {
    pub fn decision(self) -> Decision {
        match self {
            Direction::Right => Decision::Select,
            Direction::Left => Decision::Skip,
        }
    }

    fn from_displacement(dx: i32) -> Option<Self> {
        if dx > DECISION_THRESHOLD {
            Some(Direction::Right)
        } else if dx < -DECISION_THRESHOLD {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckState {
    /// Nothing to show: empty or exhausted.
    #[default]
    Idle,
    Displaying {
        position: usize,
    },
    Dragging {
        position: usize,
        origin: Point,
        displacement: Displacement,
    },
    Deciding {
        position: usize,
        direction: Direction,
        token: TransitionToken,
    },
    Advancing {
        position: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// A card became active and its gesture binding is live.
    Entered { position: usize, binding: BindingId },
    /// A card's gesture binding was torn down.
    Left { position: usize, binding: BindingId },
    /// Live drag feedback.
    Moved {
        position: usize,
        displacement: Displacement,
    },
    /// A gesture ended. `token` is set when an exit animation must play.
    Released {
        position: usize,
        decision: Decision,
        direction: Option<Direction>,
        token: Option<TransitionToken>,
    },
    /// No card left to show.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    state: DeckState,
    len: usize,
    binding: Option<(usize, BindingId)>,
    next_binding: u64,
    next_token: u64,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DeckState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_idle(&self) -> bool {
        self.state == DeckState::Idle
    }

    /// Binding of the active card, if gestures are currently bound.
    pub fn binding(&self) -> Option<BindingId> {
        self.binding.map(|(_, binding)| binding)
    }

    /// Position of the card currently on screen.
    pub fn active_position(&self) -> Option<usize> {
        match self.state {
            DeckState::Idle => None,
            DeckState::Displaying { position }
            | DeckState::Dragging { position, .. }
            | DeckState::Deciding { position, .. }
            | DeckState::Advancing { position } => Some(position),
        }
    }

    /// Rewind onto a new sequence of `len` cards.
    pub fn reset(&mut self, len: usize) -> Vec<DeckEvent> {
        let mut events = Vec::new();
        self.unbind(&mut events);
        self.len = len;
        self.enter(0, &mut events);
        events
    }

    /// Force `position` active regardless of the current state.
    /// Out-of-range positions are ignored.
    pub fn jump_to(&mut self, position: usize) -> Vec<DeckEvent> {
        let mut events = Vec::new();
        if position >= self.len {
            return events;
        }
        self.unbind(&mut events);
        self.enter(position, &mut events);
        events
    }

    pub fn press(&mut self, binding: BindingId, at: Point) -> bool {
        if !self.is_bound(binding) {
            return false;
        }
        match self.state {
            DeckState::Displaying { position } => {
                self.state = DeckState::Dragging {
                    position,
                    origin: at,
                    displacement: Displacement::default(),
                };
                true
            }
            _ => false,
        }
    }

    pub fn drag(&mut self, binding: BindingId, to: Point) -> Option<DeckEvent> {
        if !self.is_bound(binding) {
            return None;
        }
        match &mut self.state {
            DeckState::Dragging {
                position,
                origin,
                displacement,
            } => {
                *displacement = Displacement {
                    dx: to.x.saturating_sub(origin.x),
                    dy: to.y.saturating_sub(origin.y),
                };
                Some(DeckEvent::Moved {
                    position: *position,
                    displacement: *displacement,
                })
            }
            _ => None,
        }
    }

    pub fn release(&mut self, binding: BindingId) -> Option<DeckEvent> {
        if !self.is_bound(binding) {
            return None;
        }
        let DeckState::Dragging {
            position,
            displacement,
            ..
        } = self.state
        else {
            return None;
        };

        match Direction::from_displacement(displacement.dx) {
            Some(direction) => {
                let token = self.fresh_token();
                self.state = DeckState::Deciding {
                    position,
                    direction,
                    token,
                };
                Some(DeckEvent::Released {
                    position,
                    decision: direction.decision(),
                    direction: Some(direction),
                    token: Some(token),
                })
            }
            None => Some(self.snap_back(position)),
        }
    }

    /// Abort a drag without a decision, whatever the displacement.
    pub fn cancel(&mut self, binding: BindingId) -> Option<DeckEvent> {
        if !self.is_bound(binding) {
            return None;
        }
        match self.state {
            DeckState::Dragging { position, .. } => Some(self.snap_back(position)),
            _ => None,
        }
    }

    /// Exit animation completed. Only the token of the pending decision advances.
    pub fn finish_exit(&mut self, token: TransitionToken) -> Vec<DeckEvent> {
        let mut events = Vec::new();
        let position = match self.state {
            DeckState::Deciding {
                position,
                token: pending,
                ..
            } if pending == token => position,
            _ => return events,
        };

        self.state = DeckState::Advancing { position };
        self.unbind(&mut events);
        self.enter(position + 1, &mut events);
        events
    }

    fn snap_back(&mut self, position: usize) -> DeckEvent {
        self.state = DeckState::Displaying { position };
        DeckEvent::Released {
            position,
            decision: Decision::Cancel,
            direction: None,
            token: None,
        }
    }

    fn enter(&mut self, position: usize, events: &mut Vec<DeckEvent>) {
        if position < self.len {
            let binding = BindingId(self.next_binding);
            self.next_binding += 1;
            self.binding = Some((position, binding));
            self.state = DeckState::Displaying { position };
            events.push(DeckEvent::Entered { position, binding });
        } else {
            self.state = DeckState::Idle;
            events.push(DeckEvent::Exhausted);
        }
    }

    fn unbind(&mut self, events: &mut Vec<DeckEvent>) {
        if let Some((position, binding)) = self.binding.take() {
            events.push(DeckEvent::Left { position, binding });
        }
    }

    fn is_bound(&self, binding: BindingId) -> bool {
        self.binding() == Some(binding)
    }

    fn fresh_token(&mut self) -> TransitionToken {
        let token = TransitionToken(self.next_token);
        self.next_token += 1;
        token
    }
}
