//! Page-turn controller for the project magazine.
//!
//! The controller owns the current page, the direction of the last committed
//! turn and whether a turn is still in flight. Requests that arrive while a
//! turn is in flight, or that would leave the list, are dropped rather than
//! queued. Every committed turn carries a [`TransitionTicket`]; the watchdog
//! that guards against a missed completion signal only clears the turn it was
//! armed for.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// How one half of the spread renders for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneRole {
    /// The page being turned; plays the flip.
    Turning,
    /// The page being covered or revealed; stays put, recessed mid-turn.
    Static { recessed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub ticket: TransitionTicket,
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    total_pages: usize,
    current_page: usize,
    direction: Direction,
    in_flight: Option<Transition>,
    next_ticket: u64,
}

impl PaginationController {
    /// Starts on the first page. `total_pages` is clamped to at least one.
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages: total_pages.max(1),
            current_page: 0,
            direction: Direction::Forward,
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&Transition> {
        self.in_flight.as_ref()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page + 1 == self.total_pages
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_animating() && !self.is_first_page()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_animating() && !self.is_last_page()
    }

    pub fn step_page(&mut self, step: Step) -> Option<Transition> {
        if self.is_animating() {
            debug!("Dropping {:?}: page turn still in flight", step);
            return None;
        }

        let Some(target) = self.current_page.checked_add_signed(step.delta()) else {
            debug!("Dropping {:?}: already on the first page", step);
            return None;
        };
        if target >= self.total_pages {
            debug!("Dropping {:?}: already on the last page", step);
            return None;
        }

        Some(self.commit(target))
    }

    pub fn jump_to_page(&mut self, index: usize) -> Option<Transition> {
        if self.is_animating() {
            debug!("Dropping jump to {}: page turn still in flight", index);
            return None;
        }
        if index == self.current_page || index >= self.total_pages {
            debug!("Dropping jump to {}: nothing to turn", index);
            return None;
        }

        Some(self.commit(index))
    }

    /// Arrow-key binding. Boundaries are checked before stepping.
    pub fn handle_key(&mut self, key: NavKey) -> Option<Transition> {
        match key {
            NavKey::ArrowLeft if !self.is_first_page() => self.step_page(Step::Previous),
            NavKey::ArrowRight if !self.is_last_page() => self.step_page(Step::Next),
            _ => None,
        }
    }

    /// Completion reported by the animation engine for the current turn.
    pub fn on_transition_settled(&mut self) {
        if let Some(transition) = self.in_flight.take() {
            debug!("Page turn {} -> {} settled", transition.from, transition.to);
        }
    }

    /// Watchdog path: clears the turn only if `ticket` is still in flight.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: TransitionTicket) -> bool {
        match self.in_flight {
            Some(transition) if transition.ticket == ticket => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    pub fn pane_role(&self, side: Side) -> PaneRole {
        let turning_side = match self.direction {
            Direction::Forward => Side::Right,
            Direction::Backward => Side::Left,
        };
        if side == turning_side {
            PaneRole::Turning
        } else {
            PaneRole::Static {
                recessed: self.is_animating(),
            }
        }
    }

    fn commit(&mut self, target: usize) -> Transition {
        let transition = Transition {
            ticket: TransitionTicket(self.next_ticket),
            from: self.current_page,
            to: target,
            direction: Direction::between(self.current_page, target),
        };
        self.next_ticket += 1;
        self.direction = transition.direction;
        self.current_page = target;
        self.in_flight = Some(transition);
        transition
    }
}
