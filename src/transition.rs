//! Declarative descriptions of the page-turn animations.
//!
//! Nothing here drives frames. The view turns a [`PaneVisual`] into CSS
//! classes and custom properties and the browser plays the keyframes in
//! `styles.css`; the only thing reported back is the `animationend` of the
//! exiting page, see [`FlipSpec::is_completion`].

use std::time::Duration;

use crate::pagination::{Direction, PaneRole, Side};

const ENTER_MS: u64 = 400;
const FORWARD_EXIT_MS: u64 = 400;
const BACKWARD_EXIT_MS: u64 = 600;
const SETTLE_MS: u64 = 300;
const REVEAL_BASE_MS: u64 = 500;
const REVEAL_STEP_MS: u64 = 100;

pub const EXIT_ANIMATION_PREFIX: &str = "page-flip-exit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Gentle ease used while a page settles flat.
    Standard,
    /// Faster start used while a page is being turned away.
    Emphasized,
}

impl Ease {
    fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Standard => (0.25, 0.1, 0.25, 1.0),
            Self::Emphasized => (0.4, 0.0, 0.2, 1.0),
        }
    }

    pub fn css(self) -> String {
        let (x1, y1, x2, y2) = self.control_points();
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipSpec {
    pub direction: Direction,
    pub enter: Duration,
    pub exit: Duration,
    pub enter_ease: Ease,
    pub exit_ease: Ease,
}

impl FlipSpec {
    pub fn for_direction(direction: Direction) -> Self {
        let exit_ms = match direction {
            Direction::Forward => FORWARD_EXIT_MS,
            Direction::Backward => BACKWARD_EXIT_MS,
        };
        Self {
            direction,
            enter: Duration::from_millis(ENTER_MS),
            exit: Duration::from_millis(exit_ms),
            enter_ease: Ease::Standard,
            exit_ease: Ease::Emphasized,
        }
    }

    fn suffix(&self) -> &'static str {
        match self.direction {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }

    pub fn enter_class(&self) -> String {
        format!("page-flip-enter-{}", self.suffix())
    }

    pub fn exit_class(&self) -> String {
        format!("page-flip-exit-{}", self.suffix())
    }

    pub fn enter_style(&self) -> String {
        animation_style(self.enter, self.enter_ease)
    }

    pub fn exit_style(&self) -> String {
        animation_style(self.exit, self.exit_ease)
    }

    /// Whether an `animationend` with this name marks the turn as finished.
    pub fn is_completion(animation_name: &str) -> bool {
        animation_name.starts_with(EXIT_ANIMATION_PREFIX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneVisual {
    Flip(FlipSpec),
    Static { recessed: bool },
}

impl PaneVisual {
    pub fn from_role(role: PaneRole, direction: Direction) -> Self {
        match role {
            PaneRole::Turning => Self::Flip(FlipSpec::for_direction(direction)),
            PaneRole::Static { recessed } => Self::Static { recessed },
        }
    }

    pub fn static_class(&self) -> &'static str {
        match self {
            Self::Static { recessed: true } => "page-static recessed",
            Self::Static { recessed: false } => "page-static",
            Self::Flip(_) => "page-turning",
        }
    }

    /// Whether the page content on `side` plays the staggered reveal. The
    /// reveal belongs to the turning right-hand layer, which is keyed by page
    /// and mounts once per turn, so it runs to the end even after the turn
    /// itself has settled.
    pub fn reveals_content(&self, side: Side) -> bool {
        matches!(self, Self::Flip(_)) && side == Side::Right
    }

    pub fn static_style() -> String {
        format!("--settle-duration: {}ms;", SETTLE_MS)
    }
}

fn animation_style(duration: Duration, ease: Ease) -> String {
    format!(
        "--flip-duration: {}ms; --flip-ease: {};",
        duration.as_millis(),
        ease.css()
    )
}

/// Longest page-turn animation declared above.
pub fn longest_flip() -> Duration {
    [Direction::Forward, Direction::Backward]
        .into_iter()
        .map(FlipSpec::for_direction)
        .map(|spec| spec.enter.max(spec.exit))
        .max()
        .unwrap_or_default()
}

/// Stagger delay for the `index`-th block of page content.
pub fn reveal_delay(index: usize) -> Duration {
    Duration::from_millis(REVEAL_BASE_MS + REVEAL_STEP_MS * index as u64)
}

pub fn reveal_style(index: usize) -> String {
    format!("animation-delay: {}ms;", reveal_delay(index).as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_css_matches_control_points() {
        assert_eq!(Ease::Standard.css(), "cubic-bezier(0.25, 0.1, 0.25, 1)");
        assert_eq!(Ease::Emphasized.css(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn backward_turn_exits_slower() {
        let forward = FlipSpec::for_direction(Direction::Forward);
        let backward = FlipSpec::for_direction(Direction::Backward);
        assert_eq!(forward.exit, Duration::from_millis(400));
        assert_eq!(backward.exit, Duration::from_millis(600));
        assert_eq!(forward.enter, backward.enter);
        assert_eq!(longest_flip(), Duration::from_millis(600));
    }

    #[test]
    fn flip_classes_follow_direction() {
        let backward = FlipSpec::for_direction(Direction::Backward);
        assert_eq!(backward.enter_class(), "page-flip-enter-backward");
        assert_eq!(backward.exit_class(), "page-flip-exit-backward");
        assert!(backward.exit_style().contains("--flip-duration: 600ms"));
        assert!(backward.enter_style().contains("cubic-bezier(0.25, 0.1, 0.25, 1)"));
    }

    #[test]
    fn only_exit_animations_complete_a_turn() {
        assert!(FlipSpec::is_completion("page-flip-exit-forward"));
        assert!(FlipSpec::is_completion("page-flip-exit-backward"));
        assert!(!FlipSpec::is_completion("page-flip-enter-forward"));
        assert!(!FlipSpec::is_completion("content-reveal"));
    }

    #[test]
    fn pane_visual_from_role() {
        let turning = PaneVisual::from_role(PaneRole::Turning, Direction::Forward);
        assert_eq!(turning, PaneVisual::Flip(FlipSpec::for_direction(Direction::Forward)));

        let recessed = PaneVisual::from_role(PaneRole::Static { recessed: true }, Direction::Forward);
        assert_eq!(recessed.static_class(), "page-static recessed");
    }

    #[test]
    fn turning_right_page_reveals_its_content() {
        for direction in [Direction::Forward, Direction::Backward] {
            let turning = PaneVisual::from_role(PaneRole::Turning, direction);
            assert!(turning.reveals_content(Side::Right));
            assert!(!turning.reveals_content(Side::Left));
        }
        for recessed in [true, false] {
            let still = PaneVisual::from_role(PaneRole::Static { recessed }, Direction::Backward);
            assert!(!still.reveals_content(Side::Right));
            assert!(!still.reveals_content(Side::Left));
        }
    }

    #[test]
    fn reveal_outlasts_a_forward_turn() {
        // The reveal must not depend on the turn still being in flight: the
        // exit settles before the first block starts.
        let forward = FlipSpec::for_direction(Direction::Forward);
        assert!(forward.exit < reveal_delay(0));
    }

    #[test]
    fn reveal_delays_are_staggered() {
        assert_eq!(reveal_delay(0), Duration::from_millis(500));
        assert_eq!(reveal_delay(4), Duration::from_millis(900));
        assert_eq!(reveal_style(1), "animation-delay: 600ms;");
    }
}
