use std::time::Instant;

use crate::motion;
use crate::route::Route;

use super::model::{Category, Deck};

/// Sign of the last selection move. Only picks the animation entry/exit
/// side; `active_index` correctness never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

/// The two off-center indices kept mounted by the wide renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Neighbors {
    pub(crate) previous_index: usize,
    pub(crate) next_index: usize,
}

/// Outcome of a card press on the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activation {
    /// Active profile card pressed; nothing to do.
    Ignored,
    /// A non-active card pressed; the carousel re-centered on it.
    Recentred,
    /// Active non-profile card pressed; leave the carousel for this route.
    Navigate(Route),
}

/// Mutable selection state of the carousel. Owned by the feature, reset
/// whenever the home view is remounted, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CarouselState {
    active_index: usize,
    direction: Direction,
}

impl CarouselState {
    pub(crate) fn new() -> Self {
        Self {
            active_index: 0,
            direction: Direction::None,
        }
    }

    pub(crate) fn active_index(&self) -> usize {
        self.active_index
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Re-center on `target_index`, recording the move's sign. Callers
    /// produce `target_index` via the wrap helpers or a pressed card's
    /// index, so it is always in range.
    pub(crate) fn select_neighbor(&mut self, target_index: usize) {
        self.direction = if target_index > self.active_index {
            Direction::Forward
        } else if target_index < self.active_index {
            Direction::Backward
        } else {
            Direction::None
        };
        self.active_index = target_index;
    }

    /// Step to the next card, wrapping from last to first.
    pub(crate) fn advance(&mut self, len: usize) {
        let target = (self.active_index + 1) % len;
        self.select_neighbor(target);
        self.direction = Direction::Forward;
    }

    /// Step to the previous card, wrapping from first to last.
    pub(crate) fn retreat(&mut self, len: usize) {
        let target = (self.active_index + len - 1) % len;
        self.select_neighbor(target);
        self.direction = Direction::Backward;
    }

    /// Indices of the cards flanking the active one.
    pub(crate) fn neighbors(&self, len: usize) -> Neighbors {
        Neighbors {
            previous_index: (self.active_index + len - 1) % len,
            next_index: (self.active_index + 1) % len,
        }
    }

    /// Press entry point. Pressing the active card navigates (except for
    /// the profile card); pressing any other card re-centers on it.
    pub(crate) fn activate(
        &mut self,
        index: usize,
        deck: &Deck,
    ) -> Activation {
        if index == self.active_index {
            let destination = deck.get(index);
            if destination.category == Category::Profile {
                return Activation::Ignored;
            }
            return Activation::Navigate(destination.route);
        }

        self.select_neighbor(index);
        Activation::Recentred
    }
}

/// In-flight animation bookkeeping. A new selection simply replaces any
/// pending transition; the renderer always reflects the latest state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transition {
    pub(crate) from_index: usize,
    pub(crate) direction: Direction,
    pub(crate) started_at: Instant,
}

impl Transition {
    pub(crate) fn begin(from_index: usize, direction: Direction) -> Self {
        Self {
            from_index,
            direction,
            started_at: Instant::now(),
        }
    }

    /// Normalized progress of the center spring at `now`.
    pub(crate) fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let span = motion::transition_duration();

        (elapsed.as_secs_f32() / span.as_secs_f32()).min(1.0)
    }

    /// Normalized progress of the short exit/settle motion at `now`.
    pub(crate) fn exit_progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);

        (elapsed.as_millis() as f32 / motion::EXIT_MS as f32).min(1.0)
    }

    pub(crate) fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }

    pub(crate) fn exit_progress(&self) -> f32 {
        self.exit_progress_at(Instant::now())
    }

    pub(crate) fn is_settled_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Activation, CarouselState, Direction, Transition};
    use crate::features::carousel::Deck;
    use crate::route::Route;

    fn deck() -> Deck {
        Deck::builtin().expect("builtin deck must be valid")
    }

    #[test]
    fn given_any_walk_when_advancing_and_retreating_then_index_stays_in_range()
    {
        for len in 1..=6 {
            let mut state = CarouselState::new();
            for step in 0..50 {
                if step % 3 == 0 {
                    state.retreat(len);
                } else {
                    state.advance(len);
                }
                assert!(state.active_index() < len);
            }
        }
    }

    #[test]
    fn given_advance_then_retreat_when_applied_then_index_is_restored() {
        for len in 1..=6 {
            for start in 0..len {
                let mut state = CarouselState::new();
                for _ in 0..start {
                    state.advance(len);
                }

                let before = state.active_index();
                state.advance(len);
                state.retreat(len);
                assert_eq!(state.active_index(), before);

                state.retreat(len);
                state.advance(len);
                assert_eq!(state.active_index(), before);
            }
        }
    }

    #[test]
    fn given_five_advances_when_cycling_then_modular_sequence_matches() {
        let mut state = CarouselState::new();
        let len = 5;
        let mut seen = Vec::new();

        for _ in 0..6 {
            state.advance(len);
            seen.push(state.active_index());
            assert_eq!(state.direction(), Direction::Forward);
        }

        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn given_index_zero_when_retreating_then_selection_wraps_to_last() {
        let mut state = CarouselState::new();

        state.retreat(5);

        assert_eq!(state.active_index(), 4);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn given_small_decks_when_querying_neighbors_then_degenerates_hold() {
        let state = CarouselState::new();

        let single = state.neighbors(1);
        assert_eq!(single.previous_index, 0);
        assert_eq!(single.next_index, 0);

        let pair = state.neighbors(2);
        assert_eq!(pair.previous_index, 1);
        assert_eq!(pair.next_index, 1);

        let trio = state.neighbors(3);
        assert_ne!(trio.previous_index, state.active_index());
        assert_ne!(trio.next_index, state.active_index());
        assert_ne!(trio.previous_index, trio.next_index);
    }

    #[test]
    fn given_active_profile_card_when_activated_then_nothing_happens() {
        let deck = deck();
        let mut state = CarouselState::new();
        let before = state;

        let activation = state.activate(0, &deck);

        assert_eq!(activation, Activation::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn given_active_non_profile_card_when_activated_then_route_is_signaled() {
        let deck = deck();
        let mut state = CarouselState::new();
        state.select_neighbor(2);
        let before = state;

        let activation = state.activate(2, &deck);

        assert_eq!(activation, Activation::Navigate(Route::Projects));
        assert_eq!(state, before, "navigation must not disturb state");
    }

    #[test]
    fn given_non_active_card_when_activated_then_selection_recenters() {
        let deck = deck();
        let mut state = CarouselState::new();
        state.select_neighbor(3);

        let forward = state.activate(5, &deck);
        assert_eq!(forward, Activation::Recentred);
        assert_eq!(state.active_index(), 5);
        assert_eq!(state.direction(), Direction::Forward);

        let backward = state.activate(1, &deck);
        assert_eq!(backward, Activation::Recentred);
        assert_eq!(state.active_index(), 1);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn given_transition_when_time_passes_then_progress_clamps_to_one() {
        let transition = Transition::begin(0, Direction::Forward);
        let later = Instant::now() + Duration::from_secs(2);

        assert!(transition.progress_at(transition.started_at) == 0.0);
        assert_eq!(transition.progress_at(later), 1.0);
        assert_eq!(transition.exit_progress_at(later), 1.0);
        assert!(transition.is_settled_at(later));
    }
}
