use iced::Task;

use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::cursor::CursorEvent;

use super::event::CarouselEvent;
use super::model::Deck;
use super::state::{Activation, CarouselState, Direction, Neighbors, Transition};

/// Carousel feature root owning the deck, the selection state and the
/// in-flight transition bookkeeping.
pub(crate) struct CarouselFeature {
    deck: Deck,
    state: CarouselState,
    transition: Option<Transition>,
}

impl CarouselFeature {
    pub(crate) fn new(deck: Deck) -> Self {
        Self {
            deck,
            state: CarouselState::new(),
            transition: None,
        }
    }

    /// Reset to the default selection, as on a fresh mount of the home
    /// view. Discards any in-flight transition.
    pub(crate) fn remount(&mut self) {
        self.state = CarouselState::new();
        self.transition = None;
    }

    pub(crate) fn deck(&self) -> &Deck {
        &self.deck
    }

    pub(crate) fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub(crate) fn neighbors(&self) -> Neighbors {
        self.state.neighbors(self.deck.len())
    }

    pub(crate) fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Whether the redraw tick subscription should be running.
    pub(crate) fn has_transition_in_flight(&self) -> bool {
        self.transition.is_some()
    }

    /// Replace any in-flight transition with one leaving `from`. A no-op
    /// move (same index) starts nothing.
    fn begin_transition(&mut self, from: usize) {
        if from == self.state.active_index() {
            return;
        }

        self.transition =
            Some(Transition::begin(from, self.state.direction()));
    }
}

impl Feature for CarouselFeature {
    type Event = CarouselEvent;
    type Ctx<'a> = ();

    /// Reduce carousel events into selection changes, transition starts
    /// and routed navigation tasks.
    fn reduce<'a>(
        &mut self,
        event: CarouselEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            CarouselEvent::Advance => {
                let from = self.state.active_index();
                self.state.advance(self.deck.len());
                self.begin_transition(from);
                Task::none()
            },
            CarouselEvent::Retreat => {
                let from = self.state.active_index();
                self.state.retreat(self.deck.len());
                self.begin_transition(from);
                Task::none()
            },
            CarouselEvent::CardPressed(index) => {
                let from = self.state.active_index();
                match self.state.activate(index, &self.deck) {
                    Activation::Ignored => Task::none(),
                    Activation::Recentred => {
                        self.begin_transition(from);
                        Task::none()
                    },
                    Activation::Navigate(route) => {
                        log::info!(
                            "card {} activated, leaving for {}",
                            self.deck.get(index).id,
                            route.path()
                        );
                        Task::done(AppEvent::Navigate(route))
                    },
                }
            },
            CarouselEvent::Tick => {
                if let Some(transition) = &self.transition {
                    if transition.is_settled_at(std::time::Instant::now()) {
                        self.transition = None;
                    }
                }
                Task::none()
            },
            CarouselEvent::HoverChanged(over) => Task::done(
                AppEvent::Cursor(CursorEvent::HoverChanged(over)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselFeature;
    use crate::features::Feature;
    use crate::features::carousel::{CarouselEvent, Deck, Direction};

    fn feature() -> CarouselFeature {
        CarouselFeature::new(Deck::builtin().expect("valid deck"))
    }

    #[test]
    fn given_advance_event_when_reduced_then_transition_starts() {
        let mut feature = feature();

        let _task = feature.reduce(CarouselEvent::Advance, &());

        assert_eq!(feature.active_index(), 1);
        assert_eq!(feature.direction(), Direction::Forward);
        assert!(feature.has_transition_in_flight());
        let transition = feature.transition().expect("transition in flight");
        assert_eq!(transition.from_index, 0);
    }

    #[test]
    fn given_profile_card_pressed_when_active_then_nothing_starts() {
        let mut feature = feature();

        let _task = feature.reduce(CarouselEvent::CardPressed(0), &());

        assert_eq!(feature.active_index(), 0);
        assert!(!feature.has_transition_in_flight());
    }

    #[test]
    fn given_side_card_pressed_when_reduced_then_selection_recenters() {
        let mut feature = feature();

        let _task = feature.reduce(CarouselEvent::CardPressed(3), &());

        assert_eq!(feature.active_index(), 3);
        assert_eq!(feature.direction(), Direction::Forward);
        assert!(feature.has_transition_in_flight());
    }

    #[test]
    fn given_active_card_pressed_when_reduced_then_state_is_untouched() {
        let mut feature = feature();
        let _ = feature.reduce(CarouselEvent::CardPressed(2), &());
        let before = (feature.active_index(), feature.direction());

        let _task = feature.reduce(CarouselEvent::CardPressed(2), &());

        assert_eq!((feature.active_index(), feature.direction()), before);
    }

    #[test]
    fn given_hover_report_when_reduced_then_selection_is_untouched() {
        let mut feature = feature();

        let _task =
            feature.reduce(CarouselEvent::HoverChanged(true), &());

        assert_eq!(feature.active_index(), 0);
        assert_eq!(feature.direction(), Direction::None);
        assert!(!feature.has_transition_in_flight());
    }

    #[test]
    fn given_remount_when_called_then_selection_and_transition_reset() {
        let mut feature = feature();
        let _ = feature.reduce(CarouselEvent::Advance, &());

        feature.remount();

        assert_eq!(feature.active_index(), 0);
        assert_eq!(feature.direction(), Direction::None);
        assert!(!feature.has_transition_in_flight());
    }
}
