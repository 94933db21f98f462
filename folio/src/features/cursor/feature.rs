use iced::{Point, Task};

use crate::app::Event as AppEvent;
use crate::features::Feature;

use super::event::CursorEvent;
use super::state::CursorState;

/// Cursor-follow feature root. Purely cosmetic; independent of every
/// other feature.
pub(crate) struct CursorFeature {
    state: CursorState,
}

impl CursorFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: CursorState::default(),
        }
    }

    pub(crate) fn position(&self) -> Option<Point> {
        self.state.position()
    }

    pub(crate) fn is_over_interactive(&self) -> bool {
        self.state.is_over_interactive()
    }
}

impl Feature for CursorFeature {
    type Event = CursorEvent;
    type Ctx<'a> = ();

    /// Reduce pointer events into overlay state.
    fn reduce<'a>(
        &mut self,
        event: CursorEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            CursorEvent::Moved(position) => {
                self.state.update_position(position);
                Task::none()
            },
            CursorEvent::HoverChanged(over) => {
                self.state.set_over_interactive(over);
                Task::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Point;

    use super::CursorFeature;
    use crate::features::Feature;
    use crate::features::cursor::CursorEvent;

    #[test]
    fn given_no_movement_when_reading_then_position_is_hidden() {
        let feature = CursorFeature::new();

        assert!(feature.position().is_none());
    }

    #[test]
    fn given_move_and_hover_events_when_reduced_then_state_tracks_them() {
        let mut feature = CursorFeature::new();
        let expected = Point::new(12.0, 34.0);

        let _task = feature.reduce(CursorEvent::Moved(expected), &());
        let _task = feature.reduce(CursorEvent::HoverChanged(true), &());

        assert_eq!(feature.position(), Some(expected));
        assert!(feature.is_over_interactive());
    }
}
