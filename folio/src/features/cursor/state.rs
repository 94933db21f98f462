use iced::Point;

/// Last observed pointer position and hover flag. `position` stays `None`
/// until the first move so the ring does not flash at the origin.
#[derive(Debug, Default)]
pub(crate) struct CursorState {
    position: Option<Point>,
    over_interactive: bool,
}

impl CursorState {
    pub(crate) fn position(&self) -> Option<Point> {
        self.position
    }

    pub(crate) fn is_over_interactive(&self) -> bool {
        self.over_interactive
    }

    pub(crate) fn update_position(&mut self, position: Point) {
        self.position = Some(position);
    }

    pub(crate) fn set_over_interactive(&mut self, over: bool) {
        self.over_interactive = over;
    }
}
