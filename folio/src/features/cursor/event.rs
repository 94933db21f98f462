use iced::Point;

/// Events feeding the cosmetic cursor-follow overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CursorEvent {
    Moved(Point),
    /// Pointer entered (`true`) or left (`false`) an interactive region.
    HoverChanged(bool),
}
