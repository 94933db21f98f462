/// Events emitted by the carousel widgets and the animation tick.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CarouselEvent {
    /// "Next" gesture; wraps from last to first.
    Advance,
    /// "Previous" gesture; wraps from first to last.
    Retreat,
    /// Click/tap on the card at this deck index.
    CardPressed(usize),
    /// Redraw tick while a transition is in flight.
    Tick,
    /// Pointer entered (`true`) or left (`false`) a card or arrow.
    HoverChanged(bool),
}
