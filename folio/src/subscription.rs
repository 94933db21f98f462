use std::time::Duration;

use iced::{Subscription, window};

use crate::app::{App, Event};
use crate::features::carousel::CarouselEvent;
use crate::motion;

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    let win_subs = window::events().map(|(_id, event)| Event::Window(event));

    let mut subs = vec![win_subs];
    // Redraw ticks only while a card transition is animating.
    if app.features.carousel().has_transition_in_flight() {
        subs.push(
            iced::time::every(Duration::from_millis(motion::TICK_MS))
                .map(|_| Event::Carousel(CarouselEvent::Tick)),
        );
    }

    Subscription::batch(subs)
}
