use iced::widget::operation::snap_to;
use iced::widget::scrollable::RelativeOffset;
use iced::{Task, window};

use super::{App, Event};
use crate::features::Feature;
use crate::features::cursor::CursorEvent;
use crate::features::sidebar::SidebarEvent;
use crate::route::Route;
use crate::ui::widgets::carousel;
use crate::viewport::ViewportMode;

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    let index_before = app.features.carousel().active_index();
    let task = route(app, event);

    // Keep the compact strip centered on the selection it just changed.
    let index_after = app.features.carousel().active_index();
    if app.viewport.is_compact() && index_after != index_before {
        return Task::batch(vec![task, snap_strip_to(app, index_after)]);
    }

    task
}

fn route(app: &mut App, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        IcedReady => {
            log::info!("portfolio shell ready");
            Task::none()
        },
        Navigate(route) => navigate(app, route),
        Carousel(event) => app.features.carousel_mut().reduce(event, &()),
        Contact(event) => app.features.contact_mut().reduce(event, &()),
        Sidebar(event) => app.features.sidebar_mut().reduce(event, &()),
        Pages(event) => app.features.pages_mut().reduce(event, &()),
        Cursor(event) => app.features.cursor_mut().reduce(event, &()),
        Window(window::Event::Resized(size)) => {
            app.window_size = size;
            reclassify_viewport(app)
        },
        Window(_) => Task::none(),
    }
}

/// Route changes always succeed; returning home remounts the carousel
/// with the default selection and resets the page reveal counters.
fn navigate(app: &mut App, route: Route) -> Task<Event> {
    if app.route == route {
        return Task::none();
    }

    log::debug!("navigating {} -> {}", app.route.path(), route.path());
    app.route = route;

    if route == Route::Home {
        app.features.carousel_mut().remount();
        app.features.pages_mut().reset();
    }

    // The element under the pointer vanished with the old view; its
    // exit notification never arrives.
    app.features
        .cursor_mut()
        .reduce(CursorEvent::HoverChanged(false), &())
}

fn reclassify_viewport(app: &mut App) -> Task<Event> {
    let mode = ViewportMode::classify(app.window_size.width);
    if mode == app.viewport {
        return Task::none();
    }

    log::debug!("viewport regime changed to {mode:?}");
    app.viewport = mode;

    match mode {
        // The drawer only exists in the compact regime.
        ViewportMode::Wide => app
            .features
            .sidebar_mut()
            .reduce(SidebarEvent::DismissDrawer, &()),
        ViewportMode::Compact => {
            let index = app.features.carousel().active_index();
            snap_strip_to(app, index)
        },
    }
}

/// Scroll the compact strip so card `index` sits in view.
fn snap_strip_to(app: &App, index: usize) -> Task<Event> {
    let len = app.features.carousel().deck().len();
    let x = if len > 1 {
        index as f32 / (len - 1) as f32
    } else {
        0.0
    };

    snap_to(carousel::STRIP_SCROLL_ID, RelativeOffset { x, y: 0.0 })
}

#[cfg(test)]
mod tests {
    use iced::{Size, window};

    use crate::app::{App, Event};
    use crate::features::carousel::{CarouselEvent, Direction};
    use crate::features::cursor::CursorEvent;
    use crate::route::Route;
    use crate::viewport::ViewportMode;

    fn app() -> App {
        let (app, _task) = App::new();
        app
    }

    fn resized(width: f32, height: f32) -> Event {
        Event::Window(window::Event::Resized(Size::new(width, height)))
    }

    #[test]
    fn given_resize_mid_transition_when_updated_then_selection_survives() {
        let mut app = app();
        let _ =
            super::update(&mut app, Event::Carousel(CarouselEvent::Advance));
        assert!(app.features.carousel().has_transition_in_flight());

        let _ = super::update(&mut app, resized(600.0, 700.0));

        assert_eq!(app.viewport, ViewportMode::Compact);
        let carousel = app.features.carousel();
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.direction(), Direction::Forward);
        assert!(carousel.has_transition_in_flight());
    }

    #[test]
    fn given_resize_back_to_wide_when_updated_then_selection_survives() {
        let mut app = app();
        let _ =
            super::update(&mut app, Event::Carousel(CarouselEvent::Retreat));
        let _ = super::update(&mut app, resized(600.0, 700.0));

        let _ = super::update(&mut app, resized(1200.0, 700.0));

        assert_eq!(app.viewport, ViewportMode::Wide);
        let carousel = app.features.carousel();
        assert_eq!(carousel.active_index(), carousel.deck().len() - 1);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn given_hovered_element_when_navigating_then_hover_flag_clears() {
        let mut app = app();
        let _ = super::update(
            &mut app,
            Event::Cursor(CursorEvent::HoverChanged(true)),
        );
        assert!(app.features.cursor().is_over_interactive());

        let _ = super::update(&mut app, Event::Navigate(Route::About));

        assert!(!app.features.cursor().is_over_interactive());
    }
}
