#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::features::Features;
use crate::features::carousel::{CarouselEvent, Deck};
use crate::features::contact::ContactEvent;
use crate::features::cursor::CursorEvent;
use crate::features::pages::PagesEvent;
use crate::features::sidebar::SidebarEvent;
use crate::fonts::FontsConfig;
use crate::route::Route;
use crate::theme::ThemeManager;
use crate::viewport::ViewportMode;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 560.0;
pub(crate) const INITIAL_WINDOW_WIDTH: f32 = 1100.0;
pub(crate) const INITIAL_WINDOW_HEIGHT: f32 = 720.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    IcedReady,
    Navigate(Route),
    Carousel(CarouselEvent),
    Contact(ContactEvent),
    Sidebar(SidebarEvent),
    Pages(PagesEvent),
    Cursor(CursorEvent),
    Window(iced::window::Event),
}

pub(crate) struct App {
    window_size: Size,
    viewport: ViewportMode,
    route: Route,
    theme_manager: ThemeManager,
    fonts: FontsConfig,
    features: Features,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let theme_manager = ThemeManager::new();
        let fonts = FontsConfig::default();

        // The built-in deck is static data; a malformed one is a build
        // defect, not a runtime condition.
        let deck = Deck::builtin().expect("built-in deck is valid");
        let features = Features::new(deck);

        let window_size = Size {
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
        };

        let app = App {
            window_size,
            viewport: ViewportMode::classify(window_size.width),
            route: Route::Home,
            theme_manager,
            fonts,
            features,
        };

        (app, Task::done(()).map(|_: ()| Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        format!("{} | Arman Dev", self.route.title())
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }
}
