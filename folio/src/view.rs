use iced::widget::{column, container, mouse_area, row, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, Event};
use crate::features::cursor::CursorEvent;
use crate::route::Route;
use crate::theme::ThemeProps;
use crate::ui::widgets::{
    about, carousel, certificates, contact_form, cursor_overlay, footer,
    page_frame, projects, social_sidebar, tech_stack,
};
use crate::viewport::ViewportMode;

const HERO_NAME_SIZE: f32 = 40.0;
const HERO_TAGLINE_SIZE: f32 = 16.0;
const HERO_SPACING: f32 = 8.0;
const HOME_PADDING: f32 = 24.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());

    let content = match app.route {
        Route::Home => view_home(app, theme_props),
        Route::About => view_page(
            app,
            theme_props,
            about::view(theme_props),
        ),
        Route::Projects => {
            let pages = app.features.pages();
            view_page(
                app,
                theme_props,
                projects::view(projects::Props {
                    projects: pages.visible_projects(),
                    hidden_count: pages.hidden_project_count(),
                    theme: theme_props,
                })
                .map(Event::Pages),
            )
        },
        Route::Certificates => {
            let pages = app.features.pages();
            view_page(
                app,
                theme_props,
                certificates::view(certificates::Props {
                    certificates: pages.visible_certificates(),
                    hidden_count: pages.hidden_certificate_count(),
                    theme: theme_props,
                })
                .map(Event::Pages),
            )
        },
        Route::TechStack => view_page(
            app,
            theme_props,
            tech_stack::view(theme_props),
        ),
        Route::Contact => {
            let state = app.features.contact().state();
            view_page(
                app,
                theme_props,
                contact_form::view(contact_form::Props {
                    name: state.name(),
                    email: state.email(),
                    message: state.message(),
                    status: state.status(),
                    theme: theme_props,
                })
                .map(Event::Contact),
            )
        },
    };

    let content = column![
        content,
        footer::view(footer::Props {
            theme: theme_props,
            fonts: &app.fonts,
        })
    ]
        .width(Length::Fill)
        .height(Length::Fill);

    let base: Element<'_, Event, Theme, iced::Renderer> =
        if app.viewport == ViewportMode::Wide {
            let rail = social_sidebar::view(social_sidebar::Props {
                drawer_open: app.features.sidebar().is_drawer_open(),
                viewport: app.viewport,
                theme: theme_props,
            })
            .map(Event::Sidebar);
            row![rail, content].into()
        } else {
            content.into()
        };

    let mut layers: Vec<Element<'_, Event, Theme, iced::Renderer>> =
        vec![base];

    if app.viewport == ViewportMode::Compact {
        layers.push(
            social_sidebar::view(social_sidebar::Props {
                drawer_open: app.features.sidebar().is_drawer_open(),
                viewport: app.viewport,
                theme: theme_props,
            })
            .map(Event::Sidebar),
        );
    }

    let cursor = app.features.cursor();
    layers.push(cursor_overlay::view(cursor_overlay::Props {
        position: cursor.position(),
        over_interactive: cursor.is_over_interactive(),
        theme: theme_props,
    }));

    let stack = iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(stack)
        .on_move(|position| Event::Cursor(CursorEvent::Moved(position)))
        .into()
}

/// Home: hero heading over the card carousel.
fn view_home<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette().clone();

    let name = text("Arman").size(HERO_NAME_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.bright_white),
        }
    });
    let tagline_color = palette.dim_foreground;
    let tagline = text("Software engineer. I build fast, considered tools.")
        .size(HERO_TAGLINE_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(tagline_color),
        });
    let hero = column![name, tagline]
        .spacing(HERO_SPACING)
        .align_x(alignment::Horizontal::Center);

    let feature = app.features.carousel();
    let deck = carousel::view(carousel::Props {
        deck: feature.deck(),
        active_index: feature.active_index(),
        neighbors: feature.neighbors(),
        transition: feature.transition(),
        viewport: app.viewport,
        theme: theme_props,
    })
    .map(Event::Carousel);

    container(
        column![hero, deck]
            .spacing(HOME_PADDING)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(HOME_PADDING)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn view_page<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    body: Element<'a, Event, Theme, iced::Renderer>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    page_frame::view(
        page_frame::Props {
            title: app.route.title(),
            theme: theme_props,
        },
        body,
        Event::Navigate(Route::Home),
        |over| Event::Cursor(CursorEvent::HoverChanged(over)),
    )
}
