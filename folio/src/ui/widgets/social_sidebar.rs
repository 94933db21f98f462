use iced::border::Radius;
use iced::widget::{
    Space, button, column, container, mouse_area, row, svg, text,
};
use iced::{Border, Color, Element, Length, alignment};

use crate::features::sidebar::{
    SIDEBAR_RAIL_WIDTH, SOCIAL_LINKS, SidebarEvent,
};
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{IconButton, IconButtonProps};
use crate::viewport::ViewportMode;

const RAIL_BUTTON_SIZE: f32 = 40.0;
const RAIL_ICON_SIZE: f32 = 18.0;
const RAIL_SPACING: f32 = 10.0;
const DRAWER_WIDTH: f32 = 240.0;
const DRAWER_PADDING: f32 = 20.0;
const DRAWER_LINK_SIZE: f32 = 16.0;
const DRAWER_ICON_SIZE: f32 = 20.0;
const BACKDROP_ALPHA: f32 = 0.6;
const MENU_BUTTON_SIZE: f32 = 40.0;
const MENU_MARGIN: f32 = 12.0;

/// Props for the social links chrome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) drawer_open: bool,
    pub(crate) viewport: ViewportMode,
    pub(crate) theme: ThemeProps<'a>,
}

/// Social links chrome layer: a fixed rail when wide, a hamburger
/// toggle plus overlay drawer when compact.
pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, SidebarEvent> {
    match props.viewport {
        ViewportMode::Wide => rail(props),
        ViewportMode::Compact if props.drawer_open => drawer(props),
        ViewportMode::Compact => menu_button(props),
    }
}

fn rail<'a>(props: Props<'a>) -> Element<'a, SidebarEvent> {
    let mut links = column![].spacing(RAIL_SPACING);
    for (index, link) in SOCIAL_LINKS.iter().enumerate() {
        links = links.push(hoverable(
            IconButton::new(IconButtonProps {
                icon: link.glyph,
                theme: props.theme,
                size: RAIL_BUTTON_SIZE,
                icon_size: RAIL_ICON_SIZE,
            })
            .view()
            .map(move |_| SidebarEvent::OpenLink(index)),
        ));
    }

    container(links)
        .width(Length::Fixed(SIDEBAR_RAIL_WIDTH))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn menu_button<'a>(props: Props<'a>) -> Element<'a, SidebarEvent> {
    let toggle = hoverable(
        IconButton::new(IconButtonProps {
            icon: icons::DRAWER_MENU,
            theme: props.theme,
            size: MENU_BUTTON_SIZE,
            icon_size: RAIL_ICON_SIZE,
        })
        .view()
        .map(|_| SidebarEvent::ToggleDrawer),
    );

    container(toggle)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(MENU_MARGIN)
        .into()
}

fn drawer<'a>(props: Props<'a>) -> Element<'a, SidebarEvent> {
    let palette = props.theme.theme.iced_palette().clone();

    let backdrop: Element<'a, SidebarEvent> = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(
                    Color {
                        a: BACKDROP_ALPHA,
                        ..palette.dim_black
                    }
                    .into(),
                ),
                ..Default::default()
            }),
    )
    .on_press(SidebarEvent::DismissDrawer)
    .into();

    let close = IconButton::new(IconButtonProps {
        icon: icons::DRAWER_CLOSE,
        theme: props.theme,
        size: MENU_BUTTON_SIZE,
        icon_size: RAIL_ICON_SIZE,
    })
    .view()
    .map(|_| SidebarEvent::DismissDrawer);

    let mut links = column![
        container(close)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
    ]
    .spacing(RAIL_SPACING);
    for (index, link) in SOCIAL_LINKS.iter().enumerate() {
        links = links.push(drawer_link(
            link.glyph,
            link.label,
            SidebarEvent::OpenLink(index),
            props.theme,
        ));
    }

    let panel_palette = palette.clone();
    let panel = container(links)
        .width(Length::Fixed(DRAWER_WIDTH))
        .height(Length::Fill)
        .padding(DRAWER_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(panel_palette.overlay.into()),
            border: Border {
                color: panel_palette.bright_black,
                width: 1.0,
                radius: Radius::new(0.0),
            },
            ..Default::default()
        });

    // The panel itself is the interactive surface, not the backdrop.
    let panel_layer = container(hoverable(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right);

    iced::widget::Stack::with_children(vec![backdrop, panel_layer.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Report pointer presence over a link or toggle for the cursor ring.
fn hoverable<'a>(
    content: impl Into<Element<'a, SidebarEvent>>,
) -> Element<'a, SidebarEvent> {
    mouse_area(content)
        .on_enter(SidebarEvent::HoverChanged(true))
        .on_exit(SidebarEvent::HoverChanged(false))
        .into()
}

fn drawer_link<'a>(
    glyph: &'static [u8],
    label: &'static str,
    on_press: SidebarEvent,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent> {
    let palette = theme.theme.iced_palette().clone();

    let icon_color = palette.dim_foreground;
    let icon = svg::Svg::new(svg::Handle::from_memory(glyph))
        .width(Length::Fixed(DRAWER_ICON_SIZE))
        .height(Length::Fixed(DRAWER_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let label_color = palette.foreground;
    let label = text(label).size(DRAWER_LINK_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(label_color),
        }
    });

    button(
        row![icon, label]
            .spacing(12.0)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(on_press)
    .padding([8.0, 10.0])
    .width(Length::Fill)
    .style(move |_, status| {
        let background = match status {
            iced::widget::button::Status::Hovered
            | iced::widget::button::Status::Pressed => {
                Some(palette.bright_black.into())
            },
            _ => None,
        };

        iced::widget::button::Style {
            background,
            border: Border {
                radius: Radius::new(8.0),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
