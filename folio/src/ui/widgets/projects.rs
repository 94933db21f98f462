use iced::border::Radius;
use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Border, Element, Length, alignment};

use crate::features::pages::{PagesEvent, Project};
use crate::theme::ThemeProps;

const CARD_PADDING: f32 = 18.0;
const CARD_RADIUS: f32 = 12.0;
const CARD_SPACING: f32 = 14.0;
const NAME_SIZE: f32 = 18.0;
const SUMMARY_SIZE: f32 = 14.0;
const TAG_SIZE: f32 = 12.0;
const LINK_SIZE: f32 = 13.0;
const REVEAL_SIZE: f32 = 14.0;

/// Props for the projects page body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) projects: &'a [Project],
    pub(crate) hidden_count: usize,
    pub(crate) theme: ThemeProps<'a>,
}

/// Paginated project cards plus the "show all" affordance.
pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, PagesEvent> {
    let mut body = column![].spacing(CARD_SPACING).width(Length::Fill);

    for project in props.projects {
        body = body.push(project_card(project, props.theme));
    }

    if props.hidden_count > 0 {
        body = body.push(reveal_button(props.hidden_count, props.theme));
    }

    body.into()
}

fn project_card<'a>(
    project: &'a Project,
    theme: ThemeProps<'a>,
) -> Element<'a, PagesEvent> {
    let palette = theme.theme.iced_palette().clone();

    let name = text(project.name).size(NAME_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.bright_white),
        }
    });
    let link = text(project.link).size(LINK_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.accent),
        }
    });
    let header = row![name, Space::new().width(Length::Fill), link]
        .align_y(alignment::Vertical::Center);

    let summary = text(project.summary).size(SUMMARY_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.foreground),
        }
    });

    let mut tags = row![].spacing(8.0);
    for tag in project.tech {
        let color = palette.magenta;
        tags = tags.push(text(*tag).size(TAG_SIZE).style(move |_| {
            iced::widget::text::Style { color: Some(color) }
        }));
    }

    container(column![header, summary, tags].spacing(10.0))
        .width(Length::Fill)
        .padding(CARD_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            border: Border {
                color: palette.bright_black,
                width: 1.0,
                radius: Radius::new(CARD_RADIUS),
            },
            ..Default::default()
        })
        .into()
}

fn reveal_button<'a>(
    hidden_count: usize,
    theme: ThemeProps<'a>,
) -> Element<'a, PagesEvent> {
    let palette = theme.theme.iced_palette().clone();

    let label = text(format!("Show all ({hidden_count} more)"))
        .size(REVEAL_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.accent),
        });

    let reveal = button(label)
        .on_press(PagesEvent::RevealAllProjects)
        .padding([8.0, 14.0])
        .style(move |_, status| {
            let background = match status {
                iced::widget::button::Status::Hovered
                | iced::widget::button::Status::Pressed => {
                    Some(palette.overlay.into())
                },
                _ => None,
            };

            iced::widget::button::Style {
                background,
                border: Border {
                    color: palette.accent,
                    width: 1.0,
                    radius: Radius::new(CARD_RADIUS),
                },
                ..Default::default()
            }
        });

    // Report pointer presence for the cursor ring.
    mouse_area(reveal)
        .on_enter(PagesEvent::HoverChanged(true))
        .on_exit(PagesEvent::HoverChanged(false))
        .into()
}
