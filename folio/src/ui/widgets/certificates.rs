use iced::border::Radius;
use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Border, Element, Length, alignment};

use crate::features::pages::{Certificate, PagesEvent};
use crate::theme::ThemeProps;

const ROW_PADDING: f32 = 16.0;
const ROW_RADIUS: f32 = 10.0;
const ROW_SPACING: f32 = 12.0;
const NAME_SIZE: f32 = 16.0;
const ISSUER_SIZE: f32 = 13.0;
const YEAR_SIZE: f32 = 14.0;
const REVEAL_SIZE: f32 = 14.0;

/// Props for the certificates page body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) certificates: &'a [Certificate],
    pub(crate) hidden_count: usize,
    pub(crate) theme: ThemeProps<'a>,
}

/// Paginated certificate rows plus the "show all" affordance.
pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, PagesEvent> {
    let mut body = column![].spacing(ROW_SPACING).width(Length::Fill);

    for certificate in props.certificates {
        body = body.push(certificate_row(certificate, props.theme));
    }

    if props.hidden_count > 0 {
        body = body.push(reveal_button(props.hidden_count, props.theme));
    }

    body.into()
}

fn certificate_row<'a>(
    certificate: &'a Certificate,
    theme: ThemeProps<'a>,
) -> Element<'a, PagesEvent> {
    let palette = theme.theme.iced_palette().clone();

    let name = text(certificate.name).size(NAME_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.bright_white),
        }
    });
    let issuer =
        text(certificate.issuer).size(ISSUER_SIZE).style(move |_| {
            iced::widget::text::Style {
                color: Some(palette.dim_white),
            }
        });
    let year = text(certificate.year.to_string()).size(YEAR_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(palette.accent),
        },
    );

    let details = column![name, issuer].spacing(4.0);
    let line = row![details, Space::new().width(Length::Fill), year]
        .align_y(alignment::Vertical::Center);

    container(line)
        .width(Length::Fill)
        .padding(ROW_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            border: Border {
                color: palette.bright_black,
                width: 1.0,
                radius: Radius::new(ROW_RADIUS),
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
        .on_press(PagesEvent::RevealAllCertificates)
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
                    radius: Radius::new(ROW_RADIUS),
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
