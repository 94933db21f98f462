use iced::border::Radius;
use iced::widget::{Space, container};
use iced::{Border, Color, Element, Length, Padding, Point};

use crate::theme::ThemeProps;

const RING_SIZE: f32 = 18.0;
const RING_SIZE_INTERACTIVE: f32 = 32.0;
const RING_WIDTH: f32 = 1.5;
const FILL_ALPHA: f32 = 0.12;

/// Props for the cosmetic cursor-follow ring.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) position: Option<Point>,
    pub(crate) over_interactive: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Decorative ring that trails the pointer. Hidden until the pointer
/// has entered the window at least once; never intercepts input.
pub(crate) fn view<'a, Message: 'a>(
    props: Props<'a>,
) -> Element<'a, Message> {
    let Some(position) = props.position else {
        return Space::new().into();
    };

    let palette = props.theme.theme.iced_palette().clone();
    let size = if props.over_interactive {
        RING_SIZE_INTERACTIVE
    } else {
        RING_SIZE
    };

    let ring = container(Space::new())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_| iced::widget::container::Style {
            background: Some(
                Color {
                    a: FILL_ALPHA,
                    ..palette.accent
                }
                .into(),
            ),
            border: Border {
                color: palette.accent,
                width: RING_WIDTH,
                radius: Radius::new(size / 2.0),
            },
            ..Default::default()
        });

    container(ring)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: (position.x - size / 2.0).max(0.0),
            top: (position.y - size / 2.0).max(0.0),
            ..Padding::ZERO
        })
        .into()
}
