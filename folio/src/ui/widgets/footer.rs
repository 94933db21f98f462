use iced::widget::{container, text};
use iced::{Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const FOOTER_HEIGHT: f32 = 36.0;

/// Props for the footer line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Thin footer line pinned under the routed content.
pub(crate) fn view<'a, Message: 'a>(
    props: Props<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette().clone();

    let line = text("© 2026 Arman. Built with Rust and iced.")
        .font(props.fonts.ui.font_type)
        .size(props.fonts.ui.size - 2.0)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        });

    container(line)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
