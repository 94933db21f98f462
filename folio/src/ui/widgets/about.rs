use iced::widget::{column, text};
use iced::{Element, Length};

use crate::features::pages::ABOUT_PARAGRAPHS;
use crate::theme::ThemeProps;

const PARAGRAPH_SIZE: f32 = 16.0;
const PARAGRAPH_SPACING: f32 = 18.0;

/// Static about page body: a handful of paragraphs, nothing interactive.
pub(crate) fn view<'a, Message: 'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = theme.theme.iced_palette().clone();

    let mut body = column![].spacing(PARAGRAPH_SPACING).width(Length::Fill);
    for paragraph in ABOUT_PARAGRAPHS {
        let color = palette.foreground;
        body = body.push(text(*paragraph).size(PARAGRAPH_SIZE).style(
            move |_| iced::widget::text::Style { color: Some(color) },
        ));
    }

    body.into()
}
