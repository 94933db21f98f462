use iced::widget::{Space, column, container, mouse_area, row, scrollable, text};
use iced::{Element, Length, alignment};

use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{IconButton, IconButtonProps};

const TITLE_SIZE: f32 = 28.0;
const HOME_BUTTON_SIZE: f32 = 36.0;
const HOME_ICON_SIZE: f32 = 18.0;
const FRAME_PADDING: f32 = 32.0;
const HEADER_SPACING: f32 = 16.0;
const CONTENT_MAX_WIDTH: f32 = 760.0;

/// Props for the shared page chrome around routed page content.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) title: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Wrap page content with the title bar and the back-to-carousel button.
/// `on_hover` reports pointer presence over the button for the cursor
/// ring.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: Props<'a>,
    content: Element<'a, Message>,
    on_home: Message,
    on_hover: fn(bool) -> Message,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette().clone();

    let home = mouse_area(
        IconButton::new(IconButtonProps {
            icon: icons::NAV_HOME,
            theme: props.theme,
            size: HOME_BUTTON_SIZE,
            icon_size: HOME_ICON_SIZE,
        })
        .view()
        .map(move |_| on_home.clone()),
    )
    .on_enter(on_hover(true))
    .on_exit(on_hover(false));

    let title = text(props.title.to_owned())
        .size(TITLE_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.bright_white),
        });

    let header = row![home, title, Space::new().width(Length::Fill)]
        .spacing(HEADER_SPACING)
        .align_y(alignment::Vertical::Center);

    let body = container(content)
        .width(Length::Fill)
        .max_width(CONTENT_MAX_WIDTH);

    let page = column![header, scrollable(body).height(Length::Fill)]
        .spacing(HEADER_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(FRAME_PADDING)
        .align_x(alignment::Horizontal::Center)
        .into()
}
