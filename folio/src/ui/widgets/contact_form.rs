use iced::border::Radius;
use iced::widget::{
    button, column, container, mouse_area, text, text_editor, text_input,
};
use iced::{Border, Element, Length};

use crate::features::contact::{ContactEvent, SubmitStatus};
use crate::theme::ThemeProps;

const FIELD_SPACING: f32 = 14.0;
const FIELD_RADIUS: f32 = 10.0;
const FIELD_SIZE: f32 = 15.0;
const FIELD_PADDING: f32 = 12.0;
const SUBMIT_SIZE: f32 = 15.0;
const NOTICE_SIZE: f32 = 14.0;
const MESSAGE_HEIGHT: f32 = 140.0;

/// Props for the contact form page body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) message: &'a text_editor::Content,
    pub(crate) status: SubmitStatus,
    pub(crate) theme: ThemeProps<'a>,
}

/// Contact form: three fields, a submit button and the success notice.
pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, ContactEvent> {
    let mut body = column![
        field(props, "Your name", props.name, ContactEvent::NameChanged),
        field(props, "Your email", props.email, ContactEvent::EmailChanged),
        message_field(props),
        submit_button(props),
    ]
    .spacing(FIELD_SPACING)
    .width(Length::Fill);

    if props.status == SubmitStatus::Succeeded {
        body = body.push(success_notice(props.theme));
    }

    body.into()
}

fn field<'a>(
    props: Props<'a>,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> ContactEvent,
) -> Element<'a, ContactEvent> {
    hoverable(
        text_input(placeholder, value)
            .on_input(on_input)
            .size(FIELD_SIZE)
            .padding(FIELD_PADDING)
            .style(field_style(props.theme)),
    )
}

fn message_field<'a>(props: Props<'a>) -> Element<'a, ContactEvent> {
    hoverable(
        text_editor(props.message)
            .placeholder("Your message")
            .on_action(ContactEvent::MessageEdited)
            .size(FIELD_SIZE)
            .padding(FIELD_PADDING)
            .height(Length::Fixed(MESSAGE_HEIGHT))
            .style(editor_style(props.theme)),
    )
}

fn editor_style(
    theme: ThemeProps<'_>,
) -> impl Fn(
    &iced::Theme,
    iced::widget::text_editor::Status,
) -> iced::widget::text_editor::Style
+ 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &iced::Theme, status| {
        let mut style = iced::widget::text_editor::default(base, status);
        style.background = palette.overlay.into();
        style.border.radius = Radius::new(FIELD_RADIUS);
        style.placeholder = palette.dim_foreground;
        style.value = palette.bright_white;
        style.selection = palette.accent;
        style
    }
}

fn field_style(
    theme: ThemeProps<'_>,
) -> impl Fn(
    &iced::Theme,
    iced::widget::text_input::Status,
) -> iced::widget::text_input::Style
+ 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &iced::Theme, status| {
        let mut style = iced::widget::text_input::default(base, status);
        style.background = palette.overlay.into();
        style.border.radius = Radius::new(FIELD_RADIUS);
        style.placeholder = palette.dim_foreground;
        style.value = palette.bright_white;
        style.selection = palette.accent;
        style
    }
}

fn submit_button<'a>(props: Props<'a>) -> Element<'a, ContactEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let submitting = props.status == SubmitStatus::Submitting;

    let label = if submitting { "Sending..." } else { "Send message" };
    let label_color = if submitting {
        palette.dim_foreground
    } else {
        palette.background
    };
    let label = text(label).size(SUBMIT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(label_color),
        }
    });

    let on_press = (!submitting).then_some(ContactEvent::SubmitPressed);

    let submit = button(label)
        .on_press_maybe(on_press)
        .padding([10.0, 18.0])
        .style(move |_, status| {
            let background = if submitting {
                palette.overlay
            } else {
                match status {
                    iced::widget::button::Status::Hovered
                    | iced::widget::button::Status::Pressed => {
                        palette.bright_white
                    },
                    _ => palette.accent,
                }
            };

            iced::widget::button::Style {
                background: Some(background.into()),
                border: Border {
                    color: palette.accent,
                    width: 1.0,
                    radius: Radius::new(FIELD_RADIUS),
                },
                ..Default::default()
            }
        });

    hoverable(submit)
}

/// Report pointer presence over a form control for the cursor ring.
fn hoverable<'a>(
    content: impl Into<Element<'a, ContactEvent>>,
) -> Element<'a, ContactEvent> {
    mouse_area(content)
        .on_enter(ContactEvent::HoverChanged(true))
        .on_exit(ContactEvent::HoverChanged(false))
        .into()
}

fn success_notice<'a>(theme: ThemeProps<'a>) -> Element<'a, ContactEvent> {
    let palette = theme.theme.iced_palette().clone();

    let notice = text("Thanks! Your message has been sent.")
        .size(NOTICE_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.green),
        });

    container(notice)
        .padding([8.0, 12.0])
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            border: Border {
                color: palette.green,
                width: 1.0,
                radius: Radius::new(FIELD_RADIUS),
            },
            ..Default::default()
        })
        .into()
}
