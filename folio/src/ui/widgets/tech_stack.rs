use iced::border::Radius;
use iced::widget::{column, container, row, text};
use iced::{Border, Element, Length};

use crate::features::pages::TECH_GROUPS;
use crate::theme::ThemeProps;

const GROUP_SPACING: f32 = 20.0;
const GROUP_NAME_SIZE: f32 = 16.0;
const CHIP_SIZE: f32 = 13.0;
const CHIP_RADIUS: f32 = 999.0;

/// Static tech stack page body: named groups of chips.
pub(crate) fn view<'a, Message: 'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = theme.theme.iced_palette().clone();

    let mut body = column![].spacing(GROUP_SPACING).width(Length::Fill);
    for group in TECH_GROUPS {
        let name_color = palette.cyan;
        let name = text(group.name).size(GROUP_NAME_SIZE).style(move |_| {
            iced::widget::text::Style {
                color: Some(name_color),
            }
        });

        let mut chips = row![].spacing(8.0);
        for item in group.items {
            let chip_palette = palette.clone();
            let label = text(*item).size(CHIP_SIZE).style(move |_| {
                iced::widget::text::Style {
                    color: Some(chip_palette.foreground),
                }
            });

            let border_palette = palette.clone();
            chips = chips.push(
                container(label).padding([4.0, 10.0]).style(move |_| {
                    iced::widget::container::Style {
                        background: Some(border_palette.overlay.into()),
                        border: Border {
                            color: border_palette.bright_black,
                            width: 1.0,
                            radius: Radius::new(CHIP_RADIUS),
                        },
                        ..Default::default()
                    }
                }),
            );
        }

        body = body.push(column![name, chips.wrap()].spacing(10.0));
    }

    body.into()
}
