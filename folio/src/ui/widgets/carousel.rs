use iced::border::Radius;
use iced::widget::{
    Space, Stack, button, column, container, mouse_area, row, scrollable,
    svg, text,
};
use iced::{Background, Border, Color, Element, Length, Padding, alignment};

use crate::features::carousel::{
    CarouselEvent, Category, Deck, Destination, Direction, Neighbors,
    Transition,
};
use crate::icons;
use crate::motion;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{IconButton, IconButtonProps};
use crate::viewport::ViewportMode;

pub(crate) const STRIP_SCROLL_ID: &str = "carousel-strip";

const STAGE_HEIGHT: f32 = 420.0;
const CARD_WIDTH: f32 = 240.0;
const CARD_HEIGHT: f32 = 320.0;
const CARD_RADIUS: f32 = 16.0;
const CARD_SPACING: f32 = 14.0;
const GLYPH_SIZE: f32 = 64.0;
const TITLE_FONT_SIZE: f32 = 20.0;
const CATEGORY_FONT_SIZE: f32 = 12.0;

const SIDE_OFFSET: f32 = 180.0;
const ENTER_OFFSET: f32 = 300.0;
const SIDE_OPACITY: f32 = 0.5;
const SIDE_SCALE: f32 = 0.85;
const ENTER_SCALE: f32 = 0.8;
// Stand-in for the light blur on off-center cards: colors are pulled
// toward the backdrop by this amount instead.
const SIDE_DIM: f32 = 0.35;

const ARROW_BUTTON_SIZE: f32 = 44.0;
const ARROW_ICON_SIZE: f32 = 20.0;

const STRIP_HEIGHT: f32 = 240.0;
const STRIP_CARD_WIDTH: f32 = 150.0;
const STRIP_CARD_HEIGHT: f32 = 200.0;
const STRIP_SPACING: f32 = 12.0;
const STRIP_PADDING_Y: f32 = 16.0;
const EDGE_FADE_WIDTH: f32 = 48.0;

/// Which flank of the center a mounted slot occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Prev,
    Next,
}

/// Visual role of a mounted slot during the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotRole {
    /// Settled center card.
    Center,
    /// Settled off-center card.
    Side(Side),
    /// New center animating in from the direction's entry side.
    Entering,
    /// Former center easing into an off-center slot.
    Settling(Side),
    /// Former center leaving the mounted trio entirely.
    Exiting,
}

/// Per-slot visual parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VisualParams {
    pub(crate) offset_x: f32,
    pub(crate) opacity: f32,
    pub(crate) scale: f32,
    pub(crate) dim: f32,
}

const CENTER_REST: VisualParams = VisualParams {
    offset_x: 0.0,
    opacity: 1.0,
    scale: 1.0,
    dim: 0.0,
};

const fn side_rest(side: Side) -> VisualParams {
    let offset_x = match side {
        Side::Prev => -SIDE_OFFSET,
        Side::Next => SIDE_OFFSET,
    };

    VisualParams {
        offset_x,
        opacity: SIDE_OPACITY,
        scale: SIDE_SCALE,
        dim: SIDE_DIM,
    }
}

/// Pure visual parameters for a slot role at `progress` through the
/// current transition. `direction` picks which side entering and exiting
/// motion uses; settled roles ignore both arguments.
pub(crate) fn style_for(
    role: SlotRole,
    direction: Direction,
    progress: f32,
) -> VisualParams {
    match role {
        SlotRole::Center => CENTER_REST,
        SlotRole::Side(side) => side_rest(side),
        SlotRole::Entering => {
            let enter_from = match direction {
                Direction::Forward => ENTER_OFFSET,
                Direction::Backward => -ENTER_OFFSET,
                Direction::None => return CENTER_REST,
            };
            let t = motion::spring(progress);

            VisualParams {
                offset_x: motion::lerp(enter_from, 0.0, t),
                opacity: motion::ease_out(progress),
                scale: motion::lerp(ENTER_SCALE, 1.0, t),
                dim: motion::lerp(SIDE_DIM, 0.0, motion::ease_out(progress)),
            }
        },
        SlotRole::Settling(side) => {
            let t = motion::ease_out(progress);
            let target = side_rest(side);

            VisualParams {
                offset_x: motion::lerp(0.0, target.offset_x, t),
                opacity: motion::lerp(1.0, target.opacity, t),
                scale: motion::lerp(1.0, target.scale, t),
                dim: motion::lerp(0.0, target.dim, t),
            }
        },
        SlotRole::Exiting => {
            let exit_to = match direction {
                Direction::Forward => -ENTER_OFFSET,
                Direction::Backward => ENTER_OFFSET,
                Direction::None => 0.0,
            };
            let t = motion::ease_out(progress);

            VisualParams {
                offset_x: motion::lerp(0.0, exit_to, t),
                opacity: motion::lerp(1.0, 0.0, t),
                scale: motion::lerp(1.0, ENTER_SCALE, t),
                dim: motion::lerp(0.0, SIDE_DIM, t),
            }
        },
    }
}

/// Mounted slot set for the wide stage, bottom layer first. The settled
/// set is exactly {previous, active, next}, deduplicated for degenerate
/// decks; a former center outside that trio stays mounted for the short
/// exit fade only.
pub(crate) fn mounted_slots(
    len: usize,
    active_index: usize,
    neighbors: Neighbors,
    transition_from: Option<usize>,
) -> Vec<(usize, SlotRole)> {
    let mut slots = Vec::with_capacity(4);

    let role_for = |side_index: usize, side: Side| {
        if transition_from == Some(side_index) {
            SlotRole::Settling(side)
        } else {
            SlotRole::Side(side)
        }
    };

    if len >= 3 && neighbors.previous_index != active_index {
        slots.push((
            neighbors.previous_index,
            role_for(neighbors.previous_index, Side::Prev),
        ));
    }
    if neighbors.next_index != active_index {
        slots.push((
            neighbors.next_index,
            role_for(neighbors.next_index, Side::Next),
        ));
    }

    if let Some(from) = transition_from {
        let in_trio = from == active_index
            || from == neighbors.previous_index
            || from == neighbors.next_index;
        if !in_trio {
            slots.push((from, SlotRole::Exiting));
        }
    }

    let center_role = if transition_from.is_some() {
        SlotRole::Entering
    } else {
        SlotRole::Center
    };
    slots.push((active_index, center_role));

    slots
}

/// Props for rendering the card carousel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Props<'a> {
    pub(crate) deck: &'a Deck,
    pub(crate) active_index: usize,
    pub(crate) neighbors: Neighbors,
    pub(crate) transition: Option<&'a Transition>,
    pub(crate) viewport: ViewportMode,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the carousel in the branch matching the viewport regime.
pub(crate) fn view<'a>(props: Props<'a>) -> Element<'a, CarouselEvent> {
    match props.viewport {
        ViewportMode::Compact => view_strip(props),
        ViewportMode::Wide => view_stage(props),
    }
}

/// Wide regime: three absolutely positioned slots between arrow buttons.
fn view_stage<'a>(props: Props<'a>) -> Element<'a, CarouselEvent> {
    let direction = props
        .transition
        .map(|t| t.direction)
        .unwrap_or(Direction::None);
    let progress = props.transition.map(|t| t.progress()).unwrap_or(1.0);
    let exit_progress =
        props.transition.map(|t| t.exit_progress()).unwrap_or(1.0);

    let slots = mounted_slots(
        props.deck.len(),
        props.active_index,
        props.neighbors,
        props.transition.map(|t| t.from_index),
    );

    let mut layers: Vec<Element<'a, CarouselEvent>> = Vec::new();
    for (index, role) in slots {
        let role_progress = match role {
            SlotRole::Entering => progress,
            SlotRole::Settling(_) | SlotRole::Exiting => exit_progress,
            SlotRole::Center | SlotRole::Side(_) => 1.0,
        };
        let params = style_for(role, direction, role_progress);
        let is_center = matches!(role, SlotRole::Center | SlotRole::Entering);
        let on_press = if matches!(role, SlotRole::Exiting) {
            None
        } else {
            Some(CarouselEvent::CardPressed(index))
        };

        let card = card(
            props.deck.get(index),
            params,
            is_center,
            on_press,
            props.theme,
        );
        // Exiting cards are inert; only pressable ones report hover.
        let card = if matches!(role, SlotRole::Exiting) {
            card
        } else {
            hoverable(card)
        };
        layers.push(positioned(card, params.offset_x));
    }

    let stage = Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fixed(STAGE_HEIGHT));

    let retreat = hoverable(
        IconButton::new(IconButtonProps {
            icon: icons::ARROW_LEFT,
            theme: props.theme,
            size: ARROW_BUTTON_SIZE,
            icon_size: ARROW_ICON_SIZE,
        })
        .view()
        .map(|_| CarouselEvent::Retreat),
    );

    let advance = hoverable(
        IconButton::new(IconButtonProps {
            icon: icons::ARROW_RIGHT,
            theme: props.theme,
            size: ARROW_BUTTON_SIZE,
            icon_size: ARROW_ICON_SIZE,
        })
        .view()
        .map(|_| CarouselEvent::Advance),
    );

    row![retreat, stage, advance]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}

/// Compact regime: one scrollable strip, every card pressable.
fn view_strip<'a>(props: Props<'a>) -> Element<'a, CarouselEvent> {
    let palette = props.theme.theme.iced_palette().clone();

    let mut cards = row![]
        .spacing(STRIP_SPACING)
        .padding([STRIP_PADDING_Y, EDGE_FADE_WIDTH]);
    for (index, destination) in
        props.deck.destinations().iter().enumerate()
    {
        cards = cards.push(hoverable(strip_card(
            destination,
            index == props.active_index,
            CarouselEvent::CardPressed(index),
            props.theme,
        )));
    }

    let scroll = scrollable::Scrollable::with_direction(
        cards,
        scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .id(STRIP_SCROLL_ID)
    .width(Length::Fill)
    .height(Length::Fixed(STRIP_HEIGHT));

    let left_fade = edge_fade(palette.background, true);
    let right_fade = container(edge_fade(palette.background, false))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right);

    Stack::with_children(vec![scroll.into(), left_fade, right_fade.into()])
        .width(Length::Fill)
        .height(Length::Fixed(STRIP_HEIGHT))
        .into()
}

/// Report pointer presence over a card or arrow for the cursor ring.
fn hoverable<'a>(
    content: impl Into<Element<'a, CarouselEvent>>,
) -> Element<'a, CarouselEvent> {
    mouse_area(content)
        .on_enter(CarouselEvent::HoverChanged(true))
        .on_exit(CarouselEvent::HoverChanged(false))
        .into()
}

/// Center-align a card layer, shifted horizontally by `offset_x`.
fn positioned<'a>(
    card: Element<'a, CarouselEvent>,
    offset_x: f32,
) -> Element<'a, CarouselEvent> {
    // Centered content moves by half the one-sided padding.
    let padding = if offset_x >= 0.0 {
        Padding {
            left: offset_x * 2.0,
            ..Padding::ZERO
        }
    } else {
        Padding {
            right: -offset_x * 2.0,
            ..Padding::ZERO
        }
    };

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(padding)
        .into()
}

fn card<'a>(
    destination: &'a Destination,
    params: VisualParams,
    is_center: bool,
    on_press: Option<CarouselEvent>,
    theme: ThemeProps<'a>,
) -> Element<'a, CarouselEvent> {
    let palette = theme.theme.iced_palette().clone();

    let glyph_base = if is_center {
        palette.accent
    } else {
        palette.foreground
    };
    let glyph_color =
        faded(dimmed(glyph_base, palette.background, params.dim), params.opacity);
    let title_color = faded(
        dimmed(palette.bright_white, palette.background, params.dim),
        params.opacity,
    );
    let category_color = faded(
        dimmed(palette.dim_foreground, palette.background, params.dim),
        params.opacity,
    );

    let glyph = svg::Svg::new(svg::Handle::from_memory(destination.glyph))
        .width(Length::Fixed(GLYPH_SIZE * params.scale))
        .height(Length::Fixed(GLYPH_SIZE * params.scale))
        .style(move |_, _| svg::Style {
            color: Some(glyph_color),
        });

    let title = text(destination.title)
        .size(TITLE_FONT_SIZE * params.scale)
        .style(move |_| iced::widget::text::Style {
            color: Some(title_color),
        });

    let category = text(category_label(destination.category))
        .size(CATEGORY_FONT_SIZE * params.scale)
        .style(move |_| iced::widget::text::Style {
            color: Some(category_color),
        });

    let content = column![glyph, title, category]
        .spacing(CARD_SPACING * params.scale)
        .align_x(alignment::Horizontal::Center);

    let body = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let background = faded(
        dimmed(palette.overlay, palette.background, params.dim),
        params.opacity,
    );
    let border_color = if is_center {
        faded(palette.accent, params.opacity)
    } else {
        faded(palette.bright_black, params.opacity)
    };
    let border_width = if is_center { 1.5 } else { 1.0 };

    let mut card = button(body)
        .padding(0.0)
        .width(Length::Fixed(CARD_WIDTH * params.scale))
        .height(Length::Fixed(CARD_HEIGHT * params.scale))
        .style(move |_, status| {
            let background = match status {
                iced::widget::button::Status::Hovered
                | iced::widget::button::Status::Pressed => {
                    faded(palette.bright_black, params.opacity * 0.6)
                },
                _ => background,
            };

            iced::widget::button::Style {
                background: Some(background.into()),
                border: Border {
                    color: border_color,
                    width: border_width,
                    radius: Radius::new(CARD_RADIUS),
                },
                ..Default::default()
            }
        });

    if let Some(event) = on_press {
        card = card.on_press(event);
    }

    card.into()
}

fn strip_card<'a>(
    destination: &'a Destination,
    is_active: bool,
    on_press: CarouselEvent,
    theme: ThemeProps<'a>,
) -> Element<'a, CarouselEvent> {
    let params = VisualParams {
        offset_x: 0.0,
        opacity: 1.0,
        scale: STRIP_CARD_WIDTH / CARD_WIDTH,
        dim: 0.0,
    };
    let scaled = VisualParams {
        // Keep the strip cards slightly taller than a uniform scale of
        // the stage card so the labels stay readable.
        scale: (STRIP_CARD_HEIGHT / CARD_HEIGHT).max(params.scale),
        ..params
    };

    card(destination, scaled, is_active, Some(on_press), theme)
}

/// One-sided gradient from the backdrop color into transparency.
fn edge_fade<'a, Message: 'a>(
    backdrop: Color,
    is_left: bool,
) -> Element<'a, Message> {
    let transparent = Color { a: 0.0, ..backdrop };
    let (from, to) = if is_left {
        (backdrop, transparent)
    } else {
        (transparent, backdrop)
    };

    container(Space::new())
        .width(Length::Fixed(EDGE_FADE_WIDTH))
        .height(Length::Fill)
        .style(move |_| {
            let gradient = iced::gradient::Linear::new(iced::Radians(
                std::f32::consts::FRAC_PI_2,
            ))
            .add_stop(0.0, from)
            .add_stop(1.0, to);

            iced::widget::container::Style {
                background: Some(Background::Gradient(gradient.into())),
                ..Default::default()
            }
        })
        .into()
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Profile => "welcome",
        Category::About => "who I am",
        Category::Projects => "what I've built",
        Category::Certificates => "what I've earned",
        Category::TechStack => "what I use",
        Category::Contact => "say hello",
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Pull a color toward the backdrop; the poor man's blur.
fn dimmed(color: Color, toward: Color, amount: f32) -> Color {
    Color {
        r: motion::lerp(color.r, toward.r, amount),
        g: motion::lerp(color.g, toward.g, amount),
        b: motion::lerp(color.b, toward.b, amount),
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CENTER_REST, ENTER_OFFSET, ENTER_SCALE, SIDE_DIM, SIDE_OFFSET,
        SIDE_OPACITY, SIDE_SCALE, Side, SlotRole, mounted_slots, side_rest,
        style_for,
    };
    use crate::features::carousel::{Direction, Neighbors};

    #[test]
    fn given_settled_roles_when_styling_then_table_rest_values_hold() {
        let center = style_for(SlotRole::Center, Direction::None, 1.0);
        assert_eq!(center, CENTER_REST);

        let prev = style_for(SlotRole::Side(Side::Prev), Direction::None, 1.0);
        assert_eq!(prev.offset_x, -SIDE_OFFSET);
        assert_eq!(prev.opacity, SIDE_OPACITY);
        assert_eq!(prev.scale, SIDE_SCALE);
        assert_eq!(prev.dim, SIDE_DIM);

        let next = style_for(SlotRole::Side(Side::Next), Direction::None, 1.0);
        assert_eq!(next.offset_x, SIDE_OFFSET);
    }

    #[test]
    fn given_forward_entering_when_styling_then_card_comes_from_the_right() {
        let start = style_for(SlotRole::Entering, Direction::Forward, 0.0);
        assert_eq!(start.offset_x, ENTER_OFFSET);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.scale, ENTER_SCALE);

        let end = style_for(SlotRole::Entering, Direction::Forward, 1.0);
        assert_eq!(end, CENTER_REST);

        let mirrored =
            style_for(SlotRole::Entering, Direction::Backward, 0.0);
        assert_eq!(mirrored.offset_x, -ENTER_OFFSET);
    }

    #[test]
    fn given_forward_exit_when_styling_then_card_fades_out_to_the_left() {
        let end = style_for(SlotRole::Exiting, Direction::Forward, 1.0);

        assert_eq!(end.offset_x, -ENTER_OFFSET);
        assert_eq!(end.opacity, 0.0);
        assert_eq!(end.scale, ENTER_SCALE);
    }

    #[test]
    fn given_settling_card_when_finished_then_it_matches_side_rest() {
        let prev = style_for(SlotRole::Settling(Side::Prev), Direction::Forward, 1.0);
        assert_eq!(prev, side_rest(Side::Prev));

        let next = style_for(SlotRole::Settling(Side::Next), Direction::Backward, 1.0);
        assert_eq!(next, side_rest(Side::Next));
    }

    #[test]
    fn given_full_deck_when_mounting_then_exactly_the_trio_is_mounted() {
        let neighbors = Neighbors {
            previous_index: 1,
            next_index: 3,
        };

        let slots = mounted_slots(6, 2, neighbors, None);

        assert_eq!(
            slots,
            vec![
                (1, SlotRole::Side(Side::Prev)),
                (3, SlotRole::Side(Side::Next)),
                (2, SlotRole::Center),
            ]
        );
    }

    #[test]
    fn given_transition_from_neighbor_when_mounting_then_it_settles_in_place()
    {
        let neighbors = Neighbors {
            previous_index: 1,
            next_index: 3,
        };

        let slots = mounted_slots(6, 2, neighbors, Some(1));

        assert!(slots.contains(&(1, SlotRole::Settling(Side::Prev))));
        assert!(slots.contains(&(2, SlotRole::Entering)));
    }

    #[test]
    fn given_far_jump_when_mounting_then_old_center_exits_transiently() {
        let neighbors = Neighbors {
            previous_index: 4,
            next_index: 0,
        };

        let slots = mounted_slots(6, 5, neighbors, Some(2));

        assert!(slots.contains(&(2, SlotRole::Exiting)));
        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn given_degenerate_decks_when_mounting_then_slots_are_deduplicated() {
        let single = mounted_slots(
            1,
            0,
            Neighbors {
                previous_index: 0,
                next_index: 0,
            },
            None,
        );
        assert_eq!(single, vec![(0, SlotRole::Center)]);

        let pair = mounted_slots(
            2,
            0,
            Neighbors {
                previous_index: 1,
                next_index: 1,
            },
            None,
        );
        assert_eq!(
            pair,
            vec![(1, SlotRole::Side(Side::Next)), (0, SlotRole::Center)]
        );
    }
}
