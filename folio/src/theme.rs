use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw hex palette for the dark portfolio look.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) accent: String,
    pub(crate) magenta: String,
    pub(crate) cyan: String,
    pub(crate) green: String,
    pub(crate) red: String,
    pub(crate) yellow: String,
    pub(crate) bright_black: String,
    pub(crate) bright_white: String,
    pub(crate) dim_black: String,
    pub(crate) dim_white: String,
    pub(crate) dim_foreground: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#10121C"),
            accent: String::from("#4FA6ED"),
            magenta: String::from("#C678DD"),
            cyan: String::from("#56B6C2"),
            green: String::from("#98C379"),
            red: String::from("#E06C75"),
            yellow: String::from("#E5C07B"),
            bright_black: String::from("#4F5666"),
            bright_white: String::from("#FFFFFF"),
            dim_black: String::from("#0B0D13"),
            dim_white: String::from("#6C7385"),
            dim_foreground: String::from("#6B7280"),
            overlay: String::from("#1C1F2B"),
        }
    }
}

/// Palette parsed into iced colors, ready for style closures.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) accent: Color,
    pub(crate) magenta: Color,
    pub(crate) cyan: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
    pub(crate) bright_black: Color,
    pub(crate) bright_white: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_white: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            accent: parse_hex_color(&p.accent),
            magenta: parse_hex_color(&p.magenta),
            cyan: parse_hex_color(&p.cyan),
            green: parse_hex_color(&p.green),
            red: parse_hex_color(&p.red),
            yellow: parse_hex_color(&p.yellow),
            bright_black: parse_hex_color(&p.bright_black),
            bright_white: parse_hex_color(&p.bright_white),
            dim_black: parse_hex_color(&p.dim_black),
            dim_white: parse_hex_color(&p.dim_white),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Parse a `#RRGGBB` hex string, falling back to black on malformed input.
pub(crate) fn parse_hex_color(hex: &str) -> Color {
    let raw = hex.trim_start_matches('#');
    if raw.len() != 6 {
        return Color::BLACK;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&raw[range], 16).unwrap_or(0)
    };

    Color::from_rgb8(channel(0..2), channel(2..4), channel(4..6))
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) foreground: Option<Color>,
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();
        let iced_palette = IcedColorPalette::from(&raw_palette);

        Self {
            id: String::from("default"),
            iced_palette,
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_hex_color;

    #[test]
    fn given_valid_hex_when_parsing_then_channels_match() {
        let color = parse_hex_color("#4FA6ED");

        assert!((color.r - 0x4F as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.g - 0xA6 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 0xED as f32 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsing_then_black_is_returned() {
        let color = parse_hex_color("#12F");

        assert_eq!(color, iced::Color::BLACK);
    }
}
