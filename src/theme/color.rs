use ratatui::style::Color;

/// Base palette shared by every part of the view
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub accent: Color,
    pub disabled: Color,
}

/// Colors for the search trigger view
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub palette: ColorPalette,

    pub title: Color,
    pub button: Color,
    pub button_text: Color,
    pub spinner: Color,
    pub code: Color,
    pub result_text: Color,
}

impl ThemeColors {
    pub fn professional_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(16, 16, 20),
            surface: Color::Rgb(24, 24, 28),

            text_primary: Color::Rgb(224, 224, 230),
            text_secondary: Color::Rgb(160, 160, 168),
            text_muted: Color::Rgb(112, 112, 120),
            text_inverse: Color::Rgb(16, 16, 20),

            border: Color::Rgb(64, 64, 72),
            border_focused: Color::Rgb(88, 166, 255),

            success: Color::Rgb(76, 175, 80),
            warning: Color::Rgb(255, 193, 7),
            error: Color::Rgb(244, 67, 54),
            info: Color::Rgb(33, 150, 243),

            accent: Color::Rgb(88, 166, 255),
            disabled: Color::Rgb(96, 96, 104),
        };

        Self {
            title: palette.accent,
            button: Color::Rgb(37, 99, 235),
            button_text: Color::Rgb(250, 250, 252),
            spinner: palette.warning,
            code: Color::Rgb(255, 203, 107),
            result_text: palette.text_primary,
            palette,
        }
    }

    pub fn professional_light() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(250, 250, 252),
            surface: Color::Rgb(242, 242, 245),

            text_primary: Color::Rgb(32, 32, 40),
            text_secondary: Color::Rgb(96, 96, 104),
            text_muted: Color::Rgb(144, 144, 152),
            text_inverse: Color::Rgb(250, 250, 252),

            border: Color::Rgb(208, 208, 216),
            border_focused: Color::Rgb(0, 122, 255),

            success: Color::Rgb(52, 199, 89),
            warning: Color::Rgb(255, 149, 0),
            error: Color::Rgb(255, 59, 48),
            info: Color::Rgb(0, 122, 255),

            accent: Color::Rgb(30, 58, 138),
            disabled: Color::Rgb(174, 174, 178),
        };

        Self {
            title: palette.accent,
            button: Color::Rgb(37, 99, 235),
            button_text: palette.text_inverse,
            spinner: palette.warning,
            code: Color::Rgb(180, 83, 9),
            result_text: palette.text_primary,
            palette,
        }
    }
}
