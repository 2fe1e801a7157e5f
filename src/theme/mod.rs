pub mod color;

use crate::config::ThemeChoice;
use ratatui::style::{Modifier, Style};

pub use color::{ColorPalette, ThemeColors};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn professional_dark() -> Self {
        Self {
            name: "Professional Dark".to_string(),
            colors: ThemeColors::professional_dark(),
        }
    }

    pub fn professional_light() -> Self {
        Self {
            name: "Professional Light".to_string(),
            colors: ThemeColors::professional_light(),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::professional_dark(),
            ThemeChoice::Light => Self::professional_light(),
        }
    }

    /// Border style for a panel, highlighted when it has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.palette.border_focused)
        } else {
            Style::default().fg(self.colors.palette.border)
        }
    }

    /// Style of the action control in its enabled or disabled state
    pub fn button_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.colors.button_text)
                .bg(self.colors.button)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.colors.palette.text_inverse)
                .bg(self.colors.palette.disabled)
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.palette.text_secondary)
    }

    pub fn code_style(&self) -> Style {
        Style::default().fg(self.colors.code)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::professional_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_choice() {
        assert_eq!(Theme::from_choice(ThemeChoice::Dark).name, "Professional Dark");
        assert_eq!(Theme::from_choice(ThemeChoice::Light).name, "Professional Light");
    }

    #[test]
    fn test_disabled_button_differs() {
        let theme = Theme::default();
        assert_ne!(theme.button_style(true), theme.button_style(false));
    }
}
