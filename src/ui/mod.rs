pub mod toast;
pub mod trigger_view;

use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{style::Style, widgets::Block, Frame};

pub use toast::{Toast, ToastManager, ToastRenderer};

pub struct UI {
    theme: Theme,
}

impl UI {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, frame: &mut Frame, model: &Model) {
        let area = frame.size();

        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.colors.palette.background)),
            area,
        );

        trigger_view::render(frame, area, model, &self.theme);

        // Toasts overlay everything else
        ToastRenderer::render(frame, area, model.toasts.toasts(), &self.theme);
    }
}
