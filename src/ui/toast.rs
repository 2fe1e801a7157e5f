/// Toast notifications for action outcomes
///
/// Toasts appear in the top-right corner, carry a title and a description,
/// and dismiss themselves after a duration that depends on their level.

use crate::tea::ToastLevel;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;
use tokio::time::{Duration, Instant};

/// Maximum number of toasts to display simultaneously
const MAX_VISIBLE_TOASTS: usize = 3;

const TOAST_WIDTH: u16 = 52;
const TOAST_HEIGHT: u16 = 6;

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, level: ToastLevel) -> Self {
        let duration = match level {
            ToastLevel::Info => Duration::from_secs(5),
            ToastLevel::Success => Duration::from_secs(4),
            ToastLevel::Error => Duration::from_secs(8),
        };

        Self::with_duration(title, message, level, duration)
    }

    pub fn with_duration(
        title: impl Into<String>,
        message: impl Into<String>,
        level: ToastLevel,
        duration: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Remaining lifetime (1.0 = fresh, 0.0 = expired)
    pub fn remaining_percentage(&self) -> f64 {
        let elapsed = self.created_at.elapsed();
        if elapsed >= self.duration {
            0.0
        } else {
            1.0 - (elapsed.as_secs_f64() / self.duration.as_secs_f64())
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    /// Accent color for the border, icon and progress bar
    pub fn accent(&self, theme: &Theme) -> Color {
        let palette = &theme.colors.palette;
        match self.level {
            ToastLevel::Info => palette.info,
            ToastLevel::Success => palette.success,
            ToastLevel::Error => palette.error,
        }
    }
}

#[derive(Debug)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    max_visible: usize,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: MAX_VISIBLE_TOASTS,
        }
    }

    pub fn add_toast(&mut self, toast: Toast) {
        if self.toasts.len() >= self.max_visible {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn notify(&mut self, title: impl Into<String>, message: impl Into<String>, level: ToastLevel) {
        self.add_toast(Toast::new(title, message, level));
    }

    /// Remove expired toasts
    pub fn update(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }

    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn set_max_visible(&mut self, max: usize) {
        self.max_visible = max.max(1);
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
    }
}

pub struct ToastRenderer;

impl ToastRenderer {
    /// Render toasts stacked from the top-right corner, newest first
    pub fn render(frame: &mut Frame, area: Rect, toasts: &VecDeque<Toast>, theme: &Theme) {
        let width = area.width.min(TOAST_WIDTH);
        let x = area.x + area.width.saturating_sub(width).saturating_sub(1);
        let mut y = area.y + 1;

        for toast in toasts.iter().rev() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }

            let toast_area = Rect {
                x,
                y,
                width,
                height: TOAST_HEIGHT,
            };
            Self::render_toast(frame, toast_area, toast, theme);
            y += TOAST_HEIGHT;
        }
    }

    fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
        frame.render_widget(Clear, area);

        let accent = toast.accent(theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.colors.palette.surface));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let icon = Paragraph::new(toast.icon())
            .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(icon, chunks[0]);

        let text = vec![
            Line::from(Span::styled(
                toast.title.as_str(),
                Style::default()
                    .fg(theme.colors.palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                toast.message.as_str(),
                Style::default().fg(theme.colors.palette.text_secondary),
            )),
        ];
        let content = Paragraph::new(text).wrap(Wrap { trim: true });
        frame.render_widget(content, chunks[1]);

        // Remaining lifetime along the bottom border
        let bar_width = (inner.width as f64 * toast.remaining_percentage()) as u16;
        if bar_width > 0 {
            let bar_area = Rect {
                x: inner.x,
                y: area.y + area.height - 1,
                width: bar_width,
                height: 1,
            };
            let bar = Paragraph::new("━".repeat(bar_width as usize))
                .style(Style::default().fg(accent));
            frame.render_widget(bar, bar_area);
        }
    }
}
