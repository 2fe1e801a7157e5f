//! Rendering of the search trigger view

use crate::config::SearchMode;
use crate::tea::model::SETUP_STEPS;
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest the content column gets, matching a narrow centred page
const MAX_CONTENT_WIDTH: u16 = 84;

pub fn render(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let column = centered_column(area, MAX_CONTENT_WIDTH);

    let instructions_height = if model.show_instructions {
        SETUP_STEPS.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Title
            Constraint::Length(8),                   // Instructions and control
            Constraint::Min(3),                      // Result
            Constraint::Length(instructions_height), // Setup steps
            Constraint::Length(1),                   // Key hints
        ])
        .split(column);

    render_title(frame, chunks[0], theme);
    render_action_card(frame, chunks[1], model, theme);
    render_result(frame, chunks[2], model, theme);
    if model.show_instructions {
        render_setup_steps(frame, chunks[3], theme);
    }
    render_hints(frame, chunks[4], model, theme);
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

fn render_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        "✈ Flight Search Assistant",
        Style::default()
            .fg(theme.colors.title)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(title, area);
}

fn render_action_card(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(model.control_enabled()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    let instructions = Paragraph::new(model.instructions())
        .style(theme.text_style())
        .wrap(Wrap { trim: true });
    frame.render_widget(instructions, chunks[0]);

    let mut label = Vec::new();
    if model.loading {
        label.push(Span::styled(
            format!("{} ", model.spinner_symbol()),
            Style::default().fg(theme.colors.spinner),
        ));
    }
    label.push(Span::raw(model.button_label()));

    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(theme.button_style(model.control_enabled()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(theme.button_style(model.control_enabled())),
        );
    frame.render_widget(button, chunks[1]);
}

fn render_result(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let title = match model.completed_at {
        Some(at) => format!(" Result · {} ", at.format("%H:%M:%S")),
        None => " Result ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(false));

    let paragraph = match (&model.result, model.mode) {
        (Some(text), _) => Paragraph::new(text.as_str())
            .style(Style::default().fg(theme.colors.result_text)),
        (None, SearchMode::Search) => Paragraph::new("No search has completed yet.")
            .style(Style::default().fg(theme.colors.palette.text_muted)),
        (None, SearchMode::Launch) => Paragraph::new(
            "Results appear in the browser tab opened by the flight search app.",
        )
        .style(Style::default().fg(theme.colors.palette.text_muted)),
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}

fn render_setup_steps(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = SETUP_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), theme.text_style()),
                Span::styled(*step, theme.code_style()),
            ])
        })
        .collect();

    let steps = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Setup Instructions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(false)),
    );
    frame.render_widget(steps, area);
}

fn render_hints(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let action = match model.mode {
        SearchMode::Launch => "open app",
        SearchMode::Search => "search",
    };
    let hints = format!(
        "Enter {} · i setup steps · d dismiss · q quit",
        action
    );
    let paragraph = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.colors.palette.text_muted));
    frame.render_widget(paragraph, area);
}
