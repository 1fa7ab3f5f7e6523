//! Draws a rendered text frame onto the terminal

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::render::{LineKind, TextFrame};

pub fn draw(frame: &mut Frame, text: &TextFrame) {
    let lines: Vec<Line> = text
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(line.text.as_str(), style_for(line.kind))))
        .collect();

    frame.render_widget(Paragraph::new(lines), frame.area());
}

fn style_for(kind: LineKind) -> Style {
    match kind {
        LineKind::Title => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Row { selected: true } => Style::default().fg(Color::Yellow),
        LineKind::Row { selected: false } | LineKind::Blank => Style::default(),
        LineKind::Hint | LineKind::Message => Style::default().fg(Color::DarkGray),
    }
}
