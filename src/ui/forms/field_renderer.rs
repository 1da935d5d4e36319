//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.is_read_only() {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let text = field.display_value();
    let style = if field.is_empty() {
        placeholder_style
    } else {
        value_style
    };

    let content = if field.is_choice() {
        let arrow_style = if is_active { border_style } else { placeholder_style };
        let mut spans = vec![Span::styled(text, style)];
        if is_active {
            spans.insert(0, Span::styled("◀ ", arrow_style));
            spans.push(Span::styled(" ▶", arrow_style));
        }
        Paragraph::new(Line::from(spans))
    } else if field.is_multiline() && !field.is_empty() {
        let mut lines: Vec<Line> = text
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        // Cursor sits before the placeholder when the field is empty
        let mut spans = vec![Span::styled(text, style)];
        if is_active && !field.is_read_only() {
            let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));
            if field.is_empty() {
                spans.insert(0, cursor);
            } else {
                spans.push(cursor);
            }
        }
        Paragraph::new(Line::from(spans))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
