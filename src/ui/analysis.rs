//! Pricing exception analysis panel

use crate::app::App;
use crate::pricing::SeverityTier;
use crate::report::format_grouped;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Borders + two value cards + formula line
pub const PANEL_HEIGHT: u16 = 2 + 4 + 2;

pub fn tier_color(tier: SeverityTier) -> Color {
    match tier {
        SeverityTier::Good => Color::Green,
        SeverityTier::Warn => Color::Yellow,
        SeverityTier::Bad => Color::Red,
    }
}

fn card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let content = Paragraph::new(vec![
        Line::from(Span::styled(
            label.to_uppercase(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(content, area);
}

/// Draw the Bps and dollar exception, coloured by severity
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let analysis = app.analysis();
    let color = tier_color(analysis.tier);

    let block = Block::default()
        .title(Span::styled(
            " Pricing Exception Analysis ",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(inner);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    card(frame, cards[0], "Exception (Bps)", format!("{:.2}", analysis.bps), color);
    card(
        frame,
        cards[1],
        "Exception ($)",
        format!("${}", format_grouped(analysis.dollars)),
        color,
    );

    let formula = Paragraph::new(Line::from(vec![
        Span::styled("Formula: ", Style::default().fg(Color::Blue)),
        Span::styled(
            "Bps = Net Pricing - 100 | $ = (Bps ÷ 100) × Loan Amount",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(formula, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_colors() {
        assert_eq!(tier_color(SeverityTier::Good), Color::Green);
        assert_eq!(tier_color(SeverityTier::Warn), Color::Yellow);
        assert_eq!(tier_color(SeverityTier::Bad), Color::Red);
    }
}
