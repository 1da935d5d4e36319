//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, EMAIL_SHORTCUT};
use crate::state::{FieldId, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header rows: title line + subtitle line + spacer
const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header, form body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Form
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the form title block
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "The Collective PEX Form",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  PrimeLending", Style::default().fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            "Westlake Village • Petaluma • Oxnard",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Complete the form below to submit your pricing exception",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", focus_hints(app.state.focus, app)),
        Style::default().fg(Color::Gray),
    )];

    if app.state.is_copied_shown() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Copied to clipboard",
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Global shortcuts on the right
    let shortcuts = format!(" {COPY_SHORTCUT}:copy  {EMAIL_SHORTCUT}:email  Esc:quit ");
    let width = shortcuts.chars().count() as u16;
    if width < area.width {
        let right = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: 1,
        };
        let widget =
            Paragraph::new(shortcuts).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(widget, right);
    }
}

/// Keyboard hints for whatever has focus
fn focus_hints(focus: Focus, app: &App) -> &'static str {
    match focus {
        Focus::Field(FieldId::PexNote) => "Tab:next  Enter:newline  Backspace:delete  Del:clear",
        Focus::Field(id) if app.state.form.field(id).is_choice() => {
            "Tab:next  ←/→:choose  Backspace:clear"
        }
        Focus::Field(_) => "Tab:next  Shift+Tab:prev  Backspace:delete  Del:clear",
        Focus::Attestation => "Space:confirm attestation  Tab:next",
        Focus::Button(_) => "Enter:activate  ←/→:switch  Tab:next",
    }
}
