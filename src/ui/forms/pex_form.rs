//! Pricing exception form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::pricing::ATTESTATION_THRESHOLD;
use crate::state::{Action, FieldId, Focus};
use crate::ui::analysis;
use crate::ui::components::{render_button, render_checkbox, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const ATTESTATION_HEIGHT: u16 = 7;

/// Bordered section frame, highlighted while one of its inputs has focus
fn section(frame: &mut Frame, area: Rect, title: &str, focused: bool) -> Rect {
    let border_color = if focused { Color::Cyan } else { Color::Blue };
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn field(frame: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let is_active = app.state.focus == Focus::Field(id);
    draw_field(frame, area, app.state.form.field(id), is_active);
}

/// Two fields side by side
fn field_pair(frame: &mut Frame, area: Rect, app: &App, left: FieldId, right: FieldId) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    field(frame, cols[0], app, left);
    field(frame, cols[1], app, right);
}

fn focus_in(app: &App, ids: &[FieldId]) -> bool {
    matches!(app.state.focus, Focus::Field(id) if ids.contains(&id))
}

/// Draw the whole form: entry sections on the left, analysis, competitive
/// information and actions on the right.
pub fn draw_pex_form(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_left_column(frame, columns[0], app);
    draw_right_column(frame, columns[1], app);
}

fn draw_left_column(frame: &mut Frame, area: Rect, app: &App) {
    let attestation_rows = if app.state.form.attestation.required {
        ATTESTATION_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT * 2 + 2),                    // Loan officer
            Constraint::Length(FIELD_HEIGHT * 4 + attestation_rows + 2), // Loan details
            Constraint::Min(0),
        ])
        .split(area);

    draw_loan_officer(frame, chunks[0], app);
    draw_loan_details(frame, chunks[1], app);
}

fn draw_loan_officer(frame: &mut Frame, area: Rect, app: &App) {
    let focused = focus_in(
        app,
        &[
            FieldId::LoanOfficer,
            FieldId::LoanNumber,
            FieldId::BorrowerLastName,
        ],
    );
    let inner = section(frame, area, "Loan Officer Information", focused);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(FIELD_HEIGHT)])
        .split(inner);

    field(frame, rows[0], app, FieldId::LoanOfficer);
    field_pair(frame, rows[1], app, FieldId::LoanNumber, FieldId::BorrowerLastName);
}

fn draw_loan_details(frame: &mut Frame, area: Rect, app: &App) {
    let focused = focus_in(
        app,
        &[
            FieldId::LoanPurpose,
            FieldId::Product,
            FieldId::LoanAmount,
            FieldId::Rate,
            FieldId::BorrowerPaidPoints,
            FieldId::TotalPrice,
        ],
    ) || app.state.focus == Focus::Attestation;
    let inner = section(frame, area, "Loan Details", focused);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    field_pair(frame, rows[0], app, FieldId::LoanPurpose, FieldId::Product);
    field(frame, rows[1], app, FieldId::LoanAmount);
    field_pair(frame, rows[2], app, FieldId::Rate, FieldId::BorrowerPaidPoints);
    field_pair(frame, rows[3], app, FieldId::TotalPrice, FieldId::NetPricing);

    if app.state.form.attestation.required {
        draw_attestation(frame, rows[4], app);
    }
}

fn draw_attestation(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let warning = Paragraph::new(vec![
        Line::from(Span::styled(
            "⚠ Attestation Required",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Net pricing below {ATTESTATION_THRESHOLD} requires a Loan Officer Attestation to be submitted to BlueSage"
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(warning, rows[0]);

    render_checkbox(
        frame,
        rows[1],
        "I confirm the Loan Officer Attestation will be uploaded to BlueSage",
        app.state.form.attestation.confirmed,
        app.state.focus == Focus::Attestation,
    );
}

fn draw_right_column(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(analysis::PANEL_HEIGHT),
            Constraint::Min(FIELD_HEIGHT * 2 + 6 + 2), // Competitive information
            Constraint::Length(BUTTON_HEIGHT + 1),     // Actions + recipient
        ])
        .split(area);

    analysis::draw(frame, chunks[0], app);
    draw_competitive(frame, chunks[1], app);
    draw_actions(frame, chunks[2], app);
}

fn draw_competitive(frame: &mut Frame, area: Rect, app: &App) {
    let focused = focus_in(
        app,
        &[FieldId::Competitor, FieldId::BranchSource, FieldId::PexNote],
    );
    let inner = section(frame, area, "Competitive Information", focused);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(FIELD_HEIGHT),
        ])
        .split(inner);

    field(frame, rows[0], app, FieldId::Competitor);
    field(frame, rows[1], app, FieldId::BranchSource);
    field(frame, rows[2], app, FieldId::PexNote);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BUTTON_HEIGHT), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_button(
        frame,
        cols[0],
        Action::OpenEmail.label(),
        app.state.focus == Focus::Button(Action::OpenEmail),
        Color::Blue,
    );

    let (copy_label, copy_color) = if app.state.is_copied_shown() {
        ("✓ Copied!", Color::Green)
    } else {
        (Action::CopyToClipboard.label(), Color::Blue)
    };
    render_button(
        frame,
        cols[1],
        copy_label,
        app.state.focus == Focus::Button(Action::CopyToClipboard),
        copy_color,
    );

    let send_to = Paragraph::new(Line::from(vec![
        Span::styled("Send to: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.recipient.as_str(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(send_to, rows[1]);
}
