//! Application state and core logic

use crate::config::PexConfig;
use crate::delivery::{ClipboardSink, MailLauncher, SystemClipboard, SystemMailLauncher};
use crate::platform::COPY_MODIFIER;
use crate::pricing::{analyze, PricingAnalysis};
use crate::report::{submitted_timestamp, Report};
use crate::state::{Action, AppState, FieldId, Focus};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Address the email action writes to
    pub recipient: String,
    clipboard: Box<dyn ClipboardSink>,
    mailer: Box<dyn MailLauncher>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App wired to the system clipboard and mail client
    pub fn new(config: &PexConfig) -> Self {
        Self::with_delivery(
            config,
            Box::new(SystemClipboard),
            Box::new(SystemMailLauncher::new(config.mail_command.clone())),
        )
    }

    pub fn with_delivery(
        config: &PexConfig,
        clipboard: Box<dyn ClipboardSink>,
        mailer: Box<dyn MailLauncher>,
    ) -> Self {
        Self {
            state: AppState::default(),
            recipient: config.recipient().to_string(),
            clipboard,
            mailer,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.expire_copied();
    }

    /// Derived pricing values for the current form
    pub fn analysis(&self) -> PricingAnalysis {
        analyze(&self.state.form)
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }
        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('y') {
            self.copy_to_clipboard().await;
            return Ok(());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('e') {
            self.open_email().await;
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_focus();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_focus();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focus {
            Focus::Field(id) => self.handle_field_key(id, key),
            Focus::Attestation => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.state.form.toggle_attestation();
                }
            }
            Focus::Button(action) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.activate(action).await,
                KeyCode::Left | KeyCode::Right => {
                    self.state.focus = Focus::Button(match action {
                        Action::OpenEmail => Action::CopyToClipboard,
                        Action::CopyToClipboard => Action::OpenEmail,
                    });
                }
                _ => {}
            },
        }

        self.state.ensure_focus_visible();
        Ok(())
    }

    fn handle_field_key(&mut self, id: FieldId, key: KeyEvent) {
        let field = self.state.form.field(id);
        let (is_choice, is_multiline) = (field.is_choice(), field.is_multiline());
        let form = &mut self.state.form;

        if is_choice {
            match key.code {
                KeyCode::Left => {
                    form.cycle_choice(id, false);
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    form.cycle_choice(id, true);
                }
                KeyCode::Backspace => {
                    form.pop_char(id);
                }
                KeyCode::Delete => {
                    form.set_value(id, "");
                }
                KeyCode::Enter => self.state.next_focus(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.push_char(id, c);
            }
            KeyCode::Enter if is_multiline => {
                form.push_char(id, '\n');
            }
            KeyCode::Enter => self.state.next_focus(),
            KeyCode::Backspace => {
                form.pop_char(id);
            }
            KeyCode::Delete => {
                form.set_value(id, "");
            }
            _ => {}
        }
    }

    async fn activate(&mut self, action: Action) {
        match action {
            Action::OpenEmail => self.open_email().await,
            Action::CopyToClipboard => self.copy_to_clipboard().await,
        }
    }

    fn build_report(&self) -> Report {
        Report::build(&self.state.form, &submitted_timestamp(Local::now()))
    }

    /// Copy the report text. Success shows the transient "Copied!" state,
    /// failure is reported in the error dialog.
    pub async fn copy_to_clipboard(&mut self) {
        let report = self.build_report();
        match self.clipboard.write_text(&report.body).await {
            Ok(()) => {
                tracing::info!(
                    "copied PEX report to clipboard ({} chars)",
                    report.body.chars().count()
                );
                self.state.show_copied();
            }
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                self.state.copied = None;
                self.state
                    .push_error(format!("Could not copy the report to the clipboard.\n{e}"));
            }
        }
    }

    /// Open the report as a new email addressed to the configured recipient
    pub async fn open_email(&mut self) {
        let report = self.build_report();
        let uri = report.mailto(&self.recipient);
        match self.mailer.open(&uri).await {
            Ok(()) => {
                tracing::info!("opened PEX email to {}", self.recipient);
            }
            Err(e) => {
                tracing::warn!("mail client launch failed: {e}");
                self.state
                    .push_error(format!("Could not open the mail client.\n{e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{DeliveryError, MockClipboardSink, MockMailLauncher};
    use crate::pricing::SeverityTier;
    use std::sync::{Arc, Mutex};

    fn test_app(clipboard: MockClipboardSink, mailer: MockMailLauncher) -> App {
        App::with_delivery(&PexConfig::default(), Box::new(clipboard), Box::new(mailer))
    }

    fn idle_app() -> App {
        test_app(MockClipboardSink::new(), MockMailLauncher::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn fill(app: &mut App, id: FieldId, text: &str) {
        app.state.focus = Focus::Field(id);
        type_text(app, text).await;
    }

    fn capturing_clipboard(captured: Arc<Mutex<Vec<String>>>) -> MockClipboardSink {
        let mut clipboard = MockClipboardSink::new();
        clipboard.expect_write_text().times(1).returning(move |text| {
            captured.lock().unwrap().push(text.to_string());
            Ok(())
        });
        clipboard
    }

    mod editing {
        use super::*;

        #[tokio::test]
        async fn test_typing_into_focused_field() {
            let mut app = idle_app();
            type_text(&mut app, "Jane Smith").await;
            assert_eq!(app.state.form.value(FieldId::LoanOfficer), "Jane Smith");

            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::LoanOfficer), "Jane Smit");
        }

        #[tokio::test]
        async fn test_tab_and_backtab_move_focus() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, Focus::Field(FieldId::LoanNumber));
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.focus, Focus::Field(FieldId::LoanOfficer));
            app.handle_key(key(KeyCode::Up)).await.unwrap();
            assert_eq!(app.state.focus, Focus::Button(Action::CopyToClipboard));
        }

        #[tokio::test]
        async fn test_enter_advances_single_line_fields() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.focus, Focus::Field(FieldId::LoanNumber));
        }

        #[tokio::test]
        async fn test_enter_in_notes_inserts_newline() {
            let mut app = idle_app();
            fill(&mut app, FieldId::PexNote, "a").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "b").await;
            assert_eq!(app.state.form.value(FieldId::PexNote), "a\nb");
            assert_eq!(app.state.focus, Focus::Field(FieldId::PexNote));
        }

        #[tokio::test]
        async fn test_numeric_field_ignores_letters() {
            let mut app = idle_app();
            fill(&mut app, FieldId::LoanAmount, "3OO,000k").await;
            assert_eq!(app.state.form.value(FieldId::LoanAmount), "3000");
        }

        #[tokio::test]
        async fn test_choice_field_cycles() {
            let mut app = idle_app();
            app.state.focus = Focus::Field(FieldId::Product);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::Product), "CONF 30 Yr");
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::Product), "VA 15 Yr HB");
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::Product), "");
        }

        #[tokio::test]
        async fn test_delete_clears_whole_field() {
            let mut app = idle_app();
            fill(&mut app, FieldId::LoanOfficer, "Jane Smith").await;
            app.handle_key(key(KeyCode::Delete)).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::LoanOfficer), "");

            app.state.focus = Focus::Field(FieldId::LoanPurpose);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::LoanPurpose), "Purchase");
            app.handle_key(key(KeyCode::Delete)).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::LoanPurpose), "");
        }

        #[tokio::test]
        async fn test_pricing_end_to_end_from_keys() {
            let mut app = idle_app();
            fill(&mut app, FieldId::TotalPrice, "98.00").await;
            fill(&mut app, FieldId::BorrowerPaidPoints, "1.00").await;
            fill(&mut app, FieldId::LoanAmount, "300000").await;

            assert_eq!(app.state.form.value(FieldId::NetPricing), "99.00");
            let analysis = app.analysis();
            assert_eq!(analysis.bps, -1.0);
            assert_eq!(analysis.dollars, -3000.0);
            assert_eq!(analysis.tier, SeverityTier::Bad);
        }
    }

    mod attestation {
        use super::*;

        #[tokio::test]
        async fn test_checkbox_toggles_and_resets() {
            let mut app = idle_app();
            fill(&mut app, FieldId::TotalPrice, "90").await;
            fill(&mut app, FieldId::BorrowerPaidPoints, "5").await;
            assert!(app.state.form.attestation.required);

            app.state.focus = Focus::Field(FieldId::TotalPrice);
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, Focus::Attestation);
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(app.state.form.attestation.confirmed);

            // Clear total price: requirement and confirmation both go away
            app.state.focus = Focus::Field(FieldId::TotalPrice);
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert!(!app.state.form.attestation.required);
            assert!(!app.state.form.attestation.confirmed);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, Focus::Field(FieldId::Competitor));
        }
    }

    mod copy {
        use super::*;

        #[tokio::test]
        async fn test_copy_writes_report_and_shows_indicator() {
            let captured = Arc::new(Mutex::new(Vec::new()));
            let mut app = test_app(capturing_clipboard(captured.clone()), MockMailLauncher::new());
            fill(&mut app, FieldId::LoanOfficer, "Jane Smith").await;

            app.state.focus = Focus::Button(Action::CopyToClipboard);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.is_copied_shown());
            let texts = captured.lock().unwrap();
            assert_eq!(texts.len(), 1);
            assert!(texts[0].starts_with("PRICING EXCEPTION REQUEST\n"));
            assert!(texts[0].contains("Loan Officer: Jane Smith"));
        }

        #[tokio::test]
        async fn test_copy_shortcut() {
            let captured = Arc::new(Mutex::new(Vec::new()));
            let mut app = test_app(capturing_clipboard(captured.clone()), MockMailLauncher::new());
            app.handle_key(KeyEvent::new(KeyCode::Char('y'), COPY_MODIFIER))
                .await
                .unwrap();
            assert_eq!(captured.lock().unwrap().len(), 1);
        }

        #[tokio::test]
        async fn test_copy_failure_is_surfaced() {
            let mut clipboard = MockClipboardSink::new();
            clipboard.expect_write_text().times(1).returning(|_| {
                Err(DeliveryError::ClipboardRejected("permission denied".to_string()))
            });
            let mut app = test_app(clipboard, MockMailLauncher::new());

            app.copy_to_clipboard().await;

            assert!(!app.state.is_copied_shown());
            let error = app.state.current_error().unwrap();
            assert!(error.contains("permission denied"));

            // Modal: typing is swallowed until dismissed
            app.state.focus = Focus::Field(FieldId::LoanOfficer);
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form.value(FieldId::LoanOfficer), "");
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_errors());
        }
    }

    mod email {
        use super::*;

        #[tokio::test]
        async fn test_email_opens_mailto_uri() {
            let captured = Arc::new(Mutex::new(Vec::<String>::new()));
            let sink = captured.clone();
            let mut mailer = MockMailLauncher::new();
            mailer.expect_open().times(1).returning(move |uri| {
                sink.lock().unwrap().push(uri.to_string());
                Ok(())
            });
            let mut app = test_app(MockClipboardSink::new(), mailer);
            fill(&mut app, FieldId::LoanNumber, "LN7").await;

            app.handle_key(ctrl('e')).await.unwrap();

            let uris = captured.lock().unwrap();
            assert!(uris[0].starts_with(
                "mailto:rosario.lawrence@primelending.com?subject=PEX%20Loan%20%23%20LN7%20%7C%20"
            ));
            assert!(uris[0].contains("&body=PRICING%20EXCEPTION%20REQUEST%0A"));
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_email_failure_is_surfaced() {
            let mut mailer = MockMailLauncher::new();
            mailer
                .expect_open()
                .times(1)
                .returning(|_| Err(DeliveryError::NoLauncher));
            let mut app = test_app(MockClipboardSink::new(), mailer);
            app.state.focus = Focus::Button(Action::OpenEmail);

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();

            assert!(app.state.current_error().unwrap().contains("mail client"));
        }

        #[tokio::test]
        async fn test_buttons_switch_with_arrows() {
            let mut app = idle_app();
            app.state.focus = Focus::Button(Action::OpenEmail);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.focus, Focus::Button(Action::CopyToClipboard));
        }
    }

    mod quitting {
        use super::*;

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = idle_app();
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_esc_quits() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_release_events_are_ignored() {
            let mut app = idle_app();
            let mut release = key(KeyCode::Char('q'));
            release.kind = KeyEventKind::Release;
            tokio_test::block_on(app.handle_key(release)).unwrap();
            assert_eq!(app.state.form.value(FieldId::LoanOfficer), "");
        }
    }
}
