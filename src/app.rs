//! Application state and core logic

use crate::config::AppConfig;
use crate::contact::{Blocked, FormController, SubmitOutcome};
use crate::delivery::{MessageSender, SendError};
use crate::state::{AppState, ContactField, Focus, ToastQueue};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Form controller as wired in the running application
pub type Controller = FormController<Arc<dyn MessageSender>, ToastQueue>;

/// Main application struct
pub struct App {
    /// Presentation state (focus, animation frame, profile)
    pub state: AppState,
    /// Owner of the form record, its errors and submission status
    pub controller: Controller,
    /// Send started by the last accepted submit, until it settles
    pending: Option<JoinHandle<Result<(), SendError>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let sender = config.build_sender()?;
        Ok(Self::with_sender(
            sender,
            AppState::new(config.profile()),
            config.toast_duration(),
        ))
    }

    pub fn with_sender(
        sender: Arc<dyn MessageSender>,
        state: AppState,
        toast_ttl: Duration,
    ) -> Self {
        Self {
            state,
            controller: FormController::new(sender, ToastQueue::new(toast_ttl)),
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a spawned send has not been settled yet
    pub fn has_pending_send(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance animations and expire old notifications
    pub fn tick(&mut self) {
        self.state.tick();
        self.controller.notifier_mut().prune(Instant::now());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Submit from anywhere (Ctrl+S)
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.controller.notifier_mut().dismiss();
            }
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace => {
                if let Some(field) = self.editable_field() {
                    let next = self.controller.form().field(field).without_last_char();
                    self.controller.edit(field, next);
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_char(c);
            }
            _ => {}
        }
    }

    /// Focused field, unless a send is in flight.
    ///
    /// The form is cleared when a send succeeds, so keystrokes made after
    /// the snapshot was taken would be lost without being sent.
    fn editable_field(&self) -> Option<ContactField> {
        if self.controller.status().is_busy() {
            return None;
        }
        self.state.focus.field()
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.editable_field() {
            let next = self.controller.form().field(field).with_char(c);
            self.controller.edit(field, next);
        }
    }

    /// Enter on the focused element
    fn activate(&mut self) {
        match self.state.focus {
            Focus::Field(ContactField::Message) => self.input_char('\n'),
            Focus::Field(_) => self.state.next_focus(),
            Focus::Submit => self.submit(),
            Focus::Social(link) => self.controller.notify_unimplemented(link.label()),
        }
    }

    /// Validate and, if the form is valid, start the send in the background
    pub fn submit(&mut self) {
        // The submit button is disabled while a send is in flight
        if self.pending.is_some() {
            return;
        }

        match self.controller.begin_submit() {
            Ok(message) => {
                let sender = Arc::clone(self.controller.sender());
                self.pending = Some(tokio::spawn(async move { sender.send(&message).await }));
            }
            Err(Blocked::InFlight) => tracing::debug!("Submit ignored, send in flight"),
            Err(Blocked::Invalid) => {}
        }
    }

    /// Settle the in-flight send once it has finished.
    ///
    /// Returns true if a send was settled.
    pub async fn poll_submission(&mut self) -> bool {
        let finished = self
            .pending
            .as_ref()
            .map(|handle| handle.is_finished())
            .unwrap_or(false);
        if !finished {
            return false;
        }

        let Some(handle) = self.pending.take() else {
            return false;
        };
        let result = match handle.await {
            Ok(result) => result,
            Err(join_err) => {
                tracing::error!(error = %join_err, "Send task did not complete");
                Err(SendError::Aborted(join_err.to_string()))
            }
        };
        // Start the next message from the top
        if let Some(SubmitOutcome::Sent) = self.controller.settle(result) {
            self.state.focus = Focus::Field(ContactField::Name);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Severity, SubmissionStatus};
    use crate::delivery::MockMessageSender;
    use crate::state::SocialLink;
    use pretty_assertions::assert_eq;

    fn app_with(sender: MockMessageSender) -> App {
        App::with_sender(
            Arc::new(sender),
            AppState::default(),
            Duration::from_secs(5),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_valid(app: &mut App) {
        type_text(app, "Ana");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "ana@x.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Hello there, nice site!");
    }

    async fn settle(app: &mut App) {
        while app.has_pending_send() {
            tokio::task::yield_now().await;
            app.poll_submission().await;
        }
    }

    mod input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_edits_focused_field() {
            let mut app = app_with(MockMessageSender::new());
            type_text(&mut app, "Ana");
            assert_eq!(app.controller.form().name.as_text(), "Ana");
            assert_eq!(app.controller.form().email.as_text(), "");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = app_with(MockMessageSender::new());
            type_text(&mut app, "Anaa");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.controller.form().name.as_text(), "Ana");
        }

        #[test]
        fn test_enter_in_single_line_field_moves_focus() {
            let mut app = app_with(MockMessageSender::new());
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.focus, Focus::Field(ContactField::Email));
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = app_with(MockMessageSender::new());
            app.state.focus = Focus::Field(ContactField::Message);
            type_text(&mut app, "Hi");
            app.handle_key(key(KeyCode::Enter));
            type_text(&mut app, "there");
            assert_eq!(app.controller.form().message.as_text(), "Hi\nthere");
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app_with(MockMessageSender::new());
            app.handle_key(ctrl('x'));
            assert_eq!(app.controller.form().name.as_text(), "");
        }

        #[test]
        fn test_typing_on_button_is_ignored() {
            let mut app = app_with(MockMessageSender::new());
            app.state.focus = Focus::Submit;
            type_text(&mut app, "abc");
            assert!(app.controller.form().is_blank());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = app_with(MockMessageSender::new());
            assert!(!app.should_quit());
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_submit_does_not_spawn() {
            let mut sender = MockMessageSender::new();
            sender.expect_send().times(0);
            let mut app = app_with(sender);

            app.handle_key(ctrl('s'));

            assert!(!app.has_pending_send());
            assert_eq!(app.controller.status(), SubmissionStatus::Idle);
            assert_eq!(app.controller.errors().len(), 3);
            let toast = app.controller.notifier().latest().unwrap();
            assert_eq!(toast.notification.severity, Severity::Error);
        }

        #[tokio::test]
        async fn test_successful_submit_clears_form() {
            let mut sender = MockMessageSender::new();
            sender
                .expect_send()
                .withf(|m| m.email == "ana@x.com")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(sender);
            fill_valid(&mut app);

            app.handle_key(ctrl('s'));
            assert_eq!(app.controller.status(), SubmissionStatus::Submitting);

            settle(&mut app).await;

            assert_eq!(app.controller.status(), SubmissionStatus::Succeeded);
            assert!(app.controller.form().is_blank());
            assert_eq!(app.state.focus, Focus::Field(ContactField::Name));
            let toast = app.controller.notifier().latest().unwrap();
            assert_eq!(toast.notification.severity, Severity::Success);
        }

        #[tokio::test]
        async fn test_failed_submit_keeps_input() {
            let mut sender = MockMessageSender::new();
            sender
                .expect_send()
                .times(1)
                .returning(|_| Err(SendError::Rejected("down".to_string())));
            let mut app = app_with(sender);
            fill_valid(&mut app);

            app.state.focus = Focus::Submit;
            app.handle_key(key(KeyCode::Enter));
            settle(&mut app).await;

            assert_eq!(app.controller.status(), SubmissionStatus::Failed);
            assert_eq!(app.controller.form().name.as_text(), "Ana");
            assert_eq!(
                app.controller.form().message.as_text(),
                "Hello there, nice site!"
            );
        }

        #[tokio::test]
        async fn test_double_submit_sends_once() {
            let mut sender = MockMessageSender::new();
            sender.expect_send().times(1).returning(|_| Ok(()));
            let mut app = app_with(sender);
            fill_valid(&mut app);

            app.handle_key(ctrl('s'));
            app.handle_key(ctrl('s'));
            settle(&mut app).await;

            assert_eq!(app.controller.status(), SubmissionStatus::Succeeded);
        }

        #[tokio::test]
        async fn test_edits_are_ignored_while_sending() {
            let mut sender = MockMessageSender::new();
            sender
                .expect_send()
                .withf(|m| m.message == "Hello there, nice site!")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(sender);
            fill_valid(&mut app);

            app.handle_key(ctrl('s'));
            type_text(&mut app, " And more");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(
                app.controller.form().message.as_text(),
                "Hello there, nice site!"
            );

            settle(&mut app).await;
            assert_eq!(app.controller.status(), SubmissionStatus::Succeeded);

            type_text(&mut app, "Bo");
            assert_eq!(app.controller.form().name.as_text(), "Bo");
            assert_eq!(app.controller.status(), SubmissionStatus::Idle);
        }

        #[tokio::test]
        async fn test_poll_without_pending_send() {
            let mut app = app_with(MockMessageSender::new());
            assert!(!app.poll_submission().await);
        }
    }

    #[test]
    fn test_social_button_shows_placeholder() {
        let mut app = app_with(MockMessageSender::new());
        app.state.focus = Focus::Social(SocialLink::LinkedIn);
        app.handle_key(key(KeyCode::Enter));

        let toast = app.controller.notifier().latest().unwrap();
        assert_eq!(toast.notification.title, "LinkedIn");
        assert_eq!(toast.notification.severity, Severity::Info);
    }

    #[test]
    fn test_esc_dismisses_toast() {
        let mut app = app_with(MockMessageSender::new());
        app.state.focus = Focus::Social(SocialLink::GitHub);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.notifier().len(), 1);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.controller.notifier().is_empty());
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut app = app_with(MockMessageSender::new());
        app.tick();
        app.tick();
        assert_eq!(app.state.frame, 2);
    }
}
