//! Application state and core logic

use crate::config::TuiConfig;
use crate::endpoint::{ContactClient, ContactClientTrait, ContactError};
use crate::state::{
    AppState, ContactPayload, Form, FormInput, Notice, SeasonalAnimation, Section,
    SubmissionState, SubmitRejection, SubmitResponse, UiArea, WaveState,
};
use crate::ui::BUTTON_HEIGHT;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Result of one exchange, delivered back to the event loop
#[derive(Debug)]
pub struct SubmitOutcome {
    pub attempt_id: Uuid,
    pub result: Result<SubmitResponse, ContactError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the contact endpoint
    client: Arc<dyn ContactClientTrait>,
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Falling emoji overlay, dropped once it has finished
    pub seasonal: Option<SeasonalAnimation>,
    animation_start: Instant,
    rng: StdRng,
    /// Title wave effect
    pub wave: WaveState,
    /// Whether the pointer was over the title on the last mouse event
    pointer_on_title: bool,
}

impl App {
    /// Create a new App talking to the configured endpoint
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = ContactClient::new(config.endpoint(), config.request_timeout())?;
        info!(endpoint = client.endpoint(), "contact client ready");
        Ok(Self::with_client(Arc::new(client), config))
    }

    /// Create an App around any client implementation
    pub fn with_client(client: Arc<dyn ContactClientTrait>, config: &TuiConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let seasonal = config
            .seasonal_animation()
            .then(SeasonalAnimation::for_today);
        let mut wave = WaveState::default();
        wave.play();

        Self {
            state: AppState::new(config.default_country_code()),
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
            seasonal,
            animation_start: Instant::now(),
            rng: StdRng::from_entropy(),
            wave,
            pointer_on_title: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Advance time-driven decorations
    pub fn tick(&mut self) {
        if let Some(ref mut seasonal) = self.seasonal {
            seasonal.update(self.animation_start.elapsed(), &mut self.rng);
            if seasonal.is_finished() {
                debug!("seasonal animation finished");
                self.seasonal = None;
            }
        }
    }

    /// Time since the decorations started
    pub fn animation_elapsed(&self) -> Duration {
        self.animation_start.elapsed()
    }

    /// Whether the loop should redraw at animation rate
    pub fn is_animating(&self) -> bool {
        self.seasonal.is_some() || self.wave.is_playing()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::F(1) => self.select_section(Section::Contact),
            KeyCode::F(2) => self.select_section(Section::Whitepaper),
            KeyCode::F(3) => self.select_section(Section::DevDocs),
            KeyCode::F(4) => self.select_section(Section::Policy),
            // Submit shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_submit();
            }
            KeyCode::Enter if key.modifiers.contains(crate::platform::SEND_MODIFIER) => {
                self.request_submit();
            }
            _ => match self.state.section {
                Section::Contact => self.handle_form_key(key),
                _ => self.handle_document_key(key),
            },
        }

        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.form.is_submit_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_submit_row => self.request_submit(),
            KeyCode::Enter => {
                let multiline = self
                    .state
                    .form
                    .get_active_field_mut()
                    .is_some_and(|f| f.is_multiline);
                if multiline {
                    self.state.form.input_active(FormInput::Newline);
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_active(FormInput::Clear);
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form.input_active(FormInput::Char(c));
            }
            KeyCode::Backspace => {
                self.state.form.input_active(FormInput::Backspace);
            }
            _ => {}
        }
    }

    fn handle_document_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
            self.select_section(Section::Contact);
        }
    }

    /// Handle pasted text: appended to the active field in one edit
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_notice() || self.state.section != Section::Contact {
            return;
        }
        let Some(id) = self.state.form.active_field_id() else {
            return;
        };
        let field = self.state.form.field(id);
        let pasted = if field.is_multiline {
            text.replace("\r\n", "\n")
        } else {
            text.replace(['\r', '\n'], "")
        };
        let value = format!("{}{}", field.as_text(), pasted);
        self.state.form.set_value(id, &value);
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let on_title = UiArea::Header.contains(mouse.column, mouse.row);
        if on_title && !self.pointer_on_title {
            self.wave.play();
        }
        self.pointer_on_title = on_title;

        if self.state.has_notice() {
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if UiArea::Menu.contains(mouse.column, mouse.row) {
                let index = (UiArea::Menu.relative_row(mouse.row) / BUTTON_HEIGHT) as usize;
                if let Some(section) = Section::from_index(index) {
                    self.select_section(section);
                }
            }
        }

        Ok(())
    }

    /// Switch menu section; document sections open their link popup
    pub fn select_section(&mut self, section: Section) {
        self.state.section = section;
        if let Some(link) = section.link() {
            info!("{} button clicked", section.label());
            self.state
                .push_notice(Notice::info(section.label(), format!("Opening {link}")));
        }
    }

    fn request_submit(&mut self) {
        match self.submit() {
            Ok(_) => self.state.status_message = Some("Sending...".to_string()),
            Err(SubmitRejection::FormIncomplete) => {
                self.state.status_message =
                    Some("Fix the highlighted fields before sending".to_string());
            }
            Err(SubmitRejection::AlreadySending) => {
                self.state.status_message = Some("Still sending the last message".to_string());
            }
        }
    }

    /// Start one exchange with the endpoint.
    ///
    /// Enters `Sending` before the request leaves so a second intent is
    /// refused until the first resolves.
    pub fn submit(&mut self) -> Result<Uuid, SubmitRejection> {
        if self.state.submission.is_sending() {
            debug!("submit ignored: exchange already in flight");
            return Err(SubmitRejection::AlreadySending);
        }
        if !self.state.form.submit_enabled() {
            debug!(
                failing = ?self.state.form.validity().failing(),
                "submit ignored: form incomplete"
            );
            return Err(SubmitRejection::FormIncomplete);
        }

        let payload = ContactPayload::from_form(&self.state.form);
        let attempt_id = Uuid::new_v4();
        self.state.submission = SubmissionState::Sending { attempt_id };
        info!(%attempt_id, "sending contact message");

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.send_message(&payload).await;
            if tx.send(SubmitOutcome { attempt_id, result }).is_err() {
                warn!(%attempt_id, "submission outcome dropped: app is gone");
            }
        });

        Ok(attempt_id)
    }

    /// Drain finished exchanges; returns true if anything resolved
    pub fn poll_submission(&mut self) -> bool {
        let mut resolved = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.resolve_submission(outcome);
            resolved = true;
        }
        resolved
    }

    /// Map an exchange outcome to feedback and return to `Idle`
    pub fn resolve_submission(&mut self, outcome: SubmitOutcome) {
        let SubmitOutcome { attempt_id, result } = outcome;
        match self.state.submission {
            SubmissionState::Sending { attempt_id: current } if current == attempt_id => {}
            _ => {
                warn!(%attempt_id, "ignoring outcome for an attempt that is not in flight");
                return;
            }
        }
        self.state.submission = SubmissionState::Idle;
        self.state.status_message = None;

        match result {
            Ok(SubmitResponse::Accepted) => {
                info!(%attempt_id, "contact message accepted");
                self.state.form.reset();
                self.state.push_notice(Notice::success());
            }
            Ok(SubmitResponse::Rejected { status, detail }) => {
                warn!(%attempt_id, status, "contact message rejected");
                self.state.push_notice(Notice::rejected(&detail));
            }
            Err(err) => {
                error!(%attempt_id, error = %err, "contact message failed");
                self.state.push_notice(Notice::transport_failure());
            }
        }
    }
}
