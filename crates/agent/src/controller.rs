//! Conversation Controller
//!
//! Phase state machine over one session:
//!
//! ```text
//! Intake --start_session--> Guided(1) --reply--> ... Guided(4) --reply--> FreeChat (self-loop)
//! ```
//!
//! A model failure appends the localized fallback and leaves the phase as it
//! was. At most one model call is outstanding per session; a second submission
//! while one is in flight is rejected. Closing the session bumps an epoch so a
//! reply that lands afterwards is dropped.

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use uuid::Uuid;

use franchise_assistant_config::constants::{conversation, timeouts};
use franchise_assistant_config::{AdvisorPrompt, LocalizationConfig, ModelSettings, QuestionOption};
use franchise_assistant_core::{
    GatewayError, GenerateRequest, GuidedStep, Language, Message, MessageSource, ModelGateway,
    Phase, Role, UserProfile,
};

use crate::events::ConversationEvent;
use crate::history;
use crate::session::Session;
use crate::AgentError;

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Response length ceiling sent with every call
    pub max_output_tokens: u32,
    /// Upper bound for one model call; expiry takes the fallback path
    pub model_timeout: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: conversation::MAX_OUTPUT_TOKENS,
            model_timeout: Duration::from_millis(timeouts::MODEL_REQUEST_MS),
        }
    }
}

impl ControllerConfig {
    pub fn from_settings(settings: &ModelSettings) -> Self {
        Self {
            max_output_tokens: settings.max_output_tokens,
            model_timeout: settings.timeout(),
        }
    }
}

/// What the widget accepts right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSurface {
    Options {
        step: u8,
        question: String,
        options: Vec<QuestionOption>,
    },
    FreeText,
    Disabled,
}

/// Read-only snapshot of the session for rendering
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Option<Uuid>,
    pub phase: Phase,
    pub current_step: Option<u8>,
    pub language: Option<Language>,
    pub messages: Vec<Message>,
    pub input: InputSurface,
    pub loading: bool,
    pub responses: BTreeMap<u8, String>,
}

impl SessionView {
    fn empty() -> Self {
        Self {
            session_id: None,
            phase: Phase::Intake,
            current_step: None,
            language: None,
            messages: Vec::new(),
            input: InputSurface::Disabled,
            loading: false,
            responses: BTreeMap::new(),
        }
    }
}

/// Result of one submitted turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Model replied; `phase` is the phase after the reply
    Replied { phase: Phase },
    /// Model failed; the localized fallback was appended
    Fallback { error: GatewayError },
    /// Session was closed while the call was outstanding
    Discarded,
}

impl TurnOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            TurnOutcome::Replied { .. } => "replied",
            TurnOutcome::Fallback { .. } => "fallback",
            TurnOutcome::Discarded => "discarded",
        }
    }
}

#[derive(Default)]
struct State {
    session: Option<Session>,
    in_flight: bool,
    epoch: u64,
}

struct PendingTurn {
    epoch: u64,
    session_id: Uuid,
    phase: Phase,
    selection: String,
    user_message: Message,
    request: GenerateRequest,
}

/// Settles a turn whose future was dropped before the model answered,
/// so the session falls back and accepts input again.
struct TurnGuard<'a> {
    controller: &'a ConversationController,
    pending: &'a PendingTurn,
    armed: bool,
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!(
            session_id = %self.pending.session_id,
            "Turn dropped before the model replied"
        );
        let outcome = self
            .controller
            .complete_turn(self.pending, Err(GatewayError::Abandoned));
        metrics::counter!("chat_turns_total", "outcome" => outcome.label()).increment(1);
    }
}

pub struct ConversationController {
    gateway: Arc<dyn ModelGateway>,
    localization: Arc<LocalizationConfig>,
    prompt: Arc<AdvisorPrompt>,
    config: ControllerConfig,
    state: Mutex<State>,
    events: broadcast::Sender<ConversationEvent>,
}

impl ConversationController {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        localization: Arc<LocalizationConfig>,
        prompt: Arc<AdvisorPrompt>,
        config: ControllerConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(conversation::EVENT_CHANNEL_CAPACITY);
        Self {
            gateway,
            localization,
            prompt,
            config,
            state: Mutex::new(State::default()),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    pub fn localization(&self) -> &LocalizationConfig {
        &self.localization
    }

    fn emit(&self, event: ConversationEvent) {
        // No subscribers is normal
        let _ = self.events.send(event);
    }

    /// `Intake -> Guided(1)`: compose the instruction and greet.
    pub fn start_session(&self, profile: UserProfile) -> Result<Uuid, AgentError> {
        let (session_id, greeting) = {
            let mut state = self.state.lock();
            if let Some(session) = &state.session {
                return Err(AgentError::WrongPhase {
                    expected: "intake",
                    actual: session.phase,
                });
            }

            let instruction = self.prompt.compose(&profile);
            let mut session = Session::new(profile, instruction);
            let text = self.localization.greeting(session.language_key()).to_string();
            let greeting = session.push(Role::Assistant, text, MessageSource::Local);
            session.phase = Phase::Guided(GuidedStep::FIRST);

            let id = session.id;
            tracing::info!(
                session_id = %id,
                language = %session.profile.language,
                location = %session.profile.location,
                budget = %session.profile.budget,
                "Chat session started"
            );

            state.session = Some(session);
            state.in_flight = false;
            (id, greeting)
        };

        metrics::counter!("chat_sessions_started_total").increment(1);

        self.emit(ConversationEvent::SessionStarted { session_id });
        self.emit(ConversationEvent::MessageAppended {
            session_id,
            message: greeting,
        });
        self.emit(ConversationEvent::PhaseChanged {
            session_id,
            from: Phase::Intake,
            to: Phase::Guided(GuidedStep::FIRST),
        });

        Ok(session_id)
    }

    /// Answer the current guided step with the option `key`.
    pub async fn select_option(&self, key: &str) -> Result<TurnOutcome, AgentError> {
        let pending = {
            let mut state = self.state.lock();
            let State {
                session,
                in_flight,
                epoch,
            } = &mut *state;

            let session = session.as_mut().ok_or(AgentError::NoActiveSession)?;
            if *in_flight {
                return Err(AgentError::TurnInProgress);
            }
            let step = session.phase.guided_step().ok_or(AgentError::WrongPhase {
                expected: "guided",
                actual: session.phase,
            })?;
            let option = self
                .localization
                .option(step, session.language_key(), key.trim())
                .ok_or_else(|| AgentError::UnknownOption {
                    step: step.ordinal(),
                    key: key.to_string(),
                })?;

            let selection = option.selection_text();
            self.begin_turn(session, in_flight, *epoch, selection)
        };

        Ok(self.run_turn(pending).await)
    }

    /// Free-text turn, only once the questionnaire is done.
    pub async fn send_message(&self, text: &str) -> Result<TurnOutcome, AgentError> {
        let pending = {
            let mut state = self.state.lock();
            let State {
                session,
                in_flight,
                epoch,
            } = &mut *state;

            let session = session.as_mut().ok_or(AgentError::NoActiveSession)?;
            if *in_flight {
                return Err(AgentError::TurnInProgress);
            }
            if session.phase != Phase::FreeChat {
                return Err(AgentError::WrongPhase {
                    expected: "free_chat",
                    actual: session.phase,
                });
            }
            let text = text.trim();
            if text.is_empty() {
                return Err(AgentError::EmptyMessage);
            }

            self.begin_turn(session, in_flight, *epoch, text.to_string())
        };

        Ok(self.run_turn(pending).await)
    }

    fn begin_turn(
        &self,
        session: &mut Session,
        in_flight: &mut bool,
        epoch: u64,
        text: String,
    ) -> PendingTurn {
        let request = GenerateRequest {
            system_instruction: session.system_instruction.clone(),
            history: history::to_turns(session.messages()),
            user_text: text.clone(),
            max_output_tokens: self.config.max_output_tokens,
        };
        let user_message = session.push(Role::User, text.clone(), MessageSource::User);
        *in_flight = true;

        PendingTurn {
            epoch,
            session_id: session.id,
            phase: session.phase,
            selection: text,
            user_message,
            request,
        }
    }

    async fn run_turn(&self, pending: PendingTurn) -> TurnOutcome {
        let session_id = pending.session_id;
        self.emit(ConversationEvent::MessageAppended {
            session_id,
            message: pending.user_message.clone(),
        });
        self.emit(ConversationEvent::Thinking {
            session_id,
            active: true,
        });

        tracing::debug!(
            session_id = %session_id,
            phase = %pending.phase,
            history = pending.request.history.len(),
            gateway = self.gateway.name(),
            "Calling model"
        );

        let mut guard = TurnGuard {
            controller: self,
            pending: &pending,
            armed: true,
        };

        let started = Instant::now();
        let result = match tokio::time::timeout(
            self.config.model_timeout,
            self.gateway.generate(pending.request.clone()),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout(self.config.model_timeout)),
        };
        metrics::histogram!("chat_gateway_latency_ms")
            .record(started.elapsed().as_secs_f64() * 1000.0);

        guard.armed = false;
        let outcome = self.complete_turn(&pending, result);
        metrics::counter!("chat_turns_total", "outcome" => outcome.label()).increment(1);
        outcome
    }

    fn complete_turn(
        &self,
        pending: &PendingTurn,
        result: Result<String, GatewayError>,
    ) -> TurnOutcome {
        let session_id = pending.session_id;
        let mut events = Vec::new();

        let outcome = {
            let mut state = self.state.lock();
            let current_epoch = state.epoch == pending.epoch;
            let State {
                session, in_flight, ..
            } = &mut *state;

            let session = match session.as_mut() {
                Some(session) if current_epoch && session.id == session_id => session,
                _ => {
                    tracing::debug!(session_id = %session_id, "Dropping reply for closed session");
                    return TurnOutcome::Discarded;
                }
            };
            *in_flight = false;

            match result {
                Ok(text) => {
                    let reply = session.push(Role::Assistant, text, MessageSource::Model);
                    events.push(ConversationEvent::MessageAppended {
                        session_id,
                        message: reply,
                    });

                    if let Some(step) = pending.phase.guided_step() {
                        session
                            .responses
                            .insert(step.ordinal(), pending.selection.clone());
                    }

                    let next = pending.phase.after_reply();
                    if next != session.phase && session.phase.can_transition_to(next) {
                        events.push(ConversationEvent::PhaseChanged {
                            session_id,
                            from: session.phase,
                            to: next,
                        });
                        tracing::info!(
                            session_id = %session_id,
                            from = %session.phase,
                            to = %next,
                            "Phase advanced"
                        );
                        session.phase = next;
                    }

                    TurnOutcome::Replied {
                        phase: session.phase,
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        session_id = %session_id,
                        phase = %session.phase,
                        kind = error.kind(),
                        error = %error,
                        "Model call failed, showing fallback"
                    );
                    let text = self
                        .localization
                        .fallback_error_text(session.language_key())
                        .to_string();
                    let fallback = session.push(Role::Assistant, text, MessageSource::Local);
                    events.push(ConversationEvent::MessageAppended {
                        session_id,
                        message: fallback,
                    });

                    TurnOutcome::Fallback { error }
                }
            }
        };

        self.emit(ConversationEvent::Thinking {
            session_id,
            active: false,
        });
        for event in events {
            self.emit(event);
        }

        outcome
    }

    /// Destroy the session. An outstanding reply is discarded when it lands.
    pub fn close(&self) -> Option<Uuid> {
        let closed = {
            let mut state = self.state.lock();
            state.epoch += 1;
            state.in_flight = false;
            state.session.take().map(|session| session.id)
        };

        if let Some(session_id) = closed {
            tracing::info!(session_id = %session_id, "Chat session closed");
            self.emit(ConversationEvent::SessionClosed { session_id });
        }
        closed
    }

    pub fn phase(&self) -> Phase {
        self.state
            .lock()
            .session
            .as_ref()
            .map_or(Phase::Intake, |session| session.phase)
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.state.lock().session.as_ref().map(|session| session.id)
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().in_flight
    }

    pub fn snapshot(&self) -> SessionView {
        let state = self.state.lock();
        let Some(session) = &state.session else {
            return SessionView::empty();
        };

        let language = session.language_key();
        let input = if state.in_flight {
            InputSurface::Disabled
        } else {
            match session.phase {
                Phase::Guided(step) => InputSurface::Options {
                    step: step.ordinal(),
                    question: self.localization.question_text(step, language).to_string(),
                    options: self.localization.options(step, language).to_vec(),
                },
                Phase::FreeChat => InputSurface::FreeText,
                Phase::Intake => InputSurface::Disabled,
            }
        };

        SessionView {
            session_id: Some(session.id),
            phase: session.phase,
            current_step: session.phase.guided_step().map(|step| step.ordinal()),
            language: Some(session.profile.language),
            messages: session.visible_messages(),
            input,
            loading: state.in_flight,
            responses: session.responses.clone(),
        }
    }
}
