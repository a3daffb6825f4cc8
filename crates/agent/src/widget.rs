//! Chat widget
//!
//! Host-facing shell around one intake wizard and one conversation.
//! `close()` drops the session and the intake draft; an outstanding model
//! call is discarded when it completes.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use franchise_assistant_persistence::LeadStore;

use crate::controller::{ConversationController, SessionView, TurnOutcome};
use crate::intake::{IntakeCollector, IntakeForm, IntakeOutcome, IntakeStep};
use crate::AgentError;

pub struct ChatWidget {
    open: AtomicBool,
    intake: Mutex<IntakeCollector>,
    controller: ConversationController,
}

impl ChatWidget {
    pub fn new(controller: ConversationController, lead_store: Arc<dyn LeadStore>) -> Self {
        Self {
            open: AtomicBool::new(false),
            intake: Mutex::new(IntakeCollector::new(lead_store)),
            controller,
        }
    }

    pub fn open(&self) {
        if !self.open.swap(true, Ordering::SeqCst) {
            tracing::debug!("Chat widget opened");
        }
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
        self.controller.close();
        self.intake.lock().reset();
        tracing::debug!("Chat widget closed");
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<(), AgentError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(AgentError::WidgetClosed)
        }
    }

    pub fn controller(&self) -> &ConversationController {
        &self.controller
    }

    pub fn intake_step(&self) -> IntakeStep {
        self.intake.lock().step()
    }

    /// Walk the wizard with a complete form and submit it.
    ///
    /// Stops at the first step with errors, leaving the cursor there.
    pub fn submit_intake(&self, form: IntakeForm) -> Result<IntakeOutcome, AgentError> {
        self.ensure_open()?;

        let mut intake = self.intake.lock();
        intake.reset();
        *intake.form_mut() = form;

        loop {
            let before = intake.step();
            match intake.next() {
                Err(errors) => {
                    return Ok(IntakeOutcome {
                        ok: false,
                        errors,
                        session_id: None,
                        lead_write: None,
                    })
                }
                Ok(step) if step == before => break,
                Ok(_) => {}
            }
        }

        intake.submit(&self.controller)
    }

    pub async fn select_option(&self, key: &str) -> Result<TurnOutcome, AgentError> {
        self.ensure_open()?;
        self.controller.select_option(key).await
    }

    pub async fn send_message(&self, text: &str) -> Result<TurnOutcome, AgentError> {
        self.ensure_open()?;
        self.controller.send_message(text).await
    }

    pub fn view(&self) -> SessionView {
        self.controller.snapshot()
    }
}
