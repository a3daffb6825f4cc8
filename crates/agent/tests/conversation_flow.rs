//! End-to-end conversation scenarios against a scripted model and an
//! in-memory lead store.

use std::sync::Arc;
use std::time::Duration;

use franchise_assistant_agent::{
    AgentError, ChatWidget, ControllerConfig, ConversationController, InputSurface, IntakeField,
    IntakeForm, TurnOutcome,
};
use franchise_assistant_config::{AdvisorPrompt, LocalizationConfig};
use franchise_assistant_core::{GatewayError, GuidedStep, Language, Phase, Role, Turn};
use franchise_assistant_llm::ScriptedGateway;
use franchise_assistant_persistence::{InMemoryLeadStore, LeadStatus, LeadStore};

struct Harness {
    widget: Arc<ChatWidget>,
    gateway: Arc<ScriptedGateway>,
    leads: Arc<InMemoryLeadStore>,
    localization: Arc<LocalizationConfig>,
}

fn harness_with(
    gateway: ScriptedGateway,
    leads: InMemoryLeadStore,
    config: ControllerConfig,
) -> Harness {
    let gateway = Arc::new(gateway);
    let leads = Arc::new(leads);
    let localization = Arc::new(LocalizationConfig::default());

    let controller = ConversationController::new(
        gateway.clone(),
        localization.clone(),
        Arc::new(AdvisorPrompt::default()),
        config,
    );
    let lead_store: Arc<dyn LeadStore> = leads.clone();
    let widget = Arc::new(ChatWidget::new(controller, lead_store));
    widget.open();

    Harness {
        widget,
        gateway,
        leads,
        localization,
    }
}

fn harness() -> Harness {
    harness_with(
        ScriptedGateway::new(),
        InMemoryLeadStore::new(),
        ControllerConfig::default(),
    )
}

fn asha() -> IntakeForm {
    IntakeForm {
        name: "Asha".into(),
        email: "asha@example.com".into(),
        phone: "9876543210".into(),
        language: "English".into(),
        location: "Pune".into(),
        other_location: String::new(),
        budget: "₹50K - ₹100K".into(),
    }
}

fn step(n: u8) -> Phase {
    Phase::Guided(GuidedStep::new(n).unwrap())
}

async fn wait_until_loading(widget: &ChatWidget) {
    for _ in 0..200 {
        if widget.view().loading {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("model call never started");
}

#[tokio::test]
async fn scenario_a_first_selection_advances() {
    let h = harness();
    h.gateway.push_reply("Great choice");

    let outcome = h.widget.submit_intake(asha()).unwrap();
    assert!(outcome.ok, "{:?}", outcome.errors);
    outcome.lead_write.unwrap().await.unwrap().unwrap();

    let view = h.widget.view();
    assert_eq!(view.phase, step(1));
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].role, Role::Assistant);
    assert_eq!(view.messages[0].text, h.localization.greeting("English"));

    let outcome = h.widget.select_option("A").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Replied { phase: step(2) });

    let view = h.widget.view();
    let log: Vec<(Role, &str)> = view
        .messages
        .iter()
        .map(|m| (m.role, m.text.as_str()))
        .collect();
    assert_eq!(
        log,
        vec![
            (Role::Assistant, h.localization.greeting("English")),
            (Role::User, "A: Food & Beverage"),
            (Role::Assistant, "Great choice"),
        ]
    );
    assert_eq!(view.current_step, Some(2));
    assert_eq!(view.responses.get(&1).map(String::as_str), Some("A: Food & Beverage"));
}

#[tokio::test]
async fn scenario_b_failure_keeps_step() {
    let h = harness();
    h.gateway.push_error(GatewayError::Network("connection reset".into()));

    assert!(h.widget.submit_intake(asha()).unwrap().ok);

    let outcome = h.widget.select_option("A").await.unwrap();
    assert!(matches!(outcome, TurnOutcome::Fallback { .. }));

    let view = h.widget.view();
    assert_eq!(view.phase, step(1));
    let log: Vec<(Role, &str)> = view
        .messages
        .iter()
        .map(|m| (m.role, m.text.as_str()))
        .collect();
    assert_eq!(
        log,
        vec![
            (Role::Assistant, h.localization.greeting("English")),
            (Role::User, "A: Food & Beverage"),
            (Role::Assistant, h.localization.fallback_error_text("English")),
        ]
    );
    assert!(view.responses.is_empty());

    // Same chips stay available for the retry
    match view.input {
        InputSurface::Options { step, ref options, .. } => {
            assert_eq!(step, 1);
            assert_eq!(options[0].key, "A");
        }
        other => panic!("expected options, got {other:?}"),
    }
}

#[tokio::test]
async fn failure_then_retry_succeeds() {
    let h = harness();
    h.gateway
        .push_error(GatewayError::EmptyResponse)
        .push_reply("Food it is")
        .push_reply("Next");

    h.widget.submit_intake(asha()).unwrap();
    h.widget.select_option("A").await.unwrap();
    let outcome = h.widget.select_option("A").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Replied { phase: step(2) });

    h.widget.select_option("B").await.unwrap();

    // Failed exchange is not replayed to the model
    let third = &h.gateway.requests()[2];
    assert_eq!(
        third.history,
        vec![Turn::user("A: Food & Beverage"), Turn::model("Food it is")]
    );
}

#[tokio::test]
async fn phases_are_monotonic_through_free_chat() {
    let h = harness();
    for reply in ["r1", "r2", "r3", "r4", "r5"] {
        h.gateway.push_reply(reply);
    }
    h.widget.submit_intake(asha()).unwrap();

    let mut phases = vec![h.widget.controller().phase()];
    for key in ["A", "B", "C", "D"] {
        h.widget.select_option(key).await.unwrap();
        phases.push(h.widget.controller().phase());
    }

    assert_eq!(
        phases,
        vec![step(1), step(2), step(3), step(4), Phase::FreeChat]
    );
    assert!(phases.windows(2).all(|w| w[0].can_transition_to(w[1])));

    // Scenario C: free text after the questionnaire
    let view = h.widget.view();
    assert_eq!(view.input, InputSurface::FreeText);
    assert!(matches!(
        h.widget.select_option("A").await,
        Err(AgentError::WrongPhase { .. })
    ));

    let outcome = h.widget.send_message("Which brands suit me?").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Replied { phase: Phase::FreeChat });
    assert_eq!(h.widget.view().input, InputSurface::FreeText);

    let last = h.gateway.requests().pop().unwrap();
    assert_eq!(last.user_text, "Which brands suit me?");
    assert_eq!(
        last.history,
        vec![
            Turn::user("A: Food & Beverage"),
            Turn::model("r1"),
            Turn::user("B: Some experience"),
            Turn::model("r2"),
            Turn::user("C: High risk"),
            Turn::model("r3"),
            Turn::user("D: Passive investment"),
            Turn::model("r4"),
        ]
    );
    assert!(!last.system_instruction.is_empty());
    assert!(last.history.iter().all(|t| t.text != last.system_instruction));
    assert_eq!(h.widget.view().responses.len(), 4);
}

#[tokio::test]
async fn first_call_history_excludes_greeting() {
    let h = harness();
    h.gateway.push_reply("ok");
    h.widget.submit_intake(asha()).unwrap();
    h.widget.select_option("A").await.unwrap();

    let first = &h.gateway.requests()[0];
    assert!(first.history.is_empty());
    assert_eq!(first.user_text, "A: Food & Beverage");
}

#[tokio::test]
async fn second_submission_rejected_while_in_flight() {
    let h = harness_with(
        ScriptedGateway::gated(),
        InMemoryLeadStore::new(),
        ControllerConfig::default(),
    );
    h.gateway.push_reply("done");
    h.widget.submit_intake(asha()).unwrap();

    let first = {
        let widget = h.widget.clone();
        tokio::spawn(async move { widget.select_option("A").await })
    };
    wait_until_loading(&h.widget).await;

    assert_eq!(h.widget.view().input, InputSurface::Disabled);
    assert_eq!(
        h.widget.select_option("B").await,
        Err(AgentError::TurnInProgress)
    );
    assert_eq!(h.gateway.call_count(), 1);

    h.gateway.release();
    assert_eq!(
        first.await.unwrap().unwrap(),
        TurnOutcome::Replied { phase: step(2) }
    );

    // Never two user messages back to back
    let view = h.widget.view();
    assert!(view
        .messages
        .windows(2)
        .all(|w| !(w[0].role == Role::User && w[1].role == Role::User)));
    assert!(!view.loading);
}

#[tokio::test]
async fn close_discards_in_flight_reply() {
    let h = harness_with(
        ScriptedGateway::gated(),
        InMemoryLeadStore::new(),
        ControllerConfig::default(),
    );
    h.gateway.push_reply("late reply");
    h.widget.submit_intake(asha()).unwrap();

    let pending = {
        let widget = h.widget.clone();
        tokio::spawn(async move { widget.select_option("A").await })
    };
    wait_until_loading(&h.widget).await;

    h.widget.close();
    h.gateway.release();

    assert_eq!(pending.await.unwrap().unwrap(), TurnOutcome::Discarded);
    let view = h.widget.view();
    assert!(view.session_id.is_none());
    assert!(view.messages.is_empty());
    assert_eq!(
        h.widget.select_option("A").await,
        Err(AgentError::WidgetClosed)
    );
}

#[tokio::test]
async fn dropped_turn_leaves_widget_interactive() {
    let h = harness_with(
        ScriptedGateway::gated(),
        InMemoryLeadStore::new(),
        ControllerConfig::default(),
    );
    h.gateway.push_reply("Food it is");
    h.widget.submit_intake(asha()).unwrap();

    // Caller gives up while the model call is held open
    let abandoned =
        tokio::time::timeout(Duration::from_millis(50), h.widget.select_option("A")).await;
    assert!(abandoned.is_err());

    let view = h.widget.view();
    assert!(!view.loading);
    assert_eq!(view.phase, step(1));
    assert!(matches!(view.input, InputSurface::Options { step: 1, .. }));
    let log: Vec<(Role, &str)> = view
        .messages
        .iter()
        .map(|m| (m.role, m.text.as_str()))
        .collect();
    assert_eq!(
        log,
        vec![
            (Role::Assistant, h.localization.greeting("English")),
            (Role::User, "A: Food & Beverage"),
            (Role::Assistant, h.localization.fallback_error_text("English")),
        ]
    );

    h.gateway.release();
    let outcome = h.widget.select_option("A").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Replied { phase: step(2) });
    // Abandoned exchange is not replayed
    assert!(h.gateway.requests()[1].history.is_empty());
}

#[tokio::test]
async fn timeout_takes_fallback_path() {
    let h = harness_with(
        ScriptedGateway::gated(),
        InMemoryLeadStore::new(),
        ControllerConfig {
            model_timeout: Duration::from_millis(50),
            ..ControllerConfig::default()
        },
    );
    h.widget.submit_intake(asha()).unwrap();

    let outcome = h.widget.select_option("A").await.unwrap();
    assert!(matches!(
        outcome,
        TurnOutcome::Fallback {
            error: GatewayError::Timeout(_)
        }
    ));
    assert_eq!(h.widget.view().phase, step(1));
    assert!(!h.widget.view().loading);
}

#[tokio::test]
async fn hindi_session_stays_hindi() {
    let h = harness();
    h.gateway
        .push_error(GatewayError::EmptyResponse)
        .push_reply("बढ़िया")
        .push_error(GatewayError::Timeout(Duration::from_secs(30)));

    let mut form = asha();
    form.language = "Hindi".into();
    h.widget.submit_intake(form).unwrap();

    let hindi = LocalizationConfig::default();
    let view = h.widget.view();
    assert_eq!(view.messages[0].text, hindi.greeting("Hindi"));
    match &view.input {
        InputSurface::Options { question, options, .. } => {
            assert_eq!(question, hindi.question_text(GuidedStep::FIRST, "Hindi"));
            assert_eq!(options[0].label, "खाद्य और पेय पदार्थ");
        }
        other => panic!("expected options, got {other:?}"),
    }

    h.widget.select_option("A").await.unwrap();
    h.widget.select_option("A").await.unwrap();
    h.widget.select_option("B").await.unwrap();

    let view = h.widget.view();
    let fallbacks: Vec<_> = view
        .messages
        .iter()
        .filter(|m| m.is_local_reply() && m.id > view.messages[0].id)
        .collect();
    assert_eq!(fallbacks.len(), 2);
    assert!(fallbacks
        .iter()
        .all(|m| m.text == hindi.fallback_error_text("Hindi")));

    let users: Vec<_> = view
        .messages
        .iter()
        .filter(|m| m.role == Role::User)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(
        users,
        vec![
            "A: खाद्य और पेय पदार्थ",
            "A: खाद्य और पेय पदार्थ",
            "B: कुछ अनुभव"
        ]
    );
}

#[tokio::test]
async fn every_intake_language_stays_in_its_own_script() {
    for language in Language::all() {
        let name = language.display_name();
        let h = harness();
        h.gateway.push_error(GatewayError::EmptyResponse);
        for _ in 0..4 {
            h.gateway.push_reply("ok");
        }

        let mut form = asha();
        form.language = name.into();
        assert!(h.widget.submit_intake(form).unwrap().ok, "{name}");

        let mut drawn = vec![h.widget.view().messages[0].text.clone()];
        for (n, key) in ["A", "A", "B", "C", "D"].into_iter().enumerate() {
            let step = h.widget.view().current_step.unwrap();
            match h.widget.view().input {
                InputSurface::Options {
                    question, options, ..
                } => {
                    assert_eq!(question, h.localization.question_text(GuidedStep::new(step).unwrap(), name));
                    assert_eq!(options, h.localization.options(GuidedStep::new(step).unwrap(), name));
                    drawn.push(question);
                    drawn.extend(options.into_iter().map(|o| o.label));
                }
                other => panic!("{name}: expected options, got {other:?}"),
            }
            h.widget.select_option(key).await.unwrap();
            if n == 0 {
                let view = h.widget.view();
                drawn.push(view.messages.last().unwrap().text.clone());
            }
        }
        assert_eq!(h.widget.view().phase, Phase::FreeChat);

        if *language != Language::English {
            let english = LocalizationConfig::default();
            let english_strings: Vec<&str> = GuidedStep::all()
                .flat_map(|s| {
                    std::iter::once(english.question_text(s, "English"))
                        .chain(english.options(s, "English").iter().map(|o| o.label.as_str()))
                })
                .chain([
                    english.greeting("English"),
                    english.fallback_error_text("English"),
                ])
                .collect();
            for text in &drawn {
                assert!(
                    !english_strings.contains(&text.as_str()),
                    "{name} session drew English text {text:?}"
                );
            }
        }
    }
}

#[tokio::test]
async fn language_without_full_tables_refused_at_intake() {
    let mut localization = LocalizationConfig::default();
    if let Some(tamil) = localization.languages.get_mut("Tamil") {
        tamil.steps.remove(&3);
    }
    let controller = ConversationController::new(
        Arc::new(ScriptedGateway::new()),
        Arc::new(localization),
        Arc::new(AdvisorPrompt::default()),
        ControllerConfig::default(),
    );
    let leads = Arc::new(InMemoryLeadStore::new());
    let lead_store: Arc<dyn LeadStore> = leads.clone();
    let widget = ChatWidget::new(controller, lead_store);
    widget.open();

    let mut form = asha();
    form.language = "Tamil".into();
    let outcome = widget.submit_intake(form).unwrap();
    assert!(!outcome.ok);
    assert_eq!(outcome.errors[0].field, IntakeField::Language);
    assert!(outcome.session_id.is_none());
    assert!(leads.is_empty());

    let mut form = asha();
    form.language = "Marathi".into();
    assert!(widget.submit_intake(form).unwrap().ok);
}

#[tokio::test]
async fn lead_written_with_initial_status() {
    let h = harness();
    let mut form = asha();
    form.location = "Other".into();
    form.other_location = "Nashik".into();

    let outcome = h.widget.submit_intake(form).unwrap();
    let record = outcome.lead_write.unwrap().await.unwrap().unwrap();

    assert_eq!(record.lead.status, LeadStatus::New);
    assert_eq!(record.lead.location, "Nashik");
    assert_eq!(h.leads.len(), 1);
}

#[tokio::test]
async fn failed_lead_write_does_not_block_chat() {
    let h = harness_with(
        ScriptedGateway::with_default_reply("hi"),
        InMemoryLeadStore::failing("datastore offline"),
        ControllerConfig::default(),
    );

    let outcome = h.widget.submit_intake(asha()).unwrap();
    assert!(outcome.ok);
    assert!(outcome.lead_write.unwrap().await.unwrap().is_err());

    assert_eq!(h.widget.view().phase, step(1));
    assert_eq!(
        h.widget.select_option("A").await.unwrap(),
        TurnOutcome::Replied { phase: step(2) }
    );
}

#[tokio::test]
async fn chat_starts_before_slow_lead_write() {
    let h = harness_with(
        ScriptedGateway::with_default_reply("hi"),
        InMemoryLeadStore::with_delay(Duration::from_millis(200)),
        ControllerConfig::default(),
    );

    let outcome = h.widget.submit_intake(asha()).unwrap();
    let write = outcome.lead_write.unwrap();

    assert!(!write.is_finished());
    h.widget.select_option("A").await.unwrap();
    assert!(h.leads.is_empty());

    write.await.unwrap().unwrap();
    assert_eq!(h.leads.len(), 1);
}

#[tokio::test]
async fn invalid_intake_reports_first_failing_step() {
    let h = harness();
    let mut form = asha();
    form.phone = "12345".into();
    form.budget = String::new();

    let outcome = h.widget.submit_intake(form).unwrap();
    assert!(!outcome.ok);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].field, IntakeField::Phone);
    assert!(outcome.session_id.is_none());
    assert!(h.leads.is_empty());
    assert_eq!(h.widget.view().phase, Phase::Intake);
}

#[tokio::test]
async fn closed_widget_rejects_intake_and_reopens_fresh() {
    let h = harness();
    h.widget.close();
    assert!(matches!(
        h.widget.submit_intake(asha()),
        Err(AgentError::WidgetClosed)
    ));

    h.widget.open();
    let first = h.widget.submit_intake(asha()).unwrap().session_id.unwrap();
    h.widget.close();
    h.widget.open();
    let second = h.widget.submit_intake(asha()).unwrap().session_id.unwrap();
    assert_ne!(first, second);
}
