//! Shared application state
//!
//! Widgets live in a registry keyed by id. A widget nobody has touched for
//! the idle timeout is closed and dropped by [`spawn_widget_sweeper`]; when
//! the registry is full, opening a widget sweeps first and is refused if
//! nothing was idle.

use dashmap::DashMap;
use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use uuid::Uuid;

use franchise_assistant_agent::{ChatWidget, ControllerConfig, ConversationController};
use franchise_assistant_config::constants::server;
use franchise_assistant_config::{AdvisorPrompt, LocalizationConfig, ServerSettings};
use franchise_assistant_core::ModelGateway;
use franchise_assistant_persistence::LeadStore;

use crate::error::ApiError;

/// Bounds on the widget registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetLimits {
    pub idle_timeout: Duration,
    pub max_widgets: usize,
}

impl Default for WidgetLimits {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(server::WIDGET_IDLE_SECS),
            max_widgets: server::MAX_WIDGETS,
        }
    }
}

impl WidgetLimits {
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            idle_timeout: settings.widget_idle_timeout(),
            max_widgets: settings.max_widgets,
        }
    }
}

pub struct WidgetSlot {
    widget: Arc<ChatWidget>,
    last_seen: Mutex<Instant>,
}

impl WidgetSlot {
    fn new(widget: Arc<ChatWidget>) -> Self {
        Self {
            widget,
            last_seen: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        *self.last_seen.lock() = Instant::now();
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(*self.last_seen.lock())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub widgets: Arc<DashMap<Uuid, WidgetSlot>>,
    pub gateway: Arc<dyn ModelGateway>,
    pub lead_store: Arc<dyn LeadStore>,
    pub localization: Arc<LocalizationConfig>,
    pub prompt: Arc<AdvisorPrompt>,
    pub controller_config: ControllerConfig,
    pub limits: WidgetLimits,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        lead_store: Arc<dyn LeadStore>,
        localization: Arc<LocalizationConfig>,
        prompt: Arc<AdvisorPrompt>,
        controller_config: ControllerConfig,
    ) -> Self {
        Self {
            widgets: Arc::new(DashMap::new()),
            gateway,
            lead_store,
            localization,
            prompt,
            controller_config,
            limits: WidgetLimits::default(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn with_limits(mut self, limits: WidgetLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Create and open a widget with its own controller
    pub fn open_widget(&self) -> Result<(Uuid, Arc<ChatWidget>), ApiError> {
        if self.widgets.len() >= self.limits.max_widgets {
            self.evict_idle();
            if self.widgets.len() >= self.limits.max_widgets {
                return Err(ApiError::TooManyWidgets(self.limits.max_widgets));
            }
        }

        let controller = ConversationController::new(
            self.gateway.clone(),
            self.localization.clone(),
            self.prompt.clone(),
            self.controller_config.clone(),
        );
        let widget = Arc::new(ChatWidget::new(controller, self.lead_store.clone()));
        widget.open();

        let id = Uuid::new_v4();
        self.widgets.insert(id, WidgetSlot::new(widget.clone()));
        self.record_open_widgets();
        tracing::debug!(widget_id = %id, open_widgets = self.widgets.len(), "Widget opened");
        Ok((id, widget))
    }

    /// Look up a widget and mark it active
    pub fn widget(&self, id: Uuid) -> Result<Arc<ChatWidget>, ApiError> {
        self.widgets
            .get(&id)
            .map(|slot| {
                slot.touch();
                slot.widget.clone()
            })
            .ok_or(ApiError::WidgetNotFound(id))
    }

    /// Close and forget a widget
    pub fn close_widget(&self, id: Uuid) -> Result<(), ApiError> {
        let (_, slot) = self
            .widgets
            .remove(&id)
            .ok_or(ApiError::WidgetNotFound(id))?;
        slot.widget.close();
        self.record_open_widgets();
        Ok(())
    }

    /// Close and forget every widget idle past the timeout. Returns how many
    /// were evicted.
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let timeout = self.limits.idle_timeout;

        let idle: Vec<Uuid> = self
            .widgets
            .iter()
            .filter(|entry| entry.value().idle_for(now) >= timeout)
            .map(|entry| *entry.key())
            .collect();

        let mut evicted = 0;
        for id in idle {
            // Recheck: a request may have touched it since the scan
            if let Some((_, slot)) = self
                .widgets
                .remove_if(&id, |_, slot| slot.idle_for(now) >= timeout)
            {
                slot.widget.close();
                evicted += 1;
                tracing::debug!(widget_id = %id, "Idle widget evicted");
            }
        }

        if evicted > 0 {
            metrics::counter!("chat_widgets_evicted_total").increment(evicted as u64);
            self.record_open_widgets();
            tracing::info!(evicted, open_widgets = self.widgets.len(), "Idle widgets swept");
        }
        evicted
    }

    fn record_open_widgets(&self) {
        metrics::gauge!("chat_widgets_open").set(self.widgets.len() as f64);
    }
}

/// Sweep idle widgets every `every` until the runtime shuts down
pub fn spawn_widget_sweeper(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            state.evict_idle();
        }
    })
}
