//! Franchise assistant server
//!
//! Loads settings, wires the model gateway and lead store, and serves the
//! widget API.

use std::sync::Arc;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use franchise_assistant_agent::ControllerConfig;
use franchise_assistant_config::{
    AdvisorPrompt, LocalizationConfig, ObservabilitySettings, Settings,
};
use franchise_assistant_llm::create_gateway;
use franchise_assistant_persistence::create_lead_store;
use franchise_assistant_server::{router, spawn_widget_sweeper, AppState, WidgetLimits};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = ?settings.model.provider,
        model = %settings.model.model,
        lead_backend = ?settings.leads.backend,
        "Starting franchise assistant"
    );

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("installing Prometheus recorder")?;

    let localization = match &settings.localization_path {
        Some(path) => LocalizationConfig::load(path)
            .with_context(|| format!("loading localization from {path}"))?,
        None => LocalizationConfig::default(),
    };
    tracing::info!(languages = ?localization.languages(), "Localization loaded");
    let incomplete = localization.incomplete_languages();
    if !incomplete.is_empty() {
        tracing::warn!(languages = ?incomplete, "Languages without full step tables are refused at intake");
    }

    let gateway = create_gateway(&settings.model).context("building model gateway")?;
    let lead_store = create_lead_store(&settings.leads).context("building lead store")?;

    let state = AppState::new(
        gateway,
        lead_store,
        Arc::new(localization),
        Arc::new(AdvisorPrompt::default()),
        ControllerConfig::from_settings(&settings.model),
    )
    .with_metrics(metrics)
    .with_limits(WidgetLimits::from_settings(&settings.server));

    spawn_widget_sweeper(state.clone(), settings.server.widget_sweep_interval());

    let app = router(state, &settings.server.cors_origins);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(settings: &ObservabilitySettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if settings.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
