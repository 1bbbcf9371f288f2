//! Reading Companion server binary.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use reading_companion::adapters::http::{app_router, AppState};
use reading_companion::adapters::memory::{
    InMemoryMemberDirectory, InMemoryPreferencesStore, InMemoryProgressStore,
    InMemoryScriptureStore, SeedData,
};
use reading_companion::config::AppConfig;
use reading_companion::domain::calendar::ScheduleCalendar;
use reading_companion::domain::plan::schedule;
use reading_companion::ports::SystemClock;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let offset = config.calendar.offset()?;
    let addr = config.server.socket_addr()?;

    let calendar = ScheduleCalendar::standard();
    let plan = schedule();
    info!(
        days = plan.len(),
        epoch = %calendar.epoch(),
        last_reading_date = %calendar.last_reading_date()?,
        "reading schedule ready"
    );

    let members = Arc::new(InMemoryMemberDirectory::new());
    let scripture = Arc::new(InMemoryScriptureStore::new());
    if let Some(path) = &config.data.seed_path {
        SeedData::load(path)?.apply(&members, &scripture).await;
        info!(
            path = %path.display(),
            chapters = scripture.len().await,
            "seed data loaded"
        );
    }

    let state = AppState {
        progress_repository: Arc::new(InMemoryProgressStore::new()),
        preferences_repository: Arc::new(InMemoryPreferencesStore::new()),
        member_directory: members,
        scripture_reader: scripture,
        clock: Arc::new(SystemClock::new(offset)),
        calendar,
    };
    let app = app_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
