//! Process entry point: configuration, wiring, serve loop.

mod settings;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use uniplan_cache::CacheProvider;
use uniplan_engine::{CurrentWeekService, ScheduleEngine};
use uniplan_http::{router, AppState};
use uniplan_logging::Profile;
use uniplan_store::{
    connect, EmployeeSearchRepo, EventsRepo, RoomsRepo, ScheduleSnapshotRepo, StructureRepo,
    SystemStateRepo,
};
use uniplan_tools::{build_registry, ToolContext};

use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::load().context("loading configuration")?;
    uniplan_logging::init(Profile::parse(
        settings.log_profile.as_deref().unwrap_or("development"),
    ));

    let pool = connect(&settings.database_url, settings.database_max_connections)
        .context("building database pool")?;
    // A missing cache server degrades to no-op caching; it never blocks
    // startup.
    let cache = Arc::new(CacheProvider::connect_or_noop(&settings.redis_url).await);

    let search = EmployeeSearchRepo::new(pool.clone());
    let engine = Arc::new(ScheduleEngine::new(
        Arc::new(ScheduleSnapshotRepo::new(pool.clone())),
        Arc::new(search.clone()),
        cache.clone(),
        Duration::from_secs(settings.schedule_cache_ttl),
    ));
    let week = Arc::new(CurrentWeekService::new(
        Arc::new(SystemStateRepo::new(pool.clone())),
        cache,
        Duration::from_secs(settings.current_week_cache_ttl),
    ));

    let ctx = ToolContext {
        engine,
        week,
        search,
        structure: StructureRepo::new(pool.clone()),
        rooms: RoomsRepo::new(pool.clone()),
        events: EventsRepo::new(pool),
    };
    let state = AppState::new(ctx, Arc::new(build_registry()));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("binding {}", settings.bind_addr))?;
    tracing::info!(addr = %settings.bind_addr, "uniplan listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
