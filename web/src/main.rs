mod app;
mod sessions;

use anyhow::Result;
use app::AppState;
use legal_assistant::{AskService, AssistantConfig};
use sessions::{SessionLimits, SessionStore};
use std::sync::Arc;
use std::time::{Duration, Instant};

const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Periodically drops sessions that have sat idle past their TTL.
fn spawn_session_sweeper(sessions: Arc<SessionStore>) {
    let period = sessions.limits().idle_ttl.min(Duration::from_secs(60)).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = sessions.sweep_idle(Instant::now()).await;
            if evicted > 0 {
                log::info!("Swept {} idle sessions, {} remain", evicted, sessions.len().await);
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = AssistantConfig::from_env()?;
    log::info!("Questions go to {}", config.endpoint);

    let limits = SessionLimits::from_env()?;
    log::info!(
        "Sessions expire after {}s idle, at most {} kept",
        limits.idle_ttl.as_secs(),
        limits.max_sessions
    );

    let bind = std::env::var("LEGAL_ASSISTANT_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let state = AppState::new(AskService::new(config), limits);
    spawn_session_sweeper(state.sessions.clone());
    let app = app::router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
