mod app;
mod config;
mod dto;
mod error;
mod extract;
mod favorites;
mod foods;
mod health;
mod menu;
mod recommend;
mod state;
mod storage;
mod store;
mod students;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "dining_hall=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init().await?;
    tracing::info!(top_picks = state.config.top_picks, "dining hall backend starting");

    app::serve(app::build_app(state)).await
}
