use chat_shell::config::AppConfig;
use chat_shell::logging;
use chat_shell::routes::configure_routes;
use chat_shell::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_level);

    let routes = configure_routes(AppState::seeded(config.session_capacity));

    let addr = config.bind_addr();
    tracing::info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
