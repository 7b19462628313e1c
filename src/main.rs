use clap::Parser;
use echo_drill::utils::logger;
use echo_drill::{app, create_router, server, AppState, CliConfig, LogFormat, OpenAiSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting echo-drill v{}", env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let game = match app::load_game_config(config.config.as_deref()) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let model = config
        .model
        .clone()
        .unwrap_or_else(|| game.model_name().to_string());
    let api_base = config
        .api_base
        .clone()
        .unwrap_or_else(|| game.api_base().to_string());
    let openai = OpenAiSettings::from_env(model, api_base);
    tracing::debug!("Comparator settings: {:?}", openai);

    let checker = app::build_checker(config.judge, &game, &openai)?;
    tracing::info!(
        "Loaded {} phrases, comparator: {}",
        checker.phrases().len(),
        checker.comparator_name().unwrap_or("none (guess endpoint disabled)")
    );

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html; GET / will return 404",
            config.static_dir.display()
        );
    }

    let router = create_router(AppState::new(checker), &config.static_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    server::run(listener, router, server::shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
