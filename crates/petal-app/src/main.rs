mod bootstrap;
mod chat_loop;
mod cli;
mod ui;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use petal_ai::SessionStore;
use petal_common::PetalError;
use petal_config::PetalConfig;

use chat_loop::ChatLoop;
use ui::{Palette, Transcript};

/// Exit status for configuration problems found before the chat starts.
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    // Load .env file before anything else
    bootstrap::load_dotenv(Path::new(".env"));

    let args = cli::parse();

    // Logging comes up before the config so loader messages are not lost
    let log_handle = bootstrap::init_logging(&bootstrap::log_directive(
        args.log_level.as_deref(),
        &PetalConfig::default(),
    ));
    tracing::info!("Petal v{} starting...", env!("CARGO_PKG_VERSION"));

    // An explicit --config must load; the default location falls back to defaults
    let config_path = petal_config::config_path(args.config.as_deref())
        .unwrap_or_else(|_| PathBuf::from("config.toml"));
    let config = match petal_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            eprintln!("petal: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            PetalConfig::default()
        }
    };
    bootstrap::refilter(
        &log_handle,
        &bootstrap::log_directive(args.log_level.as_deref(), &config),
    );

    let model_id = petal_config::effective_model(
        args.model.as_deref(),
        std::env::var(petal_config::MODEL_VAR).ok(),
        &config,
    );
    tracing::info!(model = %model_id, "config loaded from {}", config_path.display());

    let api_key = petal_config::resolve_api_key(&config_path);
    let client = match bootstrap::connect(&config, api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("petal: {e}");
            return if e.is_fatal() {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::FAILURE
            };
        }
    };

    let palette = if args.no_color || !std::io::stdout().is_terminal() {
        Palette::plain()
    } else {
        Palette::from_config(&config.display)
    };

    match run(&client, &config, model_id, palette) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("chat ended with an error: {e}");
            eprintln!("petal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    client: &petal_ai::GeminiClient,
    config: &PetalConfig,
    model_id: String,
    palette: Palette,
) -> Result<(), PetalError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let session = SessionStore::new(model_id);
    tracing::debug!(session = %session.id().short(), "session started");

    let view = Transcript::new(std::io::stdout(), palette);
    let mut chat = ChatLoop::new(
        client,
        session,
        view,
        config.display.title.clone(),
        config.display.placeholder.clone(),
    );

    runtime.block_on(async {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        chat.run(stdin).await
    })?;
    Ok(())
}
