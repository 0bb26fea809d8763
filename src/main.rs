use anyhow::{Context, Result};

use crisis_guide::{
    cli::args_from_env,
    config::Config,
    logging::init_tracing,
    server::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = args_from_env()?;
    let mut config = Config::load(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path.display()))?;
    if let Some(listen_addr) = args.listen_addr {
        config.server.listen_addr = listen_addr;
    }

    let logging = init_tracing(&config.logging).context("failed to initialize logging")?;
    eprintln!(
        "logging to {} (run {})",
        logging.log_dir().display(),
        logging.run_id()
    );

    let state = AppState::from_config(&config)?;
    let result = server::run(config, state).await;
    if let Err(err) = &result {
        tracing::error!(target: "server", error = %format!("{err:#}"), "server_exited_with_error");
    }

    drop(logging);
    result
}
