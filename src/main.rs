use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

mod config;
mod greeting;
mod handler;
mod http;
mod logger;
mod server;

const USAGE: &str = "Usage: vanakam [-c|--config <path>]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = parse_config_path(std::env::args().skip(1))?;
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    let runtime = build_runtime(cfg.server.workers)?;
    runtime.block_on(async_main(cfg))
}

/// Tokio runtime sized by `server.workers`, CPU cores otherwise
fn build_runtime(
    workers: Option<usize>,
) -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    match workers {
        Some(0) => return Err("server.workers must be at least 1".into()),
        Some(workers) => {
            runtime_builder.worker_threads(workers);
            logger::log_info(&format!("Using {workers} worker threads"));
        }
        None => logger::log_info("Using default worker threads (CPU cores)"),
    }

    Ok(runtime_builder.build()?)
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let listener = server::create_listener(cfg.get_socket_addr()?)?;
    let addr = listener.local_addr()?;
    logger::log_server_start(&addr, &cfg);

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    let grace = Duration::from_secs(cfg.performance.write_timeout);
    let state = Arc::new(config::AppState::new(&cfg));
    server::start_server_loop(listener, state, shutdown, grace).await?;

    logger::log_info("Server stopped");
    Ok(())
}

/// Extract the config file path (without extension) from CLI arguments
fn parse_config_path(mut args: impl Iterator<Item = String>) -> Result<String, String> {
    let mut path = config::DEFAULT_CONFIG_PATH.to_string();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                path = args
                    .next()
                    .ok_or_else(|| format!("{arg} requires a path\n{USAGE}"))?;
            }
            other => match other.strip_prefix("--config=") {
                Some(p) => path = p.to_string(),
                None => return Err(format!("Unknown argument: {other}\n{USAGE}")),
            },
        }
    }

    Ok(path)
}
