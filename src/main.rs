// src/main.rs
// DOCUMENTATION: `tripbox` command-line entry point
// PURPOSE: Load config, initialize logging, dispatch a subcommand

mod handlers;

use dotenv::dotenv;
use std::env;
use std::process;
use tripbox_client::Config;

const USAGE: &str = "usage:
  tripbox export-pdf <trip_id>
  tripbox chat-tail <group_id>
  tripbox weather <group_id> <lat> <lng>
  tripbox members <group_id>
  tripbox track <group_id>";

fn parse<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> anyhow::Result<T> {
    let raw = args
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("missing <{}>\n{}", name, USAGE))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid <{}>: {}", name, raw))
}

async fn run(config: &Config, args: &[String]) -> anyhow::Result<()> {
    match args.first().map(String::as_str) {
        Some("export-pdf") => handlers::export_pdf(config, parse(args, 1, "trip_id")?).await,
        Some("chat-tail") => handlers::chat_tail(config, parse(args, 1, "group_id")?).await,
        Some("weather") => {
            handlers::weather(
                config,
                parse(args, 1, "group_id")?,
                parse(args, 2, "lat")?,
                parse(args, 3, "lng")?,
            )
            .await
        }
        Some("members") => handlers::members(config, parse(args, 1, "group_id")?).await,
        Some("track") => handlers::track(config, parse(args, 1, "group_id")?).await,
        _ => Err(anyhow::anyhow!("{}", USAGE)),
    }
}

#[tokio::main]
async fn main() {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info"
        };
        env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        process::exit(2);
    }

    log::debug!("Environment: {}", config.environment);
    log::debug!("Backend: {}", config.api_base_url);

    // 4. Dispatch
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&config, &args).await {
        eprintln!("{}{}{}", handlers::RED, e, handlers::RESET);
        process::exit(1);
    }
}
