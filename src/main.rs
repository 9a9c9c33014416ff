use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::warn;
use retort::core::config::{CliOverrides, RetortConfig, load_config, resolve};
use retort::core::state::App;
use retort::core::tone::Tone;
use retort::headless::submit_once;
use retort::webhook::WebhookClient;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "retort", about = "Turn a received message into a reply in the tone you pick")]
struct Args {
    /// n8n webhook that generates the reply
    #[arg(short, long)]
    webhook_url: Option<String>,

    /// Tone to preselect
    #[arg(short, long, value_enum)]
    tone: Option<Tone>,

    /// Submit this text once and print the reply instead of opening the form
    #[arg(long)]
    text: Option<String>,

    /// Log level written to retort.log
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to retort.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("retort.log") {
        let level = args.log_level.parse().unwrap_or(LevelFilter::Debug);
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        warn!("Falling back to default config: {}", e);
        RetortConfig::default()
    });
    let resolved = resolve(
        &config,
        &CliOverrides {
            tone: args.tone,
            webhook_url: args.webhook_url,
        },
    );

    log::info!(
        "Retort starting up (tone: {}, webhook configured: {})",
        resolved.tone.id(),
        resolved.webhook_url.is_some()
    );

    let mut app = App::from_config(Arc::new(WebhookClient::new()), &resolved);

    match args.text {
        Some(text) => {
            app.input.input_text = text;
            match submit_once(&mut app).await {
                Ok(reply) => {
                    println!("{}", reply);
                    Ok(ExitCode::SUCCESS)
                }
                Err(message) => {
                    eprintln!("{}", message);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        None => {
            retort::tui::run(app)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
