use anyhow::{Context, Result};
use assign_demo::{
    config::{Config, LogFormat, OutputFormat},
    run_scenario,
    telemetry::{init_telemetry, log_startup_info},
};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "assign-demo")]
#[command(about = "Assign a task to a user and complete it")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONFIG_FILE")]
    config: Option<String>,

    /// User name override
    #[arg(long)]
    user: Option<String>,

    /// Task title override
    #[arg(long)]
    title: Option<String>,

    /// Task priority override
    #[arg(long)]
    priority: Option<String>,

    /// Log level override
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format override
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Output format override
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(config_file) => Config::from_file(config_file)?,
        None => Config::from_env()?,
    };

    // Apply CLI overrides
    if let Some(ref user) = cli.user {
        config.scenario.user = user.clone();
    }

    if let Some(ref title) = cli.title {
        config.scenario.title = title.clone();
    }

    if let Some(ref priority) = cli.priority {
        config.scenario.priority = priority.clone();
    }

    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }

    if let Some(log_format) = cli.log_format {
        config.logging.format = log_format;
    }

    if let Some(output) = cli.output {
        config.output.format = output;
    }

    Ok(config)
}

fn main() -> Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = load_config(&cli).context("Failed to load configuration")?;

    init_telemetry(&config.logging).context("Failed to initialize telemetry")?;

    if let Err(e) = config.validate() {
        error!(error = %e, "Configuration validation failed");
        std::process::exit(1);
    }
    info!("Configuration validation passed");

    log_startup_info(&config);

    let report = run_scenario(&config.scenario);

    match config.output.format {
        OutputFormat::Text => println!("{}", report.task_completed),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    if !report.task_completed {
        error!("Task was not completed");
        std::process::exit(2);
    }

    info!("Done");
    Ok(())
}
