//! Weather SDK demo binary
//!
//! Looks up current weather for one or more cities through a single SDK
//! instance and prints the results.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_sdk::{Config, InstanceRegistry, Mode, WeatherRecord};

#[derive(Debug, Parser)]
#[command(name = "weather-sdk", version, about = "Current weather lookup")]
struct Cli {
    /// API key for the upstream weather service
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Operating mode: on-demand or polling
    #[arg(long, default_value = "on-demand")]
    mode: Mode,

    /// Print records as JSON instead of a one-line summary
    #[arg(long)]
    json: bool,

    /// City names to look up
    #[arg(required = true)]
    cities: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_sdk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_entries={}, cache_ttl={}s, poll_interval={}s",
        config.max_entries, config.cache_ttl, config.poll_interval
    );

    let registry = InstanceRegistry::new(config).context("Failed to create SDK registry")?;
    let sdk = registry.add_instance(cli.api_key.clone(), cli.mode).await?;

    let mut result = Ok(());
    for city in &cli.cities {
        let output = if cli.json {
            sdk.get_weather_as_json(city).await
        } else {
            sdk.get_weather(city).await.map(|r| summary(&r))
        };

        match output {
            Ok(line) => println!("{line}"),
            Err(e) => {
                result = Err(e).with_context(|| format!("Lookup failed for '{city}'"));
                break;
            }
        }
    }

    let stats = sdk.stats().await;
    info!(
        "Cache stats: hits={}, misses={}, entries={}/{}",
        stats.hits, stats.misses, stats.total_entries, stats.capacity
    );

    registry.remove_instance(&cli.api_key).await?;
    result
}

fn summary(record: &WeatherRecord) -> String {
    let observed = record
        .local_observed_at()
        .map(|dt| dt.format("%Y-%m-%d %H:%M %:z").to_string())
        .unwrap_or_else(|| "unknown time".to_string());

    format!(
        "{}: {} ({}), {:.1}° (feels like {:.1}°), wind {:.1}, observed {}",
        record.name,
        record.weather.main,
        record.weather.description,
        record.temperature.temp,
        record.temperature.feels_like,
        record.wind.speed,
        observed
    )
}
