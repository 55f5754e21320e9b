use social_media_api::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!(error = %format!("{e:#}"), "Server terminated");
        return Err(e);
    }

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` directives win over the
/// configured level; `LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format.eq_ignore_ascii_case("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}
