use clap::Parser;
use htmx_todo::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = htmx_todo::server::run(config).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
