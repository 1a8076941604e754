use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "aniworld-bridge")]
#[command(about = "Jellyseerr to AniWorld-Downloader bridge", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let config = server::Config::from_env();

    server::run_server(addr, config).await
}
