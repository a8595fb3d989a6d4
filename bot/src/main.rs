use anyhow::Result;
use bot::relay::RelayClient;
use bot::webhook::{app, AppState};
use clap::Parser;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
struct Args {
    #[clap(short, long, default_value = "0.0.0.0:8080")]
    address: String,
    #[clap(long, env = "BOT_TOKEN", hide_env_values = true)]
    bot_token: String,
    #[clap(long, default_value = "https://last-warning.serv00.net/Muskan_gf.php")]
    relay_url: String,
    #[clap(long, default_value = "https://api.telegram.org")]
    telegram_url: String,
}


#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!("Relaying messages to {}", &args.relay_url);

    let state = AppState {
        telegram: telegram_client::Client::with_base_url(&args.telegram_url, &args.bot_token),
        relay: RelayClient::new(&args.relay_url),
    };

    let app = app(state);

    tracing::info!("Listening on {}", &args.address);
    let listener = TcpListener::bind(&args.address).await?;

    axum::serve(listener, app).await?;
    tracing::info!("Server shutdown");

    Ok(())
}
