use chartbridge::{config, server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    config::load_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chartbridge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::Settings::from_env();
    if let Err(e) = server::start_api_server(settings).await {
        tracing::error!(error = %e, "chartbridge service stopped");
        std::process::exit(1);
    }
}
