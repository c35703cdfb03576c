use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use chartbridge::{cli, config, fatal, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Base URL of the bridge service
    #[clap(long, default_value_t = config::bridge_url())]
    server: String,

    /// Without a subcommand the interactive menu is started
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to Spotify through the bridge service
    Auth,

    /// Create a playlist from a Billboard Hot 100 chart
    Create(CreateOptions),

    /// Print a Billboard Hot 100 chart
    Chart(ChartOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Chart week as YYYY-MM-DD, current week if omitted
    #[clap(value_parser = parse_date)]
    date: Option<String>,

    /// Playlist name
    #[clap(long)]
    name: Option<String>,

    /// Create a private playlist
    #[clap(long)]
    private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ChartOptions {
    /// Chart week as YYYY-MM-DD, current week if omitted
    #[clap(value_parser = parse_date)]
    date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn parse_date(value: &str) -> Result<String, String> {
    utils::parse_chart_date(value)
        .map(|_| value.to_string())
        .ok_or_else(|| "invalid date format, use YYYY-MM-DD".to_string())
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    let command = match cli.command {
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            return;
        }
        other => other,
    };

    let client = match cli::BridgeClient::new(&cli.server) {
        Ok(client) => client,
        Err(e) => fatal!("Cannot create HTTP client. Err: {}", e),
    };

    let Some(command) = command else {
        cli::interactive(&client).await;
        return;
    };

    if !client.is_reachable().await {
        fatal!(
            "Bridge service not running at {}. Please start it first with: chartbridge-server",
            client.base_url()
        );
    }

    match command {
        Command::Auth => {
            cli::authenticate(&client).await;
        }
        Command::Create(opt) => {
            if cli::authenticate(&client).await {
                cli::create_playlist(&client, opt.date, opt.name, !opt.private).await;
            }
        }
        Command::Chart(opt) => cli::show_chart(&client, opt.date.as_deref(), false).await,
        Command::Completions(_) => {}
    }
}
