use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use toptracks::{
    cli, config, error,
    management::PlaylistPreset,
    metrics::Metric,
    utils,
};

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
    /// Print debug diagnostics
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Forget the stored access token
    Logout,

    /// Show authentication status
    Status,

    /// List your top tracks
    Tracks,

    #[clap(about = "Create a playlist from your top tracks and show insights")]
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist flavour: favorites, weekly or diversity
    #[clap(long, default_value = "favorites", value_parser = utils::parse_preset)]
    preset: PlaylistPreset,

    /// Override the preset's playlist name
    #[clap(long)]
    name: Option<String>,

    /// Override the preset's playlist description
    #[clap(long)]
    description: Option<String>,

    /// Metric(s) to compute instead of the preset's; can be repeated
    #[clap(
        long = "metric",
        value_parser = utils::parse_metric,
        action = ArgAction::Append,
        num_args = 1
    )]
    metrics: Vec<Metric>,

    /// Skip insights when the tracks could not be added to the playlist
    #[clap(long)]
    strict: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    match cli.command {
        Command::Auth => {
            let config = match config::Config::from_env() {
                Ok(config) => config,
                Err(e) => error!("{}", e),
            };
            cli::auth(&config).await;
        }
        Command::Logout => cli::logout().await,
        Command::Status => cli::status().await,
        Command::Tracks => cli::list_tracks().await,
        Command::Playlist(opt) => {
            cli::playlist(cli::PlaylistArgs {
                preset: opt.preset,
                name: opt.name,
                description: opt.description,
                metrics: opt.metrics,
                strict: opt.strict,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
