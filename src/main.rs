mod app;
mod config;
mod error;
mod github;
mod model;
mod report;
#[cfg(test)]
mod test_support;

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::{DEFAULT_LIST_LIMIT, ListOptions, Reporter};
use config::{API_URL_ENV, Config, Credential, DEFAULT_API_URL, DEFAULT_OWNER, DEFAULT_REPO, RepositoryRef};
use github::ReqwestHttp;
use report::Palette;

#[derive(Parser, Debug)]
#[command(
    name = "commit-reporter",
    version,
    about = "Print recent GitHub commits and the full diff of the latest one"
)]
struct Cli {
    /// Repository owner (user or organisation).
    #[arg(long, default_value = DEFAULT_OWNER)]
    owner: String,

    /// Repository name.
    #[arg(long, default_value = DEFAULT_REPO)]
    repo: String,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// When to colour the report.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the commit count and summaries of the most recent commits.
    List {
        /// How many commits to summarise.
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,

        /// Leave out commits authored by bots before counting.
        #[arg(long)]
        exclude_bots: bool,
    },
    /// Show the full message and per-file diffs of a commit.
    Show {
        /// Commit to inspect; defaults to the most recent one.
        sha: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn palette(self) -> Palette {
        let enabled = match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };
        if enabled {
            Palette::colored()
        } else {
            Palette::plain()
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(
        cli.api_url,
        RepositoryRef::new(cli.owner, cli.repo),
        Credential::from_env(),
    );
    if config.credential.is_empty() {
        tracing::warn!("GITHUB_TOKEN is not set; sending request with an empty token");
    }
    tracing::info!(repo = %config.repository, api = %config.api_url, "starting report");

    let http = ReqwestHttp::new();
    let reporter = Reporter::new(&http, &config, cli.color.palette());
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Command::List {
        limit: DEFAULT_LIST_LIMIT,
        exclude_bots: false,
    }) {
        Command::List {
            limit,
            exclude_bots,
        } => reporter
            .list(&mut stdout, ListOptions { limit, exclude_bots })
            .context("failed to list commits")?,
        Command::Show { sha } => reporter
            .show(&mut stdout, sha.as_deref())
            .context("failed to show commit detail")?,
    }

    stdout.flush()?;
    Ok(())
}
