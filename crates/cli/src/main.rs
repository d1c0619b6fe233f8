mod commands;
mod logging;

use anyhow::Context as _;
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use site_kit_core::SiteConfig;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "site-kit")]
#[command(version, about = "Plot Venture website, rendered from the content store", long_about = None)]
struct Cli {
    /// Path to site.toml (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Serve the site, rendering every request from live content
    Serve {
        /// Port to serve on (overrides site.toml)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with static files such as logo.png
        #[arg(long, default_value = "public")]
        public: PathBuf,
    },

    /// Write a static copy of the site
    Build {
        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,

        /// Directory with static files such as logo.png
        #[arg(long, default_value = "public")]
        public: PathBuf,
    },

    /// Show which pages the content store returns and whether they are published
    Check {
        /// Check a single page instead of listing all
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    if let Command::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "site-kit", &mut io::stdout());
        return Ok(());
    }

    let config = SiteConfig::load(cli.config.as_deref()).context("load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Command::Serve { port, public } => commands::serve::run(config, port, public).await,
        Command::Build { output, public } => commands::build::run(config, output, public).await,
        Command::Check { slug } => commands::check::run(config, slug).await,
        Command::Completions { .. } => Ok(()),
    }
}
