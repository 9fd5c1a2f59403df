use brewify::commands::{self, Context};
use brewify::menu::PackageKind;
use brewify::setup::{self, SystemToolchain};
use brewify::term::{self, LinePrompter};
use brewify::{Brew, BrewApi, Config, Fzf};
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brewify")]
#[command(
    author,
    version,
    about = "Fuzzy-find, install and uninstall Homebrew packages",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print install and uninstall commands instead of running them
    #[arg(long, global = true, env = "BREWIFY_DRY_RUN")]
    dry_run: bool,

    /// Do not check for Homebrew and fzf at startup
    #[arg(long, global = true, env = "BREWIFY_SKIP_SETUP")]
    skip_setup: bool,

    /// Homebrew executable
    #[arg(long, global = true, env = "BREWIFY_BREW", default_value = "brew")]
    brew: PathBuf,

    /// fzf executable
    #[arg(long, global = true, env = "BREWIFY_FZF", default_value = "fzf")]
    fzf: PathBuf,

    /// Base URL of the Homebrew JSON API
    #[arg(
        long,
        global = true,
        env = "BREWIFY_API_URL",
        default_value = brewify::config::DEFAULT_API_URL
    )]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick and install a single formula (or cask)
    Install {
        /// Pick from casks instead of formulae
        #[arg(long)]
        cask: bool,
    },

    /// Pick and uninstall an installed package
    Uninstall,

    /// Collect several packages and install the missing ones
    Bundle,

    /// Check for (and install) Homebrew and fzf
    Setup,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::new(
        cli.brew,
        cli.fzf,
        &cli.api_url,
        cli.dry_run,
        cli.skip_setup,
        cli.verbose,
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    term::init_colors();

    tracing::debug!("{:?}", config);

    let toolchain = SystemToolchain::new(&config);
    let startup_checks = !config.skip_setup
        && !matches!(
            cli.command,
            Some(Commands::Setup) | Some(Commands::Completions { .. })
        );
    if startup_checks {
        setup::ensure_environment(&toolchain);
    }

    let api = BrewApi::new(&config)?;
    let fzf = Fzf::new(&config);
    let brew = Brew::new(&config);
    let ctx = Context::new(&api, &fzf, &brew);
    let mut prompter = LinePrompter::stdin();

    match cli.command {
        None => {
            println!("{} Welcome to brewify!", "🍺".bold());
            commands::run(&ctx, &mut prompter).await?;
        }
        Some(Commands::Install { cask }) => {
            let kind = if cask {
                PackageKind::Cask
            } else {
                PackageKind::Formula
            };
            commands::install(&ctx, kind).await?;
        }
        Some(Commands::Uninstall) => {
            commands::uninstall(&ctx)?;
        }
        Some(Commands::Bundle) => {
            let report = commands::bundle(&ctx, &mut prompter).await?;
            if !report.failed.is_empty() {
                anyhow::bail!("failed to install: {}", report.failed.join(", "));
            }
        }
        Some(Commands::Setup) => {
            let report = setup::ensure_environment(&toolchain);
            if !report.ready() {
                anyhow::bail!("environment is incomplete: {:?}", report);
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "brewify", &mut std::io::stdout());
        }
    }

    Ok(())
}
