//! Runtime configuration resolved from command-line flags and environment.

use std::path::PathBuf;

/// Public Homebrew JSON API
pub const DEFAULT_API_URL: &str = "https://formulae.brew.sh/api";

/// Settings shared by every part of a run.
///
/// Built once in `main` from the parsed CLI and then passed by reference to
/// the constructors of the API client, the package manager runner and the
/// fuzzy finder.
#[derive(Debug, Clone)]
pub struct Config {
    /// Package manager executable (`brew` on the search path by default)
    pub brew: PathBuf,
    /// Fuzzy finder executable
    pub fzf: PathBuf,
    /// Base URL of the catalog API, without trailing slash
    pub api_url: String,
    /// Print mutating package manager commands instead of running them
    pub dry_run: bool,
    /// Skip the environment checks at startup
    pub skip_setup: bool,
    /// Log brewify's own debug events
    pub verbose: bool,
}

impl Config {
    /// Normalize user supplied values.
    pub fn new(
        brew: PathBuf,
        fzf: PathBuf,
        api_url: &str,
        dry_run: bool,
        skip_setup: bool,
        verbose: bool,
    ) -> Self {
        Self {
            brew,
            fzf,
            api_url: api_url.trim_end_matches('/').to_string(),
            dry_run,
            skip_setup,
            verbose,
        }
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "brewify=debug" } else { "warn" }
    }

    pub fn formula_url(&self) -> String {
        format!("{}/formula.json", self.api_url)
    }

    pub fn cask_url(&self) -> String {
        format!("{}/cask.json", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            PathBuf::from("brew"),
            PathBuf::from("fzf"),
            DEFAULT_API_URL,
            false,
            false,
            false,
        )
    }
}
