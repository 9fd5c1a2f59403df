//! Homebrew JSON catalog client.
//!
//! Downloads the complete list of installable formulae and casks from the
//! public Homebrew API and reduces each entry to the name the package manager
//! accepts on its command line (`name` for formulae, `token` for casks).
//!
//! Every fetch is fresh: nothing is cached between calls. A failed fetch is
//! never an error for the caller. Non-200 statuses, transport failures and
//! undecodable bodies are reported on the console and degrade to an empty
//! list, which the menus treat as "nothing to select".
//!
//! # Examples
//!
//! ```no_run
//! use brewify::api::{BrewApi, Catalog};
//! use brewify::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = BrewApi::new(&Config::default())?;
//!     let formulae = api.formulas().await;
//!     println!("Total formulae available: {}", formulae.len());
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::error::{BrewifyError, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// Formula entry from `formula.json` (only the fields we use)
#[derive(Debug, Clone, Deserialize)]
pub struct FormulaEntry {
    pub name: String,
}

/// Cask entry from `cask.json`
#[derive(Debug, Clone, Deserialize)]
pub struct CaskEntry {
    pub token: String,
}

/// Source of installable package names.
pub trait Catalog {
    /// All formula names, in feed order. Empty when the catalog is unavailable.
    fn formulas(&self) -> impl Future<Output = Vec<String>>;

    /// All cask tokens, in feed order. Empty when the catalog is unavailable.
    fn casks(&self) -> impl Future<Output = Vec<String>>;
}

/// Homebrew API client
#[derive(Clone)]
pub struct BrewApi {
    client: reqwest::Client,
    formula_url: String,
    cask_url: String,
}

impl BrewApi {
    /// Create a client for the catalog endpoints named in `config`.
    ///
    /// No request timeout is applied: a slow network blocks the prompt until
    /// the download completes.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("brewify/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            formula_url: config.formula_url(),
            cask_url: config.cask_url(),
        })
    }

    /// Fetch the formula catalog, propagating every failure.
    ///
    /// Any status other than 200 is a [`BrewifyError::HttpStatus`].
    pub async fn try_fetch_formulas(&self) -> Result<Vec<String>> {
        let entries: Vec<FormulaEntry> = self.get_json(&self.formula_url).await?;
        Ok(entries.into_iter().map(|f| f.name).collect())
    }

    /// Fetch the cask catalog, propagating every failure.
    pub async fn try_fetch_casks(&self) -> Result<Vec<String>> {
        let entries: Vec<CaskEntry> = self.get_json(&self.cask_url).await?;
        Ok(entries.into_iter().map(|c| c.token).collect())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", url, status);

        if status != StatusCode::OK {
            return Err(BrewifyError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Decode from bytes so a malformed body surfaces as a JSON error
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Catalog for BrewApi {
    async fn formulas(&self) -> Vec<String> {
        let spinner = spinner("Fetching formulae...");
        let result = self.try_fetch_formulas().await;
        spinner.finish_and_clear();
        degrade("formula", result)
    }

    async fn casks(&self) -> Vec<String> {
        let spinner = spinner("Fetching casks...");
        let result = self.try_fetch_casks().await;
        spinner.finish_and_clear();
        degrade("cask", result)
    }
}

/// Collapse a fetch outcome into a candidate list, reporting failures once.
fn degrade(kind: &str, result: Result<Vec<String>>) -> Vec<String> {
    match result {
        Ok(names) => {
            tracing::debug!("{} {} entries", names.len(), kind);
            names
        }
        Err(BrewifyError::HttpStatus { url, status }) => {
            tracing::warn!("{} returned {}", url, status);
            println!("{} Error fetching {} data: {}", "✗".red(), kind, status);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("fetching {} catalog failed: {}", kind, e);
            println!("{} Error fetching {} data: {}", "✗".red(), kind, e);
            Vec::new()
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    if !std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
